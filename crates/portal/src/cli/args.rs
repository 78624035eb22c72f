//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use domain::Field;

/// Employee records portal
#[derive(Parser, Debug)]
#[command(name = "employee-portal")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Employee service base URL
    #[arg(long, global = true, env = "PORTAL_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List directorates
    Directorates,

    /// List divisions
    Divisions(DivisionsArgs),

    /// List all employees
    List,

    /// Search employees by ID (digits) or name
    Search(SearchArgs),

    /// Show one employee
    Get {
        /// Employee ID
        emp_id: String,
    },

    /// Create an employee
    Create(CreateArgs),

    /// Update an employee
    Update(UpdateArgs),

    /// Delete an employee
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct DivisionsArgs {
    /// Only divisions of this directorate
    #[arg(short, long)]
    pub directorate: Option<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Employee ID or name; blank lists everyone
    #[arg(default_value = "")]
    pub query: String,
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Employee ID (6 digits)
    #[arg(long)]
    pub emp_id: Option<String>,

    #[command(flatten)]
    pub fields: EmployeeFields,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Employee ID
    pub emp_id: String,

    #[command(flatten)]
    pub fields: EmployeeFields,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Employee ID
    pub emp_id: String,

    /// Confirm the deletion
    #[arg(long)]
    pub yes: bool,
}

/// Editable employee fields. Unset flags leave the field untouched.
#[derive(Args, Debug, Default)]
pub struct EmployeeFields {
    /// Full name (capital letters)
    #[arg(long)]
    pub emp_name: Option<String>,

    /// 10-digit mobile number
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub age: Option<String>,

    /// Male, Female or Other
    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long)]
    pub role_name: Option<String>,

    #[arg(long)]
    pub role_number: Option<String>,

    /// YYYY-MM-DD
    #[arg(long)]
    pub from_date: Option<String>,

    /// YYYY-MM-DD; pass "" to clear
    #[arg(long)]
    pub to_date: Option<String>,

    /// Y or N
    #[arg(long)]
    pub na_flag: Option<String>,

    /// Directorate ID
    #[arg(long)]
    pub directorate: Option<String>,

    /// Division ID within the directorate
    #[arg(long)]
    pub division: Option<String>,

    #[arg(long)]
    pub email: Option<String>,
}

impl EmployeeFields {
    /// Set flags as form inputs, parents before their dependents.
    pub fn inputs(&self) -> Vec<(Field, &str)> {
        [
            (Field::EmpName, &self.emp_name),
            (Field::Phone, &self.phone),
            (Field::Address, &self.address),
            (Field::Age, &self.age),
            (Field::Gender, &self.gender),
            (Field::RoleName, &self.role_name),
            (Field::RoleNumber, &self.role_number),
            (Field::FromDate, &self.from_date),
            (Field::ToDate, &self.to_date),
            (Field::NaFlag, &self.na_flag),
            (Field::Directorate, &self.directorate),
            (Field::Division, &self.division),
            (Field::Email, &self.email),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}
