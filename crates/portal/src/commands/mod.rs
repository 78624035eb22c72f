//! Commands module - CLI command implementations.
//!
//! Commands talk to the service through [`EmployeeApi`] and write their
//! output to the given writer.

pub mod employees;
pub mod lookups;

use std::io::Write;

use common::AppResult;

use crate::cli::Commands;
use crate::clients::{EmployeeApi, HttpEmployeeApi};
use crate::config::PortalConfig;

/// Execute a command against the configured employee service
pub async fn execute(command: Commands, config: &PortalConfig, out: &mut dyn Write) -> AppResult<()> {
    let api = HttpEmployeeApi::new(&config.api)?;
    run(command, &api, out).await
}

/// Execute a command against any employee service client
pub async fn run(command: Commands, api: &dyn EmployeeApi, out: &mut dyn Write) -> AppResult<()> {
    match command {
        Commands::Directorates => lookups::directorates(api, out).await,
        Commands::Divisions(args) => lookups::divisions(api, args, out).await,
        Commands::List => employees::list(api, out).await,
        Commands::Search(args) => employees::search(api, args, out).await,
        Commands::Get { emp_id } => employees::get(api, &emp_id, out).await,
        Commands::Create(args) => employees::create(api, args, out).await,
        Commands::Update(args) => employees::update(api, args, out).await,
        Commands::Delete(args) => employees::delete(api, args, out).await,
    }
}
