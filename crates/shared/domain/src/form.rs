//! Typed employee form state.
//!
//! One slot per employee attribute plus a map of outstanding rejections.
//! All mutation goes through [`EmployeeForm::input`], which sanitizes,
//! stores, applies the cross-field handlers and re-validates.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::constants::*;
use crate::employee::{parse_date, EmployeeRecord, Gender, NaFlag};
use crate::error::DomainError;
use crate::validation::{self, Entry, FieldResult, Rejection};

/// Employee form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    EmpId,
    EmpName,
    Phone,
    Address,
    Age,
    Gender,
    RoleName,
    RoleNumber,
    FromDate,
    ToDate,
    NaFlag,
    Directorate,
    Division,
    Email,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::EmpId,
        Field::EmpName,
        Field::Phone,
        Field::Address,
        Field::Age,
        Field::Gender,
        Field::RoleName,
        Field::RoleNumber,
        Field::FromDate,
        Field::ToDate,
        Field::NaFlag,
        Field::Directorate,
        Field::Division,
        Field::Email,
    ];

    /// Wire name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Field::EmpId => "empId",
            Field::EmpName => "empName",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::Age => "age",
            Field::Gender => "gender",
            Field::RoleName => "roleName",
            Field::RoleNumber => "roleNumber",
            Field::FromDate => "fromDate",
            Field::ToDate => "toDate",
            Field::NaFlag => "naFlag",
            Field::Directorate => "directorate",
            Field::Division => "division",
            Field::Email => "email",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Field::EmpId => "Employee ID",
            Field::EmpName => "Employee Name",
            Field::Phone => "Phone",
            Field::Address => "Address",
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::RoleName => "Role Name",
            Field::RoleNumber => "Role Number",
            Field::FromDate => "From Date",
            Field::ToDate => "To Date",
            Field::NaFlag => "NA Flag",
            Field::Directorate => "Directorate",
            Field::Division => "Division",
            Field::Email => "Email",
        }
    }

    /// Input width of free-text fields
    pub fn max_input_length(&self) -> Option<usize> {
        match self {
            Field::EmpId => Some(EMP_ID_LENGTH),
            Field::EmpName => Some(MAX_EMP_NAME_LENGTH),
            Field::Phone => Some(PHONE_LENGTH),
            Field::Address => Some(MAX_ADDRESS_LENGTH),
            Field::Age => Some(MAX_AGE_DIGITS),
            Field::RoleName => Some(MAX_ROLE_NAME_LENGTH),
            Field::RoleNumber => Some(MAX_ROLE_NUMBER_LENGTH),
            Field::Email => Some(MAX_EMAIL_LENGTH),
            _ => None,
        }
    }

    /// Keystroke filter for this field. Idempotent.
    pub fn sanitize(&self, raw: &str) -> String {
        let filtered = match self {
            Field::EmpName | Field::RoleName => validation::sanitize_all_caps(raw),
            Field::Address => validation::sanitize_address(raw),
            _ => raw.to_string(),
        };
        match self.max_input_length() {
            Some(max) => validation::truncate(&filtered, max),
            None => filtered,
        }
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| DomainError::invalid_variant("field", s))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outstanding rejections keyed by field
pub type FieldErrors = BTreeMap<Field, Rejection>;

/// Whether the form creates a new record or edits an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { emp_id: String },
}

/// Submission lifecycle of a form. There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    SubmittedOk,
    SubmittedFailed,
}

/// Employee form state
#[derive(Debug, Clone)]
pub struct EmployeeForm {
    mode: FormMode,
    status: FormStatus,
    emp_id: String,
    emp_name: String,
    phone: String,
    address: String,
    age: String,
    gender: Entry<Gender>,
    role_name: String,
    role_number: String,
    from_date: Entry<NaiveDate>,
    to_date: Entry<NaiveDate>,
    na_flag: Entry<NaFlag>,
    directorate: Option<String>,
    division: Option<String>,
    email: String,
    errors: FieldErrors,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self::create()
    }
}

impl EmployeeForm {
    /// Empty form for a new employee
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            status: FormStatus::Editing,
            emp_id: String::new(),
            emp_name: String::new(),
            phone: String::new(),
            address: String::new(),
            age: String::new(),
            gender: Entry::Empty,
            role_name: String::new(),
            role_number: String::new(),
            from_date: Entry::Empty,
            to_date: Entry::Empty,
            na_flag: Entry::Empty,
            directorate: None,
            division: None,
            email: String::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Edit form pre-populated from a stored record.
    ///
    /// The employee ID is fixed for the lifetime of the form.
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            mode: FormMode::Edit {
                emp_id: record.emp_id.clone(),
            },
            status: FormStatus::Editing,
            emp_id: record.emp_id.clone(),
            emp_name: record.emp_name.clone(),
            phone: record.phone.clone(),
            address: record.address.clone(),
            age: record.age.to_string(),
            gender: Entry::Valid(record.gender),
            role_name: record.role_name.clone(),
            role_number: record.role_number.clone(),
            from_date: Entry::Valid(record.from_date),
            to_date: record.to_date.map_or(Entry::Empty, Entry::Valid),
            na_flag: Entry::Valid(record.na_flag),
            directorate: Some(record.directorate.clone()),
            division: Some(record.division.clone()),
            email: record.email.clone().unwrap_or_default(),
            errors: FieldErrors::new(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn emp_id(&self) -> &str {
        &self.emp_id
    }

    pub fn directorate(&self) -> Option<&str> {
        self.directorate.as_deref()
    }

    pub fn division(&self) -> Option<&str> {
        self.division.as_deref()
    }

    pub fn from_date(&self) -> Option<NaiveDate> {
        self.from_date.value().copied()
    }

    pub fn to_date(&self) -> Option<NaiveDate> {
        self.to_date.value().copied()
    }

    /// Current value of a field as text
    pub fn value(&self, field: Field) -> String {
        fn entry_text<T: ToString>(entry: &Entry<T>) -> String {
            match entry {
                Entry::Empty => String::new(),
                Entry::Valid(v) => v.to_string(),
                Entry::Invalid(raw) => raw.clone(),
            }
        }

        match field {
            Field::EmpId => self.emp_id.clone(),
            Field::EmpName => self.emp_name.clone(),
            Field::Phone => self.phone.clone(),
            Field::Address => self.address.clone(),
            Field::Age => self.age.clone(),
            Field::Gender => entry_text(&self.gender),
            Field::RoleName => self.role_name.clone(),
            Field::RoleNumber => self.role_number.clone(),
            Field::FromDate => entry_text(&self.from_date),
            Field::ToDate => entry_text(&self.to_date),
            Field::NaFlag => entry_text(&self.na_flag),
            Field::Directorate => self.directorate.clone().unwrap_or_default(),
            Field::Division => self.division.clone().unwrap_or_default(),
            Field::Email => self.email.clone(),
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&Rejection> {
        self.errors.get(&field)
    }

    /// True when no field has an outstanding rejection
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Attach a rejection found outside the field validators.
    pub fn reject(&mut self, field: Field, rejection: Rejection) {
        self.errors.insert(field, rejection);
    }

    // =========================================================================
    // Reducers
    // =========================================================================

    /// Apply one input event to a field and re-validate it.
    ///
    /// Any input returns a submitted form to `Editing`.
    pub fn input(&mut self, field: Field, raw: &str) -> FieldResult {
        self.status = FormStatus::Editing;

        if field == Field::EmpId && matches!(self.mode, FormMode::Edit { .. }) {
            return self.revalidate(field);
        }

        let value = field.sanitize(raw);
        match field {
            Field::EmpId => self.emp_id = value,
            Field::EmpName => self.emp_name = value,
            Field::Phone => self.phone = value,
            Field::Address => self.address = value,
            Field::Age => self.age = value,
            Field::Gender => self.gender = Entry::parse(&value),
            Field::RoleName => self.role_name = value,
            Field::RoleNumber => self.role_number = value,
            Field::FromDate => {
                self.from_date = Entry::parse_with(&value, parse_date);
                self.on_from_date_change();
            }
            Field::ToDate => self.to_date = Entry::parse_with(&value, parse_date),
            Field::NaFlag => self.na_flag = Entry::parse(&value),
            Field::Directorate => {
                self.directorate = non_blank(&value);
                self.on_directorate_change();
            }
            Field::Division => self.division = non_blank(&value),
            Field::Email => self.email = value,
        }

        self.revalidate(field)
    }

    /// A new From Date drops a To Date that would now precede it.
    fn on_from_date_change(&mut self) {
        if let (Some(from), Some(to)) = (self.from_date(), self.to_date()) {
            if to < from {
                self.to_date = Entry::Empty;
            }
        }
        if self.to_date.is_empty() {
            self.errors.remove(&Field::ToDate);
        } else {
            let _ = self.revalidate(Field::ToDate);
        }
    }

    /// A new directorate always resets the division selection.
    fn on_directorate_change(&mut self) {
        self.division = None;
        self.errors.remove(&Field::Division);
    }

    fn revalidate(&mut self, field: Field) -> FieldResult {
        let result = self.validate_field(field);
        match &result {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(rejection) => {
                self.errors.insert(field, rejection.clone());
            }
        }
        result
    }

    /// Run the validator for one field without touching stored errors.
    pub fn validate_field(&self, field: Field) -> FieldResult {
        match field {
            Field::EmpId => validation::validate_emp_id(&self.emp_id),
            Field::EmpName => validation::validate_emp_name(&self.emp_name),
            Field::Phone => validation::validate_phone(&self.phone),
            Field::Address => validation::validate_address(&self.address),
            Field::Age => validation::validate_age(&self.age),
            Field::Gender => validation::validate_gender(&self.gender),
            Field::RoleName => validation::validate_role_name(&self.role_name),
            Field::RoleNumber => validation::validate_role_number(&self.role_number),
            Field::FromDate => validation::validate_from_date(&self.from_date),
            Field::ToDate => validation::validate_to_date(&self.to_date, &self.from_date),
            Field::NaFlag => validation::validate_na_flag(&self.na_flag),
            Field::Directorate => validation::validate_directorate(self.directorate()),
            Field::Division => validation::validate_division(self.division()),
            Field::Email => validation::validate_email(&self.email),
        }
    }

    /// Validate every field, replacing the stored rejections.
    ///
    /// Returns true when the form is clean.
    pub fn validate_all(&mut self) -> bool {
        self.errors = Field::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field).err().map(|r| (field, r)))
            .collect();
        self.errors.is_empty()
    }

    /// Mark the form as submitting. Only a clean form may be submitted.
    pub fn begin_submit(&mut self) -> bool {
        if !self.validate_all() {
            return false;
        }
        self.status = FormStatus::Submitting;
        true
    }

    /// Record the outcome of a submission. Form data is kept either way.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.status = if succeeded {
            FormStatus::SubmittedOk
        } else {
            FormStatus::SubmittedFailed
        };
    }

    /// Build the request payload.
    ///
    /// Fails with every outstanding rejection when any field is invalid.
    pub fn to_record(&self) -> Result<EmployeeRecord, FieldErrors> {
        let errors: FieldErrors = Field::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field).err().map(|r| (field, r)))
            .collect();

        let age = validation::parse_age(&self.age);
        match (
            age,
            &self.gender,
            &self.from_date,
            &self.na_flag,
            &self.directorate,
            &self.division,
        ) {
            (
                Ok(age),
                Entry::Valid(gender),
                Entry::Valid(from_date),
                Entry::Valid(na_flag),
                Some(directorate),
                Some(division),
            ) if errors.is_empty() => Ok(EmployeeRecord {
                emp_id: self.emp_id.clone(),
                emp_name: self.emp_name.clone(),
                phone: self.phone.clone(),
                address: self.address.clone(),
                age,
                gender: *gender,
                role_name: self.role_name.clone(),
                role_number: self.role_number.clone(),
                from_date: *from_date,
                to_date: self.to_date(),
                na_flag: *na_flag,
                directorate: directorate.clone(),
                division: division.clone(),
                email: non_blank(&self.email),
            }),
            _ => Err(errors),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
