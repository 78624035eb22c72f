//! Domain layer - Employee records, lookups and form validation.
//!
//! This crate contains pure domain logic with no I/O. The field validators,
//! input sanitizers and typed form state live here and are shared by every
//! front end of the portal.

pub mod constants;
pub mod employee;
pub mod error;
pub mod form;
pub mod validation;

pub use constants::*;
pub use employee::{parse_date, Directorate, Division, EmployeeRecord, Gender, NaFlag};
pub use error::{DomainError, DomainResult};
pub use form::{EmployeeForm, Field, FieldErrors, FormMode, FormStatus};
pub use validation::{Entry, FieldResult, Rejection};
