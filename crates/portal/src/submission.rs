//! Form submission: validated form → create/update request.

use tracing::{debug, info, warn};
use validator::Validate;

use common::{AppError, AppResult};
use domain::{EmployeeForm, EmployeeRecord, FormMode};

use crate::clients::EmployeeApi;

/// Submits employee forms to the employee service.
///
/// Keeps the last successfully created payload so the caller can offer it
/// for reuse.
#[derive(Debug, Default)]
pub struct SubmissionCoordinator {
    last_submitted: Option<EmployeeRecord>,
}

impl SubmissionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload of the last successful creation
    pub fn last_submitted(&self) -> Option<&EmployeeRecord> {
        self.last_submitted.as_ref()
    }

    /// Validate the form and issue exactly one create or update request.
    ///
    /// Nothing is sent while any field is rejected. Failures are reported
    /// once and never retried; the form keeps its data for a resubmit.
    pub async fn submit(
        &mut self,
        api: &dyn EmployeeApi,
        form: &mut EmployeeForm,
    ) -> AppResult<EmployeeRecord> {
        if !form.begin_submit() {
            debug!("Submission blocked by {} field error(s)", form.errors().len());
            return Err(AppError::from_field_errors(form.errors()));
        }

        let record = match form.to_record() {
            Ok(record) => record,
            Err(errors) => {
                form.finish_submit(false);
                return Err(AppError::from_field_errors(&errors));
            }
        };
        if let Err(errors) = record.validate() {
            form.finish_submit(false);
            return Err(AppError::validation(format_validation_errors(&errors)));
        }

        let mode = form.mode().clone();
        let result = match &mode {
            FormMode::Create => api.create_employee(&record).await,
            FormMode::Edit { emp_id } => api.update_employee(emp_id, &record).await,
        };

        match result {
            Ok(()) => {
                form.finish_submit(true);
                info!("{} employee {}", action(&mode), record.emp_id);
                if mode == FormMode::Create {
                    self.last_submitted = Some(record.clone());
                }
                Ok(record)
            }
            Err(e) => {
                form.finish_submit(false);
                warn!("Failed to {} employee {}: {}", verb(&mode), record.emp_id, e);
                Err(e)
            }
        }
    }
}

fn action(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Create => "Created",
        FormMode::Edit { .. } => "Updated",
    }
}

fn verb(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Create => "create",
        FormMode::Edit { .. } => "update",
    }
}

/// Notification text for a successful submission
pub fn success_message(mode: &FormMode) -> &'static str {
    match mode {
        FormMode::Create => "Employee data submitted successfully!",
        FormMode::Edit { .. } => "Employee updated successfully!",
    }
}

/// Notification text for a failed submission
pub fn failure_message(mode: &FormMode, error: &AppError) -> String {
    match (error, mode) {
        (AppError::Validation(msg), _) => msg.clone(),
        (AppError::Transport(_), _) => "Network error".to_string(),
        (_, FormMode::Create) => "Failed to save employee.".to_string(),
        (_, FormMode::Edit { .. }) => "Failed to update employee.".to_string(),
    }
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "is invalid".to_string());
                format!("{}: {}", field, message)
            })
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.join("; ")
}
