//! Create and edit form sessions.
//!
//! A session owns one form together with its lookup state. Lookup failures
//! never block the form; they are queued as notices for the caller.

use tracing::{debug, warn};

use common::{AppError, AppResult, OptionExt};
use domain::validation::validate_division_membership;
use domain::{Directorate, Division, EmployeeForm, EmployeeRecord, Field, FieldResult};

use crate::clients::EmployeeApi;
use crate::resolver::{load_directorates, DivisionResolver, PendingFetch, Resolution};
use crate::submission::{failure_message, success_message, SubmissionCoordinator};

/// One open employee form
#[derive(Debug, Default)]
pub struct FormSession {
    form: EmployeeForm,
    directorates: Vec<Directorate>,
    divisions: DivisionResolver,
    coordinator: SubmissionCoordinator,
    notices: Vec<String>,
}

impl FormSession {
    /// Open an empty create form and load the directorates.
    pub async fn open_create(api: &dyn EmployeeApi) -> Self {
        let mut session = Self::default();
        session.load_directorates(api).await;
        session
    }

    /// Open an edit form for a stored employee.
    ///
    /// Loads the record, the directorates and the record's divisions; the
    /// stored division stays selected.
    pub async fn open_edit(api: &dyn EmployeeApi, emp_id: &str) -> AppResult<Self> {
        let record = api
            .get_employee(emp_id)
            .await
            .map_err(|e| {
                warn!("Failed to load employee {}: {}", emp_id, e);
                e
            })?
            .ok_or_not_found()?;

        let mut session = Self {
            form: EmployeeForm::from_record(&record),
            ..Self::default()
        };
        session.load_directorates(api).await;
        let result = session
            .divisions
            .change_directorate(api, Some(record.directorate.as_str()))
            .await;
        session.note_division_failure(result);

        Ok(session)
    }

    async fn load_directorates(&mut self, api: &dyn EmployeeApi) {
        let (directorates, error) = load_directorates(api).await;
        self.directorates = directorates;
        if error.is_some() {
            self.notices.push("Failed to fetch directorates".to_string());
        }
    }

    fn note_division_failure(&mut self, result: AppResult<Resolution>) {
        if result.is_err() {
            self.notices.push("Failed to fetch divisions".to_string());
        }
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn directorates(&self) -> &[Directorate] {
        &self.directorates
    }

    pub fn divisions(&self) -> &[Division] {
        self.divisions.options()
    }

    pub fn is_loading_divisions(&self) -> bool {
        self.divisions.is_loading()
    }

    pub fn last_submitted(&self) -> Option<&EmployeeRecord> {
        self.coordinator.last_submitted()
    }

    /// Drain queued notifications
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Apply one input event.
    ///
    /// A directorate change resets the division and re-fetches its options.
    pub async fn input(&mut self, api: &dyn EmployeeApi, field: Field, raw: &str) -> FieldResult {
        if field != Field::Directorate {
            return self.form.input(field, raw);
        }

        let (result, pending) = self.begin_directorate_change(raw);
        if let Some(pending) = pending {
            let fetched = api.divisions_by_directorate(pending.directorate_id()).await;
            self.complete_directorate_change(pending, fetched);
        }
        result
    }

    /// First half of a directorate change, for callers that run the fetch
    /// themselves.
    pub fn begin_directorate_change(&mut self, raw: &str) -> (FieldResult, Option<PendingFetch>) {
        let result = self.form.input(Field::Directorate, raw);
        let pending = self.divisions.begin(self.form.directorate());
        (result, pending)
    }

    /// Second half of a directorate change.
    pub fn complete_directorate_change(
        &mut self,
        pending: PendingFetch,
        fetched: AppResult<Vec<Division>>,
    ) -> Option<Resolution> {
        let result = self.divisions.complete(pending, fetched);
        let resolution = result.as_ref().ok().copied();
        self.note_division_failure(result);
        resolution
    }

    /// Submit the form.
    ///
    /// The chosen division must belong to the loaded options of the
    /// selected directorate.
    pub async fn submit(&mut self, api: &dyn EmployeeApi) -> AppResult<EmployeeRecord> {
        if let Some(division) = self.form.division() {
            if let Err(rejection) = validate_division_membership(division, self.divisions.options()) {
                debug!("Division {} not offered for the selected directorate", division);
                self.form.validate_all();
                self.form.reject(Field::Division, rejection);
                return Err(AppError::from_field_errors(self.form.errors()));
            }
        }

        let result = self.coordinator.submit(api, &mut self.form).await;
        match &result {
            Ok(_) => self.notices.push(success_message(self.form.mode()).to_string()),
            Err(AppError::Validation(_)) => {}
            Err(e) => self.notices.push(failure_message(self.form.mode(), e)),
        }
        result
    }
}
