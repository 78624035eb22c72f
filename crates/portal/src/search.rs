//! Employee search and listing.

use tracing::{debug, info, warn};

use common::AppResult;
use domain::{Directorate, Division, EmployeeRecord};

use crate::clients::EmployeeApi;

pub const NO_EMPLOYEE_WITH_ID: &str = "No employee found with that ID.";
pub const NO_EMPLOYEE_WITH_NAME: &str = "No employees found with that name.";
pub const SEARCH_FAILED: &str = "Search failed or employee not found.";
pub const LOAD_FAILED: &str = "Failed to load employees. Make sure backend is running.";

/// Employee list with ID/name search and display-name lookups
#[derive(Debug, Default)]
pub struct EmployeeSearch {
    all: Vec<EmployeeRecord>,
    results: Vec<EmployeeRecord>,
    note: Option<String>,
    directorates: Vec<Directorate>,
    divisions: Vec<Division>,
    notices: Vec<String>,
}

impl EmployeeSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently shown
    pub fn results(&self) -> &[EmployeeRecord] {
        &self.results
    }

    /// Inline message about the last load or search, if any
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Reload the full employee list.
    pub async fn refresh(&mut self, api: &dyn EmployeeApi) -> AppResult<()> {
        self.note = None;
        match api.list_employees().await {
            Ok(employees) => {
                debug!("Loaded {} employees", employees.len());
                self.results = employees.clone();
                self.all = employees;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to list employees: {}", e);
                self.results.clear();
                self.note = Some(LOAD_FAILED.to_string());
                Err(e)
            }
        }
    }

    /// Search by employee ID (all digits) or by name.
    ///
    /// A blank query shows the full list again.
    pub async fn search(&mut self, api: &dyn EmployeeApi, query: &str) -> &[EmployeeRecord] {
        let query = query.trim();
        self.note = None;
        if query.is_empty() {
            self.results = self.all.clone();
            return &self.results;
        }

        let found = if query.chars().all(|c| c.is_ascii_digit()) {
            api.get_employee(query).await.map(|record| {
                if record.is_none() {
                    self.note = Some(NO_EMPLOYEE_WITH_ID.to_string());
                }
                record.into_iter().collect::<Vec<_>>()
            })
        } else {
            api.search_employees(query).await.map(|records| {
                if records.is_empty() {
                    self.note = Some(NO_EMPLOYEE_WITH_NAME.to_string());
                }
                records
            })
        };

        match found {
            Ok(records) => {
                debug!("Search '{}' matched {} employee(s)", query, records.len());
                self.results = records;
            }
            Err(e) => {
                warn!("Search '{}' failed: {}", query, e);
                self.results.clear();
                self.note = Some(SEARCH_FAILED.to_string());
            }
        }
        &self.results
    }

    /// Drop the query and show the full list.
    pub fn clear(&mut self) {
        self.results = self.all.clone();
        self.note = None;
    }

    /// Delete an employee once the caller confirmed, then reload the list.
    ///
    /// Returns whether a delete request was sent.
    pub async fn delete(
        &mut self,
        api: &dyn EmployeeApi,
        emp_id: &str,
        confirmed: bool,
    ) -> AppResult<bool> {
        if !confirmed {
            debug!("Delete of {} not confirmed", emp_id);
            return Ok(false);
        }

        if let Err(e) = api.delete_employee(emp_id).await {
            warn!("Failed to delete employee {}: {}", emp_id, e);
            self.notices.push("Failed to delete!".to_string());
            return Err(e);
        }
        info!("Deleted employee {}", emp_id);
        self.notices.push("Deleted!".to_string());
        // The delete already happened; a failed reload only shows up in the note.
        if let Err(e) = self.refresh(api).await {
            warn!("Reload after deleting employee {} failed: {}", emp_id, e);
        }
        Ok(true)
    }

    /// Load directorates and divisions for display names.
    pub async fn load_lookups(&mut self, api: &dyn EmployeeApi) {
        match api.directorates().await {
            Ok(directorates) => self.directorates = directorates,
            Err(e) => {
                warn!("Failed to fetch directorates: {}", e);
                self.notices.push("Failed to load directorates.".to_string());
            }
        }
        match api.divisions().await {
            Ok(divisions) => self.divisions = divisions,
            Err(e) => {
                warn!("Failed to fetch divisions: {}", e);
                self.notices.push("Failed to load divisions.".to_string());
            }
        }
    }

    /// Display name of a directorate, or the id itself when unknown
    pub fn directorate_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.directorates
            .iter()
            .find(|d| d.directorate_id == id)
            .map_or(id, |d| d.name.as_str())
    }

    /// Display name of a division, or the id itself when unknown
    pub fn division_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.divisions
            .iter()
            .find(|d| d.division_id == id)
            .map_or(id, |d| d.name.as_str())
    }
}
