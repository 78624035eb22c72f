//! Employee service contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{Directorate, Division, EmployeeRecord};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Operations offered by the external employee service.
///
/// Any non-2xx answer or transport failure is an error; there are no
/// retries at this layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// All directorates
    async fn directorates(&self) -> AppResult<Vec<Directorate>>;

    /// All divisions, each carrying its directorate
    async fn divisions(&self) -> AppResult<Vec<Division>>;

    /// Divisions belonging to one directorate
    async fn divisions_by_directorate(&self, directorate_id: &str) -> AppResult<Vec<Division>>;

    /// All employees
    async fn list_employees(&self) -> AppResult<Vec<EmployeeRecord>>;

    /// Employee by ID; `None` when the service has no such employee
    async fn get_employee(&self, emp_id: &str) -> AppResult<Option<EmployeeRecord>>;

    /// Employees whose name matches the query
    async fn search_employees(&self, name: &str) -> AppResult<Vec<EmployeeRecord>>;

    /// Create a new employee
    async fn create_employee(&self, record: &EmployeeRecord) -> AppResult<()>;

    /// Replace the employee addressed by `emp_id`
    async fn update_employee(&self, emp_id: &str, record: &EmployeeRecord) -> AppResult<()>;

    /// Delete the employee addressed by `emp_id`
    async fn delete_employee(&self, emp_id: &str) -> AppResult<()>;
}
