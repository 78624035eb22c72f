//! Clients for the external employee service.

mod api;
mod http;

pub use api::EmployeeApi;
#[cfg(any(test, feature = "test-utils"))]
pub use api::MockEmployeeApi;
pub use http::HttpEmployeeApi;
