//! Employee Portal Library
//!
//! Client side of the employee records portal: a typed REST client for the
//! employee service, the directorate → division resolver, form sessions with
//! submission, the search view and the `employee-portal` CLI.

pub mod cli;
pub mod clients;
pub mod commands;
pub mod config;
pub mod resolver;
pub mod search;
pub mod session;
pub mod submission;

pub use clients::{EmployeeApi, HttpEmployeeApi};
pub use config::PortalConfig;
pub use resolver::{DivisionResolver, PendingFetch, Resolution};
pub use search::EmployeeSearch;
pub use session::FormSession;
pub use submission::SubmissionCoordinator;
