//! Common utilities shared across the portal crates.
//!
//! This crate provides:
//! - Unified error handling for portal operations
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
