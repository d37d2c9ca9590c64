//! Coursework submission tracker: scans day-numbered submission folders,
//! attributes files to a fixed student roster by name-fragment match,
//! collects naive static metrics plus per-file git history, and emits a
//! JSON snapshot and a stub markdown progress report.

pub mod collector;
pub mod config;
pub mod discovery;
pub mod error;
pub mod git_history;
pub mod metrics;
pub mod models;
pub mod report;

pub use crate::config::RunConfig;
pub use crate::error::{Result, TrackerError};
pub use crate::models::RunSnapshot;
pub use crate::report::generate_report;
