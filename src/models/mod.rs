//! Data models for the user digest
//!
//! Incoming user records as served by the users API, and the
//! per-department summaries produced from them.

pub mod summary;
pub mod user;

// Re-export commonly used types
pub use summary::{DepartmentSummary, GenderCount, GroupedData};
pub use user::{Address, Company, Hair, User, UsersResponse};
