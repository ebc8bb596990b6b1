//! User Digest - Per-department summaries of user records
//!
//! Fetches user records from a remote API, caches them for a fixed TTL,
//! and aggregates them into gender counts, age ranges, hair-color
//! histograms and name-to-postal-code maps per department.

pub mod aggregate;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use aggregate::aggregate;
pub use cache::TtlCache;
pub use client::{HttpUserClient, UserSource};
pub use config::Config;
pub use error::{DigestError, Result};
pub use service::UserService;
