//! Reviewbot core - shared building blocks for the watcher.
//!
//! This crate holds everything the binary and the integration crates have
//! in common:
//!
//! - **config**: the process configuration, read once from the environment
//! - **status**: the review-status model and the fixed verdict table
//! - **dedup**: suppression of repeated failure notifications

pub mod config;
pub mod dedup;
pub mod status;

pub use config::{Config, ConfigError};
pub use dedup::FailureTracker;
pub use status::{status_change_message, ReviewStatus, UnknownStatus};
