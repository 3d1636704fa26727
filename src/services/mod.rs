//! External service interactions
//!
//! This module contains services for interacting with the outside world:
//! - HTTP calls to the file and process services
//! - Background job execution
//! - Saving generated text to disk

pub mod api;
pub mod download;
pub mod job_runner;

pub use api::{ApiClient, ProcessRequest};
pub use download::save_generated_text;
pub use job_runner::JobRunner;
