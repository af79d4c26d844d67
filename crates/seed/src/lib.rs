//! Demo data loader for the job marketplace.
//!
//! Populates an empty schema with categories, skills, seekers, employers,
//! jobs and a random sample of applications. Every phase is idempotent:
//! records are looked up by natural key and only inserted when absent.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod loader;
pub mod password;
pub mod progress;
pub mod sampling;
