//! Domain vocabulary and business rules for the job marketplace.
//!
//! Pure code only: no database or network access. The `workbridge-db`
//! crate persists these types; the seed crate builds fixtures from them.

mod choice;

pub mod accounts;
pub mod applications;
pub mod error;
pub mod experience;
pub mod jobs;
pub mod rating;
pub mod skills;
pub mod types;
pub mod uploads;
pub mod validation;
