//! Job category model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::types::{DbId, Timestamp};

/// A row from the `job_categories` table. `name` is the natural key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobCategory {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Icon identifier understood by the frontend.
    pub icon: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a job category.
#[derive(Debug, Clone)]
pub struct CreateJobCategory {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
}
