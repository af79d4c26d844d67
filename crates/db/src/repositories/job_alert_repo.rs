//! Repository for the `job_alerts` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;

use crate::models::interaction::{CreateJobAlert, JobAlert};

const COLUMNS: &str = "id, user_id, title, keywords, location, category_id, job_type, \
                       experience_level, salary_min, frequency, is_active, last_sent, \
                       created_at, updated_at";

/// Provides operations for saved-search alerts.
pub struct JobAlertRepo;

impl JobAlertRepo {
    /// Create an alert, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateJobAlert) -> Result<JobAlert, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_alerts
                (user_id, title, keywords, location, category_id, job_type, experience_level,
                 salary_min, frequency)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobAlert>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.keywords)
            .bind(&input.location)
            .bind(input.category_id)
            .bind(input.job_type)
            .bind(input.experience_level)
            .bind(input.salary_min)
            .bind(input.frequency)
            .fetch_one(pool)
            .await
    }

    /// A user's active alerts, oldest first.
    pub async fn list_active_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<JobAlert>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_alerts
             WHERE user_id = $1 AND is_active = true
             ORDER BY id"
        );
        sqlx::query_as::<_, JobAlert>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Stamp `last_sent` with the current time.
    pub async fn mark_sent(pool: &PgPool, id: DbId) -> Result<Option<JobAlert>, sqlx::Error> {
        let query =
            format!("UPDATE job_alerts SET last_sent = NOW() WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, JobAlert>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Turn an alert off. Returns `true` if it was active.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE job_alerts SET is_active = false WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
