//! Repository for the `job_views` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;

use crate::models::interaction::{CreateJobView, JobView};
use crate::repositories::JobRepo;

const COLUMNS: &str = "id, job_id, user_id, ip_address, user_agent, created_at, updated_at";

/// Provides operations for job view tracking.
pub struct JobViewRepo;

impl JobViewRepo {
    /// Record a view and bump the job's `views_count` in one transaction.
    pub async fn record(pool: &PgPool, input: &CreateJobView) -> Result<JobView, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO job_views (job_id, user_id, ip_address, user_agent)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let view = sqlx::query_as::<_, JobView>(&query)
            .bind(input.job_id)
            .bind(input.user_id)
            .bind(input.ip_address.to_string())
            .bind(&input.user_agent)
            .fetch_one(&mut *tx)
            .await?;

        JobRepo::increment_views(&mut *tx, input.job_id).await?;

        tx.commit().await?;
        Ok(view)
    }

    /// Number of recorded views for a job.
    pub async fn count_for_job(pool: &PgPool, job_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM job_views WHERE job_id = $1")
            .bind(job_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
