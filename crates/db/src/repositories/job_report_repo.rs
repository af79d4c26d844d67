//! Repository for the `job_reports` table.

use sqlx::PgPool;
use workbridge_core::jobs::ReportStatus;
use workbridge_core::types::DbId;

use crate::models::interaction::{CreateJobReport, JobReport, ReviewJobReport};

const COLUMNS: &str = "id, job_id, reported_by, reason, description, status, reviewed_by, \
                       admin_notes, created_at, updated_at";

/// Provides operations for job abuse reports.
pub struct JobReportRepo;

impl JobReportRepo {
    /// File a report. A user can report a given job once
    /// (`uq_job_reports_job_reporter`).
    pub async fn create(pool: &PgPool, input: &CreateJobReport) -> Result<JobReport, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_reports (job_id, reported_by, reason, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobReport>(&query)
            .bind(input.job_id)
            .bind(input.reported_by)
            .bind(input.reason)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Reports still awaiting moderation, oldest first.
    pub async fn list_pending(pool: &PgPool) -> Result<Vec<JobReport>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_reports WHERE status = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, JobReport>(&query)
            .bind(ReportStatus::Pending)
            .fetch_all(pool)
            .await
    }

    /// Record a moderator's decision.
    pub async fn review(
        pool: &PgPool,
        id: DbId,
        input: &ReviewJobReport,
    ) -> Result<Option<JobReport>, sqlx::Error> {
        let query = format!(
            "UPDATE job_reports SET
                status = $2,
                reviewed_by = $3,
                admin_notes = COALESCE($4, admin_notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobReport>(&query)
            .bind(id)
            .bind(input.status)
            .bind(input.reviewed_by)
            .bind(&input.admin_notes)
            .fetch_optional(pool)
            .await
    }
}
