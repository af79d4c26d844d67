//! Repository for the `job_applications` and `application_status_history` tables.
//!
//! Two invariants live here:
//! - `jobs.applications_count` moves in the same transaction as the
//!   application insert or delete.
//! - `change_status` is the only status writer and appends a history row
//!   alongside every change.

use sqlx::{PgConnection, PgPool};
use workbridge_core::applications::ApplicationStatus;
use workbridge_core::rating::Rating;
use workbridge_core::types::DbId;
use workbridge_core::uploads::UploadKind;

use crate::models::application::{
    ApplicationStatusHistory, ChangeApplicationStatus, CreateJobApplication, JobApplication,
    UpdateJobApplication,
};
use crate::repositories::upload_column;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, job_id, applicant_id, job_seeker_profile_id, cover_letter, resume, \
                       additional_documents, status, applied_at, viewed_by_employer, viewed_at, \
                       employer_notes, interview_scheduled_at, interview_location, \
                       interview_notes, employer_feedback, applicant_feedback, \
                       rating_by_employer, created_at, updated_at";

const HISTORY_COLUMNS: &str = "id, application_id, previous_status, new_status, changed_by, \
                               notes, changed_at, created_at, updated_at";

/// Provides CRUD operations for job applications.
pub struct JobApplicationRepo;

impl JobApplicationRepo {
    /// Submit an application and bump the job's `applications_count`.
    ///
    /// A second application for the same (job, applicant) fails with a
    /// unique violation on `uq_job_applications_job_applicant` and leaves
    /// the counter untouched.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobApplication,
    ) -> Result<JobApplication, sqlx::Error> {
        let resume = upload_column(input.resume.as_ref(), UploadKind::ApplicationResume)?;
        let documents = upload_column(
            input.additional_documents.as_ref(),
            UploadKind::ApplicationDocument,
        )?;

        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO job_applications
                (job_id, applicant_id, job_seeker_profile_id, cover_letter, resume,
                 additional_documents, status, applied_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, NOW()))
             RETURNING {COLUMNS}"
        );
        let application = sqlx::query_as::<_, JobApplication>(&query)
            .bind(input.job_id)
            .bind(input.applicant_id)
            .bind(input.job_seeker_profile_id)
            .bind(&input.cover_letter)
            .bind(resume)
            .bind(documents)
            .bind(ApplicationStatus::Pending)
            .bind(input.applied_at)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query("UPDATE jobs SET applications_count = applications_count + 1 WHERE id = $1")
            .bind(input.job_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(application)
    }

    /// Find an application by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_applications WHERE id = $1");
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether `applicant_id` has already applied to `job_id`.
    pub async fn exists_for(
        pool: &PgPool,
        job_id: DbId,
        applicant_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                SELECT 1 FROM job_applications WHERE job_id = $1 AND applicant_id = $2
             )",
        )
        .bind(job_id)
        .bind(applicant_id)
        .fetch_one(pool)
        .await
    }

    /// Applications received for a job, newest first.
    pub async fn list_for_job(
        pool: &PgPool,
        job_id: DbId,
    ) -> Result<Vec<JobApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_applications
             WHERE job_id = $1
             ORDER BY applied_at DESC, id DESC"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(job_id)
            .fetch_all(pool)
            .await
    }

    /// Applications submitted by a user, newest first.
    pub async fn list_for_applicant(
        pool: &PgPool,
        applicant_id: DbId,
    ) -> Result<Vec<JobApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_applications
             WHERE applicant_id = $1
             ORDER BY applied_at DESC, id DESC"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(applicant_id)
            .fetch_all(pool)
            .await
    }

    /// Count all applications.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM job_applications")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Apply employer-side edits. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJobApplication,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE job_applications SET
                employer_notes = COALESCE($2, employer_notes),
                interview_scheduled_at = COALESCE($3, interview_scheduled_at),
                interview_location = COALESCE($4, interview_location),
                interview_notes = COALESCE($5, interview_notes),
                employer_feedback = COALESCE($6, employer_feedback),
                applicant_feedback = COALESCE($7, applicant_feedback)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(&input.employer_notes)
            .bind(input.interview_scheduled_at)
            .bind(&input.interview_location)
            .bind(&input.interview_notes)
            .bind(&input.employer_feedback)
            .bind(&input.applicant_feedback)
            .fetch_optional(pool)
            .await
    }

    /// Move an application to a new status and record the transition.
    ///
    /// The row is locked for the duration of the transaction so concurrent
    /// changes serialize and each history row names the true previous
    /// status. Setting the current status again is a no-op without history.
    /// Returns `None` if the application does not exist.
    pub async fn change_status(
        pool: &PgPool,
        id: DbId,
        input: &ChangeApplicationStatus,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<ApplicationStatus> =
            sqlx::query_scalar("SELECT status FROM job_applications WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(previous) = current else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE job_applications SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        let application = sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(input.new_status)
            .fetch_one(&mut *tx)
            .await?;

        if previous != input.new_status {
            sqlx::query(
                "INSERT INTO application_status_history
                    (application_id, previous_status, new_status, changed_by, notes)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(id)
            .bind(previous)
            .bind(input.new_status)
            .bind(input.changed_by)
            .bind(&input.notes)
            .execute(&mut *tx)
            .await?;
            tracing::debug!(
                application_id = id,
                from = previous.as_str(),
                to = input.new_status.as_str(),
                "Application status changed"
            );
        }

        tx.commit().await?;
        Ok(Some(application))
    }

    /// Status transitions for an application, oldest first.
    pub async fn history_for(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Vec<ApplicationStatusHistory>, sqlx::Error> {
        let query = format!(
            "SELECT {HISTORY_COLUMNS} FROM application_status_history
             WHERE application_id = $1
             ORDER BY changed_at, id"
        );
        sqlx::query_as::<_, ApplicationStatusHistory>(&query)
            .bind(application_id)
            .fetch_all(pool)
            .await
    }

    /// Flag the application as seen by the employer. The first view time is kept.
    pub async fn mark_viewed(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE job_applications SET
                viewed_by_employer = true,
                viewed_at = COALESCE(viewed_at, NOW())
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Record the employer's 1-5 rating of the applicant.
    pub async fn rate(
        pool: &PgPool,
        id: DbId,
        rating: Rating,
    ) -> Result<Option<JobApplication>, sqlx::Error> {
        let query = format!(
            "UPDATE job_applications SET rating_by_employer = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobApplication>(&query)
            .bind(id)
            .bind(rating.get())
            .fetch_optional(pool)
            .await
    }

    /// Delete an application and its workflow rows, decrementing the job's
    /// `applications_count`. Returns `true` if the application existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let deleted = purge_applications(&mut *tx, &[id]).await?;
        tx.commit().await?;
        Ok(deleted > 0)
    }
}

/// Delete `application_ids` with their interviews, messages, offers,
/// feedback and history, and decrement each parent job's counter by the
/// number of its applications removed. Must run inside the caller's
/// transaction. Returns the number of applications removed.
pub(crate) async fn purge_applications(
    conn: &mut PgConnection,
    application_ids: &[DbId],
) -> Result<u64, sqlx::Error> {
    if application_ids.is_empty() {
        return Ok(0);
    }

    for statement in [
        "DELETE FROM interview_interviewers
         WHERE interview_id IN (SELECT id FROM interviews WHERE application_id = ANY($1))",
        "DELETE FROM interviews WHERE application_id = ANY($1)",
        "DELETE FROM application_messages WHERE application_id = ANY($1)",
        "DELETE FROM job_offers WHERE application_id = ANY($1)",
        "DELETE FROM application_feedback WHERE application_id = ANY($1)",
        "DELETE FROM application_status_history WHERE application_id = ANY($1)",
    ] {
        sqlx::query(statement)
            .bind(application_ids)
            .execute(&mut *conn)
            .await?;
    }

    sqlx::query(
        "UPDATE jobs j SET applications_count = j.applications_count - removed.n
         FROM (
             SELECT job_id, COUNT(*)::INTEGER AS n
             FROM job_applications
             WHERE id = ANY($1)
             GROUP BY job_id
         ) removed
         WHERE j.id = removed.job_id",
    )
    .bind(application_ids)
    .execute(&mut *conn)
    .await?;

    let result = sqlx::query("DELETE FROM job_applications WHERE id = ANY($1)")
        .bind(application_ids)
        .execute(&mut *conn)
        .await?;
    tracing::debug!(applications = result.rows_affected(), "Purged applications");
    Ok(result.rows_affected())
}
