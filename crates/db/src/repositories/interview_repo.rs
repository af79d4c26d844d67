//! Repository for the `interviews` and `interview_interviewers` tables.

use sqlx::PgPool;
use workbridge_core::applications::InterviewStatus;
use workbridge_core::rating::Rating;
use workbridge_core::types::DbId;

use crate::models::interview::{
    CompleteInterview, CreateInterview, Interview, InterviewInterviewer,
    DEFAULT_DURATION_MINUTES,
};

const COLUMNS: &str = "id, application_id, interview_type, scheduled_at, duration_minutes, \
                       location, meeting_link, interviewer_id, status, preparation_notes, \
                       interview_notes, technical_rating, communication_rating, \
                       overall_rating, recommendation, completed_at, created_at, updated_at";

const PANEL_COLUMNS: &str = "id, interview_id, user_id, created_at, updated_at";

/// Provides CRUD operations for interviews.
pub struct InterviewRepo;

impl InterviewRepo {
    /// Schedule an interview, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateInterview) -> Result<Interview, sqlx::Error> {
        let query = format!(
            "INSERT INTO interviews
                (application_id, interview_type, scheduled_at, duration_minutes, location,
                 meeting_link, interviewer_id, preparation_notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interview>(&query)
            .bind(input.application_id)
            .bind(input.interview_type)
            .bind(input.scheduled_at)
            .bind(input.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES))
            .bind(&input.location)
            .bind(&input.meeting_link)
            .bind(input.interviewer_id)
            .bind(&input.preparation_notes)
            .fetch_one(pool)
            .await
    }

    /// Find an interview by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Interview>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM interviews WHERE id = $1");
        sqlx::query_as::<_, Interview>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Interviews for an application, soonest first.
    pub async fn list_for_application(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Vec<Interview>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM interviews WHERE application_id = $1 ORDER BY scheduled_at, id"
        );
        sqlx::query_as::<_, Interview>(&query)
            .bind(application_id)
            .fetch_all(pool)
            .await
    }

    /// Add a panel member. Returns `false` if they were already on the panel.
    pub async fn add_interviewer(
        pool: &PgPool,
        interview_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO interview_interviewers (interview_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT (interview_id, user_id) DO NOTHING",
        )
        .bind(interview_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Panel members beyond the lead interviewer.
    pub async fn list_interviewers(
        pool: &PgPool,
        interview_id: DbId,
    ) -> Result<Vec<InterviewInterviewer>, sqlx::Error> {
        let query = format!(
            "SELECT {PANEL_COLUMNS} FROM interview_interviewers WHERE interview_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, InterviewInterviewer>(&query)
            .bind(interview_id)
            .fetch_all(pool)
            .await
    }

    /// Mark the interview completed and record its outcome.
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
        input: &CompleteInterview,
    ) -> Result<Option<Interview>, sqlx::Error> {
        let query = format!(
            "UPDATE interviews SET
                status = $2,
                completed_at = NOW(),
                interview_notes = COALESCE($3, interview_notes),
                technical_rating = COALESCE($4, technical_rating),
                communication_rating = COALESCE($5, communication_rating),
                overall_rating = COALESCE($6, overall_rating),
                recommendation = COALESCE($7, recommendation)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Interview>(&query)
            .bind(id)
            .bind(InterviewStatus::Completed)
            .bind(&input.interview_notes)
            .bind(input.technical_rating.map(Rating::get))
            .bind(input.communication_rating.map(Rating::get))
            .bind(input.overall_rating.map(Rating::get))
            .bind(input.recommendation)
            .fetch_optional(pool)
            .await
    }

    /// Change the scheduling status (cancel, reschedule, no-show).
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: InterviewStatus,
    ) -> Result<Option<Interview>, sqlx::Error> {
        let query = format!("UPDATE interviews SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Interview>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }
}
