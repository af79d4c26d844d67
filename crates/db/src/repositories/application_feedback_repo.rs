//! Repository for the `application_feedback` table.

use sqlx::PgPool;
use workbridge_core::rating::Rating;
use workbridge_core::types::DbId;

use crate::models::feedback::{ApplicationFeedback, CreateApplicationFeedback};

const COLUMNS: &str = "id, application_id, feedback_type, given_by, overall_rating, \
                       communication_rating, professionalism_rating, positive_feedback, \
                       areas_for_improvement, additional_comments, would_recommend, \
                       would_work_again, created_at, updated_at";

/// Provides operations for application feedback.
pub struct ApplicationFeedbackRepo;

impl ApplicationFeedbackRepo {
    /// Leave feedback. One entry per (application, author, feedback type).
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplicationFeedback,
    ) -> Result<ApplicationFeedback, sqlx::Error> {
        let query = format!(
            "INSERT INTO application_feedback
                (application_id, feedback_type, given_by, overall_rating, communication_rating,
                 professionalism_rating, positive_feedback, areas_for_improvement,
                 additional_comments, would_recommend, would_work_again)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApplicationFeedback>(&query)
            .bind(input.application_id)
            .bind(input.feedback_type)
            .bind(input.given_by)
            .bind(input.overall_rating.map(Rating::get))
            .bind(input.communication_rating.map(Rating::get))
            .bind(input.professionalism_rating.map(Rating::get))
            .bind(&input.positive_feedback)
            .bind(&input.areas_for_improvement)
            .bind(&input.additional_comments)
            .bind(input.would_recommend)
            .bind(input.would_work_again)
            .fetch_one(pool)
            .await
    }

    /// Feedback left on an application, oldest first.
    pub async fn list_for_application(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Vec<ApplicationFeedback>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM application_feedback
             WHERE application_id = $1
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, ApplicationFeedback>(&query)
            .bind(application_id)
            .fetch_all(pool)
            .await
    }
}
