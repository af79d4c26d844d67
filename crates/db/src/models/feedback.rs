//! Post-process feedback models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::applications::FeedbackType;
use workbridge_core::rating::Rating;
use workbridge_core::types::{DbId, Timestamp};

/// A row from the `application_feedback` table.
/// Unique per (application, author, feedback type).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationFeedback {
    pub id: DbId,
    pub application_id: DbId,
    pub feedback_type: FeedbackType,
    pub given_by: DbId,
    pub overall_rating: Option<i16>,
    pub communication_rating: Option<i16>,
    pub professionalism_rating: Option<i16>,
    pub positive_feedback: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub additional_comments: Option<String>,
    pub would_recommend: Option<bool>,
    pub would_work_again: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for leaving feedback on an application.
#[derive(Debug, Clone)]
pub struct CreateApplicationFeedback {
    pub application_id: DbId,
    pub feedback_type: FeedbackType,
    pub given_by: DbId,
    pub overall_rating: Option<Rating>,
    pub communication_rating: Option<Rating>,
    pub professionalism_rating: Option<Rating>,
    pub positive_feedback: Option<String>,
    pub areas_for_improvement: Option<String>,
    pub additional_comments: Option<String>,
    pub would_recommend: Option<bool>,
    pub would_work_again: Option<bool>,
}
