//! Interview scheduling models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::applications::{InterviewStatus, InterviewType, Recommendation};
use workbridge_core::rating::Rating;
use workbridge_core::types::{DbId, Timestamp};

/// Default interview length in minutes.
pub const DEFAULT_DURATION_MINUTES: i32 = 30;

/// A row from the `interviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Interview {
    pub id: DbId,
    pub application_id: DbId,
    pub interview_type: InterviewType,
    pub scheduled_at: Timestamp,
    pub duration_minutes: i32,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    /// Lead interviewer. Additional panel members live in `interview_interviewers`.
    pub interviewer_id: DbId,
    pub status: InterviewStatus,
    pub preparation_notes: Option<String>,
    pub interview_notes: Option<String>,
    pub technical_rating: Option<i16>,
    pub communication_rating: Option<i16>,
    pub overall_rating: Option<i16>,
    pub recommendation: Option<Recommendation>,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for scheduling an interview.
#[derive(Debug, Clone)]
pub struct CreateInterview {
    pub application_id: DbId,
    pub interview_type: InterviewType,
    pub scheduled_at: Timestamp,
    /// Defaults to [`DEFAULT_DURATION_MINUTES`].
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub interviewer_id: DbId,
    pub preparation_notes: Option<String>,
}

/// Outcome recorded when an interview is completed.
#[derive(Debug, Clone, Default)]
pub struct CompleteInterview {
    pub interview_notes: Option<String>,
    pub technical_rating: Option<Rating>,
    pub communication_rating: Option<Rating>,
    pub overall_rating: Option<Rating>,
    pub recommendation: Option<Recommendation>,
}

/// A row from the `interview_interviewers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct InterviewInterviewer {
    pub id: DbId,
    pub interview_id: DbId,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
