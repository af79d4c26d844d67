//! Job application and status history models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::applications::ApplicationStatus;
use workbridge_core::types::{DbId, Timestamp};
use workbridge_core::uploads::StoredUpload;

/// A row from the `job_applications` table. Unique per (job, applicant).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobApplication {
    pub id: DbId,
    pub job_id: DbId,
    pub applicant_id: DbId,
    pub job_seeker_profile_id: DbId,
    pub cover_letter: Option<String>,
    pub resume: Option<String>,
    pub additional_documents: Option<String>,
    pub status: ApplicationStatus,
    pub applied_at: Timestamp,
    pub viewed_by_employer: bool,
    pub viewed_at: Option<Timestamp>,
    pub employer_notes: Option<String>,
    pub interview_scheduled_at: Option<Timestamp>,
    pub interview_location: Option<String>,
    pub interview_notes: Option<String>,
    pub employer_feedback: Option<String>,
    pub applicant_feedback: Option<String>,
    pub rating_by_employer: Option<i16>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting an application. New applications are always `pending`.
#[derive(Debug, Clone, Default)]
pub struct CreateJobApplication {
    pub job_id: DbId,
    pub applicant_id: DbId,
    pub job_seeker_profile_id: DbId,
    pub cover_letter: Option<String>,
    /// Must be built with `UploadKind::ApplicationResume`.
    pub resume: Option<StoredUpload>,
    /// Must be built with `UploadKind::ApplicationDocument`.
    pub additional_documents: Option<StoredUpload>,
    /// Defaults to the insertion time. The fixture loader backdates it.
    pub applied_at: Option<Timestamp>,
}

/// DTO for employer-side edits to an application.
///
/// Status is deliberately absent: use `JobApplicationRepo::change_status`,
/// which records the history entry in the same transaction.
#[derive(Debug, Clone, Default)]
pub struct UpdateJobApplication {
    pub employer_notes: Option<String>,
    pub interview_scheduled_at: Option<Timestamp>,
    pub interview_location: Option<String>,
    pub interview_notes: Option<String>,
    pub employer_feedback: Option<String>,
    pub applicant_feedback: Option<String>,
}

/// A row from the `application_status_history` table. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationStatusHistory {
    pub id: DbId,
    pub application_id: DbId,
    pub previous_status: ApplicationStatus,
    pub new_status: ApplicationStatus,
    pub changed_by: DbId,
    pub notes: Option<String>,
    pub changed_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for `JobApplicationRepo::change_status`.
#[derive(Debug, Clone)]
pub struct ChangeApplicationStatus {
    pub new_status: ApplicationStatus,
    pub changed_by: DbId,
    pub notes: Option<String>,
}

