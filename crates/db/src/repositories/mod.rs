//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

use workbridge_core::error::CoreError;
use workbridge_core::uploads::{StoredUpload, UploadKind};

pub mod application_feedback_repo;
pub mod application_message_repo;
pub mod interview_repo;
pub mod job_alert_repo;
pub mod job_application_repo;
pub mod job_bookmark_repo;
pub mod job_category_repo;
pub mod job_offer_repo;
pub mod job_poster_profile_repo;
pub mod job_report_repo;
pub mod job_repo;
pub mod job_seeker_profile_repo;
pub mod job_seeker_skill_repo;
pub mod job_skill_requirement_repo;
pub mod job_view_repo;
pub mod skill_repo;
pub mod user_repo;
pub mod verification_document_repo;

pub use application_feedback_repo::ApplicationFeedbackRepo;
pub use application_message_repo::ApplicationMessageRepo;
pub use interview_repo::InterviewRepo;
pub use job_alert_repo::JobAlertRepo;
pub use job_application_repo::JobApplicationRepo;
pub use job_bookmark_repo::JobBookmarkRepo;
pub use job_category_repo::JobCategoryRepo;
pub use job_offer_repo::JobOfferRepo;
pub use job_poster_profile_repo::JobPosterProfileRepo;
pub use job_report_repo::JobReportRepo;
pub use job_repo::JobRepo;
pub use job_seeker_profile_repo::JobSeekerProfileRepo;
pub use job_seeker_skill_repo::JobSeekerSkillRepo;
pub use job_skill_requirement_repo::JobSkillRequirementRepo;
pub use job_view_repo::JobViewRepo;
pub use skill_repo::SkillRepo;
pub use user_repo::UserRepo;
pub use verification_document_repo::VerificationDocumentRepo;

/// Column value for an optional upload field.
///
/// Rejects an upload validated for a different field, which would
/// otherwise slip past that field's extension rules.
pub(crate) fn upload_column(
    upload: Option<&StoredUpload>,
    expected: UploadKind,
) -> Result<Option<&str>, sqlx::Error> {
    match upload {
        None => Ok(None),
        Some(u) if u.kind() == expected => Ok(Some(u.path())),
        Some(u) => Err(sqlx::Error::Encode(Box::new(CoreError::Validation(format!(
            "Upload for {:?} cannot be stored in a {:?} field",
            u.kind(),
            expected
        ))))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_column_accepts_matching_kind() {
        let upload = StoredUpload::new(UploadKind::Resume, "cv.pdf").unwrap();
        let column = upload_column(Some(&upload), UploadKind::Resume).unwrap();
        assert_eq!(column, Some("resumes/cv.pdf"));
        assert_eq!(upload_column(None, UploadKind::Resume).unwrap(), None);
    }

    #[test]
    fn upload_column_rejects_other_field() {
        let upload = StoredUpload::new(UploadKind::ApplicationResume, "cv.pdf").unwrap();
        assert!(upload_column(Some(&upload), UploadKind::Resume).is_err());
    }
}
