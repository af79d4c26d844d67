//! Identity verification document model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::accounts::{DocumentType, VerificationStatus};
use workbridge_core::types::{DbId, Timestamp};
use workbridge_core::uploads::StoredUpload;

/// A row from the `verification_documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct VerificationDocument {
    pub id: DbId,
    pub user_id: DbId,
    pub document_type: DocumentType,
    pub document_file: String,
    pub document_number: Option<String>,
    /// OCR output, filled in by an external extraction step.
    pub extracted_text: Option<String>,
    pub admin_notes: Option<String>,
    pub verified_by: Option<DbId>,
    pub verified_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for uploading a verification document.
///
/// `document_file` must be built with `UploadKind::VerificationDocument`.
#[derive(Debug, Clone)]
pub struct CreateVerificationDocument {
    pub user_id: DbId,
    pub document_type: DocumentType,
    pub document_file: StoredUpload,
    pub document_number: Option<String>,
}

/// Reviewer decision on a verification document.
///
/// The owning user's `verification_status` is set to `status` in the same
/// transaction, and `is_verified` follows it.
#[derive(Debug, Clone)]
pub struct VerifyDocument {
    pub verified_by: DbId,
    pub status: VerificationStatus,
    pub admin_notes: Option<String>,
}
