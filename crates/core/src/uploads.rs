//! Upload field rules: allowed extensions and storage subdirectories.
//!
//! The blob store is an external collaborator. This module only decides
//! whether a file name is acceptable for a field and which logical
//! directory it lands in. Models accept [`StoredUpload`] rather than raw
//! strings, so an invalid extension is rejected before any insert.

use serde::Serialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Extension sets
// ---------------------------------------------------------------------------

/// Resumes and text documents.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// Mixed attachments: documents or images.
pub const ATTACHMENT_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "jpg", "jpeg", "png"];

/// Identity documents: scans or PDFs.
pub const IDENTITY_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf"];

/// Images only.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Offer letters.
pub const OFFER_LETTER_EXTENSIONS: &[&str] = &["pdf"];

// ---------------------------------------------------------------------------
// Upload kinds
// ---------------------------------------------------------------------------

/// Every file-bearing field in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    /// `job_seeker_profiles.resume`
    Resume,
    /// `job_seeker_profiles.profile_picture`
    ProfilePicture,
    /// `job_poster_profiles.company_logo`
    CompanyLogo,
    /// `verification_documents.document_file`
    VerificationDocument,
    /// `job_applications.resume`
    ApplicationResume,
    /// `job_applications.additional_documents`
    ApplicationDocument,
    /// `application_messages.attachment`
    MessageAttachment,
    /// `job_offers.offer_letter`
    OfferLetter,
}

impl UploadKind {
    /// Lower-case extensions accepted for this field.
    pub fn allowed_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Resume | Self::ApplicationResume => DOCUMENT_EXTENSIONS,
            Self::ApplicationDocument | Self::MessageAttachment => ATTACHMENT_EXTENSIONS,
            Self::VerificationDocument => IDENTITY_EXTENSIONS,
            Self::ProfilePicture | Self::CompanyLogo => IMAGE_EXTENSIONS,
            Self::OfferLetter => OFFER_LETTER_EXTENSIONS,
        }
    }

    /// Logical storage subdirectory for this field.
    pub fn directory(self) -> &'static str {
        match self {
            Self::Resume => "resumes",
            Self::ProfilePicture => "profile_pictures",
            Self::CompanyLogo => "company_logos",
            Self::VerificationDocument => "verification_documents",
            Self::ApplicationResume => "application_resumes",
            Self::ApplicationDocument => "application_documents",
            Self::MessageAttachment => "application_message_attachments",
            Self::OfferLetter => "offer_letters",
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate `file_name` against the extensions allowed for `kind`.
///
/// Matching is case-insensitive. Returns the normalized (lower-case)
/// extension on success.
pub fn validate_extension(kind: UploadKind, file_name: &str) -> Result<String, CoreError> {
    let base = base_name(file_name);
    let ext = match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => {
            return Err(CoreError::Validation(format!(
                "File '{file_name}' has no extension. Allowed: {}",
                kind.allowed_extensions().join(", ")
            )))
        }
    };

    if kind.allowed_extensions().contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(CoreError::Validation(format!(
            "File extension '{ext}' is not allowed. Allowed: {}",
            kind.allowed_extensions().join(", ")
        )))
    }
}

/// Strip any directory components a client may have sent.
fn base_name(file_name: &str) -> &str {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .trim()
}

/// A validated upload reference, ready to be persisted in a file column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredUpload {
    kind: UploadKind,
    path: String,
}

impl StoredUpload {
    /// Validate `file_name` for `kind` and build its storage path
    /// (`<directory>/<base name>`).
    pub fn new(kind: UploadKind, file_name: &str) -> Result<Self, CoreError> {
        validate_extension(kind, file_name)?;
        let path = format!("{}/{}", kind.directory(), base_name(file_name));
        Ok(Self { kind, path })
    }

    pub fn kind(&self) -> UploadKind {
        self.kind
    }

    /// The value stored in the database column.
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resume_accepts_documents_only() {
        assert!(validate_extension(UploadKind::Resume, "cv.pdf").is_ok());
        assert!(validate_extension(UploadKind::Resume, "cv.docx").is_ok());
        assert!(validate_extension(UploadKind::Resume, "cv.png").is_err());
    }

    #[test]
    fn attachment_accepts_images() {
        assert!(validate_extension(UploadKind::MessageAttachment, "site.jpeg").is_ok());
        assert!(validate_extension(UploadKind::ApplicationDocument, "cert.png").is_ok());
        assert!(validate_extension(UploadKind::ApplicationDocument, "run.exe").is_err());
    }

    #[test]
    fn identity_documents_reject_word_files() {
        assert!(validate_extension(UploadKind::VerificationDocument, "pan.jpg").is_ok());
        assert!(validate_extension(UploadKind::VerificationDocument, "pan.pdf").is_ok());
        assert!(validate_extension(UploadKind::VerificationDocument, "pan.doc").is_err());
    }

    #[test]
    fn offer_letter_is_pdf_only() {
        assert!(validate_extension(UploadKind::OfferLetter, "offer.pdf").is_ok());
        assert!(validate_extension(UploadKind::OfferLetter, "offer.docx").is_err());
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(
            validate_extension(UploadKind::Resume, "CV.PDF").unwrap(),
            "pdf"
        );
    }

    #[test]
    fn missing_extension_is_rejected() {
        assert!(validate_extension(UploadKind::Resume, "resume").is_err());
        assert!(validate_extension(UploadKind::Resume, ".pdf").is_err());
        assert!(validate_extension(UploadKind::Resume, "resume.").is_err());
    }

    #[test]
    fn stored_path_uses_field_directory_and_base_name() {
        let upload = StoredUpload::new(UploadKind::OfferLetter, "C:\\tmp\\offer.pdf").unwrap();
        assert_eq!(upload.path(), "offer_letters/offer.pdf");
        assert_eq!(upload.kind(), UploadKind::OfferLetter);

        let upload = StoredUpload::new(UploadKind::Resume, "../../etc/cv.doc").unwrap();
        assert_eq!(upload.path(), "resumes/cv.doc");
    }
}
