//! Repository for the `verification_documents` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;
use workbridge_core::uploads::UploadKind;

use crate::models::verification::{CreateVerificationDocument, VerificationDocument, VerifyDocument};
use crate::repositories::upload_column;

const COLUMNS: &str = "id, user_id, document_type, document_file, document_number, \
                       extracted_text, admin_notes, verified_by, verified_at, \
                       created_at, updated_at";

/// Provides operations for identity verification documents.
pub struct VerificationDocumentRepo;

impl VerificationDocumentRepo {
    /// Store an uploaded document. One per (user, document type).
    pub async fn create(
        pool: &PgPool,
        input: &CreateVerificationDocument,
    ) -> Result<VerificationDocument, sqlx::Error> {
        let file = upload_column(Some(&input.document_file), UploadKind::VerificationDocument)?;
        let query = format!(
            "INSERT INTO verification_documents
                (user_id, document_type, document_file, document_number)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VerificationDocument>(&query)
            .bind(input.user_id)
            .bind(input.document_type)
            .bind(file)
            .bind(&input.document_number)
            .fetch_one(pool)
            .await
    }

    /// Documents uploaded by a user.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<VerificationDocument>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM verification_documents WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, VerificationDocument>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Record a review of the document and propagate the outcome to the
    /// owning user in the same transaction.
    pub async fn verify(
        pool: &PgPool,
        id: DbId,
        input: &VerifyDocument,
    ) -> Result<Option<VerificationDocument>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE verification_documents SET
                verified_by = $2,
                verified_at = NOW(),
                admin_notes = COALESCE($3, admin_notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let document = sqlx::query_as::<_, VerificationDocument>(&query)
            .bind(id)
            .bind(input.verified_by)
            .bind(&input.admin_notes)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(document) = document else {
            return Ok(None);
        };

        sqlx::query("UPDATE users SET verification_status = $2, is_verified = $3 WHERE id = $1")
            .bind(document.user_id)
            .bind(input.status)
            .bind(input.status.is_verified())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(document))
    }
}
