//! Repository for the `application_messages` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;
use workbridge_core::uploads::UploadKind;

use crate::models::message::{ApplicationMessage, CreateApplicationMessage};
use crate::repositories::upload_column;

const COLUMNS: &str = "id, application_id, sender_id, recipient_id, message_type, subject, \
                       body, attachment, is_read, read_at, sent_at, created_at, updated_at";

/// Provides operations for messages exchanged on an application.
pub struct ApplicationMessageRepo;

impl ApplicationMessageRepo {
    /// Send a message, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplicationMessage,
    ) -> Result<ApplicationMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO application_messages
                (application_id, sender_id, recipient_id, message_type, subject, body, attachment)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApplicationMessage>(&query)
            .bind(input.application_id)
            .bind(input.sender_id)
            .bind(input.recipient_id)
            .bind(input.message_type)
            .bind(&input.subject)
            .bind(&input.body)
            .bind(upload_column(input.attachment.as_ref(), UploadKind::MessageAttachment)?)
            .fetch_one(pool)
            .await
    }

    /// Mark a message read. The first read time is kept.
    pub async fn mark_read(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ApplicationMessage>, sqlx::Error> {
        let query = format!(
            "UPDATE application_messages SET is_read = true, read_at = COALESCE(read_at, NOW())
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ApplicationMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The conversation on an application, oldest first.
    pub async fn list_for_application(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Vec<ApplicationMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM application_messages
             WHERE application_id = $1
             ORDER BY sent_at, id"
        );
        sqlx::query_as::<_, ApplicationMessage>(&query)
            .bind(application_id)
            .fetch_all(pool)
            .await
    }

    /// Number of unread messages addressed to a user.
    pub async fn count_unread_for(pool: &PgPool, recipient_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM application_messages WHERE recipient_id = $1 AND is_read = false",
        )
        .bind(recipient_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
