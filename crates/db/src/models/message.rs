//! Application message models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::applications::MessageType;
use workbridge_core::types::{DbId, Timestamp};
use workbridge_core::uploads::StoredUpload;

/// A row from the `application_messages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicationMessage {
    pub id: DbId,
    pub application_id: DbId,
    pub sender_id: DbId,
    pub recipient_id: DbId,
    pub message_type: MessageType,
    pub subject: String,
    pub body: String,
    pub attachment: Option<String>,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub sent_at: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for sending a message on an application.
#[derive(Debug, Clone)]
pub struct CreateApplicationMessage {
    pub application_id: DbId,
    pub sender_id: DbId,
    pub recipient_id: DbId,
    pub message_type: MessageType,
    pub subject: String,
    pub body: String,
    /// Must be built with `UploadKind::MessageAttachment`.
    pub attachment: Option<StoredUpload>,
}
