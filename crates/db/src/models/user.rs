//! Accounts: job seekers, employers and admins.

use serde::Deserialize;
use sqlx::FromRow;
use workbridge_core::accounts::{UserRole, VerificationStatus};
use workbridge_core::types::{DbId, Timestamp};

/// Row from `users`. Not `Serialize`: it carries the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub phone_number: Option<String>,
    pub is_active: bool,
    pub is_verified: bool,
    pub verification_status: VerificationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl User {
    /// `"First Last"`, falling back to the email when both names are blank.
    pub fn full_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub role: UserRole,
    pub phone_number: Option<String>,
    /// Defaults to `false`.
    pub is_verified: Option<bool>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUser {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub is_active: Option<bool>,
}
