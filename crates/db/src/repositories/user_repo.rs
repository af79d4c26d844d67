//! Repository for the `users` table.

use sqlx::PgPool;
use workbridge_core::accounts::VerificationStatus;
use workbridge_core::types::DbId;

use crate::models::user::{CreateUser, UpdateUser, User};
use crate::repositories::job_application_repo::purge_applications;
use crate::repositories::job_repo::purge_jobs;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, username, first_name, last_name, password_hash, role, \
                       phone_number, is_active, is_verified, verification_status, \
                       created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users
                (email, username, first_name, last_name, password_hash, role,
                 phone_number, is_verified)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.username)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.password_hash)
            .bind(input.role)
            .bind(&input.phone_number)
            .bind(input.is_verified)
            .fetch_one(pool)
            .await
    }

    /// Return the user with `email`, creating one from `build` if absent.
    ///
    /// `build` runs only when no such user exists, so expensive defaults
    /// (password hashing) are skipped on reruns. Its error type must absorb
    /// `sqlx::Error`. The boolean is `true` when a new row was inserted.
    pub async fn create_or_get<F, E>(
        pool: &PgPool,
        email: &str,
        build: F,
    ) -> Result<(User, bool), E>
    where
        F: FnOnce(&str) -> Result<CreateUser, E>,
        E: From<sqlx::Error>,
    {
        if let Some(existing) = Self::find_by_email(pool, email).await? {
            return Ok((existing, false));
        }

        let input = build(email)?;
        let query = format!(
            "INSERT INTO users
                (email, username, first_name, last_name, password_hash, role,
                 phone_number, is_verified)
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, false))
             ON CONFLICT (email) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(&input.username)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.password_hash)
            .bind(input.role)
            .bind(&input.phone_number)
            .bind(input.is_verified)
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(user) => Ok((user, true)),
            None => {
                let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
                let user = sqlx::query_as::<_, User>(&query)
                    .bind(email)
                    .fetch_one(pool)
                    .await?;
                Ok((user, false))
            }
        }
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Count all users.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Update a user. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                phone_number = COALESCE($4, phone_number),
                is_active = COALESCE($5, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone_number)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Set the verification status. `is_verified` follows the status.
    pub async fn set_verification_status(
        pool: &PgPool,
        id: DbId,
        status: VerificationStatus,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET verification_status = $2, is_verified = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(status)
            .bind(status.is_verified())
            .fetch_optional(pool)
            .await
    }

    /// Delete a user and everything they own, in one transaction.
    ///
    /// Removes their applications, their profiles and the jobs posted by or
    /// for their company (with those jobs' applications), plus every row
    /// that names them as participant. Reviewer references
    /// (`verified_by`, `reviewed_by`) on other rows are nulled by the
    /// foreign keys. Returns `true` if the user existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let application_ids: Vec<DbId> = sqlx::query_scalar(
            "SELECT a.id FROM job_applications a
             LEFT JOIN job_seeker_profiles p ON p.id = a.job_seeker_profile_id
             WHERE a.applicant_id = $1 OR p.user_id = $1",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;
        purge_applications(&mut *tx, &application_ids).await?;

        let job_ids: Vec<DbId> = sqlx::query_scalar(
            "SELECT j.id FROM jobs j
             LEFT JOIN job_poster_profiles p ON p.id = j.company_id
             WHERE j.posted_by = $1 OR p.user_id = $1",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;
        purge_jobs(&mut *tx, &job_ids).await?;

        // Participation in applications owned by other users.
        sqlx::query(
            "DELETE FROM interview_interviewers
             WHERE user_id = $1
                OR interview_id IN (SELECT id FROM interviews WHERE interviewer_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;
        for statement in [
            "DELETE FROM interviews WHERE interviewer_id = $1",
            "DELETE FROM application_messages WHERE sender_id = $1 OR recipient_id = $1",
            "DELETE FROM application_feedback WHERE given_by = $1",
            "DELETE FROM application_status_history WHERE changed_by = $1",
            "DELETE FROM job_bookmarks WHERE user_id = $1",
            "DELETE FROM job_views WHERE user_id = $1",
            "DELETE FROM job_alerts WHERE user_id = $1",
            "DELETE FROM job_reports WHERE reported_by = $1",
            "DELETE FROM verification_documents WHERE user_id = $1",
            "DELETE FROM job_seeker_skills
             WHERE job_seeker_id IN (SELECT id FROM job_seeker_profiles WHERE user_id = $1)",
            "DELETE FROM job_seeker_profiles WHERE user_id = $1",
            "DELETE FROM job_poster_profiles WHERE user_id = $1",
        ] {
            sqlx::query(statement).bind(id).execute(&mut *tx).await?;
        }

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(
            user_id = id,
            applications = application_ids.len(),
            jobs = job_ids.len(),
            "Deleted user and owned rows"
        );
        Ok(result.rows_affected() > 0)
    }
}
