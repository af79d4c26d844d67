//! Repository for the `job_poster_profiles` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;
use workbridge_core::uploads::UploadKind;

use crate::models::profile::{CreateJobPosterProfile, JobPosterProfile};
use crate::repositories::upload_column;

const COLUMNS: &str = "id, user_id, company_name, company_description, company_size, industry, \
                       website, company_logo, address, city, state, pincode, contact_person, \
                       contact_phone, is_company_verified, created_at, updated_at";

/// Provides CRUD operations for employer profiles.
pub struct JobPosterProfileRepo;

impl JobPosterProfileRepo {
    /// Insert a new profile, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobPosterProfile,
    ) -> Result<JobPosterProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_poster_profiles
                (user_id, company_name, company_description, company_size, industry, website,
                 company_logo, address, city, state, pincode, contact_person, contact_phone,
                 is_company_verified)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, COALESCE($14, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobPosterProfile>(&query)
            .bind(input.user_id)
            .bind(&input.company_name)
            .bind(&input.company_description)
            .bind(input.company_size)
            .bind(&input.industry)
            .bind(&input.website)
            .bind(upload_column(input.company_logo.as_ref(), UploadKind::CompanyLogo)?)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.pincode)
            .bind(&input.contact_person)
            .bind(&input.contact_phone)
            .bind(input.is_company_verified)
            .fetch_one(pool)
            .await
    }

    /// Return the profile owned by `user_id`, creating it from `defaults` if absent.
    pub async fn create_or_get(
        pool: &PgPool,
        user_id: DbId,
        defaults: impl FnOnce(DbId) -> CreateJobPosterProfile,
    ) -> Result<(JobPosterProfile, bool), sqlx::Error> {
        if let Some(existing) = Self::find_by_user(pool, user_id).await? {
            return Ok((existing, false));
        }
        let mut input = defaults(user_id);
        input.user_id = user_id;
        let profile = Self::create(pool, &input).await?;
        Ok((profile, true))
    }

    /// Find a profile by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<JobPosterProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_poster_profiles WHERE id = $1");
        sqlx::query_as::<_, JobPosterProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the profile owned by a user.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<JobPosterProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_poster_profiles WHERE user_id = $1");
        sqlx::query_as::<_, JobPosterProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark the company as verified (or not).
    pub async fn set_company_verified(
        pool: &PgPool,
        id: DbId,
        verified: bool,
    ) -> Result<Option<JobPosterProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE job_poster_profiles SET is_company_verified = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobPosterProfile>(&query)
            .bind(id)
            .bind(verified)
            .fetch_optional(pool)
            .await
    }

    /// Count all employer profiles.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM job_poster_profiles")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
