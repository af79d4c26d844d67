//! Repository for the `job_seeker_profiles` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;
use workbridge_core::uploads::UploadKind;

use crate::models::profile::{CreateJobSeekerProfile, JobSeekerProfile, UpdateJobSeekerProfile};
use crate::repositories::upload_column;

const COLUMNS: &str = "id, user_id, bio, experience_level, location, city, state, pincode, \
                       resume, profile_picture, availability, expected_salary_min, \
                       expected_salary_max, created_at, updated_at";

/// Provides CRUD operations for job seeker profiles.
pub struct JobSeekerProfileRepo;

impl JobSeekerProfileRepo {
    /// Insert a new profile, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobSeekerProfile,
    ) -> Result<JobSeekerProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_seeker_profiles
                (user_id, bio, experience_level, location, city, state, pincode,
                 resume, profile_picture, availability, expected_salary_min, expected_salary_max)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, true), $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobSeekerProfile>(&query)
            .bind(input.user_id)
            .bind(&input.bio)
            .bind(input.experience_level)
            .bind(&input.location)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.pincode)
            .bind(upload_column(input.resume.as_ref(), UploadKind::Resume)?)
            .bind(upload_column(input.profile_picture.as_ref(), UploadKind::ProfilePicture)?)
            .bind(input.availability)
            .bind(input.expected_salary_min)
            .bind(input.expected_salary_max)
            .fetch_one(pool)
            .await
    }

    /// Return the profile owned by `user_id`, creating it from `defaults` if absent.
    pub async fn create_or_get(
        pool: &PgPool,
        user_id: DbId,
        defaults: impl FnOnce(DbId) -> CreateJobSeekerProfile,
    ) -> Result<(JobSeekerProfile, bool), sqlx::Error> {
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
    ) -> Result<Option<JobSeekerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_seeker_profiles WHERE id = $1");
        sqlx::query_as::<_, JobSeekerProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the profile owned by a user.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<JobSeekerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_seeker_profiles WHERE user_id = $1");
        sqlx::query_as::<_, JobSeekerProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// The first `limit` profiles in insertion order.
    pub async fn list_first(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<JobSeekerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_seeker_profiles ORDER BY id LIMIT $1");
        sqlx::query_as::<_, JobSeekerProfile>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Update a profile. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJobSeekerProfile,
    ) -> Result<Option<JobSeekerProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE job_seeker_profiles SET
                bio = COALESCE($2, bio),
                experience_level = COALESCE($3, experience_level),
                location = COALESCE($4, location),
                city = COALESCE($5, city),
                state = COALESCE($6, state),
                pincode = COALESCE($7, pincode),
                resume = COALESCE($8, resume),
                profile_picture = COALESCE($9, profile_picture),
                availability = COALESCE($10, availability),
                expected_salary_min = COALESCE($11, expected_salary_min),
                expected_salary_max = COALESCE($12, expected_salary_max)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobSeekerProfile>(&query)
            .bind(id)
            .bind(&input.bio)
            .bind(input.experience_level)
            .bind(&input.location)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.pincode)
            .bind(upload_column(input.resume.as_ref(), UploadKind::Resume)?)
            .bind(upload_column(input.profile_picture.as_ref(), UploadKind::ProfilePicture)?)
            .bind(input.availability)
            .bind(input.expected_salary_min)
            .bind(input.expected_salary_max)
            .fetch_optional(pool)
            .await
    }

    /// Count all seeker profiles.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM job_seeker_profiles")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
