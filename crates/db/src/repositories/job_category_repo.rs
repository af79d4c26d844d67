//! Repository for the `job_categories` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;

use crate::models::category::{CreateJobCategory, JobCategory};

const COLUMNS: &str = "id, name, description, icon, is_active, created_at, updated_at";

/// Provides CRUD operations for job categories.
pub struct JobCategoryRepo;

impl JobCategoryRepo {
    /// Insert a new category, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateJobCategory,
    ) -> Result<JobCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_categories (name, description, icon, is_active)
             VALUES ($1, $2, $3, COALESCE($4, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobCategory>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Return the category named `name`, creating it from `defaults` if absent.
    ///
    /// The boolean is `true` when a new row was inserted. `defaults` is only
    /// called when no category with that name exists.
    pub async fn create_or_get(
        pool: &PgPool,
        name: &str,
        defaults: impl FnOnce(&str) -> CreateJobCategory,
    ) -> Result<(JobCategory, bool), sqlx::Error> {
        if let Some(existing) = Self::find_by_name(pool, name).await? {
            return Ok((existing, false));
        }

        let input = defaults(name);
        let query = format!(
            "INSERT INTO job_categories (name, description, icon, is_active)
             VALUES ($1, $2, $3, COALESCE($4, true))
             ON CONFLICT (name) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, JobCategory>(&query)
            .bind(name)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(category) => Ok((category, true)),
            // Lost a race with a concurrent insert.
            None => {
                let query = format!("SELECT {COLUMNS} FROM job_categories WHERE name = $1");
                let category = sqlx::query_as::<_, JobCategory>(&query)
                    .bind(name)
                    .fetch_one(pool)
                    .await?;
                Ok((category, false))
            }
        }
    }

    /// Find a category by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_categories WHERE id = $1");
        sqlx::query_as::<_, JobCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by its unique name.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<JobCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_categories WHERE name = $1");
        sqlx::query_as::<_, JobCategory>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List active categories ordered by name.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<JobCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_categories WHERE is_active = true ORDER BY name"
        );
        sqlx::query_as::<_, JobCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Count all categories.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM job_categories")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
