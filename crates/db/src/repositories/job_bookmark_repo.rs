//! Repository for the `job_bookmarks` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;

use crate::models::interaction::JobBookmark;

const COLUMNS: &str = "id, user_id, job_id, created_at, updated_at";

/// Provides operations for saved jobs.
pub struct JobBookmarkRepo;

impl JobBookmarkRepo {
    /// Bookmark a job. Bookmarking twice returns the existing row with `false`.
    pub async fn add(
        pool: &PgPool,
        user_id: DbId,
        job_id: DbId,
    ) -> Result<(JobBookmark, bool), sqlx::Error> {
        let query = format!(
            "INSERT INTO job_bookmarks (user_id, job_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, job_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, JobBookmark>(&query)
            .bind(user_id)
            .bind(job_id)
            .fetch_optional(pool)
            .await?;
        if let Some(bookmark) = inserted {
            return Ok((bookmark, true));
        }

        let query =
            format!("SELECT {COLUMNS} FROM job_bookmarks WHERE user_id = $1 AND job_id = $2");
        let existing = sqlx::query_as::<_, JobBookmark>(&query)
            .bind(user_id)
            .bind(job_id)
            .fetch_one(pool)
            .await?;
        Ok((existing, false))
    }

    /// Remove a bookmark. Returns `true` if one existed.
    pub async fn remove(pool: &PgPool, user_id: DbId, job_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_bookmarks WHERE user_id = $1 AND job_id = $2")
            .bind(user_id)
            .bind(job_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// A user's bookmarks, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<JobBookmark>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_bookmarks
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, JobBookmark>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
