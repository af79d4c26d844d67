//! Repository for the `jobs` table.
//!
//! Every write that can change `status` also resolves `published_at`:
//! the first save as `active` stamps it, later saves leave it alone.

use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use workbridge_core::jobs::{resolve_published_at, JobStatus};
use workbridge_core::types::DbId;

use crate::models::job::{CreateJob, Job, UpdateJob};
use crate::repositories::job_application_repo::purge_applications;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category_id, posted_by, company_id, job_type, \
                       experience_level, location, city, state, pincode, is_remote, \
                       salary_min, salary_max, salary_type, salary_negotiable, requirements, \
                       benefits, application_deadline, max_applications, status, is_featured, \
                       views_count, applications_count, published_at, created_at, updated_at";

/// SQL expression applying the publication rule for a status bound at `$2`.
const PUBLISHED_AT_ON_SAVE: &str = "CASE \
    WHEN COALESCE($2, status) = 'active' AND published_at IS NULL THEN NOW() \
    ELSE published_at END";

/// Default page size for [`JobRepo::list_recent`].
const DEFAULT_RECENT_LIMIT: i64 = 20;

/// Provides CRUD operations for job postings.
pub struct JobRepo;

impl JobRepo {
    /// Insert a new job, returning the created row.
    ///
    /// Jobs created as `active` are published immediately.
    pub async fn create(pool: &PgPool, input: &CreateJob) -> Result<Job, sqlx::Error> {
        let published_at = resolve_published_at(input.status, None, Utc::now());
        let query = format!(
            "INSERT INTO jobs
                (title, description, category_id, posted_by, company_id, job_type,
                 experience_level, location, city, state, pincode, is_remote, salary_min,
                 salary_max, salary_type, salary_negotiable, requirements, benefits,
                 application_deadline, max_applications, status, is_featured, published_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                     $17, $18, $19, $20, $21, $22, $23)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.posted_by)
            .bind(input.company_id)
            .bind(input.job_type)
            .bind(input.experience_level)
            .bind(&input.location)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.pincode)
            .bind(input.is_remote)
            .bind(input.salary_min)
            .bind(input.salary_max)
            .bind(input.salary_type)
            .bind(input.salary_negotiable)
            .bind(&input.requirements)
            .bind(&input.benefits)
            .bind(input.application_deadline)
            .bind(input.max_applications)
            .bind(input.status)
            .bind(input.is_featured)
            .bind(published_at)
            .fetch_one(pool)
            .await
    }

    /// Return the job titled `title` at `company_id`, creating it from
    /// `defaults` if absent.
    ///
    /// Titles are not unique in the schema; the first match by id wins.
    pub async fn create_or_get(
        pool: &PgPool,
        company_id: DbId,
        title: &str,
        defaults: impl FnOnce(DbId, &str) -> CreateJob,
    ) -> Result<(Job, bool), sqlx::Error> {
        if let Some(existing) = Self::find_by_company_and_title(pool, company_id, title).await? {
            return Ok((existing, false));
        }
        let mut input = defaults(company_id, title);
        input.company_id = company_id;
        input.title = title.to_string();
        let job = Self::create(pool, &input).await?;
        Ok((job, true))
    }

    /// Find a job by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM jobs WHERE id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a company's job by its exact title.
    pub async fn find_by_company_and_title(
        pool: &PgPool,
        company_id: DbId,
        title: &str,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM jobs
             WHERE company_id = $1 AND title = $2
             ORDER BY id
             LIMIT 1"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(company_id)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Most recently created jobs first.
    pub async fn list_recent(pool: &PgPool, limit: Option<i64>) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM jobs
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(limit.unwrap_or(DEFAULT_RECENT_LIMIT))
            .fetch_all(pool)
            .await
    }

    /// All jobs posted under a company, newest first.
    pub async fn list_for_company(
        pool: &PgPool,
        company_id: DbId,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM jobs WHERE company_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Update a job. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET
                status = COALESCE($2, status),
                published_at = {PUBLISHED_AT_ON_SAVE},
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                category_id = COALESCE($5, category_id),
                job_type = COALESCE($6, job_type),
                experience_level = COALESCE($7, experience_level),
                location = COALESCE($8, location),
                city = COALESCE($9, city),
                state = COALESCE($10, state),
                pincode = COALESCE($11, pincode),
                is_remote = COALESCE($12, is_remote),
                salary_min = COALESCE($13, salary_min),
                salary_max = COALESCE($14, salary_max),
                salary_type = COALESCE($15, salary_type),
                salary_negotiable = COALESCE($16, salary_negotiable),
                requirements = COALESCE($17, requirements),
                benefits = COALESCE($18, benefits),
                application_deadline = COALESCE($19, application_deadline),
                max_applications = COALESCE($20, max_applications),
                is_featured = COALESCE($21, is_featured)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(input.status)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.job_type)
            .bind(input.experience_level)
            .bind(&input.location)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.pincode)
            .bind(input.is_remote)
            .bind(input.salary_min)
            .bind(input.salary_max)
            .bind(input.salary_type)
            .bind(input.salary_negotiable)
            .bind(&input.requirements)
            .bind(&input.benefits)
            .bind(input.application_deadline)
            .bind(input.max_applications)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Change a job's status, applying the publication rule.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: JobStatus,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "UPDATE jobs SET status = $2, published_at = {PUBLISHED_AT_ON_SAVE}
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Increment the view counter by 1. Runs on the caller's connection so
    /// it commits together with the view row.
    pub async fn increment_views(conn: &mut PgConnection, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE jobs SET views_count = views_count + 1 WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }

    /// Count all jobs.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Delete a job with its requirements, interactions and applications.
    ///
    /// Returns `true` if the job existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let deleted = purge_jobs(&mut *tx, &[id]).await?;
        tx.commit().await?;
        Ok(deleted > 0)
    }
}

/// Delete `job_ids` and every row hanging off them. Returns the number of
/// jobs removed. Must run inside the caller's transaction.
pub(crate) async fn purge_jobs(
    conn: &mut PgConnection,
    job_ids: &[DbId],
) -> Result<u64, sqlx::Error> {
    if job_ids.is_empty() {
        return Ok(0);
    }

    let application_ids: Vec<DbId> =
        sqlx::query_scalar("SELECT id FROM job_applications WHERE job_id = ANY($1)")
            .bind(job_ids)
            .fetch_all(&mut *conn)
            .await?;
    purge_applications(&mut *conn, &application_ids).await?;

    for statement in [
        "DELETE FROM job_skill_requirements WHERE job_id = ANY($1)",
        "DELETE FROM job_bookmarks WHERE job_id = ANY($1)",
        "DELETE FROM job_views WHERE job_id = ANY($1)",
        "DELETE FROM job_reports WHERE job_id = ANY($1)",
    ] {
        sqlx::query(statement)
            .bind(job_ids)
            .execute(&mut *conn)
            .await?;
    }

    let result = sqlx::query("DELETE FROM jobs WHERE id = ANY($1)")
        .bind(job_ids)
        .execute(&mut *conn)
        .await?;
    tracing::debug!(jobs = result.rows_affected(), "Purged jobs");
    Ok(result.rows_affected())
}
