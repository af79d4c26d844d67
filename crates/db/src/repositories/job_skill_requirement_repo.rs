//! Repository for the `job_skill_requirements` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;

use crate::models::job::{CreateJobSkillRequirement, JobSkillRequirement};

const COLUMNS: &str = "id, job_id, skill_id, requirement_level, min_experience_years, \
                       created_at, updated_at";

/// Provides operations for the skills a job asks for.
pub struct JobSkillRequirementRepo;

impl JobSkillRequirementRepo {
    /// Attach a requirement to a job, or return the existing one unchanged.
    ///
    /// The boolean is `true` when a new row was inserted.
    pub async fn create_or_get(
        pool: &PgPool,
        input: &CreateJobSkillRequirement,
    ) -> Result<(JobSkillRequirement, bool), sqlx::Error> {
        let query = format!(
            "INSERT INTO job_skill_requirements
                (job_id, skill_id, requirement_level, min_experience_years)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (job_id, skill_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, JobSkillRequirement>(&query)
            .bind(input.job_id)
            .bind(input.skill_id)
            .bind(input.requirement_level)
            .bind(input.min_experience_years)
            .fetch_optional(pool)
            .await?;
        if let Some(row) = inserted {
            return Ok((row, true));
        }

        let query = format!(
            "SELECT {COLUMNS} FROM job_skill_requirements WHERE job_id = $1 AND skill_id = $2"
        );
        let existing = sqlx::query_as::<_, JobSkillRequirement>(&query)
            .bind(input.job_id)
            .bind(input.skill_id)
            .fetch_one(pool)
            .await?;
        Ok((existing, false))
    }

    /// Requirements for a job, in the order they were added.
    pub async fn list_for_job(
        pool: &PgPool,
        job_id: DbId,
    ) -> Result<Vec<JobSkillRequirement>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM job_skill_requirements WHERE job_id = $1 ORDER BY id");
        sqlx::query_as::<_, JobSkillRequirement>(&query)
            .bind(job_id)
            .fetch_all(pool)
            .await
    }
}
