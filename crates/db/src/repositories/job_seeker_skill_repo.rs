//! Repository for the `job_seeker_skills` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;

use crate::models::skill::{CreateJobSeekerSkill, JobSeekerSkill};

const COLUMNS: &str = "id, job_seeker_id, skill_id, proficiency_level, years_of_experience, \
                       created_at, updated_at";

/// Provides operations for the skills listed on a seeker profile.
pub struct JobSeekerSkillRepo;

impl JobSeekerSkillRepo {
    /// Attach a skill to a profile, or return the existing pairing unchanged.
    ///
    /// The boolean is `true` when a new row was inserted.
    pub async fn create_or_get(
        pool: &PgPool,
        input: &CreateJobSeekerSkill,
    ) -> Result<(JobSeekerSkill, bool), sqlx::Error> {
        let query = format!(
            "INSERT INTO job_seeker_skills
                (job_seeker_id, skill_id, proficiency_level, years_of_experience)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (job_seeker_id, skill_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, JobSeekerSkill>(&query)
            .bind(input.job_seeker_id)
            .bind(input.skill_id)
            .bind(input.proficiency_level)
            .bind(input.years_of_experience)
            .fetch_optional(pool)
            .await?;
        if let Some(row) = inserted {
            return Ok((row, true));
        }

        let query = format!(
            "SELECT {COLUMNS} FROM job_seeker_skills WHERE job_seeker_id = $1 AND skill_id = $2"
        );
        let existing = sqlx::query_as::<_, JobSeekerSkill>(&query)
            .bind(input.job_seeker_id)
            .bind(input.skill_id)
            .fetch_one(pool)
            .await?;
        Ok((existing, false))
    }

    /// Skills on a profile, in the order they were added.
    pub async fn list_for_seeker(
        pool: &PgPool,
        job_seeker_id: DbId,
    ) -> Result<Vec<JobSeekerSkill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM job_seeker_skills WHERE job_seeker_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, JobSeekerSkill>(&query)
            .bind(job_seeker_id)
            .fetch_all(pool)
            .await
    }

    /// Remove a skill from a profile. Returns `true` if a row was deleted.
    pub async fn remove(
        pool: &PgPool,
        job_seeker_id: DbId,
        skill_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM job_seeker_skills WHERE job_seeker_id = $1 AND skill_id = $2")
                .bind(job_seeker_id)
                .bind(skill_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
