//! Skill catalogue and seeker-skill association models.

use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::skills::{ProficiencyLevel, SkillCategory};
use workbridge_core::types::{DbId, Timestamp};

/// A row from the `skills` table. `name` is the natural key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: SkillCategory,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a skill.
#[derive(Debug, Clone)]
pub struct CreateSkill {
    pub name: String,
    pub category: SkillCategory,
    pub description: Option<String>,
    /// Defaults to `true`.
    pub is_active: Option<bool>,
}

/// A row from the `job_seeker_skills` table. Unique per (seeker, skill).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobSeekerSkill {
    pub id: DbId,
    pub job_seeker_id: DbId,
    pub skill_id: DbId,
    pub proficiency_level: ProficiencyLevel,
    pub years_of_experience: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a skill to a seeker profile.
#[derive(Debug, Clone)]
pub struct CreateJobSeekerSkill {
    pub job_seeker_id: DbId,
    pub skill_id: DbId,
    pub proficiency_level: ProficiencyLevel,
    pub years_of_experience: i32,
}
