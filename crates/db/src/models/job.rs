//! Job posting and skill requirement models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::experience::ExperienceLevel;
use workbridge_core::jobs::{JobStatus, JobType, SalaryType};
use workbridge_core::skills::RequirementLevel;
use workbridge_core::types::{Amount, DbId, Timestamp};

/// A row from the `jobs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub posted_by: DbId,
    pub company_id: DbId,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub location: String,
    pub city: String,
    pub state: String,
    pub pincode: Option<String>,
    pub is_remote: bool,
    pub salary_min: Option<Amount>,
    pub salary_max: Option<Amount>,
    pub salary_type: SalaryType,
    pub salary_negotiable: bool,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub application_deadline: Option<Timestamp>,
    pub max_applications: Option<i32>,
    pub status: JobStatus,
    pub is_featured: bool,
    pub views_count: i32,
    pub applications_count: i32,
    /// Set the first time the job is saved as `active`; never moved afterwards.
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a job posting.
#[derive(Debug, Clone, Default)]
pub struct CreateJob {
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub posted_by: DbId,
    pub company_id: DbId,
    pub job_type: JobType,
    pub experience_level: ExperienceLevel,
    pub location: String,
    pub city: String,
    pub state: String,
    pub pincode: Option<String>,
    pub is_remote: bool,
    pub salary_min: Option<Amount>,
    pub salary_max: Option<Amount>,
    pub salary_type: SalaryType,
    pub salary_negotiable: bool,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub application_deadline: Option<Timestamp>,
    pub max_applications: Option<i32>,
    pub status: JobStatus,
    pub is_featured: bool,
}

/// DTO for updating a job posting. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateJob {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<DbId>,
    pub job_type: Option<JobType>,
    pub experience_level: Option<ExperienceLevel>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub is_remote: Option<bool>,
    pub salary_min: Option<Amount>,
    pub salary_max: Option<Amount>,
    pub salary_type: Option<SalaryType>,
    pub salary_negotiable: Option<bool>,
    pub requirements: Option<String>,
    pub benefits: Option<String>,
    pub application_deadline: Option<Timestamp>,
    pub max_applications: Option<i32>,
    pub status: Option<JobStatus>,
    pub is_featured: Option<bool>,
}

/// A row from the `job_skill_requirements` table. Unique per (job, skill).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobSkillRequirement {
    pub id: DbId,
    pub job_id: DbId,
    pub skill_id: DbId,
    pub requirement_level: RequirementLevel,
    pub min_experience_years: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for attaching a skill requirement to a job.
#[derive(Debug, Clone)]
pub struct CreateJobSkillRequirement {
    pub job_id: DbId,
    pub skill_id: DbId,
    pub requirement_level: RequirementLevel,
    pub min_experience_years: i32,
}
