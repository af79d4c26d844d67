//! Fixture builders shared by the repository integration tests.

#![allow(dead_code)]

use sqlx::PgPool;
use workbridge_core::accounts::UserRole;
use workbridge_core::jobs::JobStatus;
use workbridge_core::skills::SkillCategory;
use workbridge_db::models::application::{CreateJobApplication, JobApplication};
use workbridge_db::models::category::{CreateJobCategory, JobCategory};
use workbridge_db::models::job::{CreateJob, Job};
use workbridge_db::models::profile::{
    CreateJobPosterProfile, CreateJobSeekerProfile, JobPosterProfile, JobSeekerProfile,
};
use workbridge_db::models::skill::{CreateSkill, Skill};
use workbridge_db::models::user::{CreateUser, User};
use workbridge_db::repositories::{
    JobApplicationRepo, JobCategoryRepo, JobPosterProfileRepo, JobRepo, JobSeekerProfileRepo,
    SkillRepo, UserRepo,
};

pub fn new_user(email: &str, role: UserRole) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        username: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password_hash: "not-a-real-hash".to_string(),
        role,
        phone_number: None,
        is_verified: None,
    }
}

pub async fn user(pool: &PgPool, email: &str, role: UserRole) -> User {
    UserRepo::create(pool, &new_user(email, role))
        .await
        .unwrap()
}

pub async fn seeker(pool: &PgPool, email: &str) -> (User, JobSeekerProfile) {
    let user = user(pool, email, UserRole::JobSeeker).await;
    let profile = JobSeekerProfileRepo::create(
        pool,
        &CreateJobSeekerProfile {
            user_id: user.id,
            ..Default::default()
        },
    )
    .await
    .unwrap();
    (user, profile)
}

pub async fn employer(pool: &PgPool, email: &str, company: &str) -> (User, JobPosterProfile) {
    let user = user(pool, email, UserRole::JobPoster).await;
    let profile = JobPosterProfileRepo::create(
        pool,
        &CreateJobPosterProfile {
            user_id: user.id,
            company_name: company.to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    (user, profile)
}

pub async fn category(pool: &PgPool, name: &str) -> JobCategory {
    JobCategoryRepo::create(
        pool,
        &CreateJobCategory {
            name: name.to_string(),
            description: None,
            icon: None,
            is_active: None,
        },
    )
    .await
    .unwrap()
}

pub async fn skill(pool: &PgPool, name: &str) -> Skill {
    SkillRepo::create(
        pool,
        &CreateSkill {
            name: name.to_string(),
            category: SkillCategory::Construction,
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap()
}

pub fn new_job(
    poster: &User,
    company: &JobPosterProfile,
    category_id: i64,
    title: &str,
    status: JobStatus,
) -> CreateJob {
    CreateJob {
        title: title.to_string(),
        description: "Test job".to_string(),
        category_id,
        posted_by: poster.id,
        company_id: company.id,
        location: "Mumbai, Maharashtra".to_string(),
        city: "Mumbai".to_string(),
        state: "Maharashtra".to_string(),
        salary_min: Some(25_000),
        salary_max: Some(35_000),
        status,
        ..Default::default()
    }
}

/// An employer with one job in its own category.
pub async fn posted_job(pool: &PgPool, title: &str, status: JobStatus) -> (User, Job) {
    let (poster, company) = employer(pool, "hr@builders.test", "Test Builders").await;
    let category = category(pool, "Construction").await;
    let input = new_job(&poster, &company, category.id, title, status);
    let job = JobRepo::create(pool, &input).await.unwrap();
    (poster, job)
}

pub fn new_application(
    job: &Job,
    applicant: &User,
    profile: &JobSeekerProfile,
) -> CreateJobApplication {
    CreateJobApplication {
        job_id: job.id,
        applicant_id: applicant.id,
        job_seeker_profile_id: profile.id,
        cover_letter: Some("Please consider me.".to_string()),
        ..Default::default()
    }
}

pub async fn apply(pool: &PgPool, job: &Job, email: &str) -> (User, JobApplication) {
    let (applicant, profile) = seeker(pool, email).await;
    let application = JobApplicationRepo::create(pool, &new_application(job, &applicant, &profile))
        .await
        .unwrap();
    (applicant, application)
}

pub async fn applications_count(pool: &PgPool, job_id: i64) -> i32 {
    JobRepo::find_by_id(pool, job_id)
        .await
        .unwrap()
        .unwrap()
        .applications_count
}
