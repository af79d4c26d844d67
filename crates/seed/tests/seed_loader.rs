//! End-to-end runs of the fixture loader against a migrated database.

use argon2::password_hash::{PasswordHash, PasswordVerifier};
use argon2::Argon2;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sqlx::PgPool;
use workbridge_core::accounts::{CompanySize, UserRole};
use workbridge_core::applications::ApplicationStatus;
use workbridge_core::experience::ExperienceLevel;
use workbridge_core::jobs::{JobStatus, SalaryType};
use workbridge_core::skills::{ProficiencyLevel, RequirementLevel};
use workbridge_db::classify::is_unique_violation;
use workbridge_db::models::application::CreateJobApplication;
use workbridge_db::repositories::{
    JobApplicationRepo, JobCategoryRepo, JobPosterProfileRepo, JobRepo, JobSeekerProfileRepo,
    JobSeekerSkillRepo, JobSkillRequirementRepo, UserRepo,
};
use workbridge_seed::config::DEFAULT_DEMO_PASSWORD;
use workbridge_seed::fixtures::{self, FixtureSet, JobFixture};
use workbridge_seed::loader::{Loader, RowCounts, SeedSummary};
use workbridge_seed::sampling::SAMPLED_STATUSES;

async fn seed(pool: &PgPool, seed: u64) -> (SeedSummary, String) {
    let mut loader = Loader::new(
        pool,
        StdRng::seed_from_u64(seed),
        Vec::new(),
        DEFAULT_DEMO_PASSWORD,
    );
    let summary = loader.run().await.unwrap();
    let output = String::from_utf8(loader.into_output()).unwrap();
    (summary, output)
}

// ---------------------------------------------------------------------------
// Whole run
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seed_populates_fixture_counts(pool: PgPool) {
    let (summary, output) = seed(&pool, 7).await;

    let totals = summary.totals;
    assert_eq!(totals.categories, 8);
    assert_eq!(totals.skills, 37);
    assert_eq!(totals.seekers, 8);
    assert_eq!(totals.employers, 5);
    assert_eq!(totals.jobs, 10);
    assert!(
        (10..=15).contains(&totals.applications),
        "5 seekers x 2-3 jobs, got {}",
        totals.applications
    );
    assert_eq!(summary.created, totals);
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 13);

    assert!(output.starts_with("Starting to populate sample data..."));
    assert!(output.contains("  + Created category: Construction"));
    assert!(output.contains("  + Created job seeker: Rajesh Kumar"));
    assert!(output.contains("  + Created employer: Construction Plus Pvt Ltd"));
    assert!(output.contains("Database Summary:"));
    assert!(output.contains("  - Job Categories: 8"));
    assert!(output.trim_end().ends_with("Sample data population completed!"));
    assert!(!output.contains("Failed to create"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rerun_adds_no_fixture_rows(pool: PgPool) {
    let (first, _) = seed(&pool, 7).await;
    let (second, output) = seed(&pool, 8).await;

    let created = second.created;
    assert_eq!(
        RowCounts {
            applications: 0,
            ..created
        },
        RowCounts::default()
    );
    assert_eq!(second.totals.categories, first.totals.categories);
    assert_eq!(second.totals.skills, first.totals.skills);
    assert_eq!(second.totals.seekers, first.totals.seekers);
    assert_eq!(second.totals.employers, first.totals.employers);
    assert_eq!(second.totals.jobs, first.totals.jobs);
    assert_eq!(
        second.totals.applications,
        first.totals.applications + created.applications
    );
    assert!(!output.contains("  + Created category"));
    assert!(!output.contains("  + Created job:"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_references_are_skipped(pool: PgPool) {
    let mut jobs = fixtures::JOBS.to_vec();
    jobs.insert(
        1,
        JobFixture {
            title: "Night Watchman",
            category: "Nonexistent Category",
            ..fixtures::JOBS[0]
        },
    );
    jobs.push(JobFixture {
        title: "Crane Operator",
        skills: &["Crane Operation", "Welding"],
        ..fixtures::JOBS[0]
    });
    let with_orphan = FixtureSet {
        jobs: Box::leak(jobs.into_boxed_slice()),
        ..FixtureSet::BUILTIN
    };

    let mut loader = Loader::new(
        &pool,
        StdRng::seed_from_u64(11),
        Vec::new(),
        DEFAULT_DEMO_PASSWORD,
    )
    .with_fixtures(with_orphan);
    let summary = loader.run().await.unwrap();
    let output = String::from_utf8(loader.into_output()).unwrap();

    assert!(output.contains("  x Failed to create job: Night Watchman"));
    assert!(output.contains("  + Created job: Delivery Driver - Two Wheeler"));
    assert!(output.contains("  + Created job: Crane Operator"));
    assert!(output.trim_end().ends_with("Sample data population completed!"));
    assert_eq!(summary.totals.jobs, 11);

    let employer = UserRepo::find_by_email(&pool, fixtures::JOBS[0].company_email)
        .await
        .unwrap()
        .unwrap();
    let company = JobPosterProfileRepo::find_by_user(&pool, employer.id)
        .await
        .unwrap()
        .unwrap();
    let orphan = JobRepo::find_by_company_and_title(&pool, company.id, "Night Watchman")
        .await
        .unwrap();
    assert!(orphan.is_none());

    // The unknown skill is dropped; the known one is still required.
    let crane = JobRepo::find_by_company_and_title(&pool, company.id, "Crane Operator")
        .await
        .unwrap()
        .unwrap();
    let requirements = JobSkillRequirementRepo::list_for_job(&pool, crane.id)
        .await
        .unwrap();
    assert_eq!(requirements.len(), 1);
}

// ---------------------------------------------------------------------------
// Seeded records
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_seeker(pool: PgPool) {
    seed(&pool, 7).await;

    let user = UserRepo::find_by_email(&pool, "rajesh.kumar@email.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.role, UserRole::JobSeeker);
    assert_eq!(user.username, "rajesh.kumar@email.com");
    assert!(user.is_verified);
    assert_eq!(user.phone_number.as_deref(), Some("+91-9876543210"));

    let parsed = PasswordHash::new(&user.password_hash).unwrap();
    assert!(Argon2::default()
        .verify_password(DEFAULT_DEMO_PASSWORD.as_bytes(), &parsed)
        .is_ok());

    let profile = JobSeekerProfileRepo::find_by_user(&pool, user.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(profile.experience_level, ExperienceLevel::Senior);
    assert_eq!(profile.location.as_deref(), Some("Mumbai, Maharashtra"));
    assert_eq!(
        profile.bio.as_deref(),
        Some("Experienced Rajesh with 5 years in the field.")
    );
    assert!(profile.availability);
    let (min, max) = (
        profile.expected_salary_min.unwrap(),
        profile.expected_salary_max.unwrap(),
    );
    assert!(min <= max);
    assert_eq!(profile.pincode.map(|p| p.len()), Some(6));

    let skills = JobSeekerSkillRepo::list_for_seeker(&pool, profile.id)
        .await
        .unwrap();
    assert_eq!(skills.len(), 3);
    for skill in &skills {
        assert_eq!(skill.proficiency_level, ProficiencyLevel::Intermediate);
        assert!((1..=5).contains(&skill.years_of_experience));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeded_employer_and_job(pool: PgPool) {
    seed(&pool, 7).await;

    let poster = UserRepo::find_by_email(&pool, "hr@constructionplus.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(poster.role, UserRole::JobPoster);
    let company = JobPosterProfileRepo::find_by_user(&pool, poster.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(company.company_name, "Construction Plus Pvt Ltd");
    assert_eq!(company.company_size, Some(CompanySize::Medium));
    assert_eq!(company.website.as_deref(), Some("https://www.constructionplus.com"));
    assert!(company.is_company_verified);

    let job = JobRepo::find_by_company_and_title(
        &pool,
        company.id,
        "Construction Worker - Residential Projects",
    )
    .await
    .unwrap()
    .unwrap();
    let category = JobCategoryRepo::find_by_id(&pool, job.category_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(category.name, "Construction");
    assert_eq!(job.posted_by, poster.id);
    assert_eq!((job.salary_min, job.salary_max), (Some(25_000), Some(35_000)));
    assert_eq!(job.salary_type, SalaryType::Monthly);
    assert_eq!(job.status, JobStatus::Active);
    assert_eq!(job.experience_level, ExperienceLevel::Mid);
    assert_eq!((job.city.as_str(), job.state.as_str()), ("Mumbai", "Maharashtra"));
    assert!(job.published_at.is_some());

    let deadline = job.application_deadline.unwrap();
    let expected = Utc::now() + Duration::days(30);
    assert!((expected - deadline).num_minutes().abs() < 5);

    let requirements = JobSkillRequirementRepo::list_for_job(&pool, job.id)
        .await
        .unwrap();
    assert_eq!(requirements.len(), 3);
    assert!(requirements
        .iter()
        .all(|r| r.requirement_level == RequirementLevel::Required));
}

// ---------------------------------------------------------------------------
// Sampled applications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sampled_applications(pool: PgPool) {
    seed(&pool, 21).await;

    let seekers = JobSeekerProfileRepo::list_first(&pool, 5).await.unwrap();
    let recent: Vec<i64> = JobRepo::list_recent(&pool, Some(8))
        .await
        .unwrap()
        .iter()
        .map(|j| j.id)
        .collect();

    let mut total = 0;
    for seeker in &seekers {
        let applications = JobApplicationRepo::list_for_applicant(&pool, seeker.user_id)
            .await
            .unwrap();
        assert!((2..=3).contains(&applications.len()));
        total += applications.len() as i64;

        for application in &applications {
            assert!(recent.contains(&application.job_id));
            assert!(SAMPLED_STATUSES.contains(&application.status));
            assert!(application
                .cover_letter
                .as_deref()
                .is_some_and(|c| c.starts_with("Dear Hiring Manager")));

            let age = Utc::now() - application.applied_at;
            assert!(age >= Duration::days(1) - Duration::minutes(5));
            assert!(age <= Duration::days(15) + Duration::minutes(5));

            let job = JobRepo::find_by_id(&pool, application.job_id)
                .await
                .unwrap()
                .unwrap();
            let history = JobApplicationRepo::history_for(&pool, application.id)
                .await
                .unwrap();
            if application.status == ApplicationStatus::Pending {
                assert!(history.is_empty());
            } else {
                assert_eq!(history.len(), 1);
                assert_eq!(history[0].previous_status, ApplicationStatus::Pending);
                assert_eq!(history[0].new_status, application.status);
                assert_eq!(history[0].changed_by, job.posted_by);
            }
        }
    }
    assert_eq!(JobApplicationRepo::count(&pool).await.unwrap(), total);

    let counted: i64 = JobRepo::list_recent(&pool, None)
        .await
        .unwrap()
        .iter()
        .map(|j| i64::from(j.applications_count))
        .sum();
    assert_eq!(counted, total);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_application_rejected_after_seed(pool: PgPool) {
    seed(&pool, 7).await;

    let seeker = JobSeekerProfileRepo::list_first(&pool, 1)
        .await
        .unwrap()
        .remove(0);
    let existing = JobApplicationRepo::list_for_applicant(&pool, seeker.user_id)
        .await
        .unwrap()
        .remove(0);
    let before = JobRepo::find_by_id(&pool, existing.job_id)
        .await
        .unwrap()
        .unwrap()
        .applications_count;

    let err = JobApplicationRepo::create(
        &pool,
        &CreateJobApplication {
            job_id: existing.job_id,
            applicant_id: seeker.user_id,
            job_seeker_profile_id: seeker.id,
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(is_unique_violation(&err));

    let after = JobRepo::find_by_id(&pool, existing.job_id)
        .await
        .unwrap()
        .unwrap()
        .applications_count;
    assert_eq!(before, after);
}
