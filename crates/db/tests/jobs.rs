//! Categories, skills, jobs and job interactions.

mod common;

use assert_matches::assert_matches;
use sqlx::PgPool;
use workbridge_core::accounts::UserRole;
use workbridge_core::error::CoreError;
use workbridge_core::jobs::{JobStatus, ReportReason, ReportStatus};
use workbridge_core::skills::{RequirementLevel, SkillCategory};
use workbridge_core::validation::parse_ip_address;
use workbridge_db::classify::{
    classify_db_error, is_foreign_key_violation, is_unique_violation,
};
use workbridge_db::models::category::CreateJobCategory;
use workbridge_db::models::interaction::{
    CreateJobAlert, CreateJobReport, CreateJobView, ReviewJobReport,
};
use workbridge_db::models::job::{CreateJobSkillRequirement, UpdateJob};
use workbridge_db::models::skill::CreateSkill;
use workbridge_db::repositories::{
    JobAlertRepo, JobBookmarkRepo, JobCategoryRepo, JobReportRepo, JobRepo,
    JobSkillRequirementRepo, JobViewRepo, SkillRepo,
};

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_create_or_get(pool: PgPool) {
    let defaults = |name: &str| CreateJobCategory {
        name: name.to_string(),
        description: Some("Building work".to_string()),
        icon: Some("construction".to_string()),
        is_active: None,
    };

    let (first, created) = JobCategoryRepo::create_or_get(&pool, "Construction", defaults)
        .await
        .unwrap();
    assert!(created);
    assert!(first.is_active);

    let (second, created) = JobCategoryRepo::create_or_get(&pool, "Construction", defaults)
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(first.id, second.id);
    assert_eq!(JobCategoryRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inactive_categories_hidden(pool: PgPool) {
    common::category(&pool, "Retail").await;
    JobCategoryRepo::create(
        &pool,
        &CreateJobCategory {
            name: "Archived".to_string(),
            description: None,
            icon: None,
            is_active: Some(false),
        },
    )
    .await
    .unwrap();

    let active = JobCategoryRepo::list_active(&pool).await.unwrap();
    let names: Vec<&str> = active.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Retail"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_name_unique(pool: PgPool) {
    common::skill(&pool, "Plumbing").await;

    let err = SkillRepo::create(
        &pool,
        &CreateSkill {
            name: "Plumbing".to_string(),
            category: SkillCategory::Maintenance,
            description: None,
            is_active: None,
        },
    )
    .await
    .unwrap_err();
    assert_matches!(
        classify_db_error(&err),
        Some(CoreError::Conflict(msg)) if msg.contains("uq_skills_name")
    );

    let found = SkillRepo::find_by_name(&pool, "Plumbing")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.category, SkillCategory::Construction);
    let by_category = SkillRepo::list_by_category(&pool, SkillCategory::Construction)
        .await
        .unwrap();
    assert_eq!(by_category.len(), 1);
}

// ---------------------------------------------------------------------------
// Publication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_active_job_stamped_on_create(pool: PgPool) {
    let (_poster, job) = common::posted_job(&pool, "Mason", JobStatus::Active).await;

    assert!(job.published_at.is_some());
    assert_eq!(job.views_count, 0);
    assert_eq!(job.applications_count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_draft_stamped_on_first_activation_only(pool: PgPool) {
    let (_poster, job) = common::posted_job(&pool, "Painter", JobStatus::Draft).await;
    assert!(job.published_at.is_none());

    let active = JobRepo::update(
        &pool,
        job.id,
        &UpdateJob {
            status: Some(JobStatus::Active),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    let stamp = active.published_at.expect("stamped on activation");

    JobRepo::set_status(&pool, job.id, JobStatus::Paused)
        .await
        .unwrap();
    let reactivated = JobRepo::set_status(&pool, job.id, JobStatus::Active)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reactivated.published_at, Some(stamp));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_without_status_keeps_draft_unpublished(pool: PgPool) {
    let (_poster, job) = common::posted_job(&pool, "Roofer", JobStatus::Draft).await;

    let updated = JobRepo::update(
        &pool,
        job.id,
        &UpdateJob {
            title: Some("Senior Roofer".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "Senior Roofer");
    assert_eq!(updated.status, JobStatus::Draft);
    assert!(updated.published_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inverted_salary_range_rejected(pool: PgPool) {
    let (poster, company) = common::employer(&pool, "hr@salary.test", "Salary Co").await;
    let category = common::category(&pool, "Retail").await;
    let mut input = common::new_job(&poster, &company, category.id, "Cashier", JobStatus::Active);
    input.salary_min = Some(40_000);
    input.salary_max = Some(20_000);

    let err = JobRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(
        classify_db_error(&err),
        Some(CoreError::Validation(msg)) if msg.contains("ck_jobs")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_category_is_not_found(pool: PgPool) {
    let (poster, company) = common::employer(&pool, "hr@orphan.test", "Orphan Co").await;
    let input = common::new_job(&poster, &company, 9_999, "Stocker", JobStatus::Draft);

    let err = JobRepo::create(&pool, &input).await.unwrap_err();
    assert!(is_foreign_key_violation(&err));
    assert_matches!(
        classify_db_error(&err),
        Some(CoreError::NotFound { key, .. }) if key == "fk_jobs_category"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_in_use_cannot_be_deleted(pool: PgPool) {
    let (_, job) = common::posted_job(&pool, "Mason", JobStatus::Active).await;

    let err = sqlx::query("DELETE FROM job_categories WHERE id = $1")
        .bind(job.category_id)
        .execute(&pool)
        .await
        .unwrap_err();
    assert_matches!(
        classify_db_error(&err),
        Some(CoreError::Conflict(msg)) if msg.contains("fk_jobs_category")
    );
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_job_create_or_get_by_company_and_title(pool: PgPool) {
    let (poster, company) = common::employer(&pool, "hr@dup.test", "Dup Co").await;
    let category = common::category(&pool, "Security").await;

    let build = |_: i64, title: &str| {
        common::new_job(&poster, &company, category.id, title, JobStatus::Active)
    };
    let (first, created) = JobRepo::create_or_get(&pool, company.id, "Guard", build)
        .await
        .unwrap();
    assert!(created);

    let (second, created) = JobRepo::create_or_get(&pool, company.id, "Guard", build)
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(first.id, second.id);
    assert_eq!(
        JobRepo::list_for_company(&pool, company.id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_recent_newest_first_with_limit(pool: PgPool) {
    let (poster, company) = common::employer(&pool, "hr@recent.test", "Recent Co").await;
    let category = common::category(&pool, "Retail").await;

    let mut ids = Vec::new();
    for n in 0..4 {
        let title = format!("Job {n}");
        let input = common::new_job(&poster, &company, category.id, &title, JobStatus::Active);
        let job = JobRepo::create(&pool, &input).await.unwrap();
        ids.push(job.id);
    }

    let recent = JobRepo::list_recent(&pool, Some(3)).await.unwrap();
    let recent_ids: Vec<i64> = recent.iter().map(|j| j.id).collect();
    assert_eq!(recent_ids, vec![ids[3], ids[2], ids[1]]);

    assert_eq!(JobRepo::list_recent(&pool, None).await.unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_skill_requirement_pair_unique(pool: PgPool) {
    let (_poster, job) = common::posted_job(&pool, "Welder", JobStatus::Active).await;
    let welding = common::skill(&pool, "Welding").await;

    let input = CreateJobSkillRequirement {
        job_id: job.id,
        skill_id: welding.id,
        requirement_level: RequirementLevel::Required,
        min_experience_years: 2,
    };
    let (_, created) = JobSkillRequirementRepo::create_or_get(&pool, &input)
        .await
        .unwrap();
    assert!(created);
    let (existing, created) = JobSkillRequirementRepo::create_or_get(&pool, &input)
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(existing.min_experience_years, 2);

    let listed = JobSkillRequirementRepo::list_for_job(&pool, job.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
}

// ---------------------------------------------------------------------------
// Interactions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bookmark_once_per_user(pool: PgPool) {
    let (_poster, job) = common::posted_job(&pool, "Driver", JobStatus::Active).await;
    let reader = common::user(&pool, "reader@example.com", UserRole::JobSeeker).await;

    let (first, created) = JobBookmarkRepo::add(&pool, reader.id, job.id)
        .await
        .unwrap();
    assert!(created);
    let (second, created) = JobBookmarkRepo::add(&pool, reader.id, job.id)
        .await
        .unwrap();
    assert!(!created);
    assert_eq!(first.id, second.id);

    assert_eq!(
        JobBookmarkRepo::list_for_user(&pool, reader.id)
            .await
            .unwrap()
            .len(),
        1
    );
    assert!(JobBookmarkRepo::remove(&pool, reader.id, job.id)
        .await
        .unwrap());
    assert!(!JobBookmarkRepo::remove(&pool, reader.id, job.id)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_views_increment_counter(pool: PgPool) {
    let (_poster, job) = common::posted_job(&pool, "Cook", JobStatus::Active).await;
    let visitor = common::user(&pool, "visitor@example.com", UserRole::JobSeeker).await;

    for (user_id, ip) in [(Some(visitor.id), "203.0.113.7"), (None, "2001:db8::1")] {
        JobViewRepo::record(
            &pool,
            &CreateJobView {
                job_id: job.id,
                user_id,
                ip_address: parse_ip_address(ip).unwrap(),
                user_agent: None,
            },
        )
        .await
        .unwrap();
    }

    assert_eq!(JobViewRepo::count_for_job(&pool, job.id).await.unwrap(), 2);
    let job = JobRepo::find_by_id(&pool, job.id).await.unwrap().unwrap();
    assert_eq!(job.views_count, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_increment_views_follows_transaction(pool: PgPool) {
    let (_poster, job) = common::posted_job(&pool, "Baker", JobStatus::Active).await;

    let mut conn = pool.acquire().await.unwrap();
    JobRepo::increment_views(&mut conn, job.id).await.unwrap();
    drop(conn);

    let mut tx = pool.begin().await.unwrap();
    JobRepo::increment_views(&mut tx, job.id).await.unwrap();
    tx.rollback().await.unwrap();

    let job = JobRepo::find_by_id(&pool, job.id).await.unwrap().unwrap();
    assert_eq!(job.views_count, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_alert_lifecycle(pool: PgPool) {
    let seeker = common::user(&pool, "alerts@example.com", UserRole::JobSeeker).await;

    let alert = JobAlertRepo::create(
        &pool,
        &CreateJobAlert {
            user_id: seeker.id,
            title: "Welding near Pune".to_string(),
            keywords: Some("welding".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(alert.is_active);
    assert!(alert.last_sent.is_none());

    let sent = JobAlertRepo::mark_sent(&pool, alert.id)
        .await
        .unwrap()
        .unwrap();
    assert!(sent.last_sent.is_some());

    assert!(JobAlertRepo::deactivate(&pool, alert.id).await.unwrap());
    assert!(!JobAlertRepo::deactivate(&pool, alert.id).await.unwrap());
    let active = JobAlertRepo::list_active_for_user(&pool, seeker.id)
        .await
        .unwrap();
    assert!(active.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_once_then_review(pool: PgPool) {
    let (_poster, job) = common::posted_job(&pool, "Guard", JobStatus::Active).await;
    let reporter = common::user(&pool, "reporter@example.com", UserRole::JobSeeker).await;
    let admin = common::user(&pool, "mod@example.com", UserRole::Admin).await;

    let input = CreateJobReport {
        job_id: job.id,
        reported_by: reporter.id,
        reason: ReportReason::Fake,
        description: Some("Asks for a deposit".to_string()),
    };
    let report = JobReportRepo::create(&pool, &input).await.unwrap();
    assert_eq!(report.status, ReportStatus::Pending);

    let err = JobReportRepo::create(&pool, &input).await.unwrap_err();
    assert!(is_unique_violation(&err));

    let reviewed = JobReportRepo::review(
        &pool,
        report.id,
        &ReviewJobReport {
            status: ReportStatus::Resolved,
            reviewed_by: admin.id,
            admin_notes: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(reviewed.status, ReportStatus::Resolved);
    assert_eq!(reviewed.reviewed_by, Some(admin.id));
    assert!(JobReportRepo::list_pending(&pool).await.unwrap().is_empty());
}
