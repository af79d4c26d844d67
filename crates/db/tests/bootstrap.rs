mod common;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use workbridge_core::applications::ApplicationStatus;
use workbridge_core::jobs::JobStatus;
use workbridge_db::models::application::ChangeApplicationStatus;
use workbridge_db::repositories::JobApplicationRepo;

const TABLES: [&str; 20] = [
    "users",
    "verification_documents",
    "job_seeker_profiles",
    "job_poster_profiles",
    "skills",
    "job_seeker_skills",
    "job_categories",
    "jobs",
    "job_skill_requirements",
    "job_bookmarks",
    "job_views",
    "job_alerts",
    "job_reports",
    "job_applications",
    "application_status_history",
    "interviews",
    "interview_interviewers",
    "application_messages",
    "job_offers",
    "application_feedback",
];

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    workbridge_db::health_check(&pool).await.unwrap();

    for table in TABLES {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Audit tables that reject UPDATE instead of refreshing `updated_at`.
const APPEND_ONLY_TABLES: [&str; 1] = ["application_status_history"];

async fn has_trigger(pool: &PgPool, table: &str, trigger: &str) -> bool {
    let (exists,): (bool,) = sqlx::query_as(
        "SELECT EXISTS (
            SELECT 1 FROM information_schema.triggers
            WHERE event_object_table = $1
              AND trigger_name = $2
        )",
    )
    .bind(table)
    .bind(trigger)
    .fetch_one(pool)
    .await
    .unwrap();
    exists
}

/// Every mutable table has a trigger that refreshes `updated_at`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_triggers_installed(pool: PgPool) {
    for table in TABLES
        .into_iter()
        .filter(|t| !APPEND_ONLY_TABLES.contains(t))
    {
        assert!(
            has_trigger(&pool, table, &format!("trg_{table}_updated_at")).await,
            "{table} is missing its updated_at trigger"
        );
    }
}

/// Status history rows can be inserted and deleted but never rewritten.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_history_is_append_only(pool: PgPool) {
    for table in APPEND_ONLY_TABLES {
        assert!(
            has_trigger(&pool, table, &format!("trg_{table}_append_only")).await,
            "{table} is missing its append-only trigger"
        );
    }

    let (_, job) = common::posted_job(&pool, "Plasterer", JobStatus::Active).await;
    let (_, application) = common::apply(&pool, &job, "plaster@example.com").await;
    let change = ChangeApplicationStatus {
        new_status: ApplicationStatus::UnderReview,
        changed_by: job.posted_by,
        notes: None,
    };
    JobApplicationRepo::change_status(&pool, application.id, &change)
        .await
        .unwrap()
        .unwrap();

    let err = sqlx::query("UPDATE application_status_history SET notes = 'edited'")
        .execute(&pool)
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert!(db_err.message().contains("append-only"));

    let (notes,): (Option<String>,) =
        sqlx::query_as("SELECT notes FROM application_status_history WHERE application_id = $1")
            .bind(application.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(notes, None);
}

/// Updating a row moves `updated_at` forward.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_updated_at_refreshes_on_update(pool: PgPool) {
    let (id, created, updated): (i64, DateTime<Utc>, DateTime<Utc>) = sqlx::query_as(
        "INSERT INTO job_categories (name, created_at, updated_at)
         VALUES ('Retail', NOW() - INTERVAL '1 day', NOW() - INTERVAL '1 day')
         RETURNING id, created_at, updated_at",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(created, updated);

    let (refreshed,): (DateTime<Utc>,) = sqlx::query_as(
        "UPDATE job_categories SET icon = 'store' WHERE id = $1 RETURNING updated_at",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(refreshed > updated);
}
