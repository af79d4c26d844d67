//! Seeker-side job interactions: bookmarks, views, alerts and reports.

use std::net::IpAddr;

use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::experience::ExperienceLevel;
use workbridge_core::jobs::{AlertFrequency, JobType, ReportReason, ReportStatus};
use workbridge_core::types::{Amount, DbId, Timestamp};

// ---------------------------------------------------------------------------
// Bookmarks
// ---------------------------------------------------------------------------

/// A row from the `job_bookmarks` table. Unique per (user, job).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobBookmark {
    pub id: DbId,
    pub user_id: DbId,
    pub job_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// A row from the `job_views` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobView {
    pub id: DbId,
    pub job_id: DbId,
    /// `None` for anonymous visitors.
    pub user_id: Option<DbId>,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for recording a job view.
#[derive(Debug, Clone)]
pub struct CreateJobView {
    pub job_id: DbId,
    pub user_id: Option<DbId>,
    pub ip_address: IpAddr,
    pub user_agent: Option<String>,
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// A row from the `job_alerts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobAlert {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub category_id: Option<DbId>,
    pub job_type: Option<JobType>,
    pub experience_level: Option<ExperienceLevel>,
    pub salary_min: Option<Amount>,
    pub frequency: AlertFrequency,
    pub is_active: bool,
    pub last_sent: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a saved search.
#[derive(Debug, Clone, Default)]
pub struct CreateJobAlert {
    pub user_id: DbId,
    pub title: String,
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub category_id: Option<DbId>,
    pub job_type: Option<JobType>,
    pub experience_level: Option<ExperienceLevel>,
    pub salary_min: Option<Amount>,
    pub frequency: AlertFrequency,
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// A row from the `job_reports` table. Unique per (job, reporter).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobReport {
    pub id: DbId,
    pub job_id: DbId,
    pub reported_by: DbId,
    pub reason: ReportReason,
    pub description: Option<String>,
    pub status: ReportStatus,
    pub reviewed_by: Option<DbId>,
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for flagging a job.
#[derive(Debug, Clone)]
pub struct CreateJobReport {
    pub job_id: DbId,
    pub reported_by: DbId,
    pub reason: ReportReason,
    pub description: Option<String>,
}

/// Moderator decision on a report.
#[derive(Debug, Clone)]
pub struct ReviewJobReport {
    pub status: ReportStatus,
    pub reviewed_by: DbId,
    pub admin_notes: Option<String>,
}
