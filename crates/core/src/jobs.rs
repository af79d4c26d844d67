//! Job posting vocabularies and the publication rule.

use crate::choice::define_choice_enum;
use crate::types::Timestamp;

define_choice_enum! {
    /// Employment arrangement offered by a job.
    #[derive(Default)]
    JobType {
        #[default]
        FullTime => "full_time",
        PartTime => "part_time",
        Contract => "contract",
        Temporary => "temporary",
        Internship => "internship",
    }
}

define_choice_enum! {
    /// Period a salary figure is quoted for.
    #[derive(Default)]
    SalaryType {
        Hourly => "hourly",
        Daily => "daily",
        Weekly => "weekly",
        #[default]
        Monthly => "monthly",
        Yearly => "yearly",
        Project => "project",
    }
}

define_choice_enum! {
    /// Lifecycle status of a job posting.
    #[derive(Default)]
    JobStatus {
        #[default]
        Draft => "draft",
        Active => "active",
        Paused => "paused",
        Closed => "closed",
        Expired => "expired",
    }
}

define_choice_enum! {
    /// How often a saved search is delivered.
    #[derive(Default)]
    AlertFrequency {
        Immediate => "immediate",
        #[default]
        Daily => "daily",
        Weekly => "weekly",
    }
}

define_choice_enum! {
    /// Why a user flagged a job posting.
    ReportReason {
        Spam => "spam",
        Inappropriate => "inappropriate",
        Fake => "fake",
        Duplicate => "duplicate",
        Misleading => "misleading",
        Other => "other",
    }
}

define_choice_enum! {
    /// Moderation progress of a job report.
    ReportStatus {
        Pending => "pending",
        Reviewed => "reviewed",
        Resolved => "resolved",
        Dismissed => "dismissed",
    }
}

/// Decide the `published_at` value to persist when a job is saved.
///
/// A job is stamped the first time it is saved as `active`. An existing
/// stamp is never moved, even if the job is paused and re-activated.
pub fn resolve_published_at(
    status: JobStatus,
    current: Option<Timestamp>,
    now: Timestamp,
) -> Option<Timestamp> {
    match current {
        Some(stamp) => Some(stamp),
        None if status == JobStatus::Active => Some(now),
        None => None,
    }
}
