//! Job offer models and DTOs.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::applications::OfferStatus;
use workbridge_core::jobs::SalaryType;
use workbridge_core::types::{Amount, DbId, Timestamp};
use workbridge_core::uploads::StoredUpload;

pub const DEFAULT_PROBATION_MONTHS: i32 = 3;
pub const DEFAULT_NOTICE_DAYS: i32 = 30;

/// A row from the `job_offers` table. At most one per application.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobOffer {
    pub id: DbId,
    pub application_id: DbId,
    pub position_title: String,
    pub salary_offered: Amount,
    pub salary_type: SalaryType,
    pub benefits: Option<String>,
    pub start_date: NaiveDate,
    pub probation_period_months: i32,
    pub notice_period_days: i32,
    pub work_hours: Option<String>,
    pub additional_terms: Option<String>,
    pub status: OfferStatus,
    pub offer_valid_until: Timestamp,
    pub offered_at: Timestamp,
    pub responded_at: Option<Timestamp>,
    pub offer_letter: Option<String>,
    pub candidate_response: Option<String>,
    pub counter_offer_details: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for extending an offer.
#[derive(Debug, Clone)]
pub struct CreateJobOffer {
    pub application_id: DbId,
    pub position_title: String,
    pub salary_offered: Amount,
    pub salary_type: SalaryType,
    pub benefits: Option<String>,
    pub start_date: NaiveDate,
    /// Defaults to [`DEFAULT_PROBATION_MONTHS`].
    pub probation_period_months: Option<i32>,
    /// Defaults to [`DEFAULT_NOTICE_DAYS`].
    pub notice_period_days: Option<i32>,
    pub work_hours: Option<String>,
    pub additional_terms: Option<String>,
    pub offer_valid_until: Timestamp,
    /// Must be built with `UploadKind::OfferLetter`.
    pub offer_letter: Option<StoredUpload>,
}

/// The candidate's answer to an offer.
#[derive(Debug, Clone)]
pub struct RespondToOffer {
    pub status: OfferStatus,
    pub candidate_response: Option<String>,
    pub counter_offer_details: Option<String>,
}
