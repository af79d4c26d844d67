//! Repository for the `job_offers` table.

use sqlx::PgPool;
use workbridge_core::types::DbId;
use workbridge_core::uploads::UploadKind;

use crate::models::offer::{
    CreateJobOffer, JobOffer, RespondToOffer, DEFAULT_NOTICE_DAYS, DEFAULT_PROBATION_MONTHS,
};
use crate::repositories::upload_column;

const COLUMNS: &str = "id, application_id, position_title, salary_offered, salary_type, \
                       benefits, start_date, probation_period_months, notice_period_days, \
                       work_hours, additional_terms, status, offer_valid_until, offered_at, \
                       responded_at, offer_letter, candidate_response, counter_offer_details, \
                       created_at, updated_at";

/// Provides operations for job offers.
pub struct JobOfferRepo;

impl JobOfferRepo {
    /// Extend an offer. An application holds at most one offer
    /// (`uq_job_offers_application`).
    pub async fn create(pool: &PgPool, input: &CreateJobOffer) -> Result<JobOffer, sqlx::Error> {
        let query = format!(
            "INSERT INTO job_offers
                (application_id, position_title, salary_offered, salary_type, benefits,
                 start_date, probation_period_months, notice_period_days, work_hours,
                 additional_terms, offer_valid_until, offer_letter)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobOffer>(&query)
            .bind(input.application_id)
            .bind(&input.position_title)
            .bind(input.salary_offered)
            .bind(input.salary_type)
            .bind(&input.benefits)
            .bind(input.start_date)
            .bind(input.probation_period_months.unwrap_or(DEFAULT_PROBATION_MONTHS))
            .bind(input.notice_period_days.unwrap_or(DEFAULT_NOTICE_DAYS))
            .bind(&input.work_hours)
            .bind(&input.additional_terms)
            .bind(input.offer_valid_until)
            .bind(upload_column(input.offer_letter.as_ref(), UploadKind::OfferLetter)?)
            .fetch_one(pool)
            .await
    }

    /// The offer attached to an application, if any.
    pub async fn find_by_application(
        pool: &PgPool,
        application_id: DbId,
    ) -> Result<Option<JobOffer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_offers WHERE application_id = $1");
        sqlx::query_as::<_, JobOffer>(&query)
            .bind(application_id)
            .fetch_optional(pool)
            .await
    }

    /// Record a status change on the offer.
    ///
    /// Candidate answers (accept, reject, negotiate) stamp `responded_at`;
    /// expiry and withdrawal do not.
    pub async fn respond(
        pool: &PgPool,
        id: DbId,
        input: &RespondToOffer,
    ) -> Result<Option<JobOffer>, sqlx::Error> {
        let query = format!(
            "UPDATE job_offers SET
                status = $2,
                responded_at = CASE WHEN $3 THEN NOW() ELSE responded_at END,
                candidate_response = COALESCE($4, candidate_response),
                counter_offer_details = COALESCE($5, counter_offer_details)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JobOffer>(&query)
            .bind(id)
            .bind(input.status)
            .bind(input.status.is_candidate_response())
            .bind(&input.candidate_response)
            .bind(&input.counter_offer_details)
            .fetch_optional(pool)
            .await
    }
}
