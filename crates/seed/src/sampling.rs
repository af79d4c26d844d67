//! Random choices made while seeding.
//!
//! Every function takes the RNG by reference so a run seeded with
//! `SEED_RNG_SEED` is reproducible end to end.

use rand::seq::IndexedRandom;
use rand::Rng;
use workbridge_core::applications::ApplicationStatus;
use workbridge_core::types::Amount;

/// Number of seeker profiles (lowest ids first) that submit applications.
pub const APPLYING_SEEKERS: i64 = 5;

/// Number of most recent jobs applications are drawn from.
pub const CANDIDATE_JOBS: i64 = 8;

/// Each sampled seeker applies to this many jobs (inclusive range).
pub const APPLICATIONS_PER_SEEKER: (usize, usize) = (2, 3);

/// Sampled applications are backdated by this many days (inclusive range).
pub const APPLIED_DAYS_AGO: (i64, i64) = (1, 15);

/// Statuses a sampled application may end up in.
pub const SAMPLED_STATUSES: [ApplicationStatus; 3] = [
    ApplicationStatus::Pending,
    ApplicationStatus::UnderReview,
    ApplicationStatus::Shortlisted,
];

/// One application to create: indices into the seeker and job lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedApplication {
    pub seeker: usize,
    pub job: usize,
    pub status: ApplicationStatus,
    pub days_ago: i64,
}

/// Plan applications for `seekers` applicants over `jobs` postings.
///
/// Each seeker picks 2-3 distinct jobs (fewer when there are fewer jobs).
pub fn plan_applications<R: Rng + ?Sized>(
    rng: &mut R,
    seekers: usize,
    jobs: usize,
) -> Vec<PlannedApplication> {
    let job_indices: Vec<usize> = (0..jobs).collect();
    let mut plan = Vec::new();

    for seeker in 0..seekers {
        let wanted = rng.random_range(APPLICATIONS_PER_SEEKER.0..=APPLICATIONS_PER_SEEKER.1);
        let picked: Vec<usize> = job_indices
            .choose_multiple(rng, wanted.min(jobs))
            .copied()
            .collect();

        for job in picked {
            let status = *SAMPLED_STATUSES
                .choose(rng)
                .unwrap_or(&ApplicationStatus::Pending);
            let days_ago = rng.random_range(APPLIED_DAYS_AGO.0..=APPLIED_DAYS_AGO.1);
            plan.push(PlannedApplication {
                seeker,
                job,
                status,
                days_ago,
            });
        }
    }

    plan
}

/// Expected salary bounds for a seeded seeker: min in 15000-40000, max
/// in 25000-60000 and never below min.
pub fn expected_salary<R: Rng + ?Sized>(rng: &mut R) -> (Amount, Amount) {
    let min = rng.random_range(15_000..=40_000);
    let max = rng.random_range(min.max(25_000)..=60_000);
    (min, max)
}

/// Six-digit postal code.
pub fn pincode<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.random_range(100_000_u32..=999_999).to_string()
}

/// Ten-digit contact number with the +91 prefix.
pub fn contact_phone<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("+91-{}", rng.random_range(1_000_000_000_i64..=9_999_999_999))
}

/// Years of experience with one listed skill, bounded by total experience.
pub fn skill_years<R: Rng + ?Sized>(rng: &mut R, experience_years: u32) -> i32 {
    let cap = i32::try_from(experience_years.max(1)).unwrap_or(i32::MAX);
    rng.random_range(1..=cap)
}

pub fn featured<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}
