//! Job seeker and job poster profile models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use workbridge_core::accounts::CompanySize;
use workbridge_core::experience::ExperienceLevel;
use workbridge_core::types::{Amount, DbId, Timestamp};
use workbridge_core::uploads::StoredUpload;

// ---------------------------------------------------------------------------
// Job seeker profile
// ---------------------------------------------------------------------------

/// A row from the `job_seeker_profiles` table. One per seeker account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobSeekerProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub bio: Option<String>,
    pub experience_level: ExperienceLevel,
    pub location: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub resume: Option<String>,
    pub profile_picture: Option<String>,
    pub availability: bool,
    pub expected_salary_min: Option<Amount>,
    pub expected_salary_max: Option<Amount>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a job seeker profile.
#[derive(Debug, Clone, Default)]
pub struct CreateJobSeekerProfile {
    pub user_id: DbId,
    pub bio: Option<String>,
    pub experience_level: ExperienceLevel,
    pub location: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    /// Must be built with `UploadKind::Resume`.
    pub resume: Option<StoredUpload>,
    /// Must be built with `UploadKind::ProfilePicture`.
    pub profile_picture: Option<StoredUpload>,
    /// Defaults to `true`.
    pub availability: Option<bool>,
    pub expected_salary_min: Option<Amount>,
    pub expected_salary_max: Option<Amount>,
}

/// DTO for updating a job seeker profile. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateJobSeekerProfile {
    pub bio: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub resume: Option<StoredUpload>,
    pub profile_picture: Option<StoredUpload>,
    pub availability: Option<bool>,
    pub expected_salary_min: Option<Amount>,
    pub expected_salary_max: Option<Amount>,
}

// ---------------------------------------------------------------------------
// Job poster profile
// ---------------------------------------------------------------------------

/// A row from the `job_poster_profiles` table. One per employer account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobPosterProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub company_name: String,
    pub company_description: Option<String>,
    pub company_size: Option<CompanySize>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub company_logo: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    pub is_company_verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a job poster profile.
#[derive(Debug, Clone, Default)]
pub struct CreateJobPosterProfile {
    pub user_id: DbId,
    pub company_name: String,
    pub company_description: Option<String>,
    pub company_size: Option<CompanySize>,
    pub industry: Option<String>,
    pub website: Option<String>,
    /// Must be built with `UploadKind::CompanyLogo`.
    pub company_logo: Option<StoredUpload>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    /// Defaults to `false`.
    pub is_company_verified: Option<bool>,
}
