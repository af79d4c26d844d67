//! Account-level vocabularies: roles, identity verification, company size.

use crate::choice::define_choice_enum;

define_choice_enum! {
    /// The role a user account registers with. Determines which profile
    /// (seeker or poster) the account owns.
    UserRole {
        JobSeeker => "job_seeker",
        JobPoster => "job_poster",
        Admin => "admin",
    }
}

define_choice_enum! {
    /// Identity verification progress for a user account.
    VerificationStatus {
        Pending => "pending",
        UnderReview => "under_review",
        Verified => "verified",
        Rejected => "rejected",
    }
}

define_choice_enum! {
    /// Kinds of identity document accepted for verification.
    DocumentType {
        Aadhaar => "aadhaar",
        Pan => "pan",
        DrivingLicense => "driving_license",
        VoterId => "voter_id",
        Passport => "passport",
    }
}

define_choice_enum! {
    /// Employer headcount bucket.
    CompanySize {
        /// 1-10 employees.
        Startup => "startup",
        /// 11-50 employees.
        Small => "small",
        /// 51-200 employees.
        Medium => "medium",
        /// 201-1000 employees.
        Large => "large",
        /// 1000+ employees.
        Enterprise => "enterprise",
    }
}

impl UserRole {
    /// Whether accounts with this role own a `job_seeker_profiles` row.
    pub fn has_seeker_profile(self) -> bool {
        matches!(self, Self::JobSeeker)
    }

    /// Whether accounts with this role own a `job_poster_profiles` row.
    pub fn has_poster_profile(self) -> bool {
        matches!(self, Self::JobPoster)
    }
}

impl VerificationStatus {
    /// Mirrors the account's `is_verified` flag.
    pub fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_db_string() {
        for role in UserRole::ALL {
            assert_eq!(UserRole::from_str_db(role.as_str()).unwrap(), *role);
        }
    }

    #[test]
    fn unknown_role_is_rejected() {
        let err = UserRole::from_str_db("recruiter").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("recruiter"));
        assert!(msg.contains("job_seeker, job_poster, admin"));
    }

    #[test]
    fn profile_ownership_follows_role() {
        assert!(UserRole::JobSeeker.has_seeker_profile());
        assert!(!UserRole::JobSeeker.has_poster_profile());
        assert!(UserRole::JobPoster.has_poster_profile());
        assert!(!UserRole::Admin.has_seeker_profile());
        assert!(!UserRole::Admin.has_poster_profile());
    }

    #[test]
    fn serde_uses_database_strings() {
        let json = serde_json::to_string(&VerificationStatus::UnderReview).unwrap();
        assert_eq!(json, "\"under_review\"");
        let parsed: DocumentType = serde_json::from_str("\"driving_license\"").unwrap();
        assert_eq!(parsed, DocumentType::DrivingLicense);
    }

    #[test]
    fn only_verified_status_counts_as_verified() {
        assert!(VerificationStatus::Verified.is_verified());
        assert!(!VerificationStatus::Pending.is_verified());
        assert!(!VerificationStatus::Rejected.is_verified());
    }
}
