//! Field-level validation shared by the model DTOs and the fixture loader.

use std::net::IpAddr;

use validator::ValidateEmail;

use crate::error::CoreError;
use crate::types::Amount;

/// Maximum length of `users.email`.
pub const EMAIL_MAX_LEN: usize = 254;

/// Maximum length of `users.phone_number` and contact phones.
pub const PHONE_MAX_LEN: usize = 15;

/// Maximum length of `jobs.title`.
pub const JOB_TITLE_MAX_LEN: usize = 200;

/// Maximum length of names (`skills.name`, `job_categories.name`, company names).
pub const NAME_MAX_LEN: usize = 100;

/// Validate that `email` is a syntactically valid address within the column limit.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    validate_max_len("email", email, EMAIL_MAX_LEN)?;
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )))
    }
}

/// Validate a phone number against the column limit shared by
/// `users.phone_number` and `job_poster_profiles.contact_phone`.
pub fn validate_phone(phone: &str) -> Result<(), CoreError> {
    validate_not_blank("phone number", phone)?;
    validate_max_len("phone number", phone, PHONE_MAX_LEN)
}

/// Validate that `value` has at most `max` characters.
pub fn validate_max_len(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max} characters, got {len}"
        )));
    }
    Ok(())
}

/// Validate that a required text field is not blank.
pub fn validate_not_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Parse a client IP address (v4 or v6) as recorded on job views.
pub fn parse_ip_address(raw: &str) -> Result<IpAddr, CoreError> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("'{raw}' is not a valid IP address")))
}

/// Validate an optional salary range: both bounds non-negative and `min <= max`.
pub fn validate_salary_range(min: Option<Amount>, max: Option<Amount>) -> Result<(), CoreError> {
    for (label, value) in [("salary_min", min), ("salary_max", max)] {
        if let Some(v) = value {
            if v < 0 {
                return Err(CoreError::Validation(format!(
                    "{label} must not be negative, got {v}"
                )));
            }
        }
    }
    if let (Some(lo), Some(hi)) = (min, max) {
        if lo > hi {
            return Err(CoreError::Validation(format!(
                "salary_min ({lo}) must not exceed salary_max ({hi})"
            )));
        }
    }
    Ok(())
}
