//! Caller-side input validation.
//!
//! The repository takes field values as given: legacy rows on disk may
//! violate these rules and still load. Everything arriving through an
//! interactive surface goes through these checks first, so a store only
//! ever gains clean data.

use crate::error::{Result, RosterError};

pub const MAX_AGE: u32 = 120;

/// Gender codes accepted on input. Stored upper-cased; legacy rows may
/// be empty.
pub const GENDER_CODES: [&str; 2] = ["M", "F"];

pub fn validate_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RosterError::Invalid("name must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

pub fn validate_email(email: &str) -> Result<String> {
    let trimmed = email.trim();
    if !is_valid_email(trimmed) {
        return Err(RosterError::Invalid(format!(
            "`{trimmed}` is not a valid email address"
        )));
    }
    Ok(trimmed.to_string())
}

/// Minimal email shape: an `@` past the first character, a `.` after the
/// `@` with at least one character following it, and no spaces.
pub fn is_valid_email(s: &str) -> bool {
    if s.is_empty() || s.contains(' ') {
        return false;
    }
    let Some(at) = s.find('@') else { return false };
    let Some(dot) = s.rfind('.') else { return false };
    at > 0 && dot > at + 1 && dot < s.len() - 1
}

pub fn validate_age(age: u32) -> Result<u32> {
    if age > MAX_AGE {
        return Err(RosterError::Invalid(format!(
            "age must be between 0 and {MAX_AGE}, got {age}"
        )));
    }
    Ok(age)
}

pub fn validate_salary(salary: f64) -> Result<f64> {
    if !salary.is_finite() || salary < 0.0 {
        return Err(RosterError::Invalid(format!(
            "salary must be a non-negative number, got {salary}"
        )));
    }
    Ok(salary)
}

/// Normalizes a gender code to its stored upper-case form.
///
/// Case-insensitive on input; anything outside [`GENDER_CODES`] is
/// rejected.
pub fn normalize_gender(input: &str) -> Result<String> {
    let code = input.trim().to_uppercase();
    if GENDER_CODES.contains(&code.as_str()) {
        Ok(code)
    } else {
        Err(RosterError::Invalid(format!(
            "gender must be one of M/F, got `{}`",
            input.trim()
        )))
    }
}
