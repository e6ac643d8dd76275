//! Field-level checks shared by the entity services.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::RepositoryError;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

pub fn non_empty(field: &'static str, value: &str) -> Result<(), RepositoryError> {
    if value.trim().is_empty() {
        return Err(RepositoryError::validation(field, "must not be empty"));
    }
    Ok(())
}

pub fn non_negative<T>(field: &'static str, value: T) -> Result<(), RepositoryError>
where
    T: PartialOrd + Default,
{
    if value < T::default() {
        return Err(RepositoryError::validation(field, "must not be negative"));
    }
    Ok(())
}

pub fn positive<T>(field: &'static str, value: T) -> Result<(), RepositoryError>
where
    T: PartialOrd + Default,
{
    if value <= T::default() {
        return Err(RepositoryError::validation(field, "must be greater than zero"));
    }
    Ok(())
}

/// Accepts `value` within `min..=max`. NaN is rejected.
pub fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), RepositoryError> {
    if !(min..=max).contains(&value) {
        return Err(RepositoryError::validation(
            field,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(())
}

pub fn not_before<T>(field: &'static str, value: T, start: T) -> Result<(), RepositoryError>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < start {
        return Err(RepositoryError::validation(
            field,
            format!("must not be before {start}"),
        ));
    }
    Ok(())
}

pub fn email(field: &'static str, value: &str) -> Result<(), RepositoryError> {
    let regex = match EMAIL_REGEX.get() {
        Some(regex) => regex,
        None => {
            let compiled = Regex::new(EMAIL_PATTERN)
                .map_err(|e| RepositoryError::Internal(format!("email pattern: {e}")))?;
            EMAIL_REGEX.get_or_init(|| compiled)
        }
    };

    if !regex.is_match(value) {
        return Err(RepositoryError::validation(field, "must be a valid email address"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_non_empty_rejects_whitespace() {
        assert!(non_empty("name", "Court A").is_ok());
        assert!(matches!(
            non_empty("name", "   "),
            Err(RepositoryError::Validation { field: "name", .. })
        ));
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(non_negative("capacity", 0).is_ok());
        assert!(non_negative("capacity", -1).is_err());
        assert!(positive("units", 1).is_ok());
        assert!(positive("units", 0).is_err());
        assert!(within("score", 100.0, 0.0, 100.0).is_ok());
        assert!(within("score", 100.5, 0.0, 100.0).is_err());
        assert!(within("score", f64::NAN, 0.0, 100.0).is_err());
    }

    #[test]
    fn test_not_before_dates() {
        let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 12, 20).unwrap();
        assert!(not_before("end_date", end, start).is_ok());
        assert!(not_before("end_date", start, start).is_ok());
        assert!(not_before("end_date", start, end).is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(email("email", "coach@spodemy.test").is_ok());
        assert!(email("email", "not-an-email").is_err());
        assert!(email("email", "two words@example.com").is_err());
    }
}
