//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Loose international phone format: optional leading `+`, then digits
    /// with common grouping characters. Length bounds keep junk out without
    /// rejecting legitimate regional formats.
    static ref PHONE_REGEX: Regex =
        Regex::new(r"^\+?[0-9][0-9 .\-()]{2,31}$").expect("phone regex is valid");
}

/// Validates that a phone number looks like a dialable number.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_format");
        err.message = Some("Invalid phone number format".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_phone_plain_digits() {
        assert!(validate_phone("1234567890").is_ok());
        assert!(validate_phone("0812345678").is_ok());
    }

    #[test]
    fn test_validate_phone_international() {
        assert!(validate_phone("+62 812-3456-7890").is_ok());
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
    }

    #[test]
    fn test_validate_phone_too_short() {
        assert!(validate_phone("12").is_err());
        assert!(validate_phone("").is_err());
    }

    #[test]
    fn test_validate_phone_too_long() {
        assert!(validate_phone(&"1".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_phone_rejects_letters() {
        assert!(validate_phone("call-me-maybe").is_err());
        assert!(validate_phone("555-HELP").is_err());
    }

    #[test]
    fn test_validate_phone_error_message() {
        let err = validate_phone("abc").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Invalid phone number format"
        );
    }
}
