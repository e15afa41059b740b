//! Full-name validation

use crate::error::ValidationError;

/// A full name needs at least a first name and a surname
pub const MIN_NAME_TOKENS: usize = 2;

/// Validates that `value` holds at least [`MIN_NAME_TOKENS`] whitespace-separated words
pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    if value.split_whitespace().count() >= MIN_NAME_TOKENS {
        Ok(())
    } else {
        Err(ValidationError::IncompleteName)
    }
}

pub fn is_full_name(value: &str) -> bool {
    validate_full_name(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token_fails() {
        assert_eq!(validate_full_name("Maria"), Err(ValidationError::IncompleteName));
        assert!(!is_full_name("  Maria  "));
        assert!(!is_full_name(""));
        assert!(!is_full_name("   "));
    }

    #[test]
    fn test_two_or_more_tokens_pass() {
        assert!(validate_full_name("Maria Silva").is_ok());
        assert!(is_full_name("Maria  da\tSilva"));
        assert!(is_full_name(" João Pereira "));
    }
}
