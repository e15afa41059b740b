//! Pre-submission validation
//!
//! Runs the full-name check, then the minimum-age check, and stops at the
//! first failure. A field whose element is missing from the page is `None`
//! and its check is skipped.

use chrono::NaiveDate;

use crate::age::validate_minimum_age;
use crate::config::FormConfig;
use crate::error::ValidationError;
use crate::name::validate_full_name;

/// Field values read from the form when it is submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Submission<'a> {
    pub full_name: Option<&'a str>,
    pub birth_date: Option<&'a str>,
}

/// The validated fields, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    BirthDate,
}

impl Field {
    /// Id of the element to focus when this field is rejected
    pub fn element_id(self, config: &FormConfig) -> &str {
        match self {
            Field::FullName => &config.full_name_field,
            Field::BirthDate => &config.birth_date_field,
        }
    }
}

/// Why a submission was stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub field: Field,
    pub error: ValidationError,
}

impl Rejection {
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

pub fn validate_submission(
    submission: &Submission<'_>,
    config: &FormConfig,
    today: NaiveDate,
) -> Result<(), Rejection> {
    if let Some(name) = submission.full_name {
        validate_full_name(name).map_err(|error| Rejection {
            field: Field::FullName,
            error,
        })?;
    }

    if let Some(birth_date) = submission.birth_date {
        let age = validate_minimum_age(birth_date, config.minimum_age, today).map_err(|error| {
            Rejection {
                field: Field::BirthDate,
                error,
            }
        })?;
        tracing::debug!(age, minimum = config.minimum_age, "minimum age satisfied");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_valid_submission() {
        let submission = Submission {
            full_name: Some("Maria Silva"),
            birth_date: Some("2000-01-01"),
        };
        assert_eq!(validate_submission(&submission, &FormConfig::default(), today()), Ok(()));
    }

    #[test]
    fn test_name_checked_before_age() {
        let submission = Submission {
            full_name: Some("Maria"),
            birth_date: Some("2020-01-01"),
        };
        let rejection =
            validate_submission(&submission, &FormConfig::default(), today()).unwrap_err();
        assert_eq!(rejection.field, Field::FullName);
        assert_eq!(rejection.error, ValidationError::IncompleteName);
        assert_eq!(rejection.field.element_id(&FormConfig::default()), "nome_completo");
    }

    #[test]
    fn test_underage_rejected_on_birth_date() {
        let submission = Submission {
            full_name: Some("Maria Silva"),
            birth_date: Some("2015-05-05"),
        };
        let rejection =
            validate_submission(&submission, &FormConfig::default(), today()).unwrap_err();
        assert_eq!(rejection.field, Field::BirthDate);
        assert_eq!(
            rejection.message(),
            "You must be at least 16 years old to register as a volunteer."
        );
    }

    #[test]
    fn test_empty_birth_date_rejected() {
        let submission = Submission {
            full_name: Some("Maria Silva"),
            birth_date: Some(""),
        };
        let rejection =
            validate_submission(&submission, &FormConfig::default(), today()).unwrap_err();
        assert_eq!(rejection.error, ValidationError::MissingBirthDate);
    }

    #[test]
    fn test_missing_elements_are_skipped() {
        assert!(validate_submission(&Submission::default(), &FormConfig::default(), today()).is_ok());

        let only_name = Submission {
            full_name: Some("Maria Silva"),
            birth_date: None,
        };
        assert!(validate_submission(&only_name, &FormConfig::default(), today()).is_ok());
    }

    #[test]
    fn test_configured_minimum_age() {
        let config = FormConfig {
            minimum_age: 18,
            ..FormConfig::default()
        };
        let submission = Submission {
            full_name: Some("Maria Silva"),
            birth_date: Some("2009-10-19"),
        };
        assert!(validate_submission(&submission, &FormConfig::default(), today()).is_ok());
        assert_eq!(
            validate_submission(&submission, &config, today()).unwrap_err().error,
            ValidationError::Underage { minimum: 18, age: 17 }
        );
    }
}
