//! Error types

use thiserror::Error;

/// A rule failure shown to the user before the form is allowed to proceed.
///
/// The `Display` text is the message used in the alert dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name must contain at least a first name and a surname.")]
    IncompleteName,

    #[error("Please enter your birth date.")]
    MissingBirthDate,

    #[error("'{0}' is not a valid birth date.")]
    InvalidBirthDate(String),

    #[error("You must be at least {minimum} years old to register as a volunteer.")]
    Underage { minimum: u32, age: i32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse form config: {0}")]
    Json(#[from] serde_json::Error),
}
