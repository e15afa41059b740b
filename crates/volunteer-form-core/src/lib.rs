//! Volunteer Form Core
//!
//! Pure Rust masking and validation for the volunteer registration form.
//! Used natively in tests and by the WASM bindings that wire it to the page.
//!
//! - [`mask`] - progressive formatting of CPF, phone and CEP inputs
//! - [`name`] - full-name rule (first name and surname)
//! - [`age`] - birth date parsing and minimum-age rule
//! - [`submission`] - the checks run when the form is submitted
//! - [`config`] - element ids and rule parameters

pub mod age;
pub mod config;
pub mod error;
pub mod mask;
pub mod name;
pub mod submission;

// Re-export all public items
pub use age::*;
pub use config::*;
pub use error::*;
pub use mask::*;
pub use name::*;
pub use submission::*;

pub use chrono::NaiveDate;
