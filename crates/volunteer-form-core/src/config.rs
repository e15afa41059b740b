//! Form configuration
//!
//! Element ids and rule parameters for the registration page. Every key has a
//! default matching the stock page, so an empty object is a valid config.

use serde::{Deserialize, Serialize};

use crate::age::DEFAULT_MINIMUM_AGE;
use crate::error::ConfigError;
use crate::mask::MaskKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormConfig {
    /// Id of the CPF input
    pub national_id_field: String,
    /// Id of the phone input
    pub phone_field: String,
    /// Id of the CEP input
    pub postal_code_field: String,
    /// Id of the full-name input
    pub full_name_field: String,
    /// Id of the birth-date input
    pub birth_date_field: String,
    /// CSS selector of the form whose submission is intercepted
    pub form_selector: String,
    /// Minimum age in completed years; `0` accepts any past or present birth date
    pub minimum_age: u32,
    /// Alert shown when every check passes
    pub success_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            national_id_field: "cpf".to_string(),
            phone_field: "telefone".to_string(),
            postal_code_field: "cep".to_string(),
            full_name_field: "nome_completo".to_string(),
            birth_date_field: "nascimento".to_string(),
            form_selector: "form".to_string(),
            minimum_age: DEFAULT_MINIMUM_AGE,
            success_message: "Registration sent successfully!".to_string(),
        }
    }
}

impl FormConfig {
    /// Parse a config from JSON, e.g. the contents of a `data-` attribute
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The masked inputs of the page, by element id
    pub fn mask_bindings(&self) -> [(&str, MaskKind); 3] {
        [
            (self.national_id_field.as_str(), MaskKind::NationalId),
            (self.phone_field.as_str(), MaskKind::Phone),
            (self.postal_code_field.as_str(), MaskKind::PostalCode),
        ]
    }
}
