//! Volunteer Form WASM
//!
//! WebAssembly bindings for the volunteer registration form.
//! Formats the CPF, phone and CEP inputs as the user types and checks the
//! full name and minimum age before the form is allowed to proceed.

use serde::{Deserialize, Serialize};
use volunteer_form_core as core;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod dom;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Validation error returned to JavaScript
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Id of the element to focus
    pub field: String,
    pub message: String,
}

/// Field values passed from JavaScript; absent keys skip their check
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationValues {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
}

fn parse_config(config: JsValue) -> Result<core::FormConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(core::FormConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

fn collect_errors(
    values: &RegistrationValues,
    config: &core::FormConfig,
    today: core::NaiveDate,
) -> Vec<ValidationError> {
    let submission = core::Submission {
        full_name: values.full_name.as_deref(),
        birth_date: values.birth_date.as_deref(),
    };

    match core::validate_submission(&submission, config, today) {
        Ok(()) => Vec::new(),
        Err(rejection) => vec![ValidationError {
            field: rejection.field.element_id(config).to_string(),
            message: rejection.message(),
        }],
    }
}

/// Run the submission checks without touching the page
///
/// # Arguments
/// * `values` - `{ fullName?, birthDate? }`
/// * `config` - form config object, or `undefined` for the defaults
///
/// # Returns
/// Array with the first failing check (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateRegistration(
///     { fullName: 'Maria Silva', birthDate: '2001-04-12' },
///     { minimumAge: 18 }
/// );
/// ```
#[wasm_bindgen(js_name = validateRegistration)]
pub fn validate_registration(values: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let values: RegistrationValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse values: {}", e)))?;
    let config = parse_config(config)?;

    let errors = collect_errors(&values, &config, core::today());
    Ok(serde_wasm_bindgen::to_value(&errors)?)
}

/// Attach the masks and the submit check to the current page
///
/// Waits for `DOMContentLoaded` when the document is still loading.
/// Elements that are not on the page are skipped.
#[wasm_bindgen(js_name = attachRegistrationForm)]
pub fn attach_registration_form(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    if document.ready_state() != "loading" {
        dom::attach(&document, &config)?;
        return Ok(());
    }

    let target = document.clone();
    let on_ready = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = dom::attach(&target, &config) {
            web_sys::console::error_1(&err);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

/// Quick CPF mask
#[wasm_bindgen(js_name = maskNationalId)]
pub fn mask_national_id_js(value: &str) -> String {
    core::mask_national_id(value)
}

/// Quick phone mask
#[wasm_bindgen(js_name = maskPhone)]
pub fn mask_phone_js(value: &str) -> String {
    core::mask_phone(value)
}

/// Quick CEP mask
#[wasm_bindgen(js_name = maskPostalCode)]
pub fn mask_postal_code_js(value: &str) -> String {
    core::mask_postal_code(value)
}

/// Apply a mask by name: `"nationalId"`, `"phone"` or `"postalCode"`
#[wasm_bindgen(js_name = applyMask)]
pub fn apply_mask_js(kind: &str, value: &str) -> Result<String, JsValue> {
    core::MaskKind::parse(kind)
        .map(|kind| kind.apply(value))
        .ok_or_else(|| JsValue::from_str(&format!("Unknown mask '{}'", kind)))
}

/// Quick full-name check
#[wasm_bindgen(js_name = isFullName)]
pub fn is_full_name_js(value: &str) -> bool {
    core::is_full_name(value)
}

/// Quick minimum-age check against today's date
#[wasm_bindgen(js_name = meetsMinimumAge)]
pub fn meets_minimum_age_js(birth_date: &str, minimum: u32) -> bool {
    core::meets_minimum_age(birth_date, minimum, core::today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn today() -> core::NaiveDate {
        core::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_masks() {
        assert_eq!(mask_national_id_js("12345678901"), "123.456.789-01");
        assert_eq!(mask_phone_js("11987654321"), "(11) 98765-4321");
        assert_eq!(mask_postal_code_js("12345678"), "12345-678");
        assert_eq!(apply_mask_js("phone", "1198765432").unwrap(), "(11) 9876-5432");
    }

    #[wasm_bindgen_test]
    fn test_full_name() {
        assert!(!is_full_name_js("Maria"));
        assert!(is_full_name_js("Maria Silva"));
    }

    #[wasm_bindgen_test]
    fn test_minimum_age() {
        assert!(meets_minimum_age_js("1990-01-01", 16));
        assert!(!meets_minimum_age_js("", 16));
    }

    #[wasm_bindgen_test]
    fn test_collect_errors_reports_element_id() {
        let config = core::FormConfig::default();
        let values = RegistrationValues {
            full_name: Some("Maria Silva".to_string()),
            birth_date: Some("2012-01-01".to_string()),
        };
        let errors = collect_errors(&values, &config, today());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "nascimento");

        let values = RegistrationValues {
            full_name: Some("Maria".to_string()),
            birth_date: None,
        };
        let errors = collect_errors(&values, &config, today());
        assert_eq!(errors[0].field, "nome_completo");

        assert!(collect_errors(&RegistrationValues::default(), &config, today()).is_empty());
    }
}
