//! Page wiring: input listeners for the masks and the submit interception

use volunteer_form_core as core;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Event, HtmlInputElement};

/// What was found on the page and bound
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachReport {
    pub masks: Vec<core::MaskKind>,
    pub form: bool,
}

fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

pub fn attach(document: &Document, config: &core::FormConfig) -> Result<AttachReport, JsValue> {
    let mut report = AttachReport::default();

    for (id, kind) in config.mask_bindings() {
        match input_by_id(document, id) {
            Some(input) => {
                bind_mask(&input, kind)?;
                report.masks.push(kind);
            }
            None => console::debug_1(&format!("No input '#{}', {:?} mask skipped", id, kind).into()),
        }
    }

    if let Some(form) = document.query_selector(&config.form_selector)? {
        let document = document.clone();
        let config = config.clone();
        let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            if let Err(err) = handle_submit(&document, &config) {
                console::error_1(&err);
            }
        });
        form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
        on_submit.forget();
        report.form = true;
    }

    console::log_1(
        &format!(
            "Registration form attached: masks {:?}, submit check {}",
            report.masks, report.form
        )
        .into(),
    );
    Ok(report)
}

fn bind_mask(input: &HtmlInputElement, kind: core::MaskKind) -> Result<(), JsValue> {
    let on_input = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(input) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        input.set_value(&kind.apply(&input.value()));
    });
    input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    on_input.forget();
    Ok(())
}

fn handle_submit(document: &Document, config: &core::FormConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window available"))?;

    let name_input = input_by_id(document, &config.full_name_field);
    let birth_input = input_by_id(document, &config.birth_date_field);
    let full_name = name_input.as_ref().map(HtmlInputElement::value);
    let birth_date = birth_input.as_ref().map(HtmlInputElement::value);

    let submission = core::Submission {
        full_name: full_name.as_deref(),
        birth_date: birth_date.as_deref(),
    };

    match core::validate_submission(&submission, config, core::today()) {
        Ok(()) => {
            console::log_1(&"Registration form validated".into());
            // Submission is simulated; the form is never sent
            window.alert_with_message(&config.success_message)?;
        }
        Err(rejection) => {
            window.alert_with_message(&rejection.message())?;
            let offending = match rejection.field {
                core::Field::FullName => name_input,
                core::Field::BirthDate => birth_input,
            };
            if let Some(input) = offending {
                input.focus()?;
            }
        }
    }

    Ok(())
}
