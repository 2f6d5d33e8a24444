//! DOM form adapter

use field_validator::FormSource;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Input types that never contribute a value
const SKIPPED_INPUT_TYPES: &[&str] = &["button", "submit", "reset", "image", "file"];

/// A `<form>` element read as a [`FormSource`]
///
/// Mirrors what a browser would submit: disabled controls and buttons are
/// skipped, checkboxes and radios count only when checked.
#[derive(Debug, Clone, Copy)]
pub struct DomForm<'a>(pub &'a HtmlFormElement);

fn control_entry(element: &Element) -> Option<(String, String)> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        let kind = input.type_().to_ascii_lowercase();
        if input.disabled() || SKIPPED_INPUT_TYPES.iter().any(|t| *t == kind) {
            return None;
        }
        if (kind == "checkbox" || kind == "radio") && !input.checked() {
            return None;
        }
        return Some((input.name(), input.value()));
    }

    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return (!select.disabled()).then(|| (select.name(), select.value()));
    }

    if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        return (!textarea.disabled()).then(|| (textarea.name(), textarea.value()));
    }

    None
}

impl FormSource for DomForm<'_> {
    fn named_fields(&self) -> Vec<(String, String)> {
        let elements = self.0.elements();
        (0..elements.length())
            .filter_map(|i| elements.item(i))
            .filter_map(|element| control_entry(&element))
            .collect()
    }
}
