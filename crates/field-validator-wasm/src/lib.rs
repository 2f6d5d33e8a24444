//! Field Validator WASM
//!
//! WebAssembly bindings for client-side validation.
//! Runs the same predicates and aggregation as the Rust library.

use field_validator::config::RuleConfig;
use field_validator::{
    extract_form, validate_form, FieldValue, FormRules, Predicate, Rule, ValidatorConfig,
};
use serde::Serialize;
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;
use web_sys::HtmlFormElement;

pub mod dom;

pub use dom::DomForm;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// `null`/`undefined` become the absence marker, numbers and strings map
/// directly, anything else is rejected
fn field_value(value: &JsValue) -> Result<FieldValue, JsValue> {
    if value.is_null() || value.is_undefined() {
        Ok(FieldValue::Null)
    } else if let Some(n) = value.as_f64() {
        Ok(FieldValue::Number(n))
    } else if let Some(s) = value.as_string() {
        Ok(FieldValue::Text(s))
    } else {
        Err(JsValue::from_str("Unsupported field value: expected string, number or null"))
    }
}

fn parse_rules(config: &ValidatorConfig, entries: &[RuleConfig]) -> Result<Vec<Rule>, JsValue> {
    entries
        .iter()
        .map(|entry| config.build_rule(entry))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| JsValue::from_str(&format!("Invalid rule: {}", e)))
}

/// Plain JS objects rather than `Map`s
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

/// Validate a single value
///
/// # Arguments
/// * `value` - string, number, `null` or `undefined`
/// * `rules` - array of rule specs (`"len:5"`) or `{ rule, message }` objects
///
/// # Returns
/// Array of failure messages in rule order (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validate('abc', ['notEmpty', { rule: 'isInt', message: 'Whole numbers only' }]);
/// // ['Whole numbers only']
/// ```
#[wasm_bindgen]
pub fn validate(value: JsValue, rules: JsValue) -> Result<JsValue, JsValue> {
    let entries: Vec<RuleConfig> = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))?;
    let rules = parse_rules(&ValidatorConfig::default(), &entries)?;

    let errors = field_validator::validate(&field_value(&value)?, &rules);
    to_js(&errors)
}

/// Validate every field of a `<form>` against per-field rule arrays
///
/// Returns an object mapping each failing field to its messages.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form_js(form: &HtmlFormElement, rules: JsValue) -> Result<JsValue, JsValue> {
    let entries: BTreeMap<String, Vec<RuleConfig>> = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))?;

    let config = ValidatorConfig::default();
    let mut form_rules = FormRules::new();
    for (field, field_entries) in &entries {
        form_rules.push(field.as_str(), parse_rules(&config, field_entries)?);
    }

    let data = extract_form(&DomForm(form));
    let report = validate_form(&data, &form_rules);
    to_js(&report.into_inner())
}

/// Read every named control of a `<form>` into a plain object
#[wasm_bindgen(js_name = extractForm)]
pub fn extract_form_js(form: &HtmlFormElement) -> Result<JsValue, JsValue> {
    let data = extract_form(&DomForm(form));
    to_js(data.as_map())
}

fn test_predicate(predicate: Predicate, value: &JsValue) -> Result<bool, JsValue> {
    Ok(predicate.test(&field_value(value)?))
}

/// Quick integer check
#[wasm_bindgen(js_name = isInt)]
pub fn is_int_js(value: JsValue) -> Result<bool, JsValue> {
    test_predicate(Predicate::IsInt, &value)
}

#[wasm_bindgen(js_name = notEmpty)]
pub fn not_empty_js(value: JsValue) -> Result<bool, JsValue> {
    test_predicate(Predicate::NotEmpty, &value)
}

/// Quick exact-length check
#[wasm_bindgen(js_name = len)]
pub fn len_js(value: JsValue, n: usize) -> Result<bool, JsValue> {
    test_predicate(Predicate::Len(n), &value)
}

#[wasm_bindgen(js_name = isAlphanumeric)]
pub fn is_alphanumeric_js(value: JsValue) -> Result<bool, JsValue> {
    test_predicate(Predicate::IsAlphanumeric, &value)
}

/// Quick email validation
#[wasm_bindgen(js_name = isEmail)]
pub fn is_email_js(value: JsValue) -> Result<bool, JsValue> {
    test_predicate(Predicate::IsEmail, &value)
}

#[wasm_bindgen(js_name = isDecimal)]
pub fn is_decimal_js(value: JsValue) -> Result<bool, JsValue> {
    test_predicate(Predicate::IsDecimal, &value)
}

#[wasm_bindgen(js_name = isNumber)]
pub fn is_number_js(value: JsValue) -> Result<bool, JsValue> {
    test_predicate(Predicate::IsNumber, &value)
}
