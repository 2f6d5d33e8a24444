// File: src/form.rs
// Purpose: Extract flat form data from named-field sources

use crate::value::FieldValue;
use serde_json::Value as JsonValue;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Anything exposing named input fields
///
/// Sources are always passed in explicitly; extraction never reaches for a
/// global document or request.
pub trait FormSource {
    /// `(name, value)` pairs in source order. Nameless entries are allowed
    /// and get skipped during extraction.
    fn named_fields(&self) -> Vec<(String, String)>;
}

impl FormSource for HashMap<String, String> {
    fn named_fields(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl FormSource for BTreeMap<String, String> {
    fn named_fields(&self) -> Vec<(String, String)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl FormSource for [(String, String)] {
    fn named_fields(&self) -> Vec<(String, String)> {
        self.to_vec()
    }
}

impl FormSource for Vec<(String, String)> {
    fn named_fields(&self) -> Vec<(String, String)> {
        self.clone()
    }
}

/// Members of a JSON object; `null` members are skipped, non-strings are
/// stringified
impl FormSource for JsonValue {
    fn named_fields(&self) -> Vec<(String, String)> {
        let JsonValue::Object(map) = self else {
            return Vec::new();
        };

        map.iter()
            .filter_map(|(key, value)| match value {
                JsonValue::Null => None,
                JsonValue::String(s) => Some((key.clone(), s.clone())),
                other => Some((key.clone(), other.to_string())),
            })
            .collect()
    }
}

/// An `application/x-www-form-urlencoded` body
#[derive(Debug, Clone, Copy)]
pub struct UrlEncoded<'a>(pub &'a str);

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .unwrap_or(spaced)
}

impl FormSource for UrlEncoded<'_> {
    fn named_fields(&self) -> Vec<(String, String)> {
        self.0
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(k), decode_component(v))
            })
            .collect()
    }
}

/// Field name to current value, built once per extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    fields: HashMap<String, String>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }

    /// Get a form field value
    pub fn get(&self, name: &str) -> Option<&String> {
        self.fields.get(name)
    }

    /// Field as a validation subject; absent fields become [`FieldValue::Null`]
    pub fn value(&self, name: &str) -> FieldValue {
        self.fields.get(name).map(String::as_str).into()
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names, sorted
    pub fn keys(&self) -> Vec<&String> {
        let mut keys: Vec<&String> = self.fields.keys().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.fields
    }

    /// Same data with surrounding whitespace removed from every value
    pub fn trimmed(self) -> Self {
        let fields = self
            .fields
            .into_iter()
            .map(|(k, v)| (k, v.trim().to_string()))
            .collect();
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Read every named field of `source` into a flat mapping
///
/// Nameless fields are skipped. When a name repeats, the last value wins.
pub fn extract_form<S: FormSource + ?Sized>(source: &S) -> FormData {
    let mut fields = HashMap::new();
    for (name, value) in source.named_fields() {
        if name.is_empty() {
            continue;
        }
        fields.insert(name, value);
    }

    tracing::debug!(fields = fields.len(), "form extracted");

    FormData { fields }
}
