// File: src/validate.rs
// Purpose: Run values through rule lists and collect failure messages

use crate::form::FormData;
use crate::rule::Rule;
use crate::value::FieldValue;
use std::collections::BTreeMap;

/// Validate one value against an ordered list of rules
///
/// Every rule is evaluated; nothing short-circuits. The returned messages
/// follow rule order, and an empty vector means the value is valid.
pub fn validate(value: &FieldValue, rules: &[Rule]) -> Vec<String> {
    rules
        .iter()
        .filter_map(|rule| {
            rule.check(value).err().inspect(|message| {
                tracing::debug!(predicate = %rule.predicate(), %message, "rule failed");
            })
        })
        .collect()
}

/// Per-field rule lists, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormRules {
    fields: Vec<(String, Vec<Rule>)>,
}

impl FormRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rules for a field; rules for an already declared field are appended
    pub fn field(mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.push(name, rules);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, rules: impl IntoIterator<Item = Rule>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => existing.extend(rules),
            None => self.fields.push((name, rules.into_iter().collect())),
        }
    }

    /// Rules declared for a field
    pub fn get(&self, name: &str) -> Option<&[Rule]> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, rules)| rules.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Failure messages per field; fields that passed do not appear
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormReport {
    errors: BTreeMap<String, Vec<String>>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// First error for a specific field
    pub fn get_error(&self, field: &str) -> Option<&String> {
        self.errors.get(field).and_then(|errors| errors.first())
    }

    /// All errors for a specific field
    pub fn get_errors(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Names of the fields that failed, sorted
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

/// Validate every declared field of a form
///
/// A declared field missing from `form` is validated as [`FieldValue::Null`].
pub fn validate_form(form: &FormData, rules: &FormRules) -> FormReport {
    let errors: BTreeMap<String, Vec<String>> = rules
        .iter()
        .filter_map(|(name, field_rules)| {
            let messages = validate(&form.value(name), field_rules);
            (!messages.is_empty()).then(|| (name.to_string(), messages))
        })
        .collect();

    tracing::debug!(
        fields = rules.len(),
        failed = errors.len(),
        "form validated"
    );

    FormReport { errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_rules_is_valid() {
        for value in [FieldValue::Null, FieldValue::from(""), FieldValue::from(5.454)] {
            assert!(validate(&value, &[]).is_empty());
        }
    }

    #[test]
    fn test_messages_follow_rule_order() {
        let rules = [
            Rule::not_empty().with_message("first"),
            Rule::is_email().with_message("second"),
            Rule::is_int().with_message("third"),
            Rule::len(3).with_message("fourth"),
        ];
        assert_eq!(validate(&FieldValue::from("abc"), &rules), vec!["second", "third"]);
        assert_eq!(
            validate(&FieldValue::Null, &rules),
            vec!["first", "second", "third", "fourth"]
        );
    }

    #[test]
    fn test_reordering_rules_reorders_messages() {
        let a = Rule::is_number().with_message("a");
        let b = Rule::is_email().with_message("b");
        let value = FieldValue::from("nope");
        assert_eq!(validate(&value, &[a.clone(), b.clone()]), vec!["a", "b"]);
        assert_eq!(validate(&value, &[b, a]), vec!["b", "a"]);
    }

    #[test]
    fn test_duplicate_rules_report_twice() {
        let rules = [Rule::is_int(), Rule::is_int()];
        assert_eq!(validate(&FieldValue::from("x"), &rules).len(), 2);
    }

    #[test]
    fn test_validate_form() {
        let form: FormData = [("meta", "meta"), ("amount", "12.50")].into_iter().collect();
        let rules = FormRules::new()
            .field("meta", [Rule::not_empty(), Rule::len(5).with_message("meta too short")])
            .field("amount", [Rule::is_number()])
            .field("email", [Rule::not_empty(), Rule::is_email()]);

        let report = validate_form(&form, &rules);

        assert!(!report.is_valid());
        assert!(!report.has_error("amount"));
        assert_eq!(report.get_error("meta"), Some(&"meta too short".to_string()));
        assert_eq!(
            report.get_errors("email"),
            Some(&vec![
                "This field is required".to_string(),
                "Invalid email address".to_string()
            ])
        );
        assert_eq!(report.fields().collect::<Vec<_>>(), vec!["email", "meta"]);
    }

    #[test]
    fn test_form_rules_append() {
        let mut rules = FormRules::new().field("amount", [Rule::not_empty()]);
        rules.push("amount", [Rule::is_number()]);
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.get("amount"), Some(&[Rule::not_empty(), Rule::is_number()][..]));
        assert_eq!(rules.get("meta"), None);
    }
}
