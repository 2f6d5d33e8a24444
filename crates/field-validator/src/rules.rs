//! Shorthand rule constructors
//!
//! One function per predicate. `None` keeps the default message, `Some`
//! replaces it.
//!
//! ```
//! use field_validator::{rules, validate, FieldValue};
//!
//! let checks = [rules::not_empty(None), rules::is_number(Some("Amount must be numeric"))];
//! assert_eq!(validate(&FieldValue::from("ten"), &checks), vec!["Amount must be numeric"]);
//! ```

use crate::rule::Rule;

fn bind(rule: Rule, message: Option<&str>) -> Rule {
    match message {
        Some(message) => rule.with_message(message),
        None => rule,
    }
}

pub fn is_int(message: Option<&str>) -> Rule {
    bind(Rule::is_int(), message)
}

pub fn not_empty(message: Option<&str>) -> Rule {
    bind(Rule::not_empty(), message)
}

pub fn len(n: usize, message: Option<&str>) -> Rule {
    bind(Rule::len(n), message)
}

pub fn is_alphanumeric(message: Option<&str>) -> Rule {
    bind(Rule::is_alphanumeric(), message)
}

pub fn is_email(message: Option<&str>) -> Rule {
    bind(Rule::is_email(), message)
}

pub fn is_decimal(message: Option<&str>) -> Rule {
    bind(Rule::is_decimal(), message)
}

pub fn is_number(message: Option<&str>) -> Rule {
    bind(Rule::is_number(), message)
}
