//! Field Validator
//!
//! Stateless field predicates, an aggregator that collects failure messages
//! in rule order, and a form extractor that turns any named-field source into
//! flat form data.
//!
//! ```
//! use field_validator::{validate, FieldValue, Rule};
//!
//! let rules = [Rule::not_empty(), Rule::len(5).with_message("five characters please")];
//! assert!(validate(&FieldValue::from("abcde"), &rules).is_empty());
//! assert_eq!(validate(&FieldValue::from("abc"), &rules), vec!["five characters please"]);
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod predicate;
pub mod rule;
pub mod rules;
pub mod validate;
pub mod value;

pub use config::ValidatorConfig;
pub use error::ValidatorError;
pub use form::{extract_form, FormData, FormSource, UrlEncoded};
pub use predicate::Predicate;
pub use rule::Rule;
pub use validate::{validate, validate_form, FormReport, FormRules};
pub use value::FieldValue;
