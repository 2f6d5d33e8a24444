// File: src/rule.rs
// Purpose: Predicates bound to their failure message

use crate::error::ValidatorError;
use crate::predicate::Predicate;
use crate::value::FieldValue;
use std::str::FromStr;

/// A predicate ready for evaluation, carrying the message emitted on failure
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    predicate: Predicate,
    message: String,
}

impl Rule {
    /// Bind a predicate to its default message
    pub fn new(predicate: Predicate) -> Self {
        Self {
            message: predicate.default_message(),
            predicate,
        }
    }

    /// Replace the failure message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_int() -> Self {
        Self::new(Predicate::IsInt)
    }

    pub fn not_empty() -> Self {
        Self::new(Predicate::NotEmpty)
    }

    pub fn len(n: usize) -> Self {
        Self::new(Predicate::Len(n))
    }

    pub fn is_alphanumeric() -> Self {
        Self::new(Predicate::IsAlphanumeric)
    }

    pub fn is_email() -> Self {
        Self::new(Predicate::IsEmail)
    }

    pub fn is_decimal() -> Self {
        Self::new(Predicate::IsDecimal)
    }

    pub fn is_number() -> Self {
        Self::new(Predicate::IsNumber)
    }

    /// Parse a rule spec such as `"notEmpty"` or `"len:5"`
    pub fn parse(spec: &str) -> Result<Self, ValidatorError> {
        spec.parse::<Predicate>().map(Self::new)
    }

    pub fn predicate(&self) -> Predicate {
        self.predicate
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluate against one value, returning the bound message on failure
    pub fn check(&self, value: &FieldValue) -> Result<(), String> {
        if self.predicate.test(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

impl FromStr for Rule {
    type Err = ValidatorError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Rule::parse(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages() {
        assert_eq!(Rule::is_int().message(), "Must be an integer");
        assert_eq!(Rule::len(5).message(), "Must be exactly 5 characters");
        assert_eq!(Rule::not_empty().message(), "This field is required");
    }

    #[test]
    fn test_custom_message() {
        let rule = Rule::is_int().with_message("error msg displayed");
        assert_eq!(rule.check(&FieldValue::from("abc")), Err("error msg displayed".to_string()));
        assert_eq!(rule.check(&FieldValue::from(5)), Ok(()));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Rule::parse("len:3"), Ok(Rule::len(3)));
        assert_eq!("isEmail".parse::<Rule>(), Ok(Rule::is_email()));
        assert!(Rule::parse("isPhone").is_err());
    }
}
