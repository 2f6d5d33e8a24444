// File: src/predicate.rs
// Purpose: Named pass/fail checks over a single field value

use crate::error::ValidatorError;
use crate::value::FieldValue;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static INT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?[0-9]+$").unwrap());

// Strict numeric grammar; `str::parse::<f64>` alone would also take "inf" and "NaN"
static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap()
});

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Whole numbers written with decimal digits, optionally signed
pub fn is_int_str(s: &str) -> bool {
    INT_REGEX.is_match(s)
}

fn parse_number(s: &str) -> Option<f64> {
    if !NUMBER_REGEX.is_match(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Integers or decimals, optionally signed, optionally with an exponent
pub fn is_number_str(s: &str) -> bool {
    parse_number(s).is_some()
}

/// Numbers whose value has a fractional part (`"1.0"` does not)
pub fn is_decimal_str(s: &str) -> bool {
    parse_number(s).is_some_and(|n| n.fract() != 0.0)
}

/// ASCII letters and digits only; the empty string passes
pub fn is_alphanumeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Conventional `local@domain.tld` shape
///
/// Checks for:
/// - Exactly one '@' with content on both sides
/// - At least one '.' in the domain, with content after it
/// - No whitespace anywhere
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// A named check applied to one [`FieldValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    IsInt,
    NotEmpty,
    /// Stringified value must be exactly this many UTF-16 code units
    Len(usize),
    IsAlphanumeric,
    IsEmail,
    IsDecimal,
    IsNumber,
}

impl Predicate {
    pub const NAMES: [&'static str; 7] = [
        "isInt",
        "notEmpty",
        "len",
        "isAlphanumeric",
        "isEmail",
        "isDecimal",
        "isNumber",
    ];

    /// Canonical camelCase name, as used in rule specs and config files
    pub fn name(&self) -> &'static str {
        match self {
            Predicate::IsInt => "isInt",
            Predicate::NotEmpty => "notEmpty",
            Predicate::Len(_) => "len",
            Predicate::IsAlphanumeric => "isAlphanumeric",
            Predicate::IsEmail => "isEmail",
            Predicate::IsDecimal => "isDecimal",
            Predicate::IsNumber => "isNumber",
        }
    }

    /// Build a predicate from its name and optional parameter
    ///
    /// `len` needs a non-negative integer parameter; every other predicate
    /// rejects one.
    pub fn from_name(name: &str, param: Option<&str>) -> Result<Self, ValidatorError> {
        let simple = match name {
            "isInt" => Predicate::IsInt,
            "notEmpty" => Predicate::NotEmpty,
            "isAlphanumeric" => Predicate::IsAlphanumeric,
            "isEmail" => Predicate::IsEmail,
            "isDecimal" => Predicate::IsDecimal,
            "isNumber" => Predicate::IsNumber,
            "len" => {
                let raw = param.ok_or(ValidatorError::MissingParameter("len"))?;
                let n = raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ValidatorError::InvalidParameter {
                        predicate: "len",
                        param: raw.to_string(),
                    })?;
                return Ok(Predicate::Len(n));
            }
            other => return Err(ValidatorError::UnknownPredicate(other.to_string())),
        };

        match param {
            Some(param) => Err(ValidatorError::UnexpectedParameter {
                predicate: simple.name(),
                param: param.to_string(),
            }),
            None => Ok(simple),
        }
    }

    /// Message used when a rule is built without a custom one
    pub fn default_message(&self) -> String {
        match self {
            Predicate::IsInt => "Must be an integer".to_string(),
            Predicate::NotEmpty => "This field is required".to_string(),
            Predicate::Len(n) => format!("Must be exactly {} characters", n),
            Predicate::IsAlphanumeric => "Must contain only letters and digits".to_string(),
            Predicate::IsEmail => "Invalid email address".to_string(),
            Predicate::IsDecimal => "Must be a decimal number".to_string(),
            Predicate::IsNumber => "Must be a number".to_string(),
        }
    }

    /// Whether `value` passes this check
    pub fn test(&self, value: &FieldValue) -> bool {
        match (self, value) {
            (Predicate::IsAlphanumeric, FieldValue::Null) => true,
            (_, FieldValue::Null) => false,

            (Predicate::IsInt, FieldValue::Number(n)) => n.is_finite() && n.fract() == 0.0,
            (Predicate::IsInt, FieldValue::Text(s)) => is_int_str(s),

            (Predicate::NotEmpty, FieldValue::Number(_)) => true,
            (Predicate::NotEmpty, FieldValue::Text(s)) => !s.is_empty(),

            (Predicate::Len(n), value) => value.to_string().encode_utf16().count() == *n,

            (Predicate::IsAlphanumeric, value) => is_alphanumeric(&value.to_string()),

            (Predicate::IsEmail, FieldValue::Number(_)) => false,
            (Predicate::IsEmail, FieldValue::Text(s)) => is_valid_email(s),

            (Predicate::IsDecimal, FieldValue::Number(n)) => n.is_finite() && n.fract() != 0.0,
            (Predicate::IsDecimal, FieldValue::Text(s)) => is_decimal_str(s),

            (Predicate::IsNumber, FieldValue::Number(n)) => n.is_finite(),
            (Predicate::IsNumber, FieldValue::Text(s)) => is_number_str(s),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Len(n) => write!(f, "len:{}", n),
            other => f.write_str(other.name()),
        }
    }
}

/// Parses `name` or `name:param`, e.g. `"isEmail"` or `"len:5"`
impl FromStr for Predicate {
    type Err = ValidatorError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        match spec.split_once(':') {
            Some((name, param)) => Predicate::from_name(name.trim(), Some(param)),
            None => Predicate::from_name(spec, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_strings() {
        assert!(is_int_str("192"));
        assert!(is_int_str("-7"));
        assert!(is_int_str("+7"));
        assert!(!is_int_str(""));
        assert!(!is_int_str("1.5"));
        assert!(!is_int_str("12a"));
        assert!(!is_int_str(" 12"));
    }

    #[test]
    fn test_number_strings() {
        assert!(is_number_str("192"));
        assert!(is_number_str("1.5123"));
        assert!(is_number_str(".5"));
        assert!(is_number_str("5."));
        assert!(is_number_str("-2e10"));
        assert!(!is_number_str(""));
        assert!(!is_number_str("."));
        assert!(!is_number_str("inf"));
        assert!(!is_number_str("NaN"));
        assert!(!is_number_str("1e999"));
        assert!(!is_number_str("abc"));
    }

    #[test]
    fn test_decimal_strings() {
        assert!(is_decimal_str("1.5123"));
        assert!(is_decimal_str("-0.25"));
        assert!(is_decimal_str("1e-1"));
        assert!(!is_decimal_str("1.0"));
        assert!(!is_decimal_str("192"));
        assert!(!is_decimal_str("1.2.3"));
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("email@website.com"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("email@website"));
        assert!(!is_valid_email("@website.com"));
        assert!(!is_valid_email("email@@website.com"));
        assert!(!is_valid_email("email @website.com"));
        assert!(!is_valid_email("email@website."));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric(""));
        assert!(is_alphanumeric("abcdef12345"));
        assert!(!is_alphanumeric("abcdef12345#&%^"));
        assert!(!is_alphanumeric("5.454"));
    }

    #[test]
    fn test_len_stringifies_numbers() {
        assert!(Predicate::Len(5).test(&FieldValue::from(5.454)));
        assert!(Predicate::Len(1).test(&FieldValue::from(5)));
        assert!(!Predicate::Len(4).test(&FieldValue::Null));
        assert!(Predicate::Len(0).test(&FieldValue::from("")));
    }

    #[test]
    fn test_large_and_tiny_numbers() {
        let huge = FieldValue::from(1e21);
        assert!(Predicate::Len(5).test(&huge));
        assert!(!Predicate::IsAlphanumeric.test(&huge));
        assert!(Predicate::Len(4).test(&FieldValue::from(1e-7)));
    }

    #[test]
    fn test_len_counts_utf16_units() {
        assert!(Predicate::Len(2).test(&FieldValue::from("😀")));
        assert!(Predicate::Len(4).test(&FieldValue::from("São!")));
    }

    #[test]
    fn test_null_handling() {
        for name in Predicate::NAMES {
            let predicate = if name == "len" {
                Predicate::Len(4)
            } else {
                Predicate::from_name(name, None).unwrap()
            };
            let expected = predicate == Predicate::IsAlphanumeric;
            assert_eq!(predicate.test(&FieldValue::Null), expected, "{}", name);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("isInt".parse::<Predicate>(), Ok(Predicate::IsInt));
        assert_eq!("len:5".parse::<Predicate>(), Ok(Predicate::Len(5)));
        assert_eq!(" len : 5 ".parse::<Predicate>(), Ok(Predicate::Len(5)));
        assert_eq!(
            "isFoo".parse::<Predicate>(),
            Err(ValidatorError::UnknownPredicate("isFoo".to_string()))
        );
        assert_eq!(
            "len".parse::<Predicate>(),
            Err(ValidatorError::MissingParameter("len"))
        );
        assert_eq!(
            "len:five".parse::<Predicate>(),
            Err(ValidatorError::InvalidParameter {
                predicate: "len",
                param: "five".to_string()
            })
        );
        assert_eq!(
            "isEmail:3".parse::<Predicate>(),
            Err(ValidatorError::UnexpectedParameter {
                predicate: "isEmail",
                param: "3".to_string()
            })
        );
    }

    #[test]
    fn test_display_roundtrips_names() {
        assert_eq!(Predicate::Len(5).to_string(), "len:5");
        assert_eq!(Predicate::IsNumber.to_string(), "isNumber");
    }
}
