// File: src/config.rs
// Purpose: Configuration parsing from validator.toml

use crate::error::ValidatorError;
use crate::form::{extract_form, FormData, FormSource};
use crate::predicate::Predicate;
use crate::rule::Rule;
use crate::validate::FormRules;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Validator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Default message overrides, keyed by predicate name (`isInt`, `len`, ...)
    #[serde(default)]
    pub messages: BTreeMap<String, String>,

    #[serde(default)]
    pub extract: ExtractConfig,

    /// Rule lists keyed by field name
    #[serde(default)]
    pub fields: BTreeMap<String, FieldConfig>,
}

/// Form extraction options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    #[serde(default)]
    pub trim_values: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// A rule entry: either a bare spec (`"len:5"`) or a spec with its own message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleConfig {
    Spec(String),
    Detailed {
        rule: String,
        #[serde(default)]
        message: Option<String>,
    },
}

impl ValidatorConfig {
    /// Load configuration from validator.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            tracing::info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::info!(fields = config.fields.len(), "Loaded validator config from {:?}", path);
        Ok(config)
    }

    /// Load configuration from default path (./validator.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("validator.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ValidatorConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Build a rule, resolving its message
    ///
    /// An explicit message wins, then a `[messages]` override (with `{n}`
    /// replaced by the `len` parameter), then the predicate default.
    pub fn rule(&self, spec: &str, message: Option<&str>) -> Result<Rule, ValidatorError> {
        let rule = Rule::parse(spec)?;
        let predicate = rule.predicate();

        if let Some(message) = message {
            return Ok(rule.with_message(message));
        }

        match self.messages.get(predicate.name()) {
            Some(template) => {
                let message = match predicate {
                    Predicate::Len(n) => template.replace("{n}", &n.to_string()),
                    _ => template.clone(),
                };
                Ok(rule.with_message(message))
            }
            None => Ok(rule),
        }
    }

    pub fn build_rule(&self, entry: &RuleConfig) -> Result<Rule, ValidatorError> {
        match entry {
            RuleConfig::Spec(spec) => self.rule(spec, None),
            RuleConfig::Detailed { rule, message } => self.rule(rule, message.as_deref()),
        }
    }

    /// Rule lists for every configured field
    ///
    /// Fails on the first malformed spec, and on `[messages]` keys that do not
    /// name a predicate.
    pub fn form_rules(&self) -> Result<FormRules, ValidatorError> {
        if let Some(unknown) = self
            .messages
            .keys()
            .find(|key| !Predicate::NAMES.iter().any(|name| *name == key.as_str()))
        {
            return Err(ValidatorError::UnknownPredicate(unknown.clone()));
        }

        let mut rules = FormRules::new();
        for (name, field) in &self.fields {
            let field_rules = field
                .rules
                .iter()
                .map(|entry| self.build_rule(entry))
                .collect::<Result<Vec<_>, _>>()?;
            rules.push(name.as_str(), field_rules);
        }
        Ok(rules)
    }

    /// Extract a form, applying the configured extraction options
    pub fn extract<S: FormSource + ?Sized>(&self, source: &S) -> FormData {
        let form = extract_form(source);
        if self.extract.trim_values {
            form.trimmed()
        } else {
            form
        }
    }
}
