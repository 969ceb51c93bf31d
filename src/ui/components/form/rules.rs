// SPDX-License-Identifier: MPL-2.0
//! Declarative field rules and their evaluation.

use super::FormValue;
use crate::error::Result;
use regex::Regex;
use std::fmt;

/// Interaction that asks a field to validate itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Blur,
    Change,
    Input,
}

impl Trigger {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blur" => Some(Trigger::Blur),
            "change" => Some(Trigger::Change),
            "input" => Some(Trigger::Input),
            _ => None,
        }
    }
}

/// Custom check; `Err` carries the message shown under the field.
pub type Validator = fn(&FormValue) -> std::result::Result<(), String>;

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A single rule applied to a field.
///
/// Lengths count characters for text and entries for lists; for numbers
/// `min`/`max`/`len` bound the value itself.
#[derive(Debug, Clone, Default)]
pub struct FormItemRule {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub len: Option<f64>,
    pub pattern: Option<Regex>,
    pub one_of: Option<Vec<String>>,
    /// Rejects text made only of whitespace.
    pub whitespace: bool,
    pub validator: Option<Validator>,
    /// Replaces the generated message.
    pub message: Option<String>,
    /// Empty means the rule runs for every trigger.
    pub trigger: Vec<Trigger>,
}

impl FormItemRule {
    #[must_use]
    pub fn required() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn length(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn exact_length(len: f64) -> Self {
        Self {
            len: Some(len),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns [`crate::error::Error::Pattern`] when `pattern` is not a valid regex.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Some(Regex::new(pattern)?),
            ..Self::default()
        })
    }

    #[must_use]
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            one_of: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn custom(validator: Validator) -> Self {
        Self {
            validator: Some(validator),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn whitespace(mut self, whitespace: bool) -> Self {
        self.whitespace = whitespace;
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn trigger(mut self, trigger: Trigger) -> Self {
        if !self.trigger.contains(&trigger) {
            self.trigger.push(trigger);
        }
        self
    }

    /// `None` selects every rule.
    #[must_use]
    pub fn applies_to(&self, trigger: Option<Trigger>) -> bool {
        match trigger {
            None => true,
            Some(trigger) => self.trigger.is_empty() || self.trigger.contains(&trigger),
        }
    }

    /// Checks `value`; optional fields that are empty skip every other check.
    pub fn validate(&self, field: &str, value: &FormValue) -> std::result::Result<(), ValidateError> {
        self.check(field, value).map_err(|generated| ValidateError {
            field: field.to_string(),
            message: self.message.clone().unwrap_or(generated),
        })
    }

    fn check(&self, field: &str, value: &FormValue) -> std::result::Result<(), String> {
        if value.is_empty() {
            if self.required {
                return Err(format!("{field} is required"));
            }
            return Ok(());
        }

        if self.whitespace {
            if let FormValue::Text(text) = value {
                if text.trim().is_empty() {
                    return Err(format!("{field} cannot be empty"));
                }
            }
        }

        if let Some(measure) = value.measure() {
            self.check_range(field, measure, matches!(value, FormValue::Number(_)))?;
        }

        if let (Some(pattern), FormValue::Text(text)) = (&self.pattern, value) {
            if !pattern.is_match(text) {
                return Err(format!(
                    "{field} value {text} does not match pattern {}",
                    pattern.as_str()
                ));
            }
        }

        if let Some(allowed) = &self.one_of {
            let rendered = value.to_string();
            if !allowed.iter().any(|candidate| candidate == &rendered) {
                return Err(format!("{field} must be one of {}", allowed.join(", ")));
            }
        }

        if let Some(validator) = self.validator {
            validator(value)?;
        }

        Ok(())
    }

    fn check_range(&self, field: &str, measure: f64, numeric: bool) -> std::result::Result<(), String> {
        let unit = if numeric { "" } else { " characters" };

        if let Some(len) = self.len {
            if (measure - len).abs() > f64::EPSILON {
                return Err(format!("{field} must be exactly {len}{unit}"));
            }
            return Ok(());
        }

        match (self.min, self.max) {
            (Some(min), Some(max)) if measure < min || measure > max => Err(format!(
                "{field} must be between {min} and {max}{unit}"
            )),
            (Some(min), None) if measure < min => {
                Err(format!("{field} must be at least {min}{unit}"))
            }
            (None, Some(max)) if measure > max => {
                Err(format!("{field} cannot be greater than {max}{unit}"))
            }
            _ => Ok(()),
        }
    }
}
