use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Field-tagged validation messages, e.g. `name => ["can't be blank"]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn with_error(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Merge another set of errors, keeping per-field message order
    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Messages recorded for a field; empty when the field is valid
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{} {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A single check over a subject, recording messages against field names
pub trait ValidationRule<T>: Send + Sync {
    /// Execute this validation rule
    fn validate(&self, subject: &T, errors: &mut ValidationErrors);

    /// Get the name of this validation rule for logging
    fn rule_name(&self) -> &'static str;

    /// Check if this rule should be skipped for the subject
    fn should_skip(&self, _subject: &T) -> bool {
        false
    }
}

/// Chain of validation rules implementing Chain of Responsibility pattern.
///
/// Every rule runs by default so a subject reports all of its faults at once.
pub struct ValidationChain<T> {
    rules: Vec<Arc<dyn ValidationRule<T>>>,
    stop_on_first_error: bool,
}

impl<T> Clone for ValidationChain<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
            stop_on_first_error: self.stop_on_first_error,
        }
    }
}

impl<T> ValidationChain<T> {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            stop_on_first_error: false,
        }
    }

    /// Add a validation rule to the chain
    pub fn add_rule(mut self, rule: Arc<dyn ValidationRule<T>>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Set whether to stop validation on first error
    pub fn stop_on_first_error(mut self, stop: bool) -> Self {
        self.stop_on_first_error = stop;
        self
    }

    /// Execute all validation rules in the chain
    pub fn validate(&self, subject: &T) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for rule in &self.rules {
            if rule.should_skip(subject) {
                continue;
            }

            let mut rule_errors = ValidationErrors::new();
            rule.validate(subject, &mut rule_errors);

            if !rule_errors.is_empty() {
                log::debug!("Validation rule '{}' failed: {}", rule.rule_name(), rule_errors);
            }

            errors.merge(rule_errors);

            if self.stop_on_first_error && !errors.is_empty() {
                break;
            }
        }

        errors
    }
}

impl<T> Default for ValidationChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::{MinLengthRule, PresenceRule};

    struct Pair {
        left: Option<String>,
        right: Option<String>,
    }

    fn left(pair: &Pair) -> Option<&str> {
        pair.left.as_deref()
    }

    fn right(pair: &Pair) -> Option<&str> {
        pair.right.as_deref()
    }

    fn chain() -> ValidationChain<Pair> {
        ValidationChain::new()
            .add_rule(Arc::new(PresenceRule::new("left", left)))
            .add_rule(Arc::new(MinLengthRule::new("left", 3, left)))
            .add_rule(Arc::new(PresenceRule::new("right", right)))
    }

    #[test]
    fn collects_errors_across_fields() {
        let pair = Pair {
            left: Some(String::new()),
            right: Some("  ".to_string()),
        };

        let errors = chain().validate(&pair);

        assert_eq!(
            errors.get("left"),
            ["can't be blank", "is too short (minimum is 3 characters)"]
        );
        assert_eq!(errors.get("right"), ["can't be blank"]);
    }

    #[test]
    fn stop_on_first_error_short_circuits() {
        let pair = Pair {
            left: Some(String::new()),
            right: Some(String::new()),
        };

        let errors = chain().stop_on_first_error(true).validate(&pair);

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["left"]);
        assert_eq!(errors.get("left").len(), 1);
    }

    #[test]
    fn absent_fields_are_skipped() {
        let pair = Pair {
            left: None,
            right: Some("ok".to_string()),
        };

        assert!(chain().validate(&pair).is_empty());
    }

    #[test]
    fn display_lists_field_and_message() {
        let errors = ValidationErrors::new()
            .with_error("city", "can't be blank")
            .with_error("name", "can't be blank");

        assert_eq!(errors.to_string(), "city can't be blank; name can't be blank");
    }

    #[test]
    fn merge_appends_messages() {
        let mut errors = ValidationErrors::new().with_error("name", "first");
        errors.merge(ValidationErrors::new().with_error("name", "second"));

        assert_eq!(errors.get("name"), ["first", "second"]);
        assert!(errors.clone().into_result().is_err());
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
