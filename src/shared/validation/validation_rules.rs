use super::validation_chain::{ValidationErrors, ValidationRule};

pub const BLANK_MESSAGE: &str = "can't be blank";

/// Reads the value of one text field; `None` means the field is not being set.
pub type FieldAccessor<T> = fn(&T) -> Option<&str>;

/// Rejects empty and whitespace-only values
pub struct PresenceRule<T> {
    field: &'static str,
    accessor: FieldAccessor<T>,
}

impl<T> PresenceRule<T> {
    pub fn new(field: &'static str, accessor: FieldAccessor<T>) -> Self {
        Self { field, accessor }
    }
}

impl<T> ValidationRule<T> for PresenceRule<T> {
    fn validate(&self, subject: &T, errors: &mut ValidationErrors) {
        let value = (self.accessor)(subject).unwrap_or_default();
        if value.trim().is_empty() {
            errors.add(self.field, BLANK_MESSAGE);
        }
    }

    fn rule_name(&self) -> &'static str {
        "Presence"
    }

    fn should_skip(&self, subject: &T) -> bool {
        (self.accessor)(subject).is_none()
    }
}

/// Enforces a minimum length counted in characters, not bytes
pub struct MinLengthRule<T> {
    field: &'static str,
    minimum: usize,
    accessor: FieldAccessor<T>,
}

impl<T> MinLengthRule<T> {
    pub fn new(field: &'static str, minimum: usize, accessor: FieldAccessor<T>) -> Self {
        Self {
            field,
            minimum,
            accessor,
        }
    }
}

impl<T> ValidationRule<T> for MinLengthRule<T> {
    fn validate(&self, subject: &T, errors: &mut ValidationErrors) {
        let length = (self.accessor)(subject)
            .map(|value| value.chars().count())
            .unwrap_or_default();

        if length < self.minimum {
            errors.add(
                self.field,
                format!("is too short (minimum is {} characters)", self.minimum),
            );
        }
    }

    fn rule_name(&self) -> &'static str {
        "MinLength"
    }

    fn should_skip(&self, subject: &T) -> bool {
        (self.accessor)(subject).is_none()
    }
}
