//! Validation rules for the account form.
//!
//! Each editable field has an ordered list of rules. Rules are evaluated in
//! order and only the first failure is reported, so a field never carries
//! more than one message at a time. Validation works on a full
//! [`FormValues`] snapshot, which is how the confirm rule sees the password.

use crate::config::{AccountFormConfig, PasswordPolicy};
use crate::{ErrorKind, FieldError, FieldErrors, FieldName, FormValues};

pub const PASSWORD_REQUIRED: &str = "Password is required!";
pub const PASSWORD_PATTERN_MISMATCH: &str =
    "Password must be at least one letter, one number and one special character.";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Please confirm password!";
pub const PASSWORDS_MISMATCH: &str = "Please make sure your passwords match.";

/// Validator for the account form
#[derive(Debug, Clone, PartialEq)]
pub struct AccountFormValidator {
    config: AccountFormConfig,
}

impl Default for AccountFormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountFormValidator {
    pub fn new() -> Self {
        Self {
            config: AccountFormConfig::default(),
        }
    }

    pub fn with_config(config: AccountFormConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AccountFormConfig {
        &self.config
    }

    /// Validate every field and collect the active errors
    pub fn validate(&self, values: &FormValues) -> FieldErrors {
        FieldName::ALL
            .iter()
            .filter_map(|&field| self.validate_field(field, values).map(|error| (field, error)))
            .collect()
    }

    /// Validate one field against the given snapshot, returning the first failing rule
    pub fn validate_field(&self, field: FieldName, values: &FormValues) -> Option<FieldError> {
        let error = match field {
            FieldName::Email => None,
            FieldName::Password => self.check_password(&values.password),
            FieldName::ConfirmPassword => {
                self.check_confirm_password(&values.confirm_password, &values.password)
            }
        };

        if let Some(error) = &error {
            log::debug!(target: "validation", "{} failed {:?}: {}", field, error.kind, error.message);
        }
        error
    }

    /// Whether a password passes every password rule
    pub fn is_valid_password(&self, password: &str) -> bool {
        self.check_password(password).is_none()
    }

    fn check_password(&self, password: &str) -> Option<FieldError> {
        let policy = &self.config.password_policy;

        if password.is_empty() {
            return Some(FieldError::new(ErrorKind::Required, PASSWORD_REQUIRED));
        }

        if utf16_len(password) < policy.min_length {
            return Some(FieldError::new(
                ErrorKind::TooShort,
                format!("Password must be at least {} characters", policy.min_length),
            ));
        }

        if !has_required_composition(password, policy) {
            return Some(FieldError::new(
                ErrorKind::PatternMismatch,
                PASSWORD_PATTERN_MISMATCH,
            ));
        }

        None
    }

    fn check_confirm_password(&self, confirm_password: &str, password: &str) -> Option<FieldError> {
        if confirm_password.is_empty() {
            return Some(FieldError::new(ErrorKind::Required, CONFIRM_PASSWORD_REQUIRED));
        }

        if confirm_password != password {
            return Some(FieldError::new(ErrorKind::Mismatch, PASSWORDS_MISMATCH));
        }

        None
    }
}

/// Length as the browser's `minLength` counts it
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Letter, digit and special character must all appear before the first line
/// terminator, and the first character must itself be a permitted one.
fn has_required_composition(password: &str, policy: &PasswordPolicy) -> bool {
    let starts_permitted = password
        .chars()
        .next()
        .is_some_and(|c| policy.is_permitted_first(c));
    if !starts_permitted {
        return false;
    }

    let first_line = password.split(is_line_terminator).next().unwrap_or_default();
    let has_letter = first_line.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = first_line.chars().any(|c| c.is_ascii_digit());
    let has_special = first_line.chars().any(|c| policy.is_special(c));

    has_letter && has_digit && has_special
}
