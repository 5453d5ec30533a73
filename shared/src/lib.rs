use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub mod config;
pub mod form_state;
pub mod validation;

pub use config::{AccountFormConfig, PasswordPolicy};
pub use form_state::{FieldStatus, FormState};
pub use validation::AccountFormValidator;

/// Fields of the account form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const ALL: [FieldName; 3] = [
        FieldName::Email,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// DOM id / serialized key of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// Whether the user may edit the field
    pub fn is_editable(&self) -> bool {
        !matches!(self, FieldName::Email)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the form's current values
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
        }
    }

    pub(crate) fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Email => self.email = value,
            FieldName::Password => self.password = value,
            FieldName::ConfirmPassword => self.confirm_password = value,
        }
    }
}

/// Kind of rule a field failed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorKind {
    #[serde(rename = "required")]
    Required,
    #[serde(rename = "minLength")]
    TooShort,
    #[serde(rename = "pattern")]
    PatternMismatch,
    #[serde(rename = "validate")]
    Mismatch,
}

/// A single field's active validation error
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Field name to active error; absent fields are valid
pub type FieldErrors = BTreeMap<FieldName, FieldError>;

/// Returned by a submit attempt that failed validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("form has {} invalid field(s)", .errors.len())]
pub struct InvalidForm {
    pub errors: FieldErrors,
}
