//! Form state machine for the account form.
//!
//! Every field starts `Untouched`. A blur or a submit attempt touches it and
//! validates it; from then on every edit re-validates it. Edits to untouched
//! fields never produce feedback.

use std::collections::BTreeSet;

use crate::config::AccountFormConfig;
use crate::validation::AccountFormValidator;
use crate::{FieldError, FieldErrors, FieldName, FormValues, InvalidForm};

/// Visible validation state of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid,
}

/// State of one mounted account form
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: FormValues,
    touched: BTreeSet<FieldName>,
    errors: FieldErrors,
    submit_count: u32,
    validator: AccountFormValidator,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(AccountFormConfig::default())
    }
}

impl FormState {
    pub fn new(config: AccountFormConfig) -> Self {
        Self {
            values: FormValues::with_email(config.account_email.clone()),
            touched: BTreeSet::new(),
            errors: FieldErrors::new(),
            submit_count: 0,
            validator: AccountFormValidator::with_config(config),
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    pub fn status(&self, field: FieldName) -> FieldStatus {
        if !self.is_touched(field) {
            FieldStatus::Untouched
        } else if self.errors.contains_key(&field) {
            FieldStatus::Invalid
        } else {
            FieldStatus::Valid
        }
    }

    /// Number of submit attempts, successful or not
    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Apply an edit. Returns false when the field is read-only and the edit was dropped.
    pub fn change(&mut self, field: FieldName, value: impl Into<String>) -> bool {
        if !field.is_editable() {
            log::warn!(target: "account-form", "ignoring edit to read-only field {}", field);
            return false;
        }

        self.values.set(field, value.into());
        if self.is_touched(field) {
            self.revalidate(field);
        }
        true
    }

    /// Field lost focus
    pub fn blur(&mut self, field: FieldName) {
        self.touched.insert(field);
        self.revalidate(field);
    }

    /// Touch and validate every field, then either hand back the values or the errors
    pub fn submit(&mut self) -> Result<FormValues, InvalidForm> {
        self.submit_count += 1;
        self.touched.extend(FieldName::ALL);
        self.errors = self.validator.validate(&self.values);

        if self.errors.is_empty() {
            log::info!(target: "account-form", "submit #{} accepted", self.submit_count);
            Ok(self.values.clone())
        } else {
            log::warn!(
                target: "account-form",
                "submit #{} rejected: {} invalid field(s)",
                self.submit_count,
                self.errors.len()
            );
            Err(InvalidForm {
                errors: self.errors.clone(),
            })
        }
    }

    fn revalidate(&mut self, field: FieldName) {
        match self.validator.validate_field(field, &self.values) {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}
