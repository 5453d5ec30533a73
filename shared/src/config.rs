use serde::{Deserialize, Serialize};

/// Account email shown when the host page doesn't provide one
pub const DEFAULT_ACCOUNT_EMAIL: &str = "hello@branch8.com";

/// Rules a new password has to satisfy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum length in UTF-16 code units
    pub min_length: usize,
    /// Characters that count as "special"; also allowed as the first character
    pub special_characters: String,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            special_characters: "@$!%*#?&".to_string(),
        }
    }
}

impl PasswordPolicy {
    pub fn is_special(&self, c: char) -> bool {
        self.special_characters.contains(c)
    }

    /// Characters a password may start with
    pub fn is_permitted_first(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.is_special(c)
    }
}

/// Configuration for one account form instance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountFormConfig {
    pub account_email: String,
    pub password_policy: PasswordPolicy,
}

impl Default for AccountFormConfig {
    fn default() -> Self {
        Self {
            account_email: DEFAULT_ACCOUNT_EMAIL.to_string(),
            password_policy: PasswordPolicy::default(),
        }
    }
}

impl AccountFormConfig {
    pub fn with_account_email(email: impl Into<String>) -> Self {
        Self {
            account_email: email.into(),
            ..Self::default()
        }
    }
}
