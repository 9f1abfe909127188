//! Form models for the account flows.
//!
//! The signup form owns every validation rule that can be checked without
//! the database; username uniqueness belongs to the account service. Error
//! messages are attached per field so the form can re-render with each
//! problem next to the input that caused it.

use serde::Deserialize;

/// Maximum accepted username length, in characters.
pub const MAX_USERNAME_LENGTH: usize = 150;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const FIELD_REQUIRED: &str = "This field is required.";

pub const USERNAME_INVALID: &str = "Enter a valid username. This value may contain only letters, \
                                    numbers, and @/./+/-/_ characters.";

pub const USERNAME_TAKEN: &str = "A user with that username already exists.";

pub const PASSWORD_MISMATCH: &str = "The two password fields didn't match.";

pub const PASSWORD_ENTIRELY_NUMERIC: &str = "This password is entirely numeric.";

pub const LOGIN_FAILED: &str = "Please enter a correct username and password. Note that both \
                                fields may be case-sensitive.";

/// Fields submitted by the signup form.
///
/// Missing fields deserialize to empty strings so an incomplete submission
/// reports "required" errors instead of rejecting the request body.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}

/// Fields submitted by the login form.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Per-field validation messages for the signup form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SignupErrors {
    pub username: Vec<String>,
    pub password1: Vec<String>,
    pub password2: Vec<String>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password1.is_empty() && self.password2.is_empty()
    }
}

impl SignupForm {
    /// Validate everything that does not require the account store.
    ///
    /// Password quality rules only run once both password fields are present
    /// and matching, so a submission with a typo'd confirmation reports the
    /// mismatch alone. Cross-field errors land on `password2`.
    pub fn validate(&self) -> SignupErrors {
        let mut errors = SignupErrors::default();

        if self.username.is_empty() {
            errors.username.push(FIELD_REQUIRED.to_string());
        } else {
            if self.username.chars().count() > MAX_USERNAME_LENGTH {
                errors.username.push(format!(
                    "Ensure this value has at most {} characters.",
                    MAX_USERNAME_LENGTH
                ));
            }
            if !self.username.chars().all(is_username_char) {
                errors.username.push(USERNAME_INVALID.to_string());
            }
        }

        if self.password1.is_empty() {
            errors.password1.push(FIELD_REQUIRED.to_string());
        }
        if self.password2.is_empty() {
            errors.password2.push(FIELD_REQUIRED.to_string());
        }

        if !self.password1.is_empty() && !self.password2.is_empty() {
            if self.password1 != self.password2 {
                errors.password2.push(PASSWORD_MISMATCH.to_string());
            } else {
                if self.password1.chars().count() < MIN_PASSWORD_LENGTH {
                    errors.password2.push(format!(
                        "This password is too short. It must contain at least {} characters.",
                        MIN_PASSWORD_LENGTH
                    ));
                }
                if self.password1.chars().all(|c| c.is_numeric()) {
                    errors.password2.push(PASSWORD_ENTIRELY_NUMERIC.to_string());
                }
            }
        }

        errors
    }
}

fn is_username_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_')
}
