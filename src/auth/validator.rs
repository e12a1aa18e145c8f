//! Field validation for the sign-in form.
//!
//! Rules are declarative per-field tables checked in order; the first
//! violated rule supplies the message for that field. Validation is pure and
//! never reaches the network.

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;

use crate::auth::submitter::Credentials;

/// Minimum number of characters a username must have.
pub const USERNAME_MIN_LEN: usize = 6;

/// Raw form input as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

impl LoginInput {
    /// The credentials this input submits as: username trimmed, password verbatim.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.trim().to_owned(),
            password: self.password.clone(),
        }
    }
}

/// Per-field validation outcome; `None` means the field passed every rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    /// True when no field carries a message.
    pub fn is_valid(&self) -> bool {
        self.username.is_none() && self.password.is_none()
    }
}

/// A predicate over the raw field value plus the message shown when it fails.
type FieldRule = (fn(&str) -> bool, &'static str);

const USERNAME_RULES: &[FieldRule] = &[
    (|value| !value.trim().is_empty(), "Please enter your username."),
    (
        |value| value.trim().chars().count() >= USERNAME_MIN_LEN,
        "Username must be at least 6 characters.",
    ),
];

const PASSWORD_RULES: &[FieldRule] = &[(|value| !value.is_empty(), "Please enter your password.")];

fn first_violation(value: &str, rules: &[FieldRule]) -> Option<&'static str> {
    rules.iter().find(|(passes, _)| !passes(value)).map(|(_, message)| *message)
}

/// Check `input` against every field's rules.
pub fn validate(input: &LoginInput) -> FieldErrors {
    FieldErrors {
        username: first_violation(&input.username, USERNAME_RULES),
        password: first_violation(&input.password, PASSWORD_RULES),
    }
}
