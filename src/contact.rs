//! Contact form input and validation.
//!
//! Submissions never leave the browser: an accepted form is logged and the
//! page shows a success banner for a fixed window.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// One submission attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Why a submission was rejected. `Display` is the text shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    EmptyFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ContactForm {
    /// Check required fields first, then the email shape.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::EmptyFields`] if any field is empty, otherwise
    /// [`ContactError::InvalidEmail`] if the email does not match.
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|field| field.is_empty()) {
            return Err(ContactError::EmptyFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL
        .get_or_init(|| match Regex::new(EMAIL_PATTERN) {
            Ok(re) => Some(re),
            Err(e) => {
                log::error!("email pattern failed to compile: {e}");
                None
            }
        })
        .as_ref()
}

/// Where the contact form sits between submissions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Form visible and accepting input.
    #[default]
    Idle,
    /// Form hidden, success banner visible until the reset timer fires.
    ShowingSuccess,
}
