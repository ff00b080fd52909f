//! Pre-submission checks on a [`FeedbackDraft`].
//!
//! Runs before any network call; a draft that fails never reaches the store.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::models::FeedbackDraft;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email regex"));

/// Why a draft was rejected. The `Display` text is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields.")]
    MissingFields,
    #[error("Invalid email format.")]
    InvalidEmail,
}

/// Minimal address shape: something, `@`, something, `.`, something.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check required fields first, then the email shape.
pub fn validate_draft(draft: &FeedbackDraft) -> Result<(), ValidationError> {
    let missing = [&draft.name, &draft.email, &draft.comment]
        .iter()
        .any(|field| field.is_empty());
    if missing {
        return Err(ValidationError::MissingFields);
    }
    if !is_valid_email(&draft.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}
