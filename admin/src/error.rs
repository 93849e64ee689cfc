//! Error handling for the Duka admin client
//!
//! Provides consistent error reporting in English and Swahili. Every
//! failure surfaces either as an inline field error or as an error toast;
//! nothing is silently dropped.

use shared::Language;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client-detected validation errors, reported inline next to a field
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_sw: String,
    },

    // A submission is already in flight for this form
    #[error("A submission is already in progress")]
    SubmissionInFlight,

    // Server-declared failure: `{success: false, message}`
    #[error("Request failed: {0}")]
    Api(String),

    // Transport-level failure (fetch threw or the response was unreadable)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl AppError {
    /// Construct a bilingual field validation error
    pub fn validation(
        field: impl Into<String>,
        message: impl Into<String>,
        message_sw: impl Into<String>,
    ) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
            message_sw: message_sw.into(),
        }
    }

    /// The offending field, for inline display
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Message suitable for showing to the operator
    pub fn user_message(&self, language: Language) -> String {
        match self {
            AppError::Validation {
                message,
                message_sw,
                ..
            } => match language {
                Language::English => message.clone(),
                Language::Swahili => message_sw.clone(),
            },
            AppError::Api(message) => message.clone(),
            _ => crate::i18n::COMMON.generic_error.get(language).to_string(),
        }
    }
}

/// Result type alias for client operations
pub type AppResult<T> = Result<T, AppError>;

/// Whether a server message describes a slug-uniqueness violation
///
/// The admin API reports slug collisions as a plain application error;
/// the create-business form pattern-matches it so the error can be
/// re-attached to the slug field.
pub fn is_slug_conflict(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("slug") && lower.contains("exist")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_conflict_detection() {
        assert!(is_slug_conflict("A business with this slug already exists"));
        assert!(is_slug_conflict("Slug exists"));
        assert!(!is_slug_conflict("Name is required"));
    }
}
