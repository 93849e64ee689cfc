//! Form controllers for the admin modals
//!
//! Every controller follows the same contract: typed field setters, a
//! `validate` pass producing a field → message map, an `is_submitting`
//! guard so a pending request blocks re-entry, and result handling that
//! preserves the operator's input on failure.

use std::collections::BTreeMap;

use shared::Language;

use crate::error::AppError;
use crate::notifications::NotificationCenter;

pub mod business;
pub mod credit_payment;
pub mod reminder;
pub mod service;
pub mod stock_adjustment;
pub mod store;
pub mod user;

pub use business::{BusinessSettingsForm, CreateBusinessForm, WizardStep};
pub use credit_payment::CreditPaymentForm;
pub use reminder::ReminderForm;
pub use service::{ServiceForm, ServiceItemForm};
pub use stock_adjustment::StockAdjustmentForm;
pub use store::StoreForm;
pub use user::{AddUserForm, EditUserForm, UserFormMode};

/// A bilingual inline field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub message: String,
    pub message_sw: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>, message_sw: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            message_sw: message_sw.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.message,
            Language::Swahili => &self.message_sw,
        }
    }
}

/// Field name → inline error, as displayed next to each input
pub type FieldErrors = BTreeMap<String, FieldError>;

/// Record a validator outcome into the error map
pub(crate) fn check(
    errors: &mut FieldErrors,
    field: &str,
    result: Result<(), &'static str>,
    message_sw: &'static str,
) {
    if let Err(message) = result {
        errors.insert(field.to_string(), FieldError::new(message, message_sw));
    }
}

/// Surface a submission failure as an error toast
///
/// Uses the server's message when present, otherwise the generic localized
/// fallback. The form stays open with the operator's input intact.
pub(crate) fn report_failure(
    notifications: &NotificationCenter,
    title: &str,
    err: &AppError,
    language: Language,
) {
    tracing::error!(error = %err, "{} submission failed", title);
    notifications.show_error(title, err.user_message(language));
}
