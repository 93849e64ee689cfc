//! Payment reminder composer

use std::collections::BTreeSet;

use shared::{
    render_reminder_preview, CreditSale, Language, PaymentReminderRequest, ReminderChannel,
};
use uuid::Uuid;

use crate::api::AdminApiClient;
use crate::error::{AppError, AppResult};
use crate::forms::business::first_error;
use crate::forms::{report_failure, FieldError, FieldErrors};
use crate::notifications::NotificationCenter;

const DEFAULT_TEMPLATE: &str = "Hello {{customer}}, this is a reminder from {{business}}: \
your balance of {{amount}} was due on {{dueDate}}. Thank you.";

/// Bulk payment-reminder dialog state
///
/// The operator picks overdue sales from the list, chooses a delivery
/// channel and edits the message template; the server substitutes the
/// placeholders per recipient when sending.
#[derive(Debug, Clone)]
pub struct ReminderForm {
    business_id: Uuid,
    business_name: String,
    sales: Vec<CreditSale>,
    selected: BTreeSet<Uuid>,
    channel: ReminderChannel,
    message: String,
    errors: FieldErrors,
    is_submitting: bool,
}

impl ReminderForm {
    pub fn new(business_id: Uuid, business_name: impl Into<String>, sales: Vec<CreditSale>) -> Self {
        Self {
            business_id,
            business_name: business_name.into(),
            sales,
            selected: BTreeSet::new(),
            channel: ReminderChannel::default(),
            message: DEFAULT_TEMPLATE.to_string(),
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    pub fn sales(&self) -> &[CreditSale] {
        &self.sales
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, sale_id: Uuid) -> bool {
        self.selected.contains(&sale_id)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Toggle one sale in or out of the recipient set
    pub fn toggle(&mut self, sale_id: Uuid) {
        if !self.selected.remove(&sale_id) {
            if self.sales.iter().any(|s| s.id == sale_id) {
                self.selected.insert(sale_id);
            }
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.sales.iter().map(|s| s.id).collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn set_channel(&mut self, channel: ReminderChannel) {
        self.channel = channel;
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Preview the message as the first selected recipient would see it
    pub fn preview(&self) -> Option<String> {
        let sale_id = self.selected.iter().next()?;
        let sale = self.sales.iter().find(|s| s.id == *sale_id)?;
        Some(render_reminder_preview(
            &self.message,
            sale,
            &self.business_name,
        ))
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        if self.selected.is_empty() {
            errors.insert(
                "saleIds".to_string(),
                FieldError::new(
                    "Select at least one customer",
                    "Chagua angalau mteja mmoja",
                ),
            );
        }
        if self.message.trim().is_empty() {
            errors.insert(
                "message".to_string(),
                FieldError::new("Message is required", "Ujumbe unahitajika"),
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn build_request(&self) -> PaymentReminderRequest {
        PaymentReminderRequest {
            business_id: self.business_id,
            sale_ids: self.selected.iter().copied().collect(),
            channel: self.channel,
            message: self.message.trim().to_string(),
        }
    }

    /// Guard + validate + build; no HTTP call happens on failure
    pub fn begin_submission(&mut self) -> AppResult<PaymentReminderRequest> {
        if self.is_submitting {
            return Err(AppError::SubmissionInFlight);
        }
        if !self.validate() {
            return Err(first_error(&self.errors));
        }
        self.is_submitting = true;
        Ok(self.build_request())
    }

    pub fn record_failure(&mut self) {
        self.is_submitting = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Send the reminders
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_sent: F,
    ) -> AppResult<()>
    where
        F: FnOnce(),
    {
        let request = self.begin_submission()?;
        match api.send_payment_reminders(&request).await {
            Ok(()) => {
                self.is_submitting = false;
                tracing::info!(recipients = request.sale_ids.len(), "payment reminders sent");
                let message = match language {
                    Language::English => format!("Reminders sent to {} customers", request.sale_ids.len()),
                    Language::Swahili => format!("Vikumbusho vimetumwa kwa wateja {}", request.sale_ids.len()),
                };
                notifications.show_success("Reminders", message);
                self.clear_selection();
                on_sent();
                Ok(())
            }
            Err(err) => {
                self.record_failure();
                report_failure(notifications, "Reminders", &err, language);
                Err(err)
            }
        }
    }
}
