//! Credit sale payment and reminder models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment methods accepted for credit-sale payments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    Cash,
    MobileMoney,
    BankTransfer,
    Card,
}

/// An outstanding credit sale, as listed for payment recording and reminders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditSale {
    pub id: Uuid,
    pub business_id: Uuid,
    pub customer_id: Option<Uuid>,
    pub customer_name: String,
    pub total_amount: Decimal,
    pub outstanding_amount: Decimal,
    pub due_date: NaiveDate,
}

/// Request body for `POST /api/admin/credit/payments`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditPaymentRequest {
    pub order_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<Uuid>,
    pub business_id: Uuid,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Delivery channel for payment reminders
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReminderChannel {
    #[default]
    Sms,
    Email,
    Both,
}

/// Request body for `POST /api/admin/credit/reminders`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReminderRequest {
    pub business_id: Uuid,
    pub sale_ids: Vec<Uuid>,
    pub channel: ReminderChannel,
    pub message: String,
}

/// Render a reminder template for preview
///
/// Substitutes the `{{customer}}`, `{{amount}}`, `{{dueDate}}` and
/// `{{business}}` placeholders. Preview only; the server performs the
/// authoritative substitution per recipient when sending.
pub fn render_reminder_preview(
    template: &str,
    sale: &CreditSale,
    business_name: &str,
) -> String {
    template
        .replace("{{customer}}", &sale.customer_name)
        .replace("{{amount}}", &sale.outstanding_amount.to_string())
        .replace("{{dueDate}}", &sale.due_date.format("%Y-%m-%d").to_string())
        .replace("{{business}}", business_name)
}
