//! Credit sale payment recording form

use rust_decimal::Decimal;
use shared::{CreditPaymentRequest, CreditSale, Language, PaymentMethod};

use crate::api::AdminApiClient;
use crate::error::{AppError, AppResult};
use crate::forms::business::{first_error, optional};
use crate::forms::{report_failure, FieldError, FieldErrors};
use crate::i18n::COMMON;
use crate::notifications::NotificationCenter;

/// Record-payment dialog state, opened for one outstanding credit sale
#[derive(Debug, Clone)]
pub struct CreditPaymentForm {
    sale: CreditSale,
    amount: Decimal,
    payment_method: PaymentMethod,
    reference: String,
    notes: String,
    errors: FieldErrors,
    is_submitting: bool,
}

impl CreditPaymentForm {
    /// Open the dialog, defaulting to paying the full outstanding amount
    pub fn new(sale: CreditSale) -> Self {
        let amount = sale.outstanding_amount;
        Self {
            sale,
            amount,
            payment_method: PaymentMethod::default(),
            reference: String::new(),
            notes: String::new(),
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    pub fn sale(&self) -> &CreditSale {
        &self.sale
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Balance that would remain after this payment
    pub fn remaining_after(&self) -> Decimal {
        self.sale.outstanding_amount - self.amount
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
    }

    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = method;
    }

    pub fn set_reference(&mut self, value: impl Into<String>) {
        self.reference = value.into();
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        self.notes = value.into();
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        if self.amount <= Decimal::ZERO {
            errors.insert(
                "amount".to_string(),
                FieldError::new("Amount must be positive", "Kiasi lazima kiwe chanya"),
            );
        } else if self.amount > self.sale.outstanding_amount {
            errors.insert(
                "amount".to_string(),
                FieldError::new(
                    "Amount exceeds the outstanding balance",
                    "Kiasi kinazidi deni lililobaki",
                ),
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn build_request(&self) -> CreditPaymentRequest {
        CreditPaymentRequest {
            order_id: self.sale.id,
            customer_id: self.sale.customer_id,
            business_id: self.sale.business_id,
            amount: self.amount,
            payment_method: self.payment_method,
            reference: optional(&self.reference),
            notes: optional(&self.notes),
        }
    }

    /// Guard + validate + build; no HTTP call happens on failure
    pub fn begin_submission(&mut self) -> AppResult<CreditPaymentRequest> {
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

    /// Record the payment
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_recorded: F,
    ) -> AppResult<()>
    where
        F: FnOnce(),
    {
        let request = self.begin_submission()?;
        match api.record_credit_payment(&request).await {
            Ok(()) => {
                self.is_submitting = false;
                tracing::info!(
                    order = %request.order_id,
                    amount = %request.amount,
                    "credit payment recorded"
                );
                notifications.show_success(&self.sale.customer_name, COMMON.saved.get(language));
                on_recorded();
                Ok(())
            }
            Err(err) => {
                self.record_failure();
                report_failure(notifications, "Payment", &err, language);
                Err(err)
            }
        }
    }
}
