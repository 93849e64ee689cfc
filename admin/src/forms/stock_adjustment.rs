//! Stock adjustment (write-off / correction) form

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{
    validate_against_stock, AdjustmentType, InventoryItem, Language, StockAdjustmentRequest,
};
use uuid::Uuid;

use crate::api::AdminApiClient;
use crate::error::{AppError, AppResult};
use crate::forms::business::{first_error, optional};
use crate::forms::{check, report_failure, FieldError, FieldErrors};
use crate::i18n::COMMON;
use crate::notifications::NotificationCenter;

/// Stock adjustment dialog state
///
/// Opened for a specific product at a specific location; the on-hand
/// quantity captured at open time bounds the adjustable amount.
#[derive(Debug, Clone)]
pub struct StockAdjustmentForm {
    business_id: Uuid,
    product_id: Uuid,
    product_name: String,
    store_id: Option<Uuid>,
    on_hand: i64,
    adjustment_type: AdjustmentType,
    quantity: i64,
    unit_cost: Decimal,
    reason: String,
    notes: String,
    reference_number: String,
    adjustment_date: NaiveDate,
    errors: FieldErrors,
    is_submitting: bool,
}

impl StockAdjustmentForm {
    /// Open the dialog for one product at one location
    pub fn new(
        business_id: Uuid,
        product: &InventoryItem,
        store_id: Option<Uuid>,
        today: NaiveDate,
    ) -> Self {
        Self {
            business_id,
            product_id: product.product_id,
            product_name: product.name.clone(),
            store_id,
            on_hand: product.quantity,
            adjustment_type: AdjustmentType::Damage,
            quantity: 0,
            unit_cost: Decimal::ZERO,
            reason: String::new(),
            notes: String::new(),
            reference_number: String::new(),
            adjustment_date: today,
            errors: FieldErrors::new(),
            is_submitting: false,
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn on_hand(&self) -> i64 {
        self.on_hand
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn set_adjustment_type(&mut self, adjustment_type: AdjustmentType) {
        self.adjustment_type = adjustment_type;
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn set_unit_cost(&mut self, unit_cost: Decimal) {
        self.unit_cost = unit_cost;
    }

    pub fn set_reason(&mut self, value: impl Into<String>) {
        self.reason = value.into();
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        self.notes = value.into();
    }

    pub fn set_reference_number(&mut self, value: impl Into<String>) {
        self.reference_number = value.into();
    }

    pub fn set_adjustment_date(&mut self, date: NaiveDate) {
        self.adjustment_date = date;
    }

    /// Live write-off total shown as the operator types
    pub fn total_cost(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.quantity.max(0))
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FieldErrors::new();
        check(
            &mut errors,
            "quantity",
            validate_against_stock(self.quantity, self.on_hand),
            "Idadi inazidi kiasi kilichopo",
        );
        if self.unit_cost < Decimal::ZERO {
            errors.insert(
                "unitCost".to_string(),
                FieldError::new("Unit cost cannot be negative", "Gharama haiwezi kuwa hasi"),
            );
        }
        if self.reason.trim().is_empty() {
            errors.insert(
                "reason".to_string(),
                FieldError::new("Reason is required", "Sababu inahitajika"),
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    pub fn build_request(&self) -> StockAdjustmentRequest {
        StockAdjustmentRequest {
            business_id: self.business_id,
            product_id: self.product_id,
            store_id: self.store_id,
            adjustment_type: self.adjustment_type,
            quantity: self.quantity,
            unit_cost: self.unit_cost,
            reason: self.reason.trim().to_string(),
            notes: optional(&self.notes),
            reference_number: optional(&self.reference_number),
            adjustment_date: self.adjustment_date,
        }
    }

    /// Guard + validate + build; no HTTP call happens on failure
    pub fn begin_submission(&mut self) -> AppResult<StockAdjustmentRequest> {
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

    /// Submit the adjustment
    pub async fn submit<F>(
        &mut self,
        api: &AdminApiClient,
        notifications: &NotificationCenter,
        language: Language,
        on_adjusted: F,
    ) -> AppResult<()>
    where
        F: FnOnce(),
    {
        let request = self.begin_submission()?;
        match api.submit_stock_adjustment(&request).await {
            Ok(()) => {
                self.is_submitting = false;
                tracing::info!(
                    product = %request.product_id,
                    quantity = request.quantity,
                    "stock adjustment recorded"
                );
                notifications.show_success(&self.product_name, COMMON.saved.get(language));
                on_adjusted();
                Ok(())
            }
            Err(err) => {
                self.record_failure();
                report_failure(notifications, "Stock adjustment", &err, language);
                Err(err)
            }
        }
    }
}
