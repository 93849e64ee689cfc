//! Inventory and stock movement models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An inventory item as reported for one store location
///
/// Read-only from the admin client's perspective; `quantity` is the
/// store-scoped on-hand count and is always non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    pub product_id: Uuid,
    pub name: String,
    pub name_swahili: Option<String>,
    pub sku: String,
    pub quantity: i64,
    /// Informational reorder threshold
    pub reorder_point: Option<i64>,
}

/// One line of a transfer request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferItem {
    pub product_id: Uuid,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Request body for `POST /api/admin/inventory/transfer`
///
/// Exactly one of `to_store_id` and `external_destination` is set,
/// discriminated by `is_external_movement`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub business_id: Uuid,
    pub from_store_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_store_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_destination: Option<String>,
    pub is_external_movement: bool,
    pub transfers: Vec<TransferItem>,
}

/// Reasons for removing or correcting stock
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdjustmentType {
    Damage,
    Expired,
    Theft,
    Lost,
    QualityIssue,
    Breakage,
    Spoilage,
    ReturnToSupplier,
    Other,
}

/// Request body for `POST /api/admin/stock-adjustments`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAdjustmentRequest {
    pub business_id: Uuid,
    pub product_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<Uuid>,
    pub adjustment_type: AdjustmentType,
    pub quantity: i64,
    pub unit_cost: Decimal,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,
    pub adjustment_date: NaiveDate,
}

impl StockAdjustmentRequest {
    /// Total write-off cost of the adjustment
    pub fn total_cost(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.quantity)
    }
}
