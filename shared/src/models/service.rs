//! Configurable service models (e.g., leasable items)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kinds of services a business can configure
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Rental,
    Booking,
    Other,
}

/// A configured service offered by a business
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessService {
    pub id: Uuid,
    pub business_id: Uuid,
    pub service_type: ServiceType,
    pub name: String,
    pub name_swahili: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Availability status of a service item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    Available,
    Rented,
    Booked,
    Maintenance,
}

/// Unit for a service item's rental/booking duration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    Hour,
    #[default]
    Day,
    Week,
    Month,
}

/// An individual item under a service (e.g., one leasable machine)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: Uuid,
    pub service_id: Uuid,
    pub item_number: String,
    pub name: String,
    pub price: Decimal,
    pub duration_value: i64,
    pub duration_unit: DurationUnit,
    pub status: ItemStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for service create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub business_id: Uuid,
    pub service_type: ServiceType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_swahili: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for service item create/update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItemRequest {
    pub item_number: String,
    pub name: String,
    pub price: Decimal,
    pub duration_value: i64,
    pub duration_unit: DurationUnit,
    pub status: ItemStatus,
}
