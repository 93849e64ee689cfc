//! Subscription plan models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Billing cycle for a subscription
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

/// A subscription plan offered by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_monthly: Decimal,
    pub price_annual: Decimal,
    pub max_users: i64,
    pub max_stores: i64,
}

/// The subscription currently active for a business
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSubscription {
    pub plan_id: Uuid,
    pub plan_name: String,
    pub billing_cycle: BillingCycle,
    pub active_until: DateTime<Utc>,
}

/// Request body for `POST /api/admin/subscription/activate`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivateSubscriptionRequest {
    pub business_id: Uuid,
    pub plan_id: Uuid,
    pub billing_cycle: BillingCycle,
}
