//! Client-side notification models
//!
//! Both collections are session-scoped: nothing here is backed by durable
//! storage, and restarting the client discards all state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a transient toast message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    /// Default auto-dismiss duration for this toast type, in milliseconds
    pub fn default_duration_ms(&self) -> u64 {
        match self {
            ToastType::Success | ToastType::Info => 5000,
            ToastType::Warning => 6000,
            ToastType::Error => 7000,
        }
    }
}

/// A transient on-screen toast message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToastNotification {
    pub id: Uuid,
    pub toast_type: ToastType,
    pub title: String,
    pub message: String,
    pub duration_ms: u64,
    /// Persistent toasts never auto-dismiss
    pub persistent: bool,
    pub created_at: DateTime<Utc>,
}

impl ToastNotification {
    /// Whether this toast should be removed at `now`
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        if self.persistent {
            return false;
        }
        now >= self.created_at + chrono::Duration::milliseconds(self.duration_ms as i64)
    }
}

/// Category of a persistent notification-center record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    System,
    Order,
    Payment,
    Stock,
    User,
}

/// A record in the notification center
///
/// After creation, only `is_read` is ever mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistentNotification {
    pub id: Uuid,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
    pub action_url: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// Input for adding a notification-center record
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub action_url: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

impl NewNotification {
    pub fn new(
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            notification_type,
            title: title.into(),
            message: message.into(),
            action_url: None,
            metadata: None,
        }
    }
}
