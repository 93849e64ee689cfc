//! In-memory notification center
//!
//! Maintains two independent session-scoped collections: ephemeral toast
//! messages and persistent notification-center records. Any component may
//! hold a clone of the center; updates are synchronous within the client's
//! single-threaded event loop, so last-write-wins is acceptable.
//!
//! Nothing here performs I/O. Restarting the client discards all state.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use shared::{
    NewNotification, NotificationType, PersistentNotification, ToastNotification, ToastType,
};
use uuid::Uuid;

/// Options for showing a toast
#[derive(Debug, Clone, Default)]
pub struct ToastOptions {
    /// Override the type's default auto-dismiss duration
    pub duration_ms: Option<u64>,
    /// Persistent toasts are never auto-dismissed
    pub persistent: bool,
}

#[derive(Debug, Default)]
struct Inner {
    toasts: Vec<ToastNotification>,
    notifications: Vec<PersistentNotification>,
}

/// Shared notification center, injected wherever messages are raised
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    inner: Arc<Mutex<Inner>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Toasts
    // ========================================================================

    /// Show a toast; returns its id so it can be dismissed early
    pub fn show_toast(
        &self,
        toast_type: ToastType,
        title: impl Into<String>,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> Uuid {
        let toast = ToastNotification {
            id: Uuid::new_v4(),
            toast_type,
            title: title.into(),
            message: message.into(),
            duration_ms: options
                .duration_ms
                .unwrap_or_else(|| toast_type.default_duration_ms()),
            persistent: options.persistent,
            created_at: Utc::now(),
        };
        let id = toast.id;
        self.lock().toasts.push(toast);
        id
    }

    pub fn show_success(&self, title: impl Into<String>, message: impl Into<String>) -> Uuid {
        self.show_toast(ToastType::Success, title, message, ToastOptions::default())
    }

    pub fn show_error(&self, title: impl Into<String>, message: impl Into<String>) -> Uuid {
        self.show_toast(ToastType::Error, title, message, ToastOptions::default())
    }

    pub fn show_warning(&self, title: impl Into<String>, message: impl Into<String>) -> Uuid {
        self.show_toast(ToastType::Warning, title, message, ToastOptions::default())
    }

    pub fn show_info(&self, title: impl Into<String>, message: impl Into<String>) -> Uuid {
        self.show_toast(ToastType::Info, title, message, ToastOptions::default())
    }

    /// Remove a toast by id; no-op if absent
    pub fn remove_toast(&self, id: Uuid) {
        self.lock().toasts.retain(|t| t.id != id);
    }

    pub fn clear_all_toasts(&self) {
        self.lock().toasts.clear();
    }

    /// Drop every non-persistent toast whose duration has elapsed at `now`
    ///
    /// The host event loop decides when to sweep; tests drive this with a
    /// fake clock.
    pub fn expire_toasts(&self, now: DateTime<Utc>) {
        self.lock().toasts.retain(|t| !t.is_expired(now));
    }

    /// Snapshot of the current toasts, in insertion order
    pub fn toasts(&self) -> Vec<ToastNotification> {
        self.lock().toasts.clone()
    }

    // ========================================================================
    // Persistent Notifications
    // ========================================================================

    /// Add a notification-center record; most recent first
    pub fn add_notification(&self, input: NewNotification) -> Uuid {
        let record = PersistentNotification {
            id: Uuid::new_v4(),
            notification_type: input.notification_type,
            title: input.title,
            message: input.message,
            created_at: Utc::now(),
            is_read: false,
            action_url: input.action_url,
            metadata: input.metadata,
        };
        let id = record.id;
        self.lock().notifications.insert(0, record);
        id
    }

    /// Mark one notification as read; idempotent
    pub fn mark_as_read(&self, id: Uuid) {
        let mut inner = self.lock();
        if let Some(record) = inner.notifications.iter_mut().find(|n| n.id == id) {
            record.is_read = true;
        }
    }

    /// Mark every notification as read; idempotent
    pub fn mark_all_as_read(&self) {
        for record in self.lock().notifications.iter_mut() {
            record.is_read = true;
        }
    }

    /// Remove a notification by id; no-op if absent
    pub fn remove_notification(&self, id: Uuid) {
        self.lock().notifications.retain(|n| n.id != id);
    }

    pub fn clear_all_notifications(&self) {
        self.lock().notifications.clear();
    }

    /// Snapshot of the notification center, most recent first
    pub fn notifications(&self) -> Vec<PersistentNotification> {
        self.lock().notifications.clone()
    }

    /// Number of unread notifications
    pub fn unread_count(&self) -> usize {
        self.lock()
            .notifications
            .iter()
            .filter(|n| !n.is_read)
            .count()
    }

    /// Shorthand for raising a categorized notification without extras
    pub fn notify(
        &self,
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Uuid {
        self.add_notification(NewNotification::new(notification_type, title, message))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("notification state poisoned")
    }
}
