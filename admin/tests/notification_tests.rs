//! Notification center tests
//!
//! Tests for toasts and persistent notifications including:
//! - Per-type auto-dismiss durations and the persistent override
//! - Expiry sweeps against a fake clock
//! - Most-recent-first ordering and read-state idempotence

use chrono::{Duration, Utc};
use proptest::prelude::*;

use duka_admin::notifications::{NotificationCenter, ToastOptions};
use shared::{NotificationType, ToastType};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_default_durations_per_type() {
        let center = NotificationCenter::new();
        center.show_success("t", "m");
        center.show_info("t", "m");
        center.show_warning("t", "m");
        center.show_error("t", "m");

        let toasts = center.toasts();
        assert_eq!(toasts.len(), 4);
        assert_eq!(toasts[0].duration_ms, 5000);
        assert_eq!(toasts[1].duration_ms, 5000);
        assert_eq!(toasts[2].duration_ms, 6000);
        assert_eq!(toasts[3].duration_ms, 7000);
    }

    #[test]
    fn test_duration_override() {
        let center = NotificationCenter::new();
        center.show_toast(
            ToastType::Success,
            "t",
            "m",
            ToastOptions {
                duration_ms: Some(1500),
                persistent: false,
            },
        );
        assert_eq!(center.toasts()[0].duration_ms, 1500);
    }

    #[test]
    fn test_expiry_sweep_with_fake_clock() {
        let center = NotificationCenter::new();
        center.show_success("t", "m"); // 5000 ms
        center.show_error("t", "m"); // 7000 ms

        let now = Utc::now();
        center.expire_toasts(now + Duration::milliseconds(5500));
        let toasts = center.toasts();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].toast_type, ToastType::Error);

        center.expire_toasts(now + Duration::milliseconds(7500));
        assert!(center.toasts().is_empty());
    }

    #[test]
    fn test_persistent_toast_survives_sweeps() {
        let center = NotificationCenter::new();
        center.show_toast(
            ToastType::Warning,
            "t",
            "m",
            ToastOptions {
                duration_ms: None,
                persistent: true,
            },
        );

        center.expire_toasts(Utc::now() + Duration::days(1));
        assert_eq!(center.toasts().len(), 1);
    }

    #[test]
    fn test_remove_toast_is_idempotent() {
        let center = NotificationCenter::new();
        let id = center.show_success("t", "m");

        center.remove_toast(id);
        assert!(center.toasts().is_empty());
        // Removing again is a no-op
        center.remove_toast(id);
        assert!(center.toasts().is_empty());
    }

    #[test]
    fn test_notifications_most_recent_first() {
        let center = NotificationCenter::new();
        center.notify(NotificationType::Stock, "first", "m");
        center.notify(NotificationType::Order, "second", "m");
        center.notify(NotificationType::Payment, "third", "m");

        let records = center.notifications();
        assert_eq!(records[0].title, "third");
        assert_eq!(records[1].title, "second");
        assert_eq!(records[2].title, "first");
    }

    #[test]
    fn test_mark_as_read_and_unread_count() {
        let center = NotificationCenter::new();
        let a = center.notify(NotificationType::System, "a", "m");
        center.notify(NotificationType::User, "b", "m");
        assert_eq!(center.unread_count(), 2);

        center.mark_as_read(a);
        assert_eq!(center.unread_count(), 1);

        // Idempotent
        center.mark_as_read(a);
        assert_eq!(center.unread_count(), 1);

        center.mark_all_as_read();
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn test_collections_are_independent() {
        let center = NotificationCenter::new();
        center.show_success("toast", "m");
        center.notify(NotificationType::Stock, "record", "m");

        center.clear_all_toasts();
        assert!(center.toasts().is_empty());
        assert_eq!(center.notifications().len(), 1);

        center.clear_all_notifications();
        assert!(center.notifications().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let center = NotificationCenter::new();
        let other = center.clone();
        other.show_info("t", "m");

        assert_eq!(center.toasts().len(), 1);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        /// Marking all as read is idempotent regardless of how often it runs
        #[test]
        fn prop_mark_all_idempotent(count in 0usize..20, repeats in 1usize..5) {
            let center = NotificationCenter::new();
            for i in 0..count {
                center.notify(NotificationType::System, format!("n{}", i), "m");
            }

            for _ in 0..repeats {
                center.mark_all_as_read();
            }
            prop_assert_eq!(center.unread_count(), 0);
            prop_assert_eq!(center.notifications().len(), count);
        }

        /// A sweep never removes a toast before its duration has elapsed
        #[test]
        fn prop_sweep_respects_durations(elapsed_ms in 0i64..10_000) {
            let center = NotificationCenter::new();
            center.show_success("t", "m"); // 5000 ms
            let created = center.toasts()[0].created_at;

            center.expire_toasts(created + Duration::milliseconds(elapsed_ms));
            let expected = if elapsed_ms < 5000 { 1 } else { 0 };
            prop_assert_eq!(center.toasts().len(), expected);
        }
    }
}
