//! Duka Admin Client
//!
//! Headless administrative client for the Duka multi-tenant retail and
//! wholesale management platform. Covers business onboarding and settings,
//! user management, store locations, inventory transfers and adjustments,
//! service configuration, credit payment handling and subscriptions.
//!
//! All persistence and authorization live behind the admin REST API; this
//! crate holds the client-side state machines, validation, notifications
//! and typed API bindings.

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod i18n;
pub mod notifications;
pub mod progress;
pub mod workflows;

pub use api::AdminApiClient;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use notifications::{NotificationCenter, ToastOptions};
pub use progress::NavigationProgress;
