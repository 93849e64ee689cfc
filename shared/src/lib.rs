//! Shared types and models for the Duka retail management platform
//!
//! This crate contains types shared between the admin client and other
//! components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
