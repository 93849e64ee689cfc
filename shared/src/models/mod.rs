//! Domain models for the Duka retail management platform

mod business;
mod credit;
mod inventory;
mod notification;
mod service;
mod store;
mod subscription;
mod user;

pub use business::*;
pub use credit::*;
pub use inventory::*;
pub use notification::*;
pub use service::*;
pub use store::*;
pub use subscription::*;
pub use user::*;
