//! Multi-step client-side workflows

pub mod transfer;

pub use transfer::{Destination, TransferStage, TransferWorkflow};
