//! Common types and traits for all master records

pub mod master_record;
pub mod serde_helpers;

// Re-exports
pub use master_record::{unknown_field, MasterRecord, RecordId};
pub use serde_helpers::null_to_default;
