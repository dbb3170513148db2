//! REST access for master records
//!
//! - error.rs: typed failure taxonomy of the network boundary
//! - client.rs: per-entity HTTP client (gloo-net)

mod client;
mod error;

pub use client::RecordClient;
pub use error::ApiError;
