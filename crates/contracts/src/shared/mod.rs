pub mod envelope;
pub mod error_body;
pub mod metadata;
