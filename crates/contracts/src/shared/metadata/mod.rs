//! Field metadata for master records
//!
//! Every master record publishes a static slice of [`FieldMetadata`] that drives
//! the generic list table, the generic form, search and export columns.
//! All types use 'static lifetimes so the slices can live in `const` items.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::MasterRecord;
//!
//! for field in Supplier::field_metadata() {
//!     if field.validation.required {
//!         println!("Required: {}", field.ui.label);
//!     }
//! }
//! ```

mod field_type;
mod types;
mod validation;

pub use field_type::FieldType;
pub use types::{FieldMetadata, FieldUiMetadata};
pub use validation::ValidationRules;
