pub mod details;
pub mod list;

pub use details::SupplierDetails;
pub use list::SupplierList;
