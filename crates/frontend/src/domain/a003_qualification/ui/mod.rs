pub mod details;
pub mod list;

pub use details::QualificationDetails;
pub use list::QualificationList;
