pub mod details;
pub mod list;

pub use details::UnitDetails;
pub use list::UnitList;
