pub mod details;
pub mod list;

pub use details::RoleDetails;
pub use list::RoleList;
