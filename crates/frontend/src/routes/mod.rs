pub mod query;
pub mod routes;

pub use query::{edit_href, use_edit_id, EditQuery};
