//! Generic master list: search, paging, delete with confirmation, export
//!
//! - state.rs: pure list state and its transitions
//! - view_model.rs: network calls and toasts around the state
//! - view.rs: the screen

pub mod state;
pub mod view;
pub mod view_model;

pub use state::ListState;
pub use view::master_list_view;
pub use view_model::ListViewModel;
