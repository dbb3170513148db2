//! Generic create/edit form with confirmation before submit
//!
//! - state.rs: draft, phases and submit outcomes
//! - view_model.rs: load and submit calls
//! - view.rs: the screen

pub mod state;
pub mod view;
pub mod view_model;

pub use state::{FormPhase, FormState, SubmitOutcome, SubmitPlan, SubmitRequest};
pub use view::master_form_view;
pub use view_model::DetailFormViewModel;
