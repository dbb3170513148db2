use crate::shared::details_form::master_form_view;
use contracts::domain::a004_unit::aggregate::Unit;
use leptos::prelude::*;

/// Create form, or edit form with `?id=`
#[component]
pub fn UnitDetails() -> impl IntoView {
    master_form_view::<Unit>()
}
