use crate::shared::details_form::master_form_view;
use contracts::domain::a002_role::aggregate::Role;
use leptos::prelude::*;

/// Create form, or edit form with `?id=`
#[component]
pub fn RoleDetails() -> impl IntoView {
    master_form_view::<Role>()
}
