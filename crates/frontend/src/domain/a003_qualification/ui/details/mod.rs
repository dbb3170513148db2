use crate::shared::details_form::master_form_view;
use contracts::domain::a003_qualification::aggregate::Qualification;
use leptos::prelude::*;

/// Create form, or edit form with `?id=`
#[component]
pub fn QualificationDetails() -> impl IntoView {
    master_form_view::<Qualification>()
}
