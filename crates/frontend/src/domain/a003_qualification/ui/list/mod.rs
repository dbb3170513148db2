use crate::shared::list_view::master_list_view;
use contracts::domain::a003_qualification::aggregate::Qualification;
use leptos::prelude::*;

#[component]
pub fn QualificationList() -> impl IntoView {
    master_list_view::<Qualification>()
}
