use crate::shared::list_view::master_list_view;
use contracts::domain::a004_unit::aggregate::Unit;
use leptos::prelude::*;

#[component]
pub fn UnitList() -> impl IntoView {
    master_list_view::<Unit>()
}
