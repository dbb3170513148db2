use crate::shared::list_view::master_list_view;
use contracts::domain::a002_role::aggregate::Role;
use leptos::prelude::*;

#[component]
pub fn RoleList() -> impl IntoView {
    master_list_view::<Role>()
}
