use crate::shared::list_view::master_list_view;
use contracts::domain::a001_supplier::aggregate::Supplier;
use leptos::prelude::*;

#[component]
pub fn SupplierList() -> impl IntoView {
    master_list_view::<Supplier>()
}
