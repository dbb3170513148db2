use crate::shared::details_form::master_form_view;
use contracts::domain::a001_supplier::aggregate::Supplier;
use leptos::prelude::*;

/// Create form, or edit form with `?id=`
#[component]
pub fn SupplierDetails() -> impl IntoView {
    master_form_view::<Supplier>()
}
