use crate::domain::a001_supplier::ui::{SupplierDetails, SupplierList};
use crate::domain::a002_role::ui::{RoleDetails, RoleList};
use crate::domain::a003_qualification::ui::{QualificationDetails, QualificationList};
use crate::domain::a004_unit::ui::{UnitDetails, UnitList};
use crate::layout::left::navbar::nav_entries;
use crate::layout::Shell;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/supplier-master-list") view=SupplierList />
                    <Route path=path!("/supplier-master") view=SupplierDetails />
                    <Route path=path!("/role-master-list") view=RoleList />
                    <Route path=path!("/role-master") view=RoleDetails />
                    <Route path=path!("/qualification-master-list") view=QualificationList />
                    <Route path=path!("/qualification-master") view=QualificationDetails />
                    <Route path=path!("/unit-master-list") view=UnitList />
                    <Route path=path!("/unit-master") view=UnitDetails />
                </Routes>
            </Shell>
        </Router>
    }
}

/// Landing page with one card per master list
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-header__title">"Master Data"</h1>
            <div class="home-cards">
                {nav_entries()
                    .into_iter()
                    .skip(1)
                    .map(|(href, kind, title)| {
                        view! {
                            <A href=href attr:class="home-card">
                                {icon(kind)}
                                <span class="home-card__title">{title}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
            <A href="/" attr:class="button button--secondary">
                {icon("arrow-left")}
                "Back to home"
            </A>
        </div>
    }
}
