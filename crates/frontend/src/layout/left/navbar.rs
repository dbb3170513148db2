use crate::shared::icons::icon;
use contracts::domain::a001_supplier::aggregate::Supplier;
use contracts::domain::a002_role::aggregate::Role;
use contracts::domain::a003_qualification::aggregate::Qualification;
use contracts::domain::a004_unit::aggregate::Unit;
use contracts::domain::common::MasterRecord;
use leptos::prelude::*;
use leptos_router::components::A;

/// `(href, icon, title)` of one sidebar entry
type NavEntry = (String, &'static str, &'static str);

fn master_entry<T: MasterRecord>() -> NavEntry {
    (T::list_route(), T::collection_name(), T::list_name())
}

pub fn nav_entries() -> Vec<NavEntry> {
    vec![
        ("/".to_string(), "home", "Home"),
        master_entry::<Supplier>(),
        master_entry::<Role>(),
        master_entry::<Qualification>(),
        master_entry::<Unit>(),
    ]
}

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {nav_entries().into_iter().map(|(href, kind, title)| {
                    view! {
                        <li>
                            <A href=href attr:class="main-nav-bar__link">
                                {icon(kind)}
                                <span>{title}</span>
                            </A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_master_has_a_list_link() {
        let hrefs: Vec<String> = nav_entries().into_iter().map(|(href, _, _)| href).collect();
        assert_eq!(
            hrefs,
            vec![
                "/",
                "/supplier-master-list",
                "/role-master-list",
                "/qualification-master-list",
                "/unit-master-list",
            ]
        );
    }
}
