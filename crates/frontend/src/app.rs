use crate::layout::global_context::LayoutContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::AppConfig;
use crate::shared::notifications::{NotificationCenter, ToastHost};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_window();
    log::info!("backend at {}", config.api_base);

    provide_context(NotificationCenter::new(config.toast_ttl_ms));
    provide_context(LayoutContext::new());
    provide_context(config);

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
