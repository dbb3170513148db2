use super::service::use_notifications;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Renders the toast stack at the application root.
///
/// Must be mounted exactly once. The progress bar animation runs for the
/// toast's own ttl, so it empties when the toast is removed.
#[component]
pub fn ToastHost() -> impl IntoView {
    let center = use_notifications();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || center.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let progress_style = format!("animation-duration: {}ms;", toast.ttl_ms);
                    view! {
                        <div class=format!("toast toast--{}", toast.severity.as_str())>
                            <span class="toast__icon">{icon(toast.severity.icon_name())}</span>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| center.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                            <div class="toast__progress" style=progress_style></div>
                        </div>
                    }
                }
            />
        </div>
    }
}
