use super::queue::{Notice, Severity, Toast, ToastId, ToastQueue};
use crate::shared::api_utils::DEFAULT_TOAST_TTL_MS;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Application-wide toast service
///
/// Created once at the app root and provided via context. Each pushed toast
/// gets its own timer; `dismiss` is safe to call for toasts that are already
/// gone.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    queue: RwSignal<ToastQueue>,
    default_ttl_ms: u32,
}

impl NotificationCenter {
    pub fn new(default_ttl_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::new()),
            default_ttl_ms,
        }
    }

    /// Show a toast and schedule its removal after `ttl_ms`
    pub fn push(&self, severity: Severity, message: impl Into<String>, ttl_ms: u32) -> ToastId {
        let toast = Toast::new(Notice::new(severity, message), ttl_ms, js_sys::Date::now());
        let id = toast.id;
        log::debug!("toast {} '{}' ({} ms)", severity.as_str(), toast.message, ttl_ms);
        self.queue.update(|q| {
            q.push(toast);
        });

        let queue = self.queue;
        spawn_local(async move {
            let mut wait = ttl_ms;
            loop {
                TimeoutFuture::new(wait).await;
                let now = js_sys::Date::now();
                // try_update: the root may already be torn down
                match queue.try_update(|q| q.tick(id, now)) {
                    Some(Some(rest)) => wait = rest,
                    _ => break,
                }
            }
        });

        id
    }

    pub fn dismiss(&self, id: ToastId) {
        self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn notify(&self, notice: Notice) -> ToastId {
        self.push(notice.severity, notice.message, self.default_ttl_ms)
    }

    pub fn success(&self, message: impl Into<String>) -> ToastId {
        self.push(Severity::Success, message, self.default_ttl_ms)
    }

    pub fn error(&self, message: impl Into<String>) -> ToastId {
        self.push(Severity::Error, message, self.default_ttl_ms)
    }

    pub fn warning(&self, message: impl Into<String>) -> ToastId {
        self.push(Severity::Warning, message, self.default_ttl_ms)
    }

    pub fn info(&self, message: impl Into<String>) -> ToastId {
        self.push(Severity::Info, message, self.default_ttl_ms)
    }

    /// Visible toasts, oldest first (tracked)
    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL_MS)
    }
}

pub fn use_notifications() -> NotificationCenter {
    use_context::<NotificationCenter>()
        .expect("NotificationCenter not provided in context (provide it in app root)")
}
