//! Toast notifications
//!
//! - queue.rs: pure toast queue (ids, ordering, dismissal, expiry)
//! - service.rs: `NotificationCenter`, provided once at the app root
//! - host.rs: `ToastHost`, renders the stack

mod host;
mod queue;
mod service;

pub use host::ToastHost;
pub use queue::{Notice, Severity, Toast, ToastId, ToastQueue};
pub use service::{use_notifications, NotificationCenter};
