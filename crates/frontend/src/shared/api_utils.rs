//! API utilities and application configuration
//!
//! Provides helper functions for constructing API URLs and the [`AppConfig`]
//! shared with every screen through Leptos context.

use leptos::prelude::*;

/// Port the REST backend listens on
pub const BACKEND_PORT: u16 = 3000;

/// Rows per page on every master list
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Lifetime of a toast notification
pub const DEFAULT_TOAST_TTL_MS: u32 = 3500;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    backend_origin(&protocol, &hostname)
}

/// Origin of the backend for a page served from `protocol//hostname`
pub fn backend_origin(protocol: &str, hostname: &str) -> String {
    let hostname = if hostname.is_empty() { "127.0.0.1" } else { hostname };
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Runtime configuration provided at the application root
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
    pub page_size: usize,
    pub toast_ttl_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: backend_origin("http:", "127.0.0.1"),
            page_size: DEFAULT_PAGE_SIZE,
            toast_ttl_ms: DEFAULT_TOAST_TTL_MS,
        }
    }
}

impl AppConfig {
    /// Configuration for the page currently loaded in the browser
    pub fn from_window() -> Self {
        let api_base = api_base();
        if api_base.is_empty() {
            return Self::default();
        }
        Self {
            api_base,
            ..Self::default()
        }
    }
}

/// Configuration from context, falling back to the window-derived one
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(AppConfig::from_window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_origin_uses_backend_port() {
        assert_eq!(
            backend_origin("https:", "erp.example.com"),
            "https://erp.example.com:3000"
        );
        assert_eq!(backend_origin("http:", ""), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.toast_ttl_ms, 3500);
        assert_eq!(config.api_base, "http://127.0.0.1:3000");
    }
}
