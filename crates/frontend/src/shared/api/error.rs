use contracts::shared::error_body::message_from_body;

/// Failure of a call across the REST boundary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Transport(String),
    /// The response body did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
    /// 409: duplicate unique key
    #[error("conflict: {}", .message.as_deref().unwrap_or("duplicate key"))]
    Conflict { message: Option<String> },
    /// 5xx
    #[error("server error (HTTP {status})")]
    Server { status: u16, message: Option<String> },
    /// 404
    #[error("not found")]
    NotFound { message: Option<String> },
    /// Any other non-2xx status
    #[error("HTTP {status}")]
    Http { status: u16, message: Option<String> },
}

impl ApiError {
    /// Classify a non-2xx response
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = message_from_body(body);
        match status {
            404 => Self::NotFound { message },
            409 => Self::Conflict { message },
            500..=599 => Self::Server { status, message },
            _ => Self::Http { status, message },
        }
    }

    /// Message supplied by the backend, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Transport(_) | Self::Decode(_) => None,
            Self::Conflict { message }
            | Self::Server { message, .. }
            | Self::NotFound { message }
            | Self::Http { message, .. } => message.as_deref(),
        }
    }

    /// Duplicate-key failure: a 409, or a server error whose message reports
    /// a uniqueness violation
    pub fn is_duplicate_key(&self) -> bool {
        match self {
            Self::Conflict { .. } => true,
            Self::Server {
                message: Some(message),
                ..
            } => mentions_uniqueness(message),
            _ => false,
        }
    }

    /// `"{base}: {backend message}"`, or just `base` when there is none
    pub fn describe(&self, base: impl Into<String>) -> String {
        let base = base.into();
        match self.backend_message().map(str::trim) {
            Some(message) if !message.is_empty() => format!("{}: {}", base, message),
            _ => base,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Server { .. })
    }
}

fn mentions_uniqueness(message: &str) -> bool {
    let message = message.to_lowercase();
    ["duplicate", "unique", "already exists"]
        .iter()
        .any(|marker| message.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(ApiError::from_status(404, ""), ApiError::NotFound { .. }));
        assert!(matches!(ApiError::from_status(409, ""), ApiError::Conflict { .. }));
        assert!(matches!(
            ApiError::from_status(503, ""),
            ApiError::Server { status: 503, .. }
        ));
        assert!(matches!(
            ApiError::from_status(400, ""),
            ApiError::Http { status: 400, .. }
        ));
    }

    #[test]
    fn test_backend_message_is_kept() {
        let err = ApiError::from_status(400, r#"{"message":"Unit is referenced by staff"}"#);
        assert_eq!(err.backend_message(), Some("Unit is referenced by staff"));
        assert_eq!(ApiError::Transport("offline".into()).backend_message(), None);
    }

    #[test]
    fn test_describe_appends_backend_message() {
        let err = ApiError::from_status(400, r#"{"message":"  In use  "}"#);
        assert_eq!(err.describe("Delete failed"), "Delete failed: In use");
        assert_eq!(
            ApiError::Decode("eof".into()).describe("Delete failed"),
            "Delete failed"
        );
    }

    #[test]
    fn test_duplicate_key_detection() {
        assert!(ApiError::from_status(409, "").is_duplicate_key());
        assert!(ApiError::from_status(
            500,
            r#"{"message":"Duplicate entry 'QA' for key 'role_code'"}"#
        )
        .is_duplicate_key());
        assert!(!ApiError::from_status(500, r#"{"message":"NullPointerException"}"#)
            .is_duplicate_key());
        assert!(!ApiError::from_status(400, r#"{"message":"duplicate"}"#).is_duplicate_key());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ApiError::Conflict { message: None }.to_string(),
            "conflict: duplicate key"
        );
        assert_eq!(
            ApiError::Server { status: 502, message: None }.to_string(),
            "server error (HTTP 502)"
        );
    }
}
