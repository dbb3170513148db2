use serde::{Deserialize, Serialize};

/// Error payload returned by the backend on failed mutations
///
/// Only `message` is part of the contract; `error` is accepted as a fallback
/// because some endpoints put the text there instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Parse a raw response body; non-JSON bodies yield `None`
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// Non-blank user-facing message, if the backend supplied one
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| self.error.filter(|e| !e.trim().is_empty()))
    }
}

/// Extract the backend message from a raw body
pub fn message_from_body(text: &str) -> Option<String> {
    ErrorBody::parse(text).and_then(ErrorBody::into_message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_field_wins() {
        let body = r#"{"message":"Role is assigned to users","error":"Bad Request"}"#;
        assert_eq!(
            message_from_body(body).as_deref(),
            Some("Role is assigned to users")
        );
    }

    #[test]
    fn test_blank_message_falls_back_to_error() {
        let body = r#"{"message":"  ","error":"Conflict"}"#;
        assert_eq!(message_from_body(body).as_deref(), Some("Conflict"));
    }

    #[test]
    fn test_non_json_body_has_no_message() {
        assert_eq!(message_from_body("<html>502</html>"), None);
        assert_eq!(message_from_body(""), None);
    }
}
