//! Field type enumeration for metadata system

/// Scalar kind of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    Text,
    LongText,
    Email,
    Phone,
    Integer,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "long_text",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Integer => "integer",
        }
    }

    /// `type` attribute for the HTML input rendering this field
    ///
    /// Integers use a text input so that rejected keystrokes reach the form
    /// instead of being swallowed by the browser.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::LongText | Self::Integer => "text",
            Self::Email => "email",
            Self::Phone => "tel",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer)
    }
}
