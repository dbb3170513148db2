//! Field-level metadata types
//!
//! Builders are `const fn` so that each record can declare its field table as a
//! compile-time constant.

use super::field_type::FieldType;
use super::validation::ValidationRules;

/// Metadata for a single record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Wire (JSON) name of the field, e.g. `roleName`
    pub name: &'static str,
    pub field_type: FieldType,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    /// Participates in the list search box
    pub searchable: bool,
}

impl FieldMetadata {
    pub const fn new(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            ui: FieldUiMetadata::labeled(label),
            validation: ValidationRules::none(),
            searchable: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Text)
    }

    pub const fn long_text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::LongText).hidden_in_list()
    }

    pub const fn email(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Email)
    }

    pub const fn phone(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Phone)
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldType::Integer)
    }

    pub const fn required(mut self) -> Self {
        self.validation.required = true;
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.validation.max_length = Some(max);
        self
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.validation.min_length = Some(min);
        self
    }

    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.ui.placeholder = Some(placeholder);
        self
    }

    pub const fn hidden_in_list(mut self) -> Self {
        self.ui.visible_in_list = false;
        self
    }

    /// Check if field is optional
    pub fn is_optional(&self) -> bool {
        !self.validation.required
    }

    /// Check if field should be visible in list view
    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    /// Check if field should be visible in form
    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }

    /// Validate a raw value of this field
    pub fn validate(&self, value: &str) -> Result<(), String> {
        self.validation.validate_string(value, self.ui.label)?;
        if self.field_type.is_numeric() && !value.trim().is_empty() {
            value
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("{} must be a whole number", self.ui.label))?;
        }
        Ok(())
    }
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
            visible_in_list: true,
            visible_in_form: true,
        }
    }
}

impl Default for FieldUiMetadata {
    fn default() -> Self {
        Self::labeled("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODE: FieldMetadata = FieldMetadata::text("roleCode", "Role Code")
        .required()
        .max_length(8)
        .searchable();

    #[test]
    fn test_builders_compose_in_const_context() {
        assert_eq!(CODE.name, "roleCode");
        assert!(CODE.validation.required);
        assert_eq!(CODE.validation.max_length, Some(8));
        assert!(CODE.searchable);
        assert!(CODE.visible_in_list());
    }

    #[test]
    fn test_long_text_is_hidden_in_list() {
        let field = FieldMetadata::long_text("description", "Description");
        assert!(!field.visible_in_list());
        assert!(field.visible_in_form());
    }

    #[test]
    fn test_integer_field_rejects_non_numeric() {
        let field = FieldMetadata::integer("minExperienceYears", "Minimum Experience");
        assert!(field.validate("").is_ok());
        assert!(field.validate("4").is_ok());
        assert_eq!(
            field.validate("four"),
            Err("Minimum Experience must be a whole number".to_string())
        );
    }
}
