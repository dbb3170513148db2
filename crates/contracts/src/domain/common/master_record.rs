use crate::shared::metadata::FieldMetadata;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

/// Backend-assigned record identifier
pub type RecordId = i64;

/// Trait for master-data records (Supplier, Role, Qualification, Unit)
///
/// Static methods describe the entity (routes, API path, field table);
/// instance methods give name-based access to field values so list, form,
/// search and export code can be written once for all masters.
pub trait MasterRecord:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    // ============================================================================
    // Instance data
    // ============================================================================

    /// Identifier, absent for records not yet created
    fn record_id(&self) -> Option<RecordId>;

    /// Human-readable name used in notifications
    fn display_name(&self) -> String;

    /// Current value of a field as text (`None` for unknown names)
    fn field_value(&self, field: &str) -> Option<String>;

    /// Replace one field from text input, leaving every other field untouched
    fn set_field(&mut self, field: &str, value: String) -> Result<(), String>;

    // ============================================================================
    // Entity metadata
    // ============================================================================

    /// Wire name of the identifier field, e.g. `roleId`
    fn id_field() -> &'static str;

    /// Route slug, e.g. `role` (routes `role-master`, `role-master-list`)
    fn slug() -> &'static str;

    /// REST collection segment, e.g. `roles`
    fn collection_name() -> &'static str;

    /// UI name of one element, e.g. "Role"
    fn element_name() -> &'static str;

    /// UI name of the list, e.g. "Roles"
    fn list_name() -> &'static str;

    /// Field table in display order
    fn field_metadata() -> &'static [FieldMetadata];

    /// Key under which enveloped list responses carry the array
    fn envelope_field() -> &'static str {
        Self::collection_name()
    }

    // ============================================================================
    // Provided behaviour
    // ============================================================================

    /// REST base path, e.g. `/api/roles`
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }

    /// Route of the list screen
    fn list_route() -> String {
        format!("/{}-master-list", Self::slug())
    }

    /// Route of the create/edit form (edit adds `?id=`)
    fn form_route() -> String {
        format!("/{}-master", Self::slug())
    }

    /// Case-insensitive substring match over the searchable fields
    ///
    /// Only the empty query matches everything; whitespace is matched literally.
    fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        Self::field_metadata()
            .iter()
            .filter(|f| f.searchable)
            .filter_map(|f| self.field_value(f.name))
            .any(|value| value.to_lowercase().contains(&needle))
    }

    /// Validate every form field; returns the first failure
    fn validate(&self) -> Result<(), String> {
        for field in Self::field_metadata().iter().filter(|f| f.visible_in_form()) {
            let value = self.field_value(field.name).unwrap_or_default();
            field.validate(&value)?;
        }
        Ok(())
    }
}

/// Error text for `set_field` on a name the record does not have
pub fn unknown_field(element: &str, field: &str) -> String {
    format!("{} has no field '{}'", element, field)
}
