use crate::domain::common::{null_to_default, unknown_field, MasterRecord, RecordId};
use crate::shared::metadata::FieldMetadata;
use serde::{Deserialize, Serialize};

/// Role master record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Role {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<RecordId>,
    #[serde(deserialize_with = "null_to_default")]
    pub role_name: String,
    #[serde(deserialize_with = "null_to_default")]
    pub role_code: String,
    #[serde(deserialize_with = "null_to_default")]
    pub description: String,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("roleName", "Role Name")
        .required()
        .max_length(60)
        .searchable()
        .placeholder("Enter role name"),
    FieldMetadata::text("roleCode", "Role Code")
        .max_length(20)
        .searchable()
        .placeholder("e.g. QA-LEAD"),
    FieldMetadata::long_text("description", "Description")
        .max_length(250)
        .searchable(),
];

impl MasterRecord for Role {
    fn record_id(&self) -> Option<RecordId> {
        self.role_id
    }

    fn display_name(&self) -> String {
        self.role_name.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "roleId" => return self.role_id.map(|id| id.to_string()),
            "roleName" => &self.role_name,
            "roleCode" => &self.role_code,
            "description" => &self.description,
            _ => return None,
        };
        Some(value.clone())
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<(), String> {
        match field {
            "roleName" => self.role_name = value,
            "roleCode" => self.role_code = value,
            "description" => self.description = value,
            _ => return Err(unknown_field(Self::element_name(), field)),
        }
        Ok(())
    }

    fn id_field() -> &'static str {
        "roleId"
    }

    fn slug() -> &'static str {
        "role"
    }

    fn collection_name() -> &'static str {
        "roles"
    }

    fn element_name() -> &'static str {
        "Role"
    }

    fn list_name() -> &'static str {
        "Roles"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str) -> Role {
        Role {
            role_name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        assert!(role("ABCD").matches_query("abc"));
        assert!(!role("xyz").matches_query("abc"));
        assert!(role("xyz").matches_query(""));
    }

    #[test]
    fn test_whitespace_in_query_is_matched_literally() {
        assert!(!role("Painter").matches_query(" "));
        assert!(!role("Senior Welder").matches_query("Welder "));
        assert!(role("Senior Welder").matches_query("r w"));
    }

    #[test]
    fn test_set_field_touches_only_named_field() {
        let mut r = Role {
            role_id: Some(9),
            role_name: "Operator".into(),
            role_code: "OP".into(),
            description: "Runs the line".into(),
        };
        r.set_field("roleCode", "OPR".into()).unwrap();
        assert_eq!(r.role_code, "OPR");
        assert_eq!(r.role_name, "Operator");
        assert_eq!(r.description, "Runs the line");
        assert_eq!(r.role_id, Some(9));
    }

    #[test]
    fn test_set_field_rejects_unknown_and_id() {
        let mut r = role("Operator");
        assert!(r.set_field("roleId", "5".into()).is_err());
        assert!(r.set_field("colour", "red".into()).is_err());
        assert_eq!(r, role("Operator"));
    }

    #[test]
    fn test_validate_requires_name() {
        assert_eq!(role("  ").validate(), Err("Role Name is required".to_string()));
        assert!(role("Auditor").validate().is_ok());
    }

    #[test]
    fn test_roundtrips_wire_names() {
        let json = r#"{"roleId":12,"roleName":"Admin","roleCode":"ADM","description":null}"#;
        let r: Role = serde_json::from_str(json).unwrap();
        assert_eq!(r.role_id, Some(12));
        assert_eq!(r.field_value("roleId").as_deref(), Some("12"));
        assert_eq!(r.description, "");
    }
}
