use crate::domain::common::{null_to_default, unknown_field, MasterRecord, RecordId};
use crate::shared::metadata::FieldMetadata;
use serde::{Deserialize, Serialize};

/// Qualification master record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Qualification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualification_id: Option<RecordId>,
    #[serde(deserialize_with = "null_to_default")]
    pub qualification_name: String,
    #[serde(deserialize_with = "null_to_default")]
    pub qualification_level: String,
    pub min_experience_years: Option<u32>,
    #[serde(deserialize_with = "null_to_default")]
    pub description: String,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("qualificationName", "Qualification Name")
        .required()
        .max_length(100)
        .searchable()
        .placeholder("e.g. Certified Welder"),
    FieldMetadata::text("qualificationLevel", "Level")
        .max_length(40)
        .searchable()
        .placeholder("e.g. Diploma"),
    FieldMetadata::integer("minExperienceYears", "Min. Experience (years)"),
    FieldMetadata::long_text("description", "Description")
        .max_length(250)
        .searchable(),
];

impl MasterRecord for Qualification {
    fn record_id(&self) -> Option<RecordId> {
        self.qualification_id
    }

    fn display_name(&self) -> String {
        self.qualification_name.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "qualificationId" => return self.qualification_id.map(|id| id.to_string()),
            "minExperienceYears" => {
                return Some(
                    self.min_experience_years
                        .map(|years| years.to_string())
                        .unwrap_or_default(),
                )
            }
            "qualificationName" => &self.qualification_name,
            "qualificationLevel" => &self.qualification_level,
            "description" => &self.description,
            _ => return None,
        };
        Some(value.clone())
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<(), String> {
        match field {
            "qualificationName" => self.qualification_name = value,
            "qualificationLevel" => self.qualification_level = value,
            "description" => self.description = value,
            "minExperienceYears" => {
                let trimmed = value.trim();
                self.min_experience_years = if trimmed.is_empty() {
                    None
                } else {
                    Some(
                        trimmed
                            .parse()
                            .map_err(|_| format!("'{}' is not a whole number of years", trimmed))?,
                    )
                };
            }
            _ => return Err(unknown_field(Self::element_name(), field)),
        }
        Ok(())
    }

    fn id_field() -> &'static str {
        "qualificationId"
    }

    fn slug() -> &'static str {
        "qualification"
    }

    fn collection_name() -> &'static str {
        "qualifications"
    }

    fn element_name() -> &'static str {
        "Qualification"
    }

    fn list_name() -> &'static str {
        "Qualifications"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_field_parses_and_clears() {
        let mut q = Qualification::default();
        q.set_field("minExperienceYears", " 3 ".into()).unwrap();
        assert_eq!(q.min_experience_years, Some(3));
        assert_eq!(q.field_value("minExperienceYears").as_deref(), Some("3"));

        q.set_field("minExperienceYears", "".into()).unwrap();
        assert_eq!(q.min_experience_years, None);
    }

    #[test]
    fn test_bad_number_leaves_draft_unchanged() {
        let mut q = Qualification {
            min_experience_years: Some(2),
            ..Default::default()
        };
        assert!(q.set_field("minExperienceYears", "two".into()).is_err());
        assert_eq!(q.min_experience_years, Some(2));
    }
}
