use crate::domain::common::{null_to_default, unknown_field, MasterRecord, RecordId};
use crate::shared::metadata::FieldMetadata;
use serde::{Deserialize, Serialize};

/// Unit (company site) master record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Unit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<RecordId>,
    #[serde(deserialize_with = "null_to_default")]
    pub unit_name: String,
    #[serde(deserialize_with = "null_to_default")]
    pub company_name: String,
    #[serde(deserialize_with = "null_to_default")]
    pub address: String,
    #[serde(deserialize_with = "null_to_default")]
    pub city: String,
    #[serde(deserialize_with = "null_to_default")]
    pub contact_number: String,
    #[serde(deserialize_with = "null_to_default")]
    pub email: String,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("unitName", "Unit Name")
        .required()
        .max_length(100)
        .searchable()
        .placeholder("Enter unit name"),
    FieldMetadata::text("companyName", "Company Name")
        .required()
        .max_length(120)
        .searchable(),
    FieldMetadata::long_text("address", "Address").max_length(250),
    FieldMetadata::text("city", "City").max_length(60).searchable(),
    FieldMetadata::phone("contactNumber", "Contact Number")
        .max_length(20)
        .searchable(),
    FieldMetadata::email("email", "Email").max_length(120),
];

impl MasterRecord for Unit {
    fn record_id(&self) -> Option<RecordId> {
        self.unit_id
    }

    fn display_name(&self) -> String {
        self.unit_name.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "unitId" => return self.unit_id.map(|id| id.to_string()),
            "unitName" => &self.unit_name,
            "companyName" => &self.company_name,
            "address" => &self.address,
            "city" => &self.city,
            "contactNumber" => &self.contact_number,
            "email" => &self.email,
            _ => return None,
        };
        Some(value.clone())
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<(), String> {
        match field {
            "unitName" => self.unit_name = value,
            "companyName" => self.company_name = value,
            "address" => self.address = value,
            "city" => self.city = value,
            "contactNumber" => self.contact_number = value,
            "email" => self.email = value,
            _ => return Err(unknown_field(Self::element_name(), field)),
        }
        Ok(())
    }

    fn id_field() -> &'static str {
        "unitId"
    }

    fn slug() -> &'static str {
        "unit"
    }

    fn collection_name() -> &'static str {
        "units"
    }

    fn element_name() -> &'static str {
        "Unit"
    }

    fn list_name() -> &'static str {
        "Units"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}
