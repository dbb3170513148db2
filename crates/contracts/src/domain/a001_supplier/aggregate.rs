use crate::domain::common::{null_to_default, unknown_field, MasterRecord, RecordId};
use crate::shared::metadata::FieldMetadata;
use serde::{Deserialize, Serialize};

/// Supplier master record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<RecordId>,
    #[serde(deserialize_with = "null_to_default")]
    pub supplier_name: String,
    #[serde(deserialize_with = "null_to_default")]
    pub supplier_code: String,
    #[serde(deserialize_with = "null_to_default")]
    pub contact_person: String,
    #[serde(deserialize_with = "null_to_default")]
    pub email: String,
    #[serde(deserialize_with = "null_to_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_to_default")]
    pub address: String,
    #[serde(deserialize_with = "null_to_default")]
    pub gst_number: String,
}

const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("supplierName", "Supplier Name")
        .required()
        .max_length(120)
        .searchable()
        .placeholder("Enter supplier name"),
    FieldMetadata::text("supplierCode", "Supplier Code")
        .required()
        .max_length(20)
        .searchable()
        .placeholder("e.g. SUP-001"),
    FieldMetadata::text("contactPerson", "Contact Person")
        .max_length(80)
        .searchable(),
    FieldMetadata::email("email", "Email")
        .max_length(120)
        .searchable()
        .placeholder("name@example.com"),
    FieldMetadata::phone("phone", "Phone")
        .max_length(20)
        .searchable(),
    FieldMetadata::long_text("address", "Address").max_length(250),
    FieldMetadata::text("gstNumber", "GST Number")
        .max_length(15)
        .hidden_in_list(),
];

impl MasterRecord for Supplier {
    fn record_id(&self) -> Option<RecordId> {
        self.supplier_id
    }

    fn display_name(&self) -> String {
        self.supplier_name.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "supplierId" => return self.supplier_id.map(|id| id.to_string()),
            "supplierName" => &self.supplier_name,
            "supplierCode" => &self.supplier_code,
            "contactPerson" => &self.contact_person,
            "email" => &self.email,
            "phone" => &self.phone,
            "address" => &self.address,
            "gstNumber" => &self.gst_number,
            _ => return None,
        };
        Some(value.clone())
    }

    fn set_field(&mut self, field: &str, value: String) -> Result<(), String> {
        match field {
            "supplierName" => self.supplier_name = value,
            "supplierCode" => self.supplier_code = value,
            "contactPerson" => self.contact_person = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "address" => self.address = value,
            "gstNumber" => self.gst_number = value,
            _ => return Err(unknown_field(Self::element_name(), field)),
        }
        Ok(())
    }

    fn id_field() -> &'static str {
        "supplierId"
    }

    fn slug() -> &'static str {
        "supplier"
    }

    fn collection_name() -> &'static str {
        "suppliers"
    }

    fn element_name() -> &'static str {
        "Supplier"
    }

    fn list_name() -> &'static str {
        "Suppliers"
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_columns_deserialize_as_empty() {
        let json = r#"{"supplierId":4,"supplierName":"Acme","supplierCode":"A1","gstNumber":null}"#;
        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.supplier_id, Some(4));
        assert_eq!(supplier.gst_number, "");
        assert_eq!(supplier.phone, "");
    }

    #[test]
    fn test_create_body_omits_id() {
        let supplier = Supplier {
            supplier_name: "Acme".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&supplier).unwrap();
        assert!(value.get("supplierId").is_none());
        assert_eq!(value["supplierName"], "Acme");
    }

    #[test]
    fn test_search_ignores_non_searchable_fields() {
        let supplier = Supplier {
            supplier_name: "Northwind".into(),
            address: "12 Harbour Road".into(),
            ..Default::default()
        };
        assert!(supplier.matches_query("NORTH"));
        assert!(!supplier.matches_query("harbour"));
    }

    #[test]
    fn test_routes() {
        assert_eq!(Supplier::api_path(), "/api/suppliers");
        assert_eq!(Supplier::list_route(), "/supplier-master-list");
        assert_eq!(Supplier::form_route(), "/supplier-master");
    }
}
