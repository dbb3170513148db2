//! `?id=` query of the form screens

use contracts::domain::common::{MasterRecord, RecordId};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
}

impl EditQuery {
    /// Parse `location.search`; a malformed id means "no id"
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// Link to the edit form of record `id`
pub fn edit_href<T: MasterRecord>(id: RecordId) -> String {
    let query = EditQuery { id: Some(id) }.to_query_string();
    format!("{}?{}", T::form_route(), query)
}

/// Record id from the current URL, tracked
pub fn use_edit_id() -> Memo<Option<RecordId>> {
    let location = use_location();
    Memo::new(move |_| EditQuery::parse(&location.search.get()).id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_unit::aggregate::Unit;

    #[test]
    fn test_edit_href() {
        assert_eq!(edit_href::<Unit>(17), "/unit-master?id=17");
    }

    #[test]
    fn test_parse_edit_query() {
        assert_eq!(EditQuery::parse("?id=5").id, Some(5));
        assert_eq!(EditQuery::parse("").id, None);
        assert_eq!(EditQuery::parse("?id=abc").id, None);
        assert_eq!(EditQuery::parse("?tab=1&id=9").id, Some(9));
    }
}
