use crate::shared::api::ApiError;
use crate::shared::api_utils::DEFAULT_PAGE_SIZE;
use crate::shared::notifications::Notice;
use contracts::domain::common::{MasterRecord, RecordId};

/// State of one master-list screen
///
/// Fields are private so the page invariant
/// `1 <= page <= total_pages()` holds after every mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    query: String,
    /// 1-based
    page: usize,
    page_size: usize,
    pending_delete: Option<RecordId>,
    deleting: bool,
    loading: bool,
    is_loaded: bool,
    selected: Option<T>,
}

impl<T: MasterRecord> Default for ListState<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T: MasterRecord> ListState<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            query: String::new(),
            page: 1,
            page_size: page_size.max(1),
            pending_delete: None,
            deleting: false,
            loading: false,
            is_loaded: false,
            selected: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn pending_delete(&self) -> Option<RecordId> {
        self.pending_delete
    }

    /// The delete confirmation is showing
    pub fn dialog_open(&self) -> bool {
        self.pending_delete.is_some()
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    // ------------------------------------------------------------------
    // Collection, query, page
    // ------------------------------------------------------------------

    /// Replace the whole collection
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.clamp_page();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Records matching the query, in collection order
    pub fn filtered(&self) -> Vec<T> {
        self.items
            .iter()
            .filter(|item| item.matches_query(&self.query))
            .cloned()
            .collect()
    }

    pub fn filtered_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.matches_query(&self.query))
            .count()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(self.page_size).max(1)
    }

    /// Slice of `filtered()` shown on the current page
    pub fn page_items(&self) -> Vec<T> {
        let start = (self.page - 1) * self.page_size;
        self.items
            .iter()
            .filter(|item| item.matches_query(&self.query))
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect()
    }

    /// Go to `page`, clamped into `[1, total_pages]`
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages());
    }

    /// 1-based `(first, last)` row numbers shown, `(0, 0)` when empty
    pub fn visible_range(&self) -> (usize, usize) {
        let count = self.filtered_count();
        if count == 0 {
            return (0, 0);
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = (self.page * self.page_size).min(count);
        (first, last)
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages());
    }

    // ------------------------------------------------------------------
    // Refresh
    // ------------------------------------------------------------------

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch result; failure empties the collection
    pub fn finish_refresh(&mut self, result: Result<Vec<T>, ApiError>) -> Option<Notice> {
        self.loading = false;
        self.is_loaded = true;
        match result {
            Ok(items) => {
                self.set_items(items);
                None
            }
            Err(err) => {
                self.set_items(Vec::new());
                Some(Notice::error(err.describe(format!(
                    "Error occurred while fetching {}",
                    T::list_name().to_lowercase()
                ))))
            }
        }
    }

    // ------------------------------------------------------------------
    // Delete workflow
    // ------------------------------------------------------------------

    /// Ask for confirmation; replaces any earlier pending id
    pub fn request_delete(&mut self, id: RecordId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.pending_delete = None;
        }
    }

    /// Start the confirmed delete; `None` when nothing is pending or a delete
    /// is already in flight
    pub fn begin_delete(&mut self) -> Option<RecordId> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete?;
        self.deleting = true;
        Some(id)
    }

    /// Apply the outcome of `DELETE {id}` and close the dialog
    pub fn finish_delete(&mut self, id: RecordId, result: Result<(), ApiError>) -> Notice {
        self.deleting = false;
        self.pending_delete = None;
        let element = T::element_name();
        match result {
            Ok(()) => {
                self.remove_by_id(id);
                Notice::success(format!("{} deleted successfully", element))
            }
            Err(err) if err.is_not_found() => {
                self.remove_by_id(id);
                Notice::info(format!("{} was already deleted", element))
            }
            Err(err) => Notice::error(err.describe(format!(
                "Error occurred while deleting {}",
                element.to_lowercase()
            ))),
        }
    }

    /// Drop the record with `id`; absent ids are ignored
    pub fn remove_by_id(&mut self, id: RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.record_id() != Some(id));
        if self.selected.as_ref().and_then(|s| s.record_id()) == Some(id) {
            self.selected = None;
        }
        self.clamp_page();
        self.items.len() != before
    }

    // ------------------------------------------------------------------
    // Read-only detail panel
    // ------------------------------------------------------------------

    pub fn view(&mut self, record: T) {
        self.selected = Some(record);
    }

    pub fn close_view(&mut self) {
        self.selected = None;
    }
}

/// Key of a rendered row: position plus the record's full wire form, so a
/// refreshed record with changed fields gets a fresh row
pub fn row_key<T: MasterRecord>(index: usize, record: &T) -> (usize, String) {
    let body = serde_json::to_string(record).unwrap_or_else(|_| format!("{:?}", record));
    (index, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notifications::Severity;
    use contracts::domain::a002_role::aggregate::Role;

    fn role(id: RecordId, name: &str) -> Role {
        Role {
            role_id: Some(id),
            role_name: name.to_string(),
            ..Default::default()
        }
    }

    fn roles(n: usize) -> Vec<Role> {
        (1..=n as RecordId)
            .map(|i| role(i, &format!("Role {}", i)))
            .collect()
    }

    fn loaded(items: Vec<Role>) -> ListState<Role> {
        let mut state = ListState::new(10);
        state.set_items(items);
        state
    }

    #[test]
    fn test_empty_query_yields_collection() {
        let state = loaded(roles(3));
        assert_eq!(state.filtered(), roles(3));
    }

    #[test]
    fn test_filter_keeps_order_and_matches_only() {
        let mut state = loaded(vec![
            role(1, "Welder"),
            role(2, "Painter"),
            role(3, "Senior Welder"),
        ]);
        state.set_query("weld");
        let ids: Vec<_> = state.filtered().iter().map(|r| r.role_id).collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }

    #[test]
    fn test_whitespace_query_filters_literally() {
        let mut state = loaded(vec![role(1, "Senior Welder"), role(2, "Painter")]);
        state.set_query(" ");
        let ids: Vec<_> = state.filtered().iter().map(|r| r.role_id).collect();
        assert_eq!(ids, vec![Some(1)]);
        state.set_query("Welder ");
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_query_abc_matches_uppercase_only() {
        let mut state = loaded(vec![role(1, "ABCD"), role(2, "xyz")]);
        state.set_query("abc");
        assert_eq!(state.filtered(), vec![role(1, "ABCD")]);
    }

    #[test]
    fn test_twelve_roles_make_two_pages() {
        let mut state = loaded(roles(12));
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.page_items().len(), 10);
        state.set_page(2);
        assert_eq!(state.page_items(), roles(12)[10..].to_vec());
        assert_eq!(state.visible_range(), (11, 12));
    }

    #[test]
    fn test_page_is_clamped() {
        let mut state = loaded(roles(12));
        state.set_page(7);
        assert_eq!(state.page(), 2);
        state.set_page(0);
        assert_eq!(state.page(), 1);

        let empty = loaded(Vec::new());
        assert_eq!(empty.total_pages(), 1);
        assert_eq!(empty.page(), 1);
        assert!(empty.page_items().is_empty());
    }

    #[test]
    fn test_query_resets_page_and_shrinking_collection_clamps() {
        let mut state = loaded(roles(25));
        state.set_page(3);
        state.set_query("Role 1");
        assert_eq!(state.page(), 1);

        state.set_query("");
        state.set_page(3);
        state.set_items(roles(5));
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_confirmed_delete_removes_exactly_one() {
        let mut state = loaded(roles(3));
        state.request_delete(2);
        assert!(state.dialog_open());
        let id = state.begin_delete().unwrap();
        let notice = state.finish_delete(id, Ok(()));

        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, "Role deleted successfully");
        let ids: Vec<_> = state.items().iter().map(|r| r.role_id).collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
        assert!(!state.dialog_open());
    }

    #[test]
    fn test_delete_of_absent_id_closes_dialog() {
        let mut state = loaded(roles(3));
        state.request_delete(42);
        let id = state.begin_delete().unwrap();
        state.finish_delete(id, Ok(()));
        assert_eq!(state.pending_delete(), None);
        assert!(!state.is_deleting());
        assert_eq!(state.items().len(), 3);
    }

    #[test]
    fn test_one_delete_in_flight() {
        let mut state = loaded(roles(3));
        state.request_delete(1);
        assert_eq!(state.begin_delete(), Some(1));
        assert_eq!(state.begin_delete(), None);
        state.cancel_delete();
        assert_eq!(state.pending_delete(), Some(1));
    }

    #[test]
    fn test_cancel_clears_pending() {
        let mut state = loaded(roles(3));
        state.request_delete(1);
        state.request_delete(3);
        assert_eq!(state.pending_delete(), Some(3));
        state.cancel_delete();
        assert_eq!(state.pending_delete(), None);
        assert_eq!(state.begin_delete(), None);
    }

    #[test]
    fn test_failed_delete_keeps_record_and_reports_message() {
        let mut state = loaded(roles(2));
        state.request_delete(1);
        let id = state.begin_delete().unwrap();
        let notice = state.finish_delete(
            id,
            Err(ApiError::from_status(400, r#"{"message":"Role is assigned to users"}"#)),
        );
        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(
            notice.message,
            "Error occurred while deleting role: Role is assigned to users"
        );
        assert_eq!(state.items().len(), 2);
        assert!(!state.dialog_open());
    }

    #[test]
    fn test_not_found_delete_is_benign() {
        let mut state = loaded(roles(2));
        state.request_delete(2);
        let id = state.begin_delete().unwrap();
        let notice = state.finish_delete(id, Err(ApiError::from_status(404, "")));
        assert_eq!(notice.severity, Severity::Info);
        assert_eq!(state.items(), &roles(1)[..]);
    }

    #[test]
    fn test_failed_refresh_empties_collection() {
        let mut state = loaded(roles(4));
        state.begin_refresh();
        assert!(state.is_loading());
        let notice = state.finish_refresh(Err(ApiError::Transport("offline".into())));
        assert!(state.items().is_empty());
        assert!(!state.is_loading());
        assert_eq!(notice.map(|n| n.severity), Some(Severity::Error));
    }

    #[test]
    fn test_row_key_changes_with_record_content() {
        let before = role(3, "Welder");
        let after = role(3, "Senior Welder");
        assert_ne!(row_key(2, &before), row_key(2, &after));
        assert_eq!(row_key(2, &before), row_key(2, &before.clone()));
        assert_ne!(row_key(1, &before), row_key(2, &before));
    }

    #[test]
    fn test_refresh_replaces_changed_record() {
        let mut state = loaded(vec![role(3, "Welder")]);
        state.begin_refresh();
        state.finish_refresh(Ok(vec![role(3, "Senior Welder")]));
        assert_eq!(state.page_items()[0].role_name, "Senior Welder");
    }

    #[test]
    fn test_view_and_close_view() {
        let mut state = loaded(roles(2));
        state.view(role(2, "Role 2"));
        assert_eq!(state.selected().and_then(|r| r.role_id), Some(2));
        state.remove_by_id(2);
        assert!(state.selected().is_none());
        state.view(role(1, "Role 1"));
        state.close_view();
        assert!(state.selected().is_none());
    }
}
