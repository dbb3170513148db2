use super::state::ListState;
use crate::shared::api::RecordClient;
use crate::shared::api_utils::{use_app_config, AppConfig};
use crate::shared::export::{self, ExportColumn};
use crate::shared::lifecycle::ScreenGeneration;
use crate::shared::notifications::{use_notifications, NotificationCenter};
use contracts::domain::common::{MasterRecord, RecordId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for a master list screen
///
/// All list behaviour lives in [`ListState`]; this type runs the network
/// calls and routes their outcomes into the state and the toast service.
#[derive(Clone)]
pub struct ListViewModel<T: MasterRecord> {
    pub state: RwSignal<ListState<T>>,
    pub page_items: Memo<Vec<T>>,
    pub filtered_count: Memo<usize>,
    pub total_pages: Memo<usize>,
    client: RecordClient<T>,
    notifications: NotificationCenter,
    screen: ScreenGeneration,
    fetches: ScreenGeneration,
}

impl<T: MasterRecord> ListViewModel<T> {
    /// Must be called inside the screen's reactive owner: unmounting the
    /// screen invalidates every pending completion.
    pub fn new(config: &AppConfig, notifications: NotificationCenter) -> Self {
        let state = RwSignal::new(ListState::<T>::new(config.page_size));
        let page_items = Memo::new(move |_| state.with(|s| s.page_items()));
        let filtered_count = Memo::new(move |_| state.with(|s| s.filtered_count()));
        let total_pages = Memo::new(move |_| state.with(|s| s.total_pages()));

        let screen = ScreenGeneration::new();
        screen.invalidate_on_cleanup();

        Self {
            state,
            page_items,
            filtered_count,
            total_pages,
            client: RecordClient::new(&config.api_base),
            notifications,
            screen,
            fetches: ScreenGeneration::new(),
        }
    }

    /// ViewModel wired to the services provided at the app root
    pub fn from_context() -> Self {
        Self::new(&use_app_config(), use_notifications())
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Load once per mount
    pub fn load_if_needed(&self) {
        if !self.state.with_untracked(|s| s.is_loaded() || s.is_loading()) {
            self.refresh();
        }
    }

    /// Fetch the full collection; a newer refresh supersedes an older one
    pub fn refresh(&self) {
        self.state.update(|s| s.begin_refresh());
        let screen = self.screen.ticket();
        let fetch = self.fetches.next_ticket();
        let client = self.client.clone();
        let state = self.state;
        let notifications = self.notifications;

        spawn_local(async move {
            let result = client.fetch_all().await;
            if !screen.is_current() || !fetch.is_current() {
                log::debug!("{}: dropping stale list response", T::list_name());
                return;
            }
            match &result {
                Ok(items) => log::debug!("{}: loaded {} records", T::list_name(), items.len()),
                Err(e) => log::warn!("{}: fetch failed: {}", T::list_name(), e),
            }
            if let Some(Some(notice)) = state.try_update(|s| s.finish_refresh(result)) {
                notifications.notify(notice);
            }
        });
    }

    // ------------------------------------------------------------------
    // Query and paging
    // ------------------------------------------------------------------

    pub fn set_query(&self, query: String) {
        self.state.update(|s| s.set_query(query));
    }

    pub fn set_page(&self, page: usize) {
        self.state.update(|s| s.set_page(page));
    }

    // ------------------------------------------------------------------
    // Delete workflow
    // ------------------------------------------------------------------

    pub fn request_delete(&self, id: RecordId) {
        self.state.update(|s| s.request_delete(id));
    }

    pub fn cancel_delete(&self) {
        self.state.update(|s| s.cancel_delete());
    }

    /// Issue `DELETE` for the pending id; ignored while one is in flight
    pub fn confirm_delete(&self) {
        let Some(id) = self.state.try_update(|s| s.begin_delete()).flatten() else {
            return;
        };
        log::info!("{}: deleting {}", T::element_name(), id);

        let ticket = self.screen.ticket();
        let client = self.client.clone();
        let state = self.state;
        let notifications = self.notifications;

        spawn_local(async move {
            let result = client.delete(id).await;
            if !ticket.is_current() {
                log::debug!("{}: screen closed before delete of {} finished", T::element_name(), id);
                return;
            }
            if let Err(e) = &result {
                log::warn!("{}: delete of {} failed: {}", T::element_name(), id, e);
            }
            if let Some(notice) = state.try_update(|s| s.finish_delete(id, result)) {
                notifications.notify(notice);
            }
        });
    }

    /// Confirmation text for the pending delete
    pub fn delete_message(&self) -> String {
        self.state.with(|s| {
            let name = s.pending_delete().and_then(|id| {
                s.items()
                    .iter()
                    .find(|item| item.record_id() == Some(id))
                    .map(|item| item.display_name())
                    .filter(|name| !name.trim().is_empty())
            });
            let element = T::element_name().to_lowercase();
            match name {
                Some(name) => format!(
                    "Are you sure you want to delete {} \"{}\"? This action cannot be undone.",
                    element, name
                ),
                None => format!(
                    "Are you sure you want to delete this {}? This action cannot be undone.",
                    element
                ),
            }
        })
    }

    // ------------------------------------------------------------------
    // Detail panel
    // ------------------------------------------------------------------

    pub fn view(&self, record: T) {
        self.state.update(|s| s.view(record));
    }

    pub fn close_view(&self) {
        self.state.update(|s| s.close_view());
    }

    // ------------------------------------------------------------------
    // Export (filtered rows, not just the current page)
    // ------------------------------------------------------------------

    fn export_rows(&self) -> Option<(Vec<ExportColumn>, Vec<Vec<String>>)> {
        let records = self.state.with_untracked(|s| s.filtered());
        if records.is_empty() {
            self.notifications.warning("No data to export");
            return None;
        }
        let columns = export::columns_for::<T>();
        let rows = export::rows_for(&records, &columns);
        Some((columns, rows))
    }

    fn file_name() -> String {
        format!("{}_master", T::slug())
    }

    fn report_export(&self, result: Result<(), String>) {
        if let Err(e) = result {
            log::warn!("{}: export failed: {}", T::list_name(), e);
            self.notifications.error(format!("Export failed: {}", e));
        }
    }

    pub fn export_excel(&self) {
        if let Some((columns, rows)) = self.export_rows() {
            self.report_export(export::export_excel(&Self::file_name(), &columns, &rows));
        }
    }

    pub fn export_pdf(&self) {
        if let Some((columns, rows)) = self.export_rows() {
            let title = format!("{} Master", T::list_name());
            self.report_export(export::export_pdf(&Self::file_name(), &title, &columns, &rows));
        }
    }

    pub fn print(&self) {
        if let Some((columns, rows)) = self.export_rows() {
            let title = format!("{} Master", T::list_name());
            self.report_export(export::print_table(&title, &columns, &rows));
        }
    }
}
