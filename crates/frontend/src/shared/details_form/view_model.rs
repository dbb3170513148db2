use super::state::{FormState, SubmitPlan, SubmitRequest};
use crate::shared::api::RecordClient;
use crate::shared::api_utils::{use_app_config, AppConfig};
use crate::shared::lifecycle::ScreenGeneration;
use crate::shared::notifications::{use_notifications, NotificationCenter};
use contracts::domain::common::{MasterRecord, RecordId};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for a create/edit form
#[derive(Clone)]
pub struct DetailFormViewModel<T: MasterRecord> {
    pub state: RwSignal<FormState<T>>,
    client: RecordClient<T>,
    notifications: NotificationCenter,
    screen: ScreenGeneration,
}

impl<T: MasterRecord> DetailFormViewModel<T> {
    /// Must be called inside the form's reactive owner
    pub fn new(config: &AppConfig, notifications: NotificationCenter, edit_id: Option<RecordId>) -> Self {
        let screen = ScreenGeneration::new();
        screen.invalidate_on_cleanup();
        Self {
            state: RwSignal::new(FormState::new(edit_id)),
            client: RecordClient::new(&config.api_base),
            notifications,
            screen,
        }
    }

    pub fn from_context(edit_id: Option<RecordId>) -> Self {
        Self::new(&use_app_config(), use_notifications(), edit_id)
    }

    /// Load the record when editing; a new record keeps the empty template
    pub fn load_if_needed(&self) {
        let Some(id) = self.state.try_update(|s| s.begin_load()).flatten() else {
            return;
        };
        let ticket = self.screen.ticket();
        let client = self.client.clone();
        let state = self.state;
        let notifications = self.notifications;

        spawn_local(async move {
            let result = client.fetch_one(id).await;
            if !ticket.is_current() {
                log::debug!("{} {}: form closed before load finished", T::element_name(), id);
                return;
            }
            if let Err(e) = &result {
                log::warn!("{} {}: load failed: {}", T::element_name(), id, e);
            }
            if let Some(Some(notice)) = state.try_update(|s| s.finish_load(result)) {
                notifications.notify(notice);
            }
        });
    }

    pub fn set_field(&self, field: &str, value: String) {
        if let Some(Err(notice)) = self.state.try_update(|s| s.set_field(field, value)) {
            self.notifications.notify(notice);
        }
    }

    pub fn reset(&self) {
        self.state.update(|s| s.reset());
    }

    pub fn request_submit(&self) {
        match self.state.try_update(|s| s.request_submit()) {
            Some(SubmitRequest::Invalid(message)) => {
                self.notifications.warning(message);
            }
            Some(SubmitRequest::Busy) => {
                log::debug!("{}: submit already in progress", T::element_name());
            }
            Some(SubmitRequest::Opened) | None => {}
        }
    }

    pub fn cancel_submit(&self) {
        self.state.update(|s| s.cancel_submit());
    }

    /// Send the confirmed create or update
    pub fn confirm_submit(&self) {
        let Some(plan) = self.state.try_update(|s| s.confirm_submit()).flatten() else {
            return;
        };
        let ticket = self.screen.ticket();
        let client = self.client.clone();
        let state = self.state;
        let notifications = self.notifications;

        spawn_local(async move {
            let _guard = SubmitGuard { state };
            let result = match &plan {
                SubmitPlan::Create(record) => {
                    log::info!("{}: creating '{}'", T::element_name(), record.display_name());
                    client.create(record).await
                }
                SubmitPlan::Update(id, record) => {
                    log::info!("{}: updating {}", T::element_name(), id);
                    client.update(*id, record).await
                }
            };
            if !ticket.is_current() {
                log::debug!("{}: form closed before submit finished", T::element_name());
                return;
            }
            if let Err(e) = &result {
                log::warn!("{}: submit failed: {}", T::element_name(), e);
            }
            if let Some(outcome) = state.try_update(|s| s.finish_submit(result)) {
                notifications.notify(outcome.notice);
            }
        });
    }
}

/// Returns the form to `Idle` however the submit task ends
struct SubmitGuard<T: MasterRecord> {
    state: RwSignal<FormState<T>>,
}

impl<T: MasterRecord> Drop for SubmitGuard<T> {
    fn drop(&mut self) {
        self.state.try_update(|s| s.abort_submit());
    }
}
