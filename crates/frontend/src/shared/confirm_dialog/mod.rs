//! Yes/no confirmation for a pending mutation
//!
//! The dialog is stateless: the caller owns the open flag and must close it
//! on both the confirm and the cancel path.

use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use leptos::prelude::*;

/// What the pending mutation does; chosen by the caller, never derived from text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogIntent {
    Delete,
    Update,
    Create,
}

impl DialogIntent {
    pub fn for_submit(is_edit: bool) -> Self {
        if is_edit {
            Self::Update
        } else {
            Self::Create
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, Self::Delete)
    }

    pub fn confirm_label(&self) -> &'static str {
        match self {
            Self::Delete => "Yes, Delete",
            Self::Update => "Confirm Update",
            Self::Create => "Confirm Save",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Delete => "trash",
            Self::Update => "edit",
            Self::Create => "save",
        }
    }

    pub fn tone_class(&self) -> &'static str {
        if self.is_destructive() {
            "confirm-dialog--danger"
        } else {
            "confirm-dialog--primary"
        }
    }

    pub fn button_class(&self) -> &'static str {
        if self.is_destructive() {
            "button button--danger"
        } else {
            "button button--primary"
        }
    }

    /// Default dialog title for an entity, e.g. "Delete Role"
    pub fn title(&self, element_name: &str) -> String {
        match self {
            Self::Delete => format!("Delete {}", element_name),
            Self::Update => format!("Update {}", element_name),
            Self::Create => format!("Save {}", element_name),
        }
    }
}

/// Confirmation modal; renders nothing while `open` is false
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] intent: Signal<DialogIntent>,
    #[prop(into)] title: Signal<String>,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    /// Disables both buttons while the confirmed operation runs
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
) -> impl IntoView {
    let is_busy = move || busy.get().unwrap_or(false);

    view! {
        <Show when=move || open.get()>
            <ModalFrame
                on_close=Callback::new(move |_| {
                    if !is_busy() {
                        on_cancel.run(());
                    }
                })
                modal_class="confirm-dialog"
            >
                <div class=move || format!("confirm-dialog__body {}", intent.get().tone_class())>
                    <div class="confirm-dialog__icon">{move || icon(intent.get().icon_name())}</div>
                    <h3 class="confirm-dialog__title">{move || title.get()}</h3>
                    <p class="confirm-dialog__message">{move || message.get()}</p>
                </div>
                <div class="confirm-dialog__actions">
                    <button
                        class="button button--secondary"
                        disabled=is_busy
                        on:click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class=move || intent.get().button_class()
                        disabled=is_busy
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if is_busy() { "Please wait..." } else { intent.get().confirm_label() }}
                    </button>
                </div>
            </ModalFrame>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_intent() {
        assert_eq!(DialogIntent::Delete.confirm_label(), "Yes, Delete");
        assert_eq!(DialogIntent::Update.confirm_label(), "Confirm Update");
        assert_eq!(DialogIntent::Create.confirm_label(), "Confirm Save");
    }

    #[test]
    fn test_only_delete_is_destructive() {
        assert!(DialogIntent::Delete.is_destructive());
        assert!(!DialogIntent::Update.is_destructive());
        assert!(!DialogIntent::Create.is_destructive());
        assert_eq!(DialogIntent::Delete.tone_class(), "confirm-dialog--danger");
    }

    #[test]
    fn test_submit_intent_follows_edit_mode() {
        assert_eq!(DialogIntent::for_submit(true), DialogIntent::Update);
        assert_eq!(DialogIntent::for_submit(false), DialogIntent::Create);
        assert_eq!(DialogIntent::Update.title("Unit"), "Update Unit");
    }
}
