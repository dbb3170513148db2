use super::view_model::DetailFormViewModel;
use crate::routes::use_edit_id;
use crate::shared::components::ui::Button;
use crate::shared::components::PageHeader;
use crate::shared::confirm_dialog::ConfirmDialog;
use crate::shared::icons::icon;
use contracts::domain::common::{MasterRecord, RecordId};
use contracts::shared::metadata::{FieldMetadata, FieldType};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Create/edit screen for any record type
///
/// `?id=` selects edit mode; a change of the query rebuilds the form.
pub fn master_form_view<T: MasterRecord>() -> impl IntoView {
    let edit_id = use_edit_id();
    move || form_body::<T>(edit_id.get())
}

fn form_body<T: MasterRecord>(edit_id: Option<RecordId>) -> impl IntoView {
    let vm = DetailFormViewModel::<T>::from_context(edit_id);
    vm.load_if_needed();
    let state = vm.state;
    let vm = StoredValue::new(vm);

    let navigate = use_navigate();
    Effect::new(move |_| {
        if state.with(|s| s.is_saved()) {
            navigate(&T::list_route(), Default::default());
        }
    });

    let is_edit = edit_id.is_some();
    let busy = Signal::derive(move || state.with(|s| s.is_submitting() || s.is_loading()));

    let fields = T::field_metadata()
        .iter()
        .filter(|f| f.visible_in_form())
        .map(|field| field_input::<T>(*field, vm))
        .collect_view();

    view! {
        <div class="page page--form">
            <PageHeader
                title=if is_edit {
                    format!("Edit {}", T::element_name())
                } else {
                    format!("New {}", T::element_name())
                }
            >
                <A href={T::list_route()} attr:class="button button--secondary">
                    {icon("arrow-left")}
                    "Back to list"
                </A>
            </PageHeader>

            <Show when=move || state.with(|s| s.is_loading())>
                <div class="form__loading">"Loading..."</div>
            </Show>

            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.with_value(|vm| vm.request_submit());
                }
            >
                <div class="form__grid">{fields}</div>
                <div class="form__actions">
                    <Button
                        variant="secondary"
                        disabled=busy
                        on_click=Callback::new(move |_| vm.with_value(|vm| vm.reset()))
                    >
                        {icon("rotate-ccw")}
                        "Reset"
                    </Button>
                    <Button button_type="submit" disabled=busy>
                        {icon("save")}
                        {move || match (state.with(|s| s.is_submitting()), is_edit) {
                            (true, _) => "Saving...",
                            (false, true) => "Update",
                            (false, false) => "Save",
                        }}
                    </Button>
                </div>
            </form>

            <ConfirmDialog
                open=Signal::derive(move || state.with(|s| s.dialog_open()))
                intent=Signal::derive(move || state.with(|s| s.dialog_intent()))
                title=Signal::derive(move || state.with(|s| s.dialog_intent().title(T::element_name())))
                message=Signal::derive(move || state.with(|s| s.confirm_message()))
                on_confirm=Callback::new(move |_| vm.with_value(|vm| vm.confirm_submit()))
                on_cancel=Callback::new(move |_| vm.with_value(|vm| vm.cancel_submit()))
                busy=Signal::derive(move || state.with(|s| s.is_submitting()))
            />
        </div>
    }
}

/// Labelled input for one field, bound to the draft
fn field_input<T: MasterRecord>(
    field: FieldMetadata,
    vm: StoredValue<DetailFormViewModel<T>>,
) -> impl IntoView {
    let state = vm.with_value(|vm| vm.state);
    let name = field.name;
    let input_id = format!("field-{}", name);
    let value = move || state.with(|s| s.draft().field_value(name).unwrap_or_default());
    let on_input = move |ev| vm.with_value(|vm| vm.set_field(name, event_target_value(&ev)));
    let placeholder = field.ui.placeholder.unwrap_or_default();
    let max_length = field.validation.max_length.map(|max| max.to_string());

    let control = if field.field_type == FieldType::LongText {
        view! {
            <textarea
                id=input_id.clone()
                class="form__textarea"
                rows="3"
                placeholder=placeholder
                maxlength=max_length
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=input_id.clone()
                class="form__input"
                type=field.field_type.input_type()
                inputmode=if field.field_type.is_numeric() { Some("numeric") } else { None }
                placeholder=placeholder
                maxlength=max_length
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id>
                {field.ui.label}
                {field.validation.required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {control}
        </div>
    }
}
