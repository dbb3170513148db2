use super::state::row_key;
use super::view_model::ListViewModel;
use crate::routes::edit_href;
use crate::shared::components::ui::Button;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::confirm_dialog::{ConfirmDialog, DialogIntent};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::common::MasterRecord;
use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;
use leptos_router::components::A;

/// Master list screen for any record type
///
/// Search, paging, export and the delete workflow are identical for every
/// master; only the columns come from the record's field table.
pub fn master_list_view<T: MasterRecord>() -> impl IntoView {
    let vm = ListViewModel::<T>::from_context();
    vm.load_if_needed();

    let state = vm.state;
    let page_items = vm.page_items;
    let filtered_count = vm.filtered_count;
    let total_pages = vm.total_pages;
    let vm = StoredValue::new(vm);

    let query = Memo::new(move |_| state.with(|s| s.query().to_string()));
    let current_page = Signal::derive(move || state.with(|s| s.page()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));

    let columns: Vec<FieldMetadata> = T::field_metadata()
        .iter()
        .filter(|f| f.ui.visible_in_list)
        .copied()
        .collect();
    let column_count = (columns.len() + 1).to_string();
    let empty_colspan = column_count.clone();

    let header_cells = columns
        .iter()
        .map(|c| view! { <th class="table__header-cell">{c.ui.label}</th> })
        .collect_view();

    let row_columns = columns.clone();
    let render_row = move |record: T| {
        let cells = row_columns
            .iter()
            .map(|c| {
                let value = record.field_value(c.name).unwrap_or_default();
                view! {
                    <td class="table__cell">{move || highlight_matches(&value, &query.get())}</td>
                }
            })
            .collect_view();

        let id = record.record_id();
        let viewed = record.clone();
        view! {
            <tr class="table__row">
                {cells}
                <td class="table__cell table__cell--actions">
                    <button
                        class="icon-button"
                        title="View"
                        on:click=move |_| vm.with_value(|vm| vm.view(viewed.clone()))
                    >
                        {icon("eye")}
                    </button>
                    {id.map(|id| view! {
                        <A href={edit_href::<T>(id)} attr:class="icon-button" attr:title="Edit">
                            {icon("edit")}
                        </A>
                        <button
                            class="icon-button icon-button--danger"
                            title="Delete"
                            on:click=move |_| vm.with_value(|vm| vm.request_delete(id))
                        >
                            {icon("delete")}
                        </button>
                    })}
                </td>
            </tr>
        }
    };

    let delete_title = DialogIntent::Delete.title(T::element_name());

    view! {
        <div class="page">
            <PageHeader
                title=format!("{} Master", T::list_name())
                subtitle=format!("Manage {}", T::list_name().to_lowercase())
            >
                <A href={T::form_route()} attr:class="button button--primary">
                    {icon("plus")}
                    {format!("New {}", T::element_name())}
                </A>
                <Button
                    variant="secondary"
                    title="Refresh"
                    disabled=loading
                    on_click=Callback::new(move |_| vm.with_value(|vm| vm.refresh()))
                >
                    {icon("refresh")}
                </Button>
                <Button
                    variant="secondary"
                    title="Export to Excel"
                    on_click=Callback::new(move |_| vm.with_value(|vm| vm.export_excel()))
                >
                    {icon("download")}
                    "Excel"
                </Button>
                <Button
                    variant="secondary"
                    title="Export to PDF"
                    on_click=Callback::new(move |_| vm.with_value(|vm| vm.export_pdf()))
                >
                    {icon("file-text")}
                    "PDF"
                </Button>
                <Button
                    variant="secondary"
                    title="Print"
                    on_click=Callback::new(move |_| vm.with_value(|vm| vm.print()))
                >
                    {icon("printer")}
                </Button>
            </PageHeader>

            <div class="page__toolbar">
                <SearchInput
                    value=Signal::derive(move || query.get())
                    on_change=Callback::new(move |q: String| vm.with_value(|vm| vm.set_query(q)))
                    placeholder=format!("Search {}...", T::list_name().to_lowercase())
                />
                <PaginationControls
                    current_page=current_page
                    total_pages=Signal::derive(move || total_pages.get())
                    total_count=Signal::derive(move || filtered_count.get())
                    on_page_change=Callback::new(move |page| vm.with_value(|vm| vm.set_page(page)))
                />
            </div>

            <div class="table">
                <table class="table__data">
                    <thead>
                        <tr>
                            {header_cells}
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show when=move || loading.get()>
                            <tr>
                                <td class="table__cell table__cell--info" colspan=column_count.clone()>
                                    "Loading..."
                                </td>
                            </tr>
                        </Show>
                        <Show when=move || !loading.get() && page_items.with(|items| items.is_empty())>
                            <tr>
                                <td class="table__cell table__cell--info" colspan=empty_colspan.clone()>
                                    "No records found"
                                </td>
                            </tr>
                        </Show>
                        <For
                            each=move || page_items.get().into_iter().enumerate()
                            key=|(index, record)| row_key(*index, record)
                            children=move |(_, record)| render_row(record)
                        />
                    </tbody>
                </table>
            </div>

            <ConfirmDialog
                open=Signal::derive(move || state.with(|s| s.dialog_open()))
                intent=Signal::stored(DialogIntent::Delete)
                title=Signal::stored(delete_title)
                message=Signal::derive(move || vm.with_value(|vm| vm.delete_message()))
                on_confirm=Callback::new(move |_| vm.with_value(|vm| vm.confirm_delete()))
                on_cancel=Callback::new(move |_| vm.with_value(|vm| vm.cancel_delete()))
                busy=Signal::derive(move || state.with(|s| s.is_deleting()))
            />

            {move || {
                state
                    .with(|s| s.selected().cloned())
                    .map(|record| record_view_modal(record, Callback::new(move |_| vm.with_value(|vm| vm.close_view()))))
            }}
        </div>
    }
}

/// Read-only panel with every form field of one record
fn record_view_modal<T: MasterRecord>(record: T, on_close: Callback<()>) -> impl IntoView {
    let fields = T::field_metadata()
        .iter()
        .filter(|f| f.visible_in_form())
        .map(|f| {
            let value = record.field_value(f.name).unwrap_or_default();
            let value = if value.trim().is_empty() { "-".to_string() } else { value };
            view! {
                <dt class="record-view__label">{f.ui.label}</dt>
                <dd class="record-view__value">{value}</dd>
            }
        })
        .collect_view();

    view! {
        <ModalFrame on_close=on_close modal_class="record-view">
            <div class="record-view__header">
                <h3>{format!("{} Details", T::element_name())}</h3>
                <button class="icon-button" title="Close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
            <dl class="record-view__fields">{fields}</dl>
            <div class="record-view__actions">
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </ModalFrame>
    }
}
