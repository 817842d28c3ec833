//! Generic client-side data table
//!
//! Rows are view structs built from the stores (`impl From<Aggregate> for Row`
//! plus resolved names). The table owns its search text, sort, and page state;
//! the page owns the rows, the selection, and what a click or delete does.

use crate::shared::components::confirm_dialog::{ConfirmDialog, DELETE_CONFIRMATION};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    clamp_page, filter_list, get_sort_indicator, paginate, sort_list, total_pages, SearchInput,
    Searchable, SortState, Sortable,
};
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// Row type accepted by `DataTable`
pub trait TableRow: Searchable + Sortable + Clone + Send + Sync + 'static {
    fn row_id(&self) -> String;
}

/// One column: header, sort key, and cell renderer
pub struct Column<R> {
    pub key: &'static str,
    pub header: &'static str,
    pub sortable: bool,
    pub render: fn(&R) -> AnyView,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> Column<R> {
    pub const fn new(key: &'static str, header: &'static str, render: fn(&R) -> AnyView) -> Self {
        Self {
            key,
            header,
            sortable: false,
            render,
        }
    }

    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }
}

/// Plain text cell
pub fn text_cell(text: impl Into<String>) -> AnyView {
    let text: String = text.into();
    view! { <span>{text}</span> }.into_any()
}

#[component]
pub fn DataTable<R>(
    #[prop(into)] rows: Signal<Vec<R>>,
    columns: Vec<Column<R>>,
    /// Id of the highlighted row
    #[prop(optional, into)]
    selected_id: MaybeProp<String>,
    #[prop(optional)] on_row_click: Option<Callback<R>>,
    /// Adds a delete button per row; runs after the user confirms
    #[prop(optional)]
    on_delete: Option<Callback<R>>,
    #[prop(optional, into)] search_placeholder: Option<String>,
) -> impl IntoView
where
    R: TableRow,
{
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let page_size_options = config.table.page_size_options.clone();

    let search = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::default());
    let page = RwSignal::new(0usize);
    let page_size = RwSignal::new(config.table.default_page_size);

    let pending_delete = RwSignal::new(None::<R>);
    let confirm_open = RwSignal::new(false);

    let processed = Signal::derive(move || {
        let mut items = filter_list(rows.get(), &search.get());
        sort_list(&mut items, &sort.get());
        items
    });
    let total_count = Signal::derive(move || processed.with(|items| items.len()));
    let page_count = Signal::derive(move || total_pages(total_count.get(), page_size.get()));
    let current_page =
        Signal::derive(move || clamp_page(page.get(), total_count.get(), page_size.get()));
    let page_rows =
        Signal::derive(move || processed.with(|items| paginate(items, current_page.get(), page_size.get())));

    let has_delete = on_delete.is_some();
    let column_count = columns.len() + usize::from(has_delete);
    let columns = StoredValue::new(columns);

    let confirm_delete = Callback::new(move |_| {
        if let (Some(row), Some(on_delete)) = (pending_delete.get_untracked(), on_delete) {
            on_delete.run(row);
        }
        pending_delete.set(None);
    });

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <SearchInput
                    value=search
                    on_change=Callback::new(move |value: String| {
                        search.set(value);
                        page.set(0);
                    })
                    placeholder=search_placeholder.unwrap_or_default()
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {move || columns.get_value().into_iter().map(|column| {
                                if column.sortable {
                                    view! {
                                        <th
                                            class="table__header-cell table__header-cell--sortable"
                                            on:click=move |_| sort.update(|s| s.toggle(column.key))
                                        >
                                            {column.header}
                                            <span class="table__sort-indicator">
                                                {move || sort.with(|s| get_sort_indicator(s, column.key))}
                                            </span>
                                        </th>
                                    }.into_any()
                                } else {
                                    view! { <th class="table__header-cell">{column.header}</th> }.into_any()
                                }
                            }).collect_view()}
                            {has_delete.then(|| view! { <th class="table__header-cell table__header-cell--action"></th> })}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let rows = page_rows.get();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan=column_count.to_string()>
                                            "No data found"
                                        </td>
                                    </tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let row_id = row.row_id();
                                let row_for_click = row.clone();
                                let row_for_delete = row.clone();
                                let cells = columns.get_value().into_iter().map(|column| {
                                    view! { <td class="table__cell">{(column.render)(&row)}</td> }
                                }).collect_view();
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--selected=move || selected_id.get().as_deref() == Some(row_id.as_str())
                                        on:click=move |_| {
                                            if let Some(cb) = on_row_click {
                                                cb.run(row_for_click.clone());
                                            }
                                        }
                                    >
                                        {cells}
                                        {has_delete.then(|| view! {
                                            <td class="table__cell table__cell--action">
                                                <button
                                                    class="button button--icon button--danger"
                                                    title="Delete"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        pending_delete.set(Some(row_for_delete.clone()));
                                                        confirm_open.set(true);
                                                    }
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </td>
                                        })}
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=current_page
                total_pages=page_count
                total_count=total_count
                page_size=page_size
                on_page_change=Callback::new(move |p| page.set(p))
                on_page_size_change=Callback::new(move |size| {
                    page_size.set(size);
                    page.set(0);
                })
                page_size_options=page_size_options
            />

            <ConfirmDialog
                open=confirm_open
                message=DELETE_CONFIRMATION
                on_confirm=confirm_delete
            />
        </div>
    }
}
