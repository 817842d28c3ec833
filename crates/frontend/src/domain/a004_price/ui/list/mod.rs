use crate::shared::browser::alert;
use crate::shared::clock::today;
use crate::shared::components::data_table::{text_cell, Column, DataTable, TableRow};
use crate::shared::components::descriptor_form::DescriptorForm;
use crate::shared::components::drawer::Drawer;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::status_badge::validity_badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_text, Searchable, Sortable};
use crate::shared::state::app_stores::{delete_record, save_record, use_stores};
use chrono::NaiveDate;
use contracts::domain::a001_layout::aggregate::{layout_name, Layout, LayoutId};
use contracts::domain::a004_price::aggregate::{Price, PriceId};
use contracts::domain::common::{AggregateId, ValidityStatus};
use contracts::shared::format::{format_date, format_inr};
use contracts::shared::metadata::EditableForm;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct PriceRow {
    pub id: String,
    pub name: String,
    pub layout_name: String,
    pub crop: String,
    pub price_per_acre: f64,
    pub min_size: f64,
    pub size_range: String,
    pub valid_from: Option<NaiveDate>,
    pub valid_to: Option<NaiveDate>,
    pub status: ValidityStatus,
}

impl PriceRow {
    /// Row with the layout name resolved and the status classified for `today`
    pub fn new(price: Price, layouts: &[Layout], today: NaiveDate) -> Self {
        Self {
            layout_name: layout_name(layouts, Some(&price.layout)),
            status: price.status(today),
            size_range: price.size_range_text(),
            id: price.id.as_string(),
            name: price.name,
            crop: price.crop,
            price_per_acre: price.price_per_acre,
            min_size: price.min_size,
            valid_from: price.valid_from,
            valid_to: price.valid_to,
        }
    }
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "-".to_string())
}

impl Searchable for PriceRow {
    fn search_cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.layout_name.clone(),
            self.crop.clone(),
            format!("₹{}", format_inr(self.price_per_acre)),
            self.size_range.clone(),
            date_text(self.valid_from),
            date_text(self.valid_to),
            self.status.as_str().to_string(),
        ]
    }
}

impl Sortable for PriceRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "layout" => cmp_text(&self.layout_name, &other.layout_name),
            "crop" => cmp_text(&self.crop, &other.crop),
            "price_per_acre" => cmp_f64(self.price_per_acre, other.price_per_acre),
            "size" => cmp_f64(self.min_size, other.min_size),
            "valid_from" => self.valid_from.cmp(&other.valid_from),
            "valid_to" => self.valid_to.cmp(&other.valid_to),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

impl TableRow for PriceRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

fn price_columns() -> Vec<Column<PriceRow>> {
    vec![
        Column::new("name", "Name", |r: &PriceRow| text_cell(r.name.clone())).sortable(),
        Column::new("layout", "Layout", |r: &PriceRow| text_cell(r.layout_name.clone())).sortable(),
        Column::new("crop", "Crop", |r: &PriceRow| text_cell(r.crop.clone())).sortable(),
        Column::new("price_per_acre", "Price / Acre", |r: &PriceRow| {
            text_cell(format!("₹{}", format_inr(r.price_per_acre)))
        })
        .sortable(),
        Column::new("size", "Size Range", |r: &PriceRow| text_cell(r.size_range.clone())).sortable(),
        Column::new("valid_from", "Valid From", |r: &PriceRow| text_cell(date_text(r.valid_from))).sortable(),
        Column::new("valid_to", "Valid To", |r: &PriceRow| text_cell(date_text(r.valid_to))).sortable(),
        Column::new("status", "Status", |r: &PriceRow| validity_badge(r.status)).sortable(),
    ]
}

/// Record open in the drawer and whether it is new
#[derive(Clone, Debug, PartialEq)]
struct PriceEdit {
    price: Price,
    is_new: bool,
}

/// Pricing rules with add/edit drawer; restricted to one layout when `layout_id` is set
#[component]
#[allow(non_snake_case)]
pub fn PriceTable(#[prop(optional)] layout_id: Option<LayoutId>) -> impl IntoView {
    let stores = use_stores();
    let layout_id = StoredValue::new(layout_id);
    let editing = RwSignal::new(None::<PriceEdit>);
    let selected = RwSignal::new(None::<String>);

    let rows = Signal::derive(move || {
        let layouts = stores.layouts.with(|s| s.snapshot());
        let today = today();
        layout_id.with_value(|filter| {
            stores.prices.with(|s| {
                s.filter(|p| filter.as_ref().map_or(true, |id| &p.layout == id))
                    .into_iter()
                    .map(|p| PriceRow::new(p, &layouts, today))
                    .collect::<Vec<_>>()
            })
        })
    });

    let open_new = move |_| {
        selected.set(None);
        editing.set(Some(PriceEdit {
            price: Price::new_for_insert(layout_id.get_value()),
            is_new: true,
        }));
    };

    let open_existing = Callback::new(move |row: PriceRow| {
        let id = PriceId::from_string(&row.id);
        if let Some(price) = stores.prices.with_untracked(|s| s.get_by_id(&id).cloned()) {
            selected.set(Some(row.id));
            editing.set(Some(PriceEdit {
                price,
                is_new: false,
            }));
        }
    });

    let delete_price = Callback::new(move |row: PriceRow| {
        delete_record(stores.prices, &PriceId::from_string(&row.id));
    });

    let close = Callback::new(move |_| {
        editing.set(None);
        selected.set(None);
    });

    view! {
        <div class="price-table">
            <div class="section-toolbar">
                <button class="button button--primary" on:click=open_new>
                    {icon("plus")}
                    "Add Price"
                </button>
            </div>

            <DataTable
                rows=rows
                columns=price_columns()
                selected_id=Signal::derive(move || selected.get())
                on_row_click=open_existing
                on_delete=delete_price
                search_placeholder="Search prices..."
            />

            {move || editing.get().map(|edit| view! {
                <PriceDrawer price=edit.price is_new=edit.is_new on_close=close />
            })}
        </div>
    }
}

#[component]
fn PriceDrawer(price: Price, is_new: bool, on_close: Callback<()>) -> impl IntoView {
    let stores = use_stores();
    let layout_choice = RwSignal::new(price.field_value("layout"));
    let form = RwSignal::new(price);

    Effect::new(move |_| {
        let layout = layout_choice.get();
        form.update(|f| f.set_field_value("layout", &layout));
    });

    let layout_options = move || {
        stores.layouts.with(|s| {
            s.all()
                .iter()
                .map(|l| {
                    let id = l.id.as_string();
                    view! { <option value=id>{l.name.clone()}</option> }
                })
                .collect_view()
        })
    };

    let save = move |_| {
        let price = form.get_untracked();
        if let Err(e) = price.validate() {
            alert(&e.to_string());
            return;
        }
        if save_record(stores.prices, price, is_new) {
            on_close.run(());
        }
    };

    let title = if is_new { "Add Price" } else { "Edit Price" };

    view! {
        <Drawer title=title.to_string() on_close=on_close>
            <div class="form-group">
                <label>"Layout"<span class="form-group__required">" *"</span></label>
                <Select value=layout_choice>
                    <option value="">"Select a layout"</option>
                    {layout_options}
                </Select>
            </div>
            <DescriptorForm form=form />
            <div class="details-actions">
                <button class="button button--primary" on:click=save>
                    {icon("save")}
                    "Save"
                </button>
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
            </div>
        </Drawer>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="page">
            <PageHeader title="Pricing".to_string() subtitle="Price per acre by layout, crop and plot size".to_string() />
            <PriceTable />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_layout::aggregate::UNKNOWN_LAYOUT;
    use contracts::domain::a001_layout::seed::seed_layouts;
    use contracts::domain::a004_price::seed::seed_prices;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_dangling_layout_shows_placeholder() {
        let mut price = seed_prices().remove(0);
        price.layout = LayoutId::from_string("deleted-layout");
        let row = PriceRow::new(price, &seed_layouts(), date(2023, 6, 1));
        assert_eq!(row.layout_name, UNKNOWN_LAYOUT);
    }

    #[test]
    fn test_status_follows_window() {
        let mut price = seed_prices().remove(0);
        price.valid_from = Some(date(2023, 1, 1));
        price.valid_to = Some(date(2023, 12, 31));

        let row = PriceRow::new(price.clone(), &[], date(2023, 12, 31));
        assert_eq!(row.status, ValidityStatus::Unexpired);
        let row = PriceRow::new(price, &[], date(2024, 1, 1));
        assert_eq!(row.status, ValidityStatus::Expired);
        assert!(row.matches_filter("expired"));
    }

    #[test]
    fn test_open_dates_render_dash() {
        assert_eq!(date_text(None), "-");
        assert_eq!(date_text(Some(date(2023, 1, 1))), "Jan 1, 2023");
    }
}
