use crate::shared::browser::alert;
use crate::shared::clock::today;
use crate::shared::components::data_table::{text_cell, Column, DataTable, TableRow};
use crate::shared::components::descriptor_form::DescriptorForm;
use crate::shared::components::drawer::Drawer;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::status_badge::validity_badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_text, Searchable, Sortable};
use crate::shared::state::app_stores::{delete_record, save_record, use_stores};
use chrono::NaiveDate;
use contracts::domain::a005_coupon::aggregate::{Coupon, CouponId};
use contracts::domain::a005_coupon::stats::CouponStats;
use contracts::domain::common::{AggregateId, ValidityStatus};
use contracts::enums::DiscountType;
use contracts::shared::format::format_date;
use contracts::shared::metadata::EditableForm;
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct CouponRow {
    pub id: String,
    pub code: String,
    pub description: String,
    pub discount: String,
    pub discount_type: DiscountType,
    pub valid_to: Option<NaiveDate>,
    pub usage: String,
    pub used_count: u32,
    pub status: ValidityStatus,
}

impl CouponRow {
    pub fn new(coupon: Coupon, today: NaiveDate) -> Self {
        Self {
            id: coupon.id.as_string(),
            discount: coupon.discount_text(),
            usage: coupon.usage_text(),
            status: coupon.status(today),
            description: coupon.description.unwrap_or_default(),
            code: coupon.code,
            discount_type: coupon.discount_type,
            valid_to: coupon.valid_to,
            used_count: coupon.used_count,
        }
    }
}

fn expiry_text(date: Option<NaiveDate>) -> String {
    date.map(format_date).unwrap_or_else(|| "No expiry".to_string())
}

impl Searchable for CouponRow {
    fn search_cells(&self) -> Vec<String> {
        vec![
            self.code.clone(),
            self.description.clone(),
            self.discount.clone(),
            self.discount_type.code().to_string(),
            expiry_text(self.valid_to),
            self.usage.clone(),
            self.status.as_str().to_string(),
        ]
    }
}

impl Sortable for CouponRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => cmp_text(&self.code, &other.code),
            "type" => self.discount_type.code().cmp(other.discount_type.code()),
            "valid_to" => self.valid_to.cmp(&other.valid_to),
            "usage" => self.used_count.cmp(&other.used_count),
            "status" => self.status.as_str().cmp(other.status.as_str()),
            _ => Ordering::Equal,
        }
    }
}

impl TableRow for CouponRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

fn coupon_columns() -> Vec<Column<CouponRow>> {
    vec![
        Column::new("code", "Code", |r: &CouponRow| {
            view! { <strong>{r.code.clone()}</strong> }.into_any()
        })
        .sortable(),
        Column::new("description", "Description", |r: &CouponRow| text_cell(r.description.clone())),
        Column::new("type", "Type", |r: &CouponRow| text_cell(r.discount_type.code())).sortable(),
        Column::new("discount", "Discount", |r: &CouponRow| text_cell(r.discount.clone())),
        Column::new("valid_to", "Expires", |r: &CouponRow| text_cell(expiry_text(r.valid_to))).sortable(),
        Column::new("usage", "Usage", |r: &CouponRow| text_cell(r.usage.clone())).sortable(),
        Column::new("status", "Status", |r: &CouponRow| validity_badge(r.status)).sortable(),
    ]
}

#[derive(Clone, Debug, PartialEq)]
struct CouponEdit {
    coupon: Coupon,
    is_new: bool,
}

#[component]
#[allow(non_snake_case)]
pub fn CouponList() -> impl IntoView {
    let stores = use_stores();
    let editing = RwSignal::new(None::<CouponEdit>);
    let selected = RwSignal::new(None::<String>);

    let rows = Signal::derive(move || {
        let today = today();
        stores.coupons.with(|s| {
            s.all()
                .iter()
                .cloned()
                .map(|c| CouponRow::new(c, today))
                .collect::<Vec<_>>()
        })
    });
    let stats = Signal::derive(move || stores.coupons.with(|s| CouponStats::compute(s.all(), today())));

    let open_existing = Callback::new(move |row: CouponRow| {
        let id = CouponId::from_string(&row.id);
        if let Some(coupon) = stores.coupons.with_untracked(|s| s.get_by_id(&id).cloned()) {
            selected.set(Some(row.id));
            editing.set(Some(CouponEdit {
                coupon,
                is_new: false,
            }));
        }
    });

    let delete_coupon = Callback::new(move |row: CouponRow| {
        delete_record(stores.coupons, &CouponId::from_string(&row.id));
    });

    let close = Callback::new(move |_| {
        editing.set(None);
        selected.set(None);
    });

    view! {
        <div class="page">
            <PageHeader title="Coupons".to_string() subtitle="Discount codes and their usage".to_string()>
                <button
                    class="button button--primary"
                    on:click=move |_| {
                        selected.set(None);
                        editing.set(Some(CouponEdit { coupon: Coupon::new_for_insert(), is_new: true }));
                    }
                >
                    {icon("plus")}
                    "Add Coupon"
                </button>
            </PageHeader>

            <div class="stat-cards">
                <StatCard
                    label="Total Coupons"
                    icon_name="ticket"
                    value=Signal::derive(move || stats.get().total.to_string())
                />
                <StatCard
                    label="Active"
                    icon_name="check-circle"
                    tone=StatTone::Success
                    value=Signal::derive(move || stats.get().unexpired.to_string())
                />
                <StatCard
                    label="Expired"
                    icon_name="alert-circle"
                    tone=StatTone::Warning
                    value=Signal::derive(move || stats.get().expired.to_string())
                />
                <StatCard
                    label="Most Used"
                    icon_name="bar-chart"
                    value=Signal::derive(move || stats.get().most_used.unwrap_or_else(|| "-".to_string()))
                    subtitle=Signal::derive(move || stats.get().least_used.map(|c| format!("Least used: {}", c)))
                />
            </div>

            <DataTable
                rows=rows
                columns=coupon_columns()
                selected_id=Signal::derive(move || selected.get())
                on_row_click=open_existing
                on_delete=delete_coupon
                search_placeholder="Search coupons..."
            />

            {move || editing.get().map(|edit| view! {
                <CouponDrawer coupon=edit.coupon is_new=edit.is_new on_close=close />
            })}
        </div>
    }
}

#[component]
fn CouponDrawer(coupon: Coupon, is_new: bool, on_close: Callback<()>) -> impl IntoView {
    let stores = use_stores();
    let discount_type = RwSignal::new(coupon.field_value("discount_type"));
    let form = RwSignal::new(coupon);

    Effect::new(move |_| {
        let kind = discount_type.get();
        form.update(|f| f.set_field_value("discount_type", &kind));
    });

    let save = move |_| {
        let coupon = form.get_untracked();
        if let Err(e) = coupon.validate() {
            alert(&e.to_string());
            return;
        }
        if save_record(stores.coupons, coupon, is_new) {
            on_close.run(());
        }
    };

    let title = if is_new { "Add Coupon" } else { "Edit Coupon" };

    view! {
        <Drawer title=title.to_string() on_close=on_close>
            <div class="form-group">
                <label>"Discount Type"</label>
                <Select value=discount_type>
                    {DiscountType::all()
                        .into_iter()
                        .map(|kind| view! { <option value=kind.code()>{kind.code()}</option> })
                        .collect_view()}
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

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_coupon::seed::seed_coupons;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_row_texts() {
        let mut coupon = Coupon::new_for_insert();
        coupon.code = "FLAT25".into();
        coupon.discount_type = DiscountType::Fixed;
        coupon.discount_value = 25.0;
        coupon.usage_limit = Some(100);
        coupon.used_count = 20;

        let row = CouponRow::new(coupon, date(2023, 6, 1));
        assert_eq!(row.discount, "$25.00");
        assert_eq!(row.usage, "20 / 100");
        assert_eq!(row.status, ValidityStatus::Unexpired);
        assert_eq!(expiry_text(row.valid_to), "No expiry");
    }

    #[test]
    fn test_usage_sorts_by_used_count() {
        let mut rows: Vec<CouponRow> = seed_coupons()
            .into_iter()
            .map(|c| CouponRow::new(c, date(2023, 11, 15)))
            .collect();
        rows.sort_by(|a, b| b.compare_by_field(a, "usage"));
        assert_eq!(rows[0].code, "SPRING5");
        assert_eq!(rows.last().map(|r| r.code.as_str()), Some("HOLIDAY25"));
    }
}
