use crate::shared::components::data_table::{text_cell, Column, DataTable, TableRow};
use crate::shared::components::status_badge::plot_status_badge;
use crate::shared::list_utils::{cmp_f64, cmp_text, Searchable, Sortable};
use crate::shared::state::app_stores::{delete_record, use_stores};
use contracts::domain::a001_layout::aggregate::LayoutId;
use contracts::domain::a002_plot::aggregate::{Plot, PlotId};
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::common::AggregateId;
use contracts::enums::PlotStatus;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotRow {
    pub id: String,
    pub plot_number: String,
    pub lp_number: String,
    pub size: String,
    pub size_acres: Option<f64>,
    pub status: PlotStatus,
    pub crop: String,
    /// Empty when unassigned or the customer no longer exists
    pub customer_name: String,
}

impl From<Plot> for PlotRow {
    fn from(p: Plot) -> Self {
        Self {
            id: p.id.as_string(),
            size_acres: p.size_acres(),
            plot_number: p.plot_number,
            lp_number: p.lp_number,
            size: p.size,
            status: p.status,
            crop: p.crop.unwrap_or_default(),
            customer_name: String::new(),
        }
    }
}

impl PlotRow {
    pub fn new(plot: Plot, customers: &[Customer]) -> Self {
        let customer_name = plot
            .customer
            .as_ref()
            .and_then(|id| customers.iter().find(|c| &c.id == id))
            .map(|c| c.name.clone())
            .unwrap_or_default();
        Self {
            customer_name,
            ..Self::from(plot)
        }
    }
}

impl Searchable for PlotRow {
    fn search_cells(&self) -> Vec<String> {
        vec![
            self.plot_number.clone(),
            self.lp_number.clone(),
            self.size.clone(),
            self.status.code().to_string(),
            self.crop.clone(),
            self.customer_name.clone(),
        ]
    }
}

impl Sortable for PlotRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "plot_number" => cmp_text(&self.plot_number, &other.plot_number),
            "lp_number" => cmp_text(&self.lp_number, &other.lp_number),
            "size" => cmp_f64(
                self.size_acres.unwrap_or(0.0),
                other.size_acres.unwrap_or(0.0),
            ),
            "status" => self.status.code().cmp(other.status.code()),
            "crop" => cmp_text(&self.crop, &other.crop),
            "customer" => cmp_text(&self.customer_name, &other.customer_name),
            _ => Ordering::Equal,
        }
    }
}

impl TableRow for PlotRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

fn plot_columns() -> Vec<Column<PlotRow>> {
    vec![
        Column::new("plot_number", "Plot No.", |r: &PlotRow| text_cell(r.plot_number.clone())).sortable(),
        Column::new("lp_number", "LP Number", |r: &PlotRow| text_cell(r.lp_number.clone())).sortable(),
        Column::new("size", "Size (acres)", |r: &PlotRow| text_cell(r.size.clone())).sortable(),
        Column::new("status", "Status", |r: &PlotRow| plot_status_badge(r.status)).sortable(),
        Column::new("crop", "Crop", |r: &PlotRow| text_cell(r.crop.clone())).sortable(),
        Column::new("customer", "Customer", |r: &PlotRow| text_cell(r.customer_name.clone())).sortable(),
    ]
}

/// Plots of one layout; a row click opens the plot editor
#[component]
#[allow(non_snake_case)]
pub fn LayoutPlots(layout_id: LayoutId) -> impl IntoView {
    let stores = use_stores();
    let navigate = use_navigate();
    let layout_id = StoredValue::new(layout_id);

    let rows = Signal::derive(move || {
        let customers = stores.customers.with(|s| s.snapshot());
        layout_id.with_value(|id| {
            stores.plots.with(|s| {
                s.filter(|p| p.belongs_to(id))
                    .into_iter()
                    .map(|p| PlotRow::new(p, &customers))
                    .collect::<Vec<_>>()
            })
        })
    });

    let open_plot = Callback::new(move |row: PlotRow| {
        let path = layout_id.with_value(|id| format!("/layouts/{}/plots/{}", id.as_str(), row.id));
        navigate(&path, Default::default());
    });

    let delete_plot = Callback::new(move |row: PlotRow| {
        delete_record(stores.plots, &PlotId::from_string(&row.id));
    });

    view! {
        <DataTable
            rows=rows
            columns=plot_columns()
            on_row_click=open_plot
            on_delete=delete_plot
            search_placeholder="Search plots..."
        />
    }
}
