use crate::shared::browser::alert;
use crate::shared::components::data_table::{text_cell, Column, DataTable, TableRow};
use crate::shared::components::descriptor_form::DescriptorForm;
use crate::shared::components::drawer::Drawer;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, cmp_text, Searchable, Sortable};
use crate::shared::state::app_stores::{add_record, delete_record, use_stores};
use contracts::domain::a001_layout::aggregate::{Layout, LayoutId};
use contracts::domain::a002_plot::aggregate::Plot;
use contracts::domain::a002_plot::stats::PlotStats;
use contracts::domain::common::AggregateId;
use contracts::shared::format::format_acres;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutRow {
    pub id: String,
    pub name: String,
    pub extent: f64,
    pub address: String,
    pub stats: PlotStats,
}

impl LayoutRow {
    /// Row with live plot counts for the layout
    pub fn new(layout: Layout, plots: &[Plot]) -> Self {
        let stats = PlotStats::for_layout(plots, &layout.id);
        Self {
            stats,
            ..Self::from(layout)
        }
    }
}

impl From<Layout> for LayoutRow {
    fn from(l: Layout) -> Self {
        Self {
            id: l.id.as_string(),
            address: l.address.format(),
            name: l.name,
            extent: l.extent,
            stats: PlotStats::default(),
        }
    }
}

impl Searchable for LayoutRow {
    fn search_cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            format_acres(self.extent),
            self.address.clone(),
            self.stats.total.to_string(),
            self.stats.sold.to_string(),
            self.stats.available.to_string(),
        ]
    }
}

impl Sortable for LayoutRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "extent" => cmp_f64(self.extent, other.extent),
            "address" => cmp_text(&self.address, &other.address),
            "total" => self.stats.total.cmp(&other.stats.total),
            "sold" => self.stats.sold.cmp(&other.stats.sold),
            "available" => self.stats.available.cmp(&other.stats.available),
            _ => Ordering::Equal,
        }
    }
}

impl TableRow for LayoutRow {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

fn layout_columns() -> Vec<Column<LayoutRow>> {
    vec![
        Column::new("name", "Name", |r: &LayoutRow| text_cell(r.name.clone())).sortable(),
        Column::new("extent", "Extent", |r: &LayoutRow| text_cell(format_acres(r.extent))).sortable(),
        Column::new("address", "Address", |r: &LayoutRow| text_cell(r.address.clone())).sortable(),
        Column::new("total", "Plots", |r: &LayoutRow| text_cell(r.stats.total.to_string())).sortable(),
        Column::new("sold", "Sold", |r: &LayoutRow| text_cell(r.stats.sold.to_string())).sortable(),
        Column::new("available", "Available", |r: &LayoutRow| {
            text_cell(r.stats.available.to_string())
        })
        .sortable(),
    ]
}

/// Sum of the per-layout counts over the layouts that still exist
pub fn layout_totals(rows: &[LayoutRow]) -> PlotStats {
    rows.iter().map(|r| r.stats).sum()
}

#[component]
#[allow(non_snake_case)]
pub fn LayoutList() -> impl IntoView {
    let stores = use_stores();
    let navigate = use_navigate();
    let drawer_open = RwSignal::new(false);

    let rows = Signal::derive(move || {
        let plots = stores.plots.with(|s| s.snapshot());
        stores.layouts.with(|s| {
            s.all()
                .iter()
                .cloned()
                .map(|l| LayoutRow::new(l, &plots))
                .collect::<Vec<_>>()
        })
    });
    let totals = Signal::derive(move || rows.with(|r| layout_totals(r)));

    let open_layout = Callback::new(move |row: LayoutRow| {
        navigate(&format!("/layouts/{}", row.id), Default::default());
    });

    let delete_layout = Callback::new(move |row: LayoutRow| {
        delete_record(stores.layouts, &LayoutId::from_string(&row.id));
    });

    view! {
        <div class="page">
            <PageHeader title="Layouts".to_string() subtitle="Land developments and their plots".to_string()>
                <button class="button button--primary" on:click=move |_| drawer_open.set(true)>
                    {icon("plus")}
                    "Add Layout"
                </button>
            </PageHeader>

            <div class="stat-cards">
                <StatCard
                    label="Total Plots"
                    icon_name="grid"
                    value=Signal::derive(move || totals.get().total.to_string())
                />
                <StatCard
                    label="Sold Plots"
                    icon_name="check-circle"
                    tone=StatTone::Error
                    value=Signal::derive(move || totals.get().sold.to_string())
                />
                <StatCard
                    label="Available Plots"
                    icon_name="map-pin"
                    tone=StatTone::Success
                    value=Signal::derive(move || totals.get().available.to_string())
                />
                <StatCard
                    label="Registered Plots"
                    icon_name="layers"
                    tone=StatTone::Warning
                    value=Signal::derive(move || totals.get().registered.to_string())
                />
            </div>

            <DataTable
                rows=rows
                columns=layout_columns()
                on_row_click=open_layout
                on_delete=delete_layout
                search_placeholder="Search layouts..."
            />

            <Show when=move || drawer_open.get()>
                <AddLayoutDrawer on_close=Callback::new(move |_| drawer_open.set(false)) />
            </Show>
        </div>
    }
}

#[component]
fn AddLayoutDrawer(on_close: Callback<()>) -> impl IntoView {
    let stores = use_stores();
    let form = RwSignal::new(Layout::new_for_insert());

    let save = move |_| {
        let layout = form.get_untracked();
        if let Err(e) = layout.validate() {
            alert(&e.to_string());
            return;
        }
        if add_record(stores.layouts, layout) {
            on_close.run(());
        }
    };

    view! {
        <Drawer title="Add Layout".to_string() on_close=on_close>
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
    use contracts::domain::a001_layout::seed::seed_layouts;
    use contracts::domain::a002_plot::seed::seed_plots;

    fn seed_rows() -> Vec<LayoutRow> {
        let plots = seed_plots();
        seed_layouts()
            .into_iter()
            .map(|l| LayoutRow::new(l, &plots))
            .collect()
    }

    #[test]
    fn test_rows_carry_live_counts() {
        let plots = seed_plots();
        let rows = seed_rows();
        for row in &rows {
            let id = LayoutId::from_string(&row.id);
            assert_eq!(row.stats, PlotStats::for_layout(&plots, &id));
        }
    }

    #[test]
    fn test_totals_skip_plots_of_deleted_layouts() {
        let plots = seed_plots();
        let mut rows = seed_rows();
        let all = layout_totals(&rows);
        assert_eq!(all.total, plots.iter().filter(|p| p.layout.is_some()).count());

        let removed = rows.remove(0);
        let remaining = layout_totals(&rows);
        assert_eq!(remaining.total, all.total - removed.stats.total);
    }

    #[test]
    fn test_search_matches_address_and_name() {
        let rows = seed_rows();
        let first = &rows[0];
        assert!(first.matches_filter(&first.name.to_uppercase()));
        assert!(first.matches_filter(&first.address));
        assert!(!first.matches_filter("no such layout anywhere"));
    }
}
