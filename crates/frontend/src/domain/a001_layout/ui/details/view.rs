use super::view_model::LayoutDetailsViewModel;
use crate::domain::a002_plot::ui::list::LayoutPlots;
use crate::domain::a004_price::ui::list::PriceTable;
use crate::shared::components::descriptor_form::DescriptorForm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::icons::icon;
use crate::shared::state::app_stores::use_stores;
use contracts::domain::a001_layout::aggregate::{Layout, LayoutId};
use contracts::domain::a002_plot::stats::PlotStats;
use contracts::domain::common::AggregateId;
use contracts::shared::format::{acres_to_square_feet, format_acres, format_number};
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

#[component]
#[allow(non_snake_case)]
pub fn LayoutDetails() -> impl IntoView {
    let stores = use_stores();
    let params = use_params_map();
    let layout_id = Memo::new(move |_| params.read().get("layoutId").unwrap_or_default());

    move || {
        let id = LayoutId::from_string(&layout_id.get());
        match stores.layouts.with_untracked(|s| s.get_by_id(&id).cloned()) {
            Some(layout) => view! { <LayoutEditor layout=layout /> }.into_any(),
            None => view! {
                <div class="page">
                    <div class="warning-box">"No layout found for the given ID."</div>
                </div>
            }
            .into_any(),
        }
    }
}

#[component]
fn LayoutEditor(layout: Layout) -> impl IntoView {
    let stores = use_stores();
    let navigate = use_navigate();
    let layout_id = layout.id.clone();
    let vm = LayoutDetailsViewModel::new(layout);

    let title = Signal::derive(move || vm.form.with(|l| l.name.clone()));
    let subtitle = Signal::derive(move || {
        vm.form.with(|l| {
            format!(
                "{} ({} sq ft) · {}",
                format_acres(l.extent),
                format_number(acres_to_square_feet(l.extent).round()),
                l.address.format()
            )
        })
    });
    let coordinates = Signal::derive(move || vm.form.with(|l| l.coordinates_text()));

    let stats = {
        let layout_id = layout_id.clone();
        Signal::derive(move || stores.plots.with(|s| PlotStats::for_layout(s.all(), &layout_id)))
    };

    Effect::new(move |_| {
        vm.form.track();
        vm.saved.set(false);
    });

    let new_plot_path = format!("/layouts/{}/plots/new", layout_id.as_str());
    let add_plot = {
        let navigate = navigate.clone();
        move |_| navigate(&new_plot_path, Default::default())
    };
    let back = move |_| navigate("/layouts", Default::default());

    view! {
        <div class="page layout-details">
            <PageHeader title=title subtitle=subtitle>
                <button class="button button--secondary" on:click=back>
                    {icon("arrow-left")}
                    "Layouts"
                </button>
                <button class="button button--primary" on:click=move |_| { vm.save_command(stores); }>
                    {icon("save")}
                    {move || if vm.saved.get() { "Saved" } else { "Save" }}
                </button>
            </PageHeader>

            <div class="stat-cards">
                <StatCard
                    label="Total Plots"
                    icon_name="grid"
                    value=Signal::derive(move || stats.get().total.to_string())
                />
                <StatCard
                    label="Sold"
                    icon_name="check-circle"
                    tone=StatTone::Error
                    value=Signal::derive(move || stats.get().sold.to_string())
                />
                <StatCard
                    label="Available"
                    icon_name="map-pin"
                    tone=StatTone::Success
                    value=Signal::derive(move || stats.get().available.to_string())
                />
                <StatCard
                    label="Registered"
                    icon_name="layers"
                    tone=StatTone::Warning
                    value=Signal::derive(move || stats.get().registered.to_string())
                />
            </div>

            <div class="details-form">
                {move || coordinates.get().map(|c| view! {
                    <div class="details-location">{icon("map-pin")}<span>{c}</span></div>
                })}
                <DescriptorForm form=vm.form />
            </div>

            <section class="details-section">
                <div class="details-section__header">
                    <h2>"Plots"</h2>
                    <button class="button button--primary" on:click=add_plot>
                        {icon("plus")}
                        "Add Plot"
                    </button>
                </div>
                <LayoutPlots layout_id=layout_id.clone() />
            </section>

            <section class="details-section">
                <div class="details-section__header">
                    <h2>"Pricing"</h2>
                </div>
                <PriceTable layout_id=layout_id />
            </section>
        </div>
    }
}
