use super::view_model::{crop_options, plot_quote, PlotDetailsViewModel};
use crate::shared::clock::today;
use crate::shared::components::descriptor_form::DescriptorForm;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::state::app_stores::use_stores;
use contracts::domain::a001_layout::aggregate::{layout_name, LayoutId};
use contracts::domain::a002_plot::aggregate::{Plot, PlotId};
use contracts::domain::common::AggregateId;
use contracts::enums::PlotStatus;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

/// Create (`plotId` absent) or edit a plot of the layout in the route
#[component]
#[allow(non_snake_case)]
pub fn PlotDetails() -> impl IntoView {
    let stores = use_stores();
    let params = use_params_map();

    let layout_id = Memo::new(move |_| params.read().get("layoutId").unwrap_or_default());
    let plot_id = Memo::new(move |_| params.read().get("plotId"));

    move || {
        let layout_id = LayoutId::from_string(&layout_id.get());
        match plot_id.get() {
            None => {
                let plot = Plot::new_for_insert(layout_id.clone());
                view! { <PlotEditor layout_id=layout_id plot=plot is_new=true /> }.into_any()
            }
            Some(id) => {
                let found = stores
                    .plots
                    .with_untracked(|s| s.get_by_id(&PlotId::from_string(&id)).cloned());
                match found {
                    Some(plot) => {
                        view! { <PlotEditor layout_id=layout_id plot=plot is_new=false /> }.into_any()
                    }
                    None => view! {
                        <div class="page">
                            <div class="warning-box">"No plot found for the given ID."</div>
                        </div>
                    }
                    .into_any(),
                }
            }
        }
    }
}

#[component]
fn PlotEditor(layout_id: LayoutId, plot: Plot, is_new: bool) -> impl IntoView {
    let stores = use_stores();
    let navigate = use_navigate();
    let vm = PlotDetailsViewModel::new(plot, is_new);
    let form = vm.form;

    let back_path = format!("/layouts/{}", layout_id.as_str());
    let layout_title = {
        let layout_id = layout_id.clone();
        Signal::derive(move || stores.layouts.with(|s| layout_name(s.all(), Some(&layout_id))))
    };

    let status_choice = RwSignal::new(form.with_untracked(|p| p.status.code().to_string()));
    let customer_choice = RwSignal::new(form.with_untracked(|p| {
        p.customer.as_ref().map(|c| c.as_string()).unwrap_or_default()
    }));

    Effect::new(move |_| {
        let code = status_choice.get();
        if let Some(status) = PlotStatus::from_code(&code) {
            form.update(|p| p.status = status);
        }
    });
    Effect::new(move |_| {
        let customer = customer_choice.get();
        form.update(|p| p.set_customer(&customer));
    });

    let crops = Signal::derive(move || {
        let today = today();
        stores.prices.with(|prices| form.with(|p| crop_options(prices.all(), p, today)))
    });
    let quote = Signal::derive(move || {
        let today = today();
        stores.prices.with(|prices| form.with(|p| plot_quote(prices.all(), p, today)))
    });

    // Size or layout edits can take the selected crop off the list
    Effect::new(move |_| {
        crops.track();
        stores.prices.with_untracked(|prices| vm.sync_crop(prices.all(), today()));
    });

    let save = {
        let navigate = navigate.clone();
        let back_path = back_path.clone();
        move |_| {
            if vm.save_command(stores) {
                log::info!("plot saved, returning to {}", back_path);
                navigate(&back_path, Default::default());
            }
        }
    };
    let cancel = move |_| navigate(&back_path, Default::default());

    let customer_options = move || {
        stores.customers.with(|s| {
            s.all()
                .iter()
                .map(|c| {
                    let id = c.id.as_string();
                    view! { <option value=id>{c.name.clone()}</option> }
                })
                .collect_view()
        })
    };

    let title = if is_new { "New Plot" } else { "Edit Plot" };

    view! {
        <div class="page plot-details">
            <PageHeader title=title.to_string() subtitle=layout_title>
                <button class="button button--secondary" on:click=cancel>
                    {icon("arrow-left")}
                    "Back"
                </button>
                <button class="button button--primary" on:click=save>
                    {icon("save")}
                    "Save"
                </button>
            </PageHeader>

            <div class="details-grid">
                <div class="details-form">
                    <DescriptorForm form=form />

                    <div class="form-section">
                        <div class="form-section__header">
                            {icon("tag")}
                            <h3 class="form-section__title">"Sale"</h3>
                        </div>
                        <div class="form-section__body">
                            <div class="form-group">
                                <label>"Status"</label>
                                <Select value=status_choice>
                                    {PlotStatus::all()
                                        .into_iter()
                                        .map(|s| view! { <option value=s.code()>{s.code()}</option> })
                                        .collect_view()}
                                </Select>
                            </div>
                            <div class="form-group">
                                <label>"Customer"</label>
                                <Select value=customer_choice>
                                    <option value="">"None"</option>
                                    {customer_options}
                                </Select>
                            </div>
                            <div class="form-group">
                                <label for="plot-crop">"Crop"</label>
                                <select
                                    id="plot-crop"
                                    prop:value=move || form.with(|p| p.crop.clone().unwrap_or_default())
                                    on:change=move |ev| {
                                        let crop = event_target_value(&ev);
                                        form.update(|p| p.set_crop(&crop));
                                    }
                                >
                                    <option value="">"Select a crop"</option>
                                    {move || crops.get().into_iter().map(|crop| {
                                        let value = crop.clone();
                                        let is_selected = form.with_untracked(|p| p.crop.as_deref() == Some(crop.as_str()));
                                        view! { <option value=value selected=is_selected>{crop}</option> }
                                    }).collect_view()}
                                </select>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="form-section plot-pricing">
                    <div class="form-section__header">
                        {icon("money")}
                        <h3 class="form-section__title">"Pricing"</h3>
                    </div>
                    <div class="form-section__body">
                        {move || match quote.get() {
                            Some(q) => view! {
                                <dl class="plot-pricing__list">
                                    <dt>"Price per Acre"</dt>
                                    <dd>{q.per_acre_text()}</dd>
                                    <dt>"Price per Cent"</dt>
                                    <dd>{q.per_cent_text()}</dd>
                                    <dt>"Total Price"</dt>
                                    <dd class="plot-pricing__total">{q.total_text()}</dd>
                                </dl>
                            }
                            .into_any(),
                            None if crops.with(|c| c.is_empty()) => view! {
                                <div class="plot-pricing__empty">
                                    "No pricing rules apply to this plot size today."
                                </div>
                            }
                            .into_any(),
                            None => view! {
                                <div class="plot-pricing__empty">"Select a crop to see pricing."</div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
