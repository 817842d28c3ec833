use crate::shared::browser::alert;
use crate::shared::state::app_stores::{save_record, AppStores};
use chrono::NaiveDate;
use contracts::domain::a002_plot::aggregate::Plot;
use contracts::domain::a004_price::aggregate::Price;
use contracts::domain::a004_price::eligibility::{
    available_crops, eligible_prices, price_for_crop, PlotQuote,
};
use leptos::prelude::*;

/// Rules that apply to the plot as currently entered; none without a layout or a size
pub fn plot_eligible_prices<'a>(prices: &'a [Price], plot: &Plot, today: NaiveDate) -> Vec<&'a Price> {
    match (plot.layout.as_ref(), plot.size_acres()) {
        (Some(layout), Some(size)) => eligible_prices(prices, layout, size, today),
        _ => Vec::new(),
    }
}

/// Crops the plot can be priced for
pub fn crop_options(prices: &[Price], plot: &Plot, today: NaiveDate) -> Vec<String> {
    available_crops(&plot_eligible_prices(prices, plot, today))
}

/// Quote under the first eligible rule for the selected crop
pub fn plot_quote(prices: &[Price], plot: &Plot, today: NaiveDate) -> Option<PlotQuote> {
    let crop = plot.crop.as_deref()?;
    let size = plot.size_acres()?;
    let eligible = plot_eligible_prices(prices, plot, today);
    price_for_crop(&eligible, crop).map(|p| PlotQuote::new(p.price_per_acre, size))
}

/// ViewModel for the plot create/edit page
#[derive(Clone, Copy)]
pub struct PlotDetailsViewModel {
    pub form: RwSignal<Plot>,
    pub is_new: bool,
}

impl PlotDetailsViewModel {
    pub fn new(plot: Plot, is_new: bool) -> Self {
        Self {
            form: RwSignal::new(plot),
            is_new,
        }
    }

    /// Drop the selected crop once no eligible rule offers it
    pub fn sync_crop(&self, prices: &[Price], today: NaiveDate) {
        let plot = self.form.get_untracked();
        let crops = crop_options(prices, &plot, today);
        let mut updated = plot.clone();
        updated.retain_crop_in(&crops);
        if updated.crop != plot.crop {
            log::debug!("crop {:?} no longer offered, cleared", plot.crop);
            self.form.set(updated);
        }
    }

    /// Validate and write the plot to the store; false when nothing was saved
    pub fn save_command(&self, stores: AppStores) -> bool {
        let plot = self.form.get_untracked();
        if let Err(e) = plot.validate() {
            alert(&e.to_string());
            return false;
        }
        save_record(stores.plots, plot, self.is_new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_layout::aggregate::LayoutId;
    use contracts::domain::a004_price::aggregate::PriceId;
    use contracts::domain::common::AggregateId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(id: &str, crop: &str, per_acre: f64, min: f64, max: f64) -> Price {
        Price {
            id: PriceId::from_string(id),
            name: id.to_string(),
            layout: LayoutId::from_string("L1"),
            price_per_acre: per_acre,
            min_size: min,
            max_size: max,
            crop: crop.to_string(),
            valid_from: Some(date(2023, 1, 1)),
            valid_to: Some(date(2023, 12, 31)),
        }
    }

    fn rules() -> Vec<Price> {
        vec![
            rule("R1", "Wheat", 5000.0, 1.0, 10.0),
            rule("R2", "Corn", 4000.0, 5.0, 20.0),
            rule("R3", "Wheat", 4500.0, 5.0, 20.0),
        ]
    }

    fn plot(size: &str, crop: Option<&str>) -> Plot {
        let mut p = Plot::new_for_insert(LayoutId::from_string("L1"));
        p.size = size.to_string();
        p.crop = crop.map(str::to_string);
        p
    }

    #[test]
    fn test_crop_options_follow_size() {
        let today = date(2023, 6, 1);
        assert_eq!(crop_options(&rules(), &plot("2", None), today), vec!["Wheat"]);
        assert_eq!(
            crop_options(&rules(), &plot("7", None), today),
            vec!["Wheat", "Corn"]
        );
        assert!(crop_options(&rules(), &plot("", None), today).is_empty());
        assert!(crop_options(&rules(), &plot("7", None), date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_quote_uses_first_matching_rule() {
        let today = date(2023, 6, 1);
        let quote = plot_quote(&rules(), &plot("7", Some("Wheat")), today).unwrap();
        assert_eq!(quote.price_per_acre, 5000.0);
        assert_eq!(quote.price_per_cent, 50.0);
        assert_eq!(quote.total, 35000.0);
        assert_eq!(quote.total_text(), "₹35,000");

        let quote = plot_quote(&rules(), &plot("15", Some("Wheat")), today).unwrap();
        assert_eq!(quote.price_per_acre, 4500.0);

        assert_eq!(plot_quote(&rules(), &plot("7", None), today), None);
        assert_eq!(plot_quote(&rules(), &plot("2", Some("Corn")), today), None);
    }

    #[test]
    fn test_plot_without_layout_has_no_rules() {
        let mut p = plot("7", None);
        p.layout = None;
        assert!(plot_eligible_prices(&rules(), &p, date(2023, 6, 1)).is_empty());
    }
}
