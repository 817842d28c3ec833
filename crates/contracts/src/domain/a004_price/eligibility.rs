//! Which pricing rules apply to a plot
//!
//! A rule is eligible for a plot when it belongs to the plot's layout, the plot
//! size lies inside the rule's inclusive size range and `today` lies inside the
//! rule's validity window. The clock is passed in by the caller.

use super::aggregate::Price;
use crate::domain::a001_layout::aggregate::LayoutId;
use crate::domain::common::validity::is_within_window;
use crate::shared::format::format_inr;
use chrono::NaiveDate;

pub fn is_eligible(price: &Price, layout_id: &LayoutId, size: f64, today: NaiveDate) -> bool {
    price.layout == *layout_id
        && price.covers_size(size)
        && is_within_window(price.valid_from, price.valid_to, today)
}

/// Eligible rules in store order
pub fn eligible_prices<'a>(
    prices: &'a [Price],
    layout_id: &LayoutId,
    size: f64,
    today: NaiveDate,
) -> Vec<&'a Price> {
    prices
        .iter()
        .filter(|p| is_eligible(p, layout_id, size, today))
        .collect()
}

/// Distinct crop names offered by `eligible`, first occurrence first
pub fn available_crops(eligible: &[&Price]) -> Vec<String> {
    let mut crops: Vec<String> = Vec::new();
    for price in eligible {
        let crop = price.crop.trim();
        if !crop.is_empty() && !crops.iter().any(|c| c == crop) {
            crops.push(crop.to_string());
        }
    }
    crops
}

/// First eligible rule for `crop`
pub fn price_for_crop<'a>(eligible: &[&'a Price], crop: &str) -> Option<&'a Price> {
    eligible.iter().copied().find(|p| p.crop.trim() == crop)
}

/// Price breakdown for a plot under one rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotQuote {
    pub price_per_acre: f64,
    /// One cent is a hundredth of an acre
    pub price_per_cent: f64,
    pub total: f64,
}

impl PlotQuote {
    pub fn new(price_per_acre: f64, size: f64) -> Self {
        Self {
            price_per_acre,
            price_per_cent: price_per_acre / 100.0,
            total: price_per_acre * size,
        }
    }

    pub fn per_acre_text(&self) -> String {
        format!("₹{}", format_inr(self.price_per_acre))
    }

    pub fn per_cent_text(&self) -> String {
        format!("₹{}", format_inr(self.price_per_cent))
    }

    pub fn total_text(&self) -> String {
        format!("₹{}", format_inr(self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_price::aggregate::PriceId;
    use crate::domain::common::AggregateId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(
        id: &str,
        layout: &str,
        crop: &str,
        sizes: (f64, f64),
        window: (Option<NaiveDate>, Option<NaiveDate>),
    ) -> Price {
        Price {
            id: PriceId::from_string(id),
            name: id.to_string(),
            layout: LayoutId::from_string(layout),
            price_per_acre: 5000.0,
            min_size: sizes.0,
            max_size: sizes.1,
            crop: crop.to_string(),
            valid_from: window.0,
            valid_to: window.1,
        }
    }

    fn ids(prices: &[&Price]) -> Vec<String> {
        prices.iter().map(|p| p.id.as_string()).collect()
    }

    #[test]
    fn test_only_matching_size_range_is_eligible() {
        let year = (Some(date(2023, 1, 1)), Some(date(2023, 12, 31)));
        let prices = vec![
            rule("small", "L1", "Wheat", (1.0, 10.0), year),
            rule("large", "L1", "Wheat", (11.0, 20.0), year),
        ];
        let eligible = eligible_prices(&prices, &LayoutId::from_string("L1"), 7.0, date(2023, 6, 1));
        assert_eq!(ids(&eligible), vec!["small"]);
    }

    #[test]
    fn test_open_ended_rule_outside_size_range_is_skipped() {
        let prices = vec![
            rule(
                "year",
                "L1",
                "Wheat",
                (1.0, 10.0),
                (Some(date(2023, 1, 1)), Some(date(2023, 12, 31))),
            ),
            rule("open", "L1", "Wheat", (1.0, 5.0), (Some(date(2023, 1, 1)), None)),
        ];
        let layout = LayoutId::from_string("L1");
        let eligible = eligible_prices(&prices, &layout, 7.0, date(2023, 6, 1));
        assert_eq!(ids(&eligible), vec!["year"]);

        let eligible = eligible_prices(&prices, &layout, 4.0, date(2023, 6, 1));
        assert_eq!(ids(&eligible), vec!["year", "open"]);
    }

    #[test]
    fn test_size_bounds_are_inclusive() {
        let prices = vec![rule("r", "L1", "Wheat", (1.0, 10.0), (None, None))];
        let layout = LayoutId::from_string("L1");
        let today = date(2023, 6, 1);
        assert_eq!(eligible_prices(&prices, &layout, 1.0, today).len(), 1);
        assert_eq!(eligible_prices(&prices, &layout, 10.0, today).len(), 1);
        assert!(eligible_prices(&prices, &layout, 0.99, today).is_empty());
        assert!(eligible_prices(&prices, &layout, 10.01, today).is_empty());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let prices = vec![rule(
            "r",
            "L1",
            "Wheat",
            (1.0, 10.0),
            (Some(date(2023, 3, 1)), Some(date(2023, 3, 31))),
        )];
        let layout = LayoutId::from_string("L1");
        assert_eq!(eligible_prices(&prices, &layout, 5.0, date(2023, 3, 1)).len(), 1);
        assert_eq!(eligible_prices(&prices, &layout, 5.0, date(2023, 3, 31)).len(), 1);
        assert!(eligible_prices(&prices, &layout, 5.0, date(2023, 2, 28)).is_empty());
        assert!(eligible_prices(&prices, &layout, 5.0, date(2023, 4, 1)).is_empty());
    }

    #[test]
    fn test_layout_must_match_exactly() {
        let prices = vec![rule("r", "L1", "Wheat", (1.0, 10.0), (None, None))];
        assert!(eligible_prices(&prices, &LayoutId::from_string("L2"), 5.0, date(2023, 1, 1)).is_empty());
    }

    #[test]
    fn test_keeps_store_order_and_is_idempotent() {
        let prices = vec![
            rule("b", "L1", "Corn", (1.0, 10.0), (None, None)),
            rule("x", "L2", "Corn", (1.0, 10.0), (None, None)),
            rule("a", "L1", "Wheat", (1.0, 10.0), (None, None)),
        ];
        let layout = LayoutId::from_string("L1");
        let today = date(2023, 1, 1);
        let first = eligible_prices(&prices, &layout, 5.0, today);
        let second = eligible_prices(&prices, &layout, 5.0, today);
        assert_eq!(ids(&first), vec!["b", "a"]);
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_matches_predicate_for_every_rule() {
        let prices = vec![
            rule("r1", "L1", "Corn", (1.0, 5.0), (Some(date(2023, 1, 1)), None)),
            rule("r2", "L1", "Corn", (6.0, 9.0), (None, Some(date(2022, 12, 31)))),
            rule("r3", "L2", "Rice", (1.0, 5.0), (None, None)),
        ];
        let layout = LayoutId::from_string("L1");
        let today = date(2023, 2, 1);
        for size in [0.5, 1.0, 3.0, 5.0, 7.0, 9.5] {
            let eligible = eligible_prices(&prices, &layout, size, today);
            for p in &prices {
                let expected = p.layout == layout
                    && p.min_size <= size
                    && size <= p.max_size
                    && p.valid_from.map_or(true, |f| f <= today)
                    && p.valid_to.map_or(true, |t| t >= today);
                assert_eq!(eligible.iter().any(|e| e.id == p.id), expected);
            }
        }
    }

    #[test]
    fn test_available_crops_and_price_lookup() {
        let prices = vec![
            rule("r1", "L1", "Wheat", (1.0, 10.0), (None, None)),
            rule("r2", "L1", "Corn", (1.0, 10.0), (None, None)),
            rule("r3", "L1", "Wheat", (1.0, 10.0), (None, None)),
            rule("r4", "L1", "", (1.0, 10.0), (None, None)),
        ];
        let eligible = eligible_prices(&prices, &LayoutId::from_string("L1"), 2.0, date(2023, 1, 1));
        assert_eq!(available_crops(&eligible), vec!["Wheat", "Corn"]);
        assert_eq!(price_for_crop(&eligible, "Wheat").unwrap().id.as_str(), "r1");
        assert!(price_for_crop(&eligible, "Rice").is_none());
    }

    #[test]
    fn test_quote_breakdown() {
        let quote = PlotQuote::new(5000.0, 2.5);
        assert_eq!(quote.price_per_cent, 50.0);
        assert_eq!(quote.total, 12500.0);
        assert_eq!(quote.total_text(), "₹12,500");

        let big = PlotQuote::new(250000.0, 5.0);
        assert_eq!(big.total_text(), "₹12,50,000");
    }
}
