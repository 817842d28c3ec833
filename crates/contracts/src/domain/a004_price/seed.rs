use super::aggregate::{Price, PriceId};
use crate::domain::a001_layout::aggregate::LayoutId;
use crate::domain::common::AggregateId;
use chrono::NaiveDate;

struct SeedPrice {
    id: &'static str,
    name: &'static str,
    layout: &'static str,
    price_per_acre: f64,
    crop: &'static str,
    valid_from: &'static str,
    valid_to: Option<&'static str>,
    sizes: (f64, f64),
}

const PRICES: &[SeedPrice] = &[
    SeedPrice {
        id: "80948149-3d31-4cce-977f-cbaa4149c7b1",
        name: "Standard Pricing",
        layout: "9e5e91aa-9598-4998-95f9-4607613b148d",
        price_per_acre: 5000.0,
        crop: "Wheat",
        valid_from: "2023-01-01",
        valid_to: Some("2023-12-31"),
        sizes: (1.0, 10.0),
    },
    SeedPrice {
        id: "2c6f4c01-f24e-42c8-8ca1-b7d619427bb2",
        name: "Premium Pricing",
        layout: "ad18cc61-c43b-44d9-9d40-26f249267bbf",
        price_per_acre: 7000.0,
        crop: "Corn",
        valid_from: "2023-01-01",
        valid_to: None,
        sizes: (1.0, 5.0),
    },
    SeedPrice {
        id: "3e7f4c01-f24e-42c8-8ca1-b7d619427bb3",
        name: "Economy Pricing",
        layout: "3e7f4c01-f24e-42c8-8ca1-b7d619427bb3",
        price_per_acre: 3000.0,
        crop: "Soybeans",
        valid_from: "2023-06-01",
        valid_to: Some("2023-12-31"),
        sizes: (1.0, 15.0),
    },
    SeedPrice {
        id: "4a8f4c01-f24e-42c8-8ca1-b7d619427bb4",
        name: "Holiday Special",
        layout: "4a8f4c01-f24e-42c8-8ca1-b7d619427bb4",
        price_per_acre: 4500.0,
        crop: "Rice",
        valid_from: "2023-11-01",
        valid_to: Some("2023-11-30"),
        sizes: (1.0, 20.0),
    },
    SeedPrice {
        id: "5b9f4c01-f24e-42c8-8ca1-b7d619427bb5",
        name: "Bulk Discount",
        layout: "5b9f4c01-f24e-42c8-8ca1-b7d619427bb5",
        price_per_acre: 4000.0,
        crop: "Barley",
        valid_from: "2023-01-01",
        valid_to: None,
        sizes: (1.0, 25.0),
    },
];

fn date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Pricing rules loaded at startup
pub fn seed_prices() -> Vec<Price> {
    PRICES
        .iter()
        .map(|p| Price {
            id: PriceId::from_string(p.id),
            name: p.name.to_string(),
            layout: LayoutId::from_string(p.layout),
            price_per_acre: p.price_per_acre,
            min_size: p.sizes.0,
            max_size: p.sizes.1,
            crop: p.crop.to_string(),
            valid_from: date(p.valid_from),
            valid_to: p.valid_to.and_then(date),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_dates_parse() {
        let prices = seed_prices();
        assert_eq!(prices.len(), 5);
        assert!(prices.iter().all(|p| p.valid_from.is_some()));
        assert_eq!(prices.iter().filter(|p| p.valid_to.is_none()).count(), 2);
        assert!(prices.iter().all(|p| p.validate().is_ok()));
    }
}
