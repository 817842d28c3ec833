use super::aggregate::{Coupon, CouponId};
use crate::domain::common::AggregateId;
use crate::enums::DiscountType;
use chrono::NaiveDate;

const COUPONS: &[(&str, &str, &str, f64, &str, Option<&str>, u32, u32)] = &[
    (
        "ad18cc61-c43b-44d9-9d40-26f249267bbf",
        "SAVE10",
        "Save 10% on your next purchase",
        10.0,
        "2023-01-01",
        Some("2023-12-31"),
        100,
        20,
    ),
    (
        "2c6f4c01-f24e-42c8-8ca1-b7d619427bb2",
        "FALL20",
        "20% off for fall season",
        20.0,
        "2023-09-01",
        Some("2023-11-30"),
        50,
        10,
    ),
    (
        "3e7f4c01-f24e-42c8-8ca1-b7d619427bb3",
        "WELCOME15",
        "15% off for new customers",
        15.0,
        "2023-01-01",
        None,
        100,
        5,
    ),
    (
        "4a8f4c01-f24e-42c8-8ca1-b7d619427bb4",
        "SPRING5",
        "5% off for spring season",
        5.0,
        "2023-03-01",
        Some("2023-05-31"),
        75,
        30,
    ),
    (
        "5b9f4c01-f24e-42c8-8ca1-b7d619427bb5",
        "HOLIDAY25",
        "25% off during holiday season",
        25.0,
        "2023-12-01",
        Some("2023-12-31"),
        100,
        0,
    ),
];

fn date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

/// Coupons loaded at startup
pub fn seed_coupons() -> Vec<Coupon> {
    COUPONS
        .iter()
        .map(
            |&(id, code, description, value, from, to, limit, used)| Coupon {
                id: CouponId::from_string(id),
                code: code.to_string(),
                description: Some(description.to_string()),
                discount_type: DiscountType::Percentage,
                discount_value: value,
                valid_from: date(from),
                valid_to: to.and_then(date),
                usage_limit: Some(limit),
                used_count: used,
            },
        )
        .collect()
}
