use crate::shared::format::format_currency;
use serde::{Deserialize, Serialize};

/// How a coupon's discount value is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DiscountType {
    #[default]
    Percentage,
    Fixed,
}

impl DiscountType {
    pub fn code(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "Percentage",
            DiscountType::Fixed => "Fixed",
        }
    }

    pub fn all() -> Vec<DiscountType> {
        vec![DiscountType::Percentage, DiscountType::Fixed]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Percentage" => Some(DiscountType::Percentage),
            "Fixed" => Some(DiscountType::Fixed),
            _ => None,
        }
    }

    /// `10%` for percentages, `$25.00` for fixed amounts
    pub fn format_value(&self, value: f64) -> String {
        match self {
            DiscountType::Percentage => format!("{}%", value),
            DiscountType::Fixed => format_currency(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(DiscountType::Percentage.format_value(10.0), "10%");
        assert_eq!(DiscountType::Percentage.format_value(12.5), "12.5%");
        assert_eq!(DiscountType::Fixed.format_value(1500.0), "$1,500.00");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(DiscountType::from_code("Fixed"), Some(DiscountType::Fixed));
        assert_eq!(DiscountType::from_code(""), None);
    }
}
