use crate::domain::common::{AggregateId, AggregateRoot, ValidationError, ValidityStatus};
use crate::enums::DiscountType;
use crate::shared::format::{date_input_text, parse_date_input};
use crate::shared::metadata::{
    number_text, parse_number, EditableForm, FieldDescriptor, FieldKind, FormSection,
    ValidationRules,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CouponId(pub String);

impl AggregateId for CouponId {
    fn as_str(&self) -> &str {
        &self.0
    }

    fn from_string(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Discount code with a validity window and an optional usage cap
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub id: CouponId,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub used_count: u32,
}

impl Coupon {
    pub fn new_for_insert() -> Self {
        Self {
            id: CouponId::new_v4(),
            ..Self::default()
        }
    }

    pub fn status(&self, today: NaiveDate) -> ValidityStatus {
        ValidityStatus::classify(self.valid_from, self.valid_to, today)
    }

    /// `10%` or `$25.00`
    pub fn discount_text(&self) -> String {
        self.discount_type.format_value(self.discount_value)
    }

    /// `20 / 100`, or just the used count without a limit
    pub fn usage_text(&self) -> String {
        match self.usage_limit {
            Some(limit) => format!("{} / {}", self.used_count, limit),
            None => self.used_count.to_string(),
        }
    }

    /// Validate before saving
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.code.trim().is_empty() {
            return Err(ValidationError::Required("Code"));
        }
        if self.discount_value <= 0.0 {
            return Err(ValidationError::NotPositive("Discount Value"));
        }
        self.validate_fields()?;
        if let (Some(from), Some(to)) = (self.valid_from, self.valid_to) {
            if from > to {
                return Err(ValidationError::InvalidValidityWindow);
            }
        }
        Ok(())
    }
}

impl AggregateRoot for Coupon {
    type Id = CouponId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "coupon"
    }

    fn element_name() -> &'static str {
        "Coupon"
    }

    fn list_name() -> &'static str {
        "Coupons"
    }
}

// ============================================================================
// Form
// ============================================================================

const COUPON_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("code", "Code", FieldKind::Text).with_placeholder("SAVE10"),
    FieldDescriptor::new("description", "Description", FieldKind::Text),
    FieldDescriptor::new("discount_value", "Discount Value", FieldKind::Number),
];

const VALIDITY_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("valid_from", "Valid From", FieldKind::Date),
    FieldDescriptor::new("valid_to", "Valid To", FieldKind::Date),
];

const USAGE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("usage_limit", "Usage Limit", FieldKind::Number)
        .with_validation(ValidationRules::at_least(0.0)),
    FieldDescriptor::new("used_count", "Used Count", FieldKind::Number)
        .with_validation(ValidationRules::at_least(0.0)),
];

const COUPON_SECTIONS: &[FormSection] = &[
    FormSection {
        title: "Coupon",
        icon: "ticket",
        fields: COUPON_FIELDS,
    },
    FormSection {
        title: "Validity",
        icon: "calendar",
        fields: VALIDITY_FIELDS,
    },
    FormSection {
        title: "Usage",
        icon: "bar-chart",
        fields: USAGE_FIELDS,
    },
];

fn parse_count(value: &str) -> Option<u32> {
    value.trim().parse::<f64>().ok().filter(|v| *v >= 0.0).map(|v| v as u32)
}

impl EditableForm for Coupon {
    fn sections() -> &'static [FormSection] {
        COUPON_SECTIONS
    }

    fn field_value(&self, name: &str) -> String {
        match name {
            "code" => self.code.clone(),
            "description" => self.description.clone().unwrap_or_default(),
            "discount_type" => self.discount_type.code().to_string(),
            "discount_value" => number_text(self.discount_value),
            "valid_from" => date_input_text(self.valid_from),
            "valid_to" => date_input_text(self.valid_to),
            "usage_limit" => self.usage_limit.map(|v| v.to_string()).unwrap_or_default(),
            "used_count" => self.used_count.to_string(),
            _ => String::new(),
        }
    }

    fn set_field_value(&mut self, name: &str, value: &str) {
        match name {
            "code" => self.code = value.to_string(),
            "description" => {
                self.description = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "discount_type" => {
                if let Some(kind) = DiscountType::from_code(value) {
                    self.discount_type = kind;
                }
            }
            "discount_value" => self.discount_value = parse_number(value),
            "valid_from" => self.valid_from = parse_date_input(value),
            "valid_to" => self.valid_to = parse_date_input(value),
            "usage_limit" => self.usage_limit = parse_count(value),
            "used_count" => self.used_count = parse_count(value).unwrap_or(0),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon() -> Coupon {
        Coupon {
            id: CouponId::from_string("C1"),
            code: "SAVE10".into(),
            discount_value: 10.0,
            ..Coupon::default()
        }
    }

    #[test]
    fn test_code_required() {
        let mut c = coupon();
        c.code = " ".into();
        assert_eq!(c.validate().unwrap_err().to_string(), "Code is required.");
    }

    #[test]
    fn test_discount_must_be_positive() {
        let mut c = coupon();
        c.discount_value = 0.0;
        assert_eq!(
            c.validate().unwrap_err().to_string(),
            "Discount Value must be greater than 0."
        );
        c.discount_value = 0.5;
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn test_malformed_discount_is_rejected() {
        let mut c = coupon();
        c.set_field_value("discount_value", "abc");
        assert_eq!(c.validate(), Err(ValidationError::NotANumber("Discount Value")));

        c.set_field_value("discount_value", "");
        assert_eq!(c.discount_value, 0.0);
    }

    #[test]
    fn test_usage_fields_from_text() {
        let mut c = coupon();
        c.set_field_value("usage_limit", "100");
        c.set_field_value("used_count", "20");
        assert_eq!(c.usage_text(), "20 / 100");
        c.set_field_value("usage_limit", "");
        assert_eq!(c.usage_limit, None);
        assert_eq!(c.usage_text(), "20");
    }

    #[test]
    fn test_discount_type_select() {
        let mut c = coupon();
        c.set_field_value("discount_type", "Fixed");
        assert_eq!(c.discount_type, DiscountType::Fixed);
        c.set_field_value("discount_type", "bogus");
        assert_eq!(c.discount_type, DiscountType::Fixed);
        assert_eq!(c.discount_text(), "$10.00");
    }
}
