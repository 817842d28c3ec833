use crate::domain::a001_layout::aggregate::LayoutId;
use crate::domain::common::{AggregateId, AggregateRoot, ValidationError, ValidityStatus};
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
pub struct PriceId(pub String);

impl AggregateId for PriceId {
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

/// Pricing rule: price per acre for one crop in one layout, bounded by plot size
/// and by a validity window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: PriceId,
    pub name: String,
    /// Empty while the add form has no layout selected
    pub layout: LayoutId,
    pub price_per_acre: f64,
    /// Inclusive lower bound, acres
    pub min_size: f64,
    /// Inclusive upper bound, acres
    pub max_size: f64,
    pub crop: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<NaiveDate>,
}

impl Price {
    /// Blank rule with a fresh id; `layout` preselects the layout when adding from a
    /// layout page
    pub fn new_for_insert(layout: Option<LayoutId>) -> Self {
        Self {
            id: PriceId::new_v4(),
            layout: layout.unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn covers_size(&self, size: f64) -> bool {
        self.min_size <= size && size <= self.max_size
    }

    pub fn status(&self, today: NaiveDate) -> ValidityStatus {
        ValidityStatus::classify(self.valid_from, self.valid_to, today)
    }

    /// `1 - 10 acres`
    pub fn size_range_text(&self) -> String {
        format!(
            "{} - {} acres",
            number_text(self.min_size),
            number_text(self.max_size)
        )
    }

    /// Validate before saving
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty()
            || self.layout.as_str().is_empty()
            || self.crop.trim().is_empty()
        {
            return Err(ValidationError::RequiredAll("Name, Layout, and Crop"));
        }
        self.validate_fields()?;
        if self.min_size > self.max_size {
            return Err(ValidationError::InvalidSizeRange);
        }
        if let (Some(from), Some(to)) = (self.valid_from, self.valid_to) {
            if from > to {
                return Err(ValidationError::InvalidValidityWindow);
            }
        }
        Ok(())
    }
}

impl AggregateRoot for Price {
    type Id = PriceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "price"
    }

    fn element_name() -> &'static str {
        "Price"
    }

    fn list_name() -> &'static str {
        "Pricing"
    }
}

// ============================================================================
// Form
// ============================================================================

const RULE_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", "Name", FieldKind::Text).with_placeholder("Standard Pricing"),
    FieldDescriptor::new("crop", "Crop", FieldKind::Text).with_placeholder("Wheat"),
    FieldDescriptor::new("price_per_acre", "Price per Acre", FieldKind::Number)
        .with_validation(ValidationRules::at_least(0.0)),
    FieldDescriptor::new("min_size", "Min Size (acres)", FieldKind::Number)
        .with_validation(ValidationRules::at_least(0.0)),
    FieldDescriptor::new("max_size", "Max Size (acres)", FieldKind::Number)
        .with_validation(ValidationRules::at_least(0.0)),
];

const VALIDITY_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("valid_from", "Valid From", FieldKind::Date),
    FieldDescriptor::new("valid_to", "Valid To", FieldKind::Date),
];

const PRICE_SECTIONS: &[FormSection] = &[
    FormSection {
        title: "Pricing Rule",
        icon: "tag",
        fields: RULE_FIELDS,
    },
    FormSection {
        title: "Validity",
        icon: "calendar",
        fields: VALIDITY_FIELDS,
    },
];

impl EditableForm for Price {
    fn sections() -> &'static [FormSection] {
        PRICE_SECTIONS
    }

    fn field_value(&self, name: &str) -> String {
        match name {
            "name" => self.name.clone(),
            "layout" => self.layout.as_string(),
            "crop" => self.crop.clone(),
            "price_per_acre" => number_text(self.price_per_acre),
            "min_size" => number_text(self.min_size),
            "max_size" => number_text(self.max_size),
            "valid_from" => date_input_text(self.valid_from),
            "valid_to" => date_input_text(self.valid_to),
            _ => String::new(),
        }
    }

    fn set_field_value(&mut self, name: &str, value: &str) {
        match name {
            "name" => self.name = value.to_string(),
            "layout" => self.layout = LayoutId::from_string(value),
            "crop" => self.crop = value.to_string(),
            "price_per_acre" => self.price_per_acre = parse_number(value),
            "min_size" => self.min_size = parse_number(value),
            "max_size" => self.max_size = parse_number(value),
            "valid_from" => self.valid_from = parse_date_input(value),
            "valid_to" => self.valid_to = parse_date_input(value),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn price() -> Price {
        Price {
            id: PriceId::from_string("R1"),
            name: "Standard Pricing".into(),
            layout: LayoutId::from_string("L1"),
            price_per_acre: 5000.0,
            min_size: 1.0,
            max_size: 10.0,
            crop: "Wheat".into(),
            valid_from: Some(date(2023, 1, 1)),
            valid_to: Some(date(2023, 12, 31)),
        }
    }

    #[test]
    fn test_required_fields_message() {
        let mut p = price();
        p.layout = LayoutId::default();
        assert_eq!(
            p.validate().unwrap_err().to_string(),
            "Name, Layout, and Crop are required."
        );
    }

    #[test]
    fn test_malformed_numbers_are_rejected() {
        let mut p = price();
        p.set_field_value("price_per_acre", "5k");
        assert_eq!(p.validate(), Err(ValidationError::NotANumber("Price per Acre")));

        let mut p = price();
        p.set_field_value("max_size", "ten");
        assert_eq!(
            p.validate(),
            Err(ValidationError::NotANumber("Max Size (acres)"))
        );
    }

    #[test]
    fn test_size_range_and_window_preconditions() {
        let mut p = price();
        p.min_size = 11.0;
        assert_eq!(p.validate(), Err(ValidationError::InvalidSizeRange));

        let mut p = price();
        p.valid_from = Some(date(2024, 1, 1));
        assert_eq!(p.validate(), Err(ValidationError::InvalidValidityWindow));

        let mut p = price();
        p.valid_to = None;
        p.valid_from = Some(date(2024, 1, 1));
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn test_date_fields_through_form_text() {
        let mut p = price();
        p.set_field_value("valid_to", "");
        assert_eq!(p.valid_to, None);
        p.set_field_value("valid_from", "2023-06-01");
        assert_eq!(p.valid_from, Some(date(2023, 6, 1)));
        assert_eq!(p.field_value("valid_from"), "2023-06-01");
        assert_eq!(p.field_value("valid_to"), "");
    }

    #[test]
    fn test_status_and_size_text() {
        let p = price();
        assert_eq!(p.status(date(2023, 12, 31)), ValidityStatus::Unexpired);
        assert_eq!(p.status(date(2024, 1, 1)), ValidityStatus::Expired);
        assert_eq!(p.size_range_text(), "1 - 10 acres");
    }

    #[test]
    fn test_serializes_dates_as_iso_text() {
        let json = serde_json::to_value(price()).unwrap();
        assert_eq!(json["validFrom"], "2023-01-01");
        assert_eq!(json["pricePerAcre"], 5000.0);
        assert_eq!(json["layout"], "L1");
    }
}
