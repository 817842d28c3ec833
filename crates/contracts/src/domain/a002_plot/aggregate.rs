use crate::domain::a001_layout::aggregate::LayoutId;
use crate::domain::a003_customer::aggregate::CustomerId;
use crate::domain::common::{AggregateId, AggregateRoot, ValidationError};
use crate::enums::PlotStatus;
use crate::shared::metadata::{
    number_text, parse_optional_number, EditableForm, FieldDescriptor, FieldKind, FormSection,
    ValidationRules,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlotId(pub String);

impl AggregateId for PlotId {
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

/// Individually sellable unit of land inside a layout
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    pub id: PlotId,
    pub plot_number: String,
    /// Size in acres as entered; parsed on demand with `size_acres`
    pub size: String,
    /// Human-facing identifier, e.g. `LP1001`
    pub lp_number: String,
    pub status: PlotStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Plot {
    /// Blank plot attached to `layout`, used by the create-plot page
    pub fn new_for_insert(layout: LayoutId) -> Self {
        Self {
            id: PlotId::new_v4(),
            layout: Some(layout),
            ..Self::default()
        }
    }

    /// Parsed size; `None` when the text is blank or not a number
    pub fn size_acres(&self) -> Option<f64> {
        self.size.trim().parse::<f64>().ok().filter(|v| v.is_finite())
    }

    pub fn belongs_to(&self, layout_id: &LayoutId) -> bool {
        self.layout.as_ref() == Some(layout_id)
    }

    /// Set the crop; blank text clears it
    pub fn set_crop(&mut self, crop: &str) {
        self.crop = if crop.trim().is_empty() {
            None
        } else {
            Some(crop.to_string())
        };
    }

    /// Set the customer; blank id clears it
    pub fn set_customer(&mut self, customer_id: &str) {
        self.customer = if customer_id.is_empty() {
            None
        } else {
            Some(CustomerId::from_string(customer_id))
        };
    }

    /// Clear the crop when it is no longer offered for the plot
    pub fn retain_crop_in(&mut self, available: &[String]) {
        if let Some(crop) = &self.crop {
            if !available.iter().any(|c| c == crop) {
                self.crop = None;
            }
        }
    }

    /// Validate before saving
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_fields()
    }
}

impl AggregateRoot for Plot {
    type Id = PlotId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "plot"
    }

    fn element_name() -> &'static str {
        "Plot"
    }

    fn list_name() -> &'static str {
        "Plots"
    }
}

// ============================================================================
// Form
// ============================================================================

const DETAIL_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("plot_number", "Plot Number", FieldKind::Text)
        .with_validation(ValidationRules::required())
        .with_placeholder("A1"),
    FieldDescriptor::new("size", "Size (acres)", FieldKind::Number).with_validation(
        ValidationRules {
            required: true,
            ..ValidationRules::at_least(0.0)
        },
    ),
    FieldDescriptor::new("lp_number", "LP Number", FieldKind::Text).with_placeholder("LP1001"),
];

const LOCATION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("latitude", "Latitude", FieldKind::Number)
        .with_validation(ValidationRules::range(-90.0, 90.0)),
    FieldDescriptor::new("longitude", "Longitude", FieldKind::Number)
        .with_validation(ValidationRules::range(-180.0, 180.0)),
];

const PLOT_SECTIONS: &[FormSection] = &[
    FormSection {
        title: "Plot Details",
        icon: "grid",
        fields: DETAIL_FIELDS,
    },
    FormSection {
        title: "Location",
        icon: "compass",
        fields: LOCATION_FIELDS,
    },
];

impl EditableForm for Plot {
    fn sections() -> &'static [FormSection] {
        PLOT_SECTIONS
    }

    fn field_value(&self, name: &str) -> String {
        match name {
            "plot_number" => self.plot_number.clone(),
            "size" => self.size.clone(),
            "lp_number" => self.lp_number.clone(),
            "latitude" => self.latitude.map(number_text).unwrap_or_default(),
            "longitude" => self.longitude.map(number_text).unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn set_field_value(&mut self, name: &str, value: &str) {
        match name {
            "plot_number" => self.plot_number = value.to_string(),
            "size" => self.size = value.to_string(),
            "lp_number" => self.lp_number = value.to_string(),
            "latitude" => self.latitude = parse_optional_number(value),
            "longitude" => self.longitude = parse_optional_number(value),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot() -> Plot {
        Plot {
            id: PlotId::from_string("P1"),
            plot_number: "A1".into(),
            size: "2.5".into(),
            lp_number: "LP1001".into(),
            layout: Some(LayoutId::from_string("L1")),
            ..Plot::default()
        }
    }

    #[test]
    fn test_size_acres_parses_text() {
        let mut p = plot();
        assert_eq!(p.size_acres(), Some(2.5));
        p.size = " 3.0 ".into();
        assert_eq!(p.size_acres(), Some(3.0));
        p.size = "big".into();
        assert_eq!(p.size_acres(), None);
    }

    #[test]
    fn test_validation() {
        assert_eq!(plot().validate(), Ok(()));

        let mut p = plot();
        p.plot_number = String::new();
        assert_eq!(p.validate(), Err(ValidationError::Required("Plot Number")));

        let mut p = plot();
        p.size = "-1".into();
        assert_eq!(p.validate(), Err(ValidationError::Negative("Size (acres)")));

        p.size = "abc".into();
        assert_eq!(p.validate(), Err(ValidationError::NotANumber("Size (acres)")));

        p.size = String::new();
        assert_eq!(p.validate(), Err(ValidationError::Required("Size (acres)")));
    }

    #[test]
    fn test_saved_size_is_always_usable_for_pricing() {
        for size in ["inf", "infinity", "1e400"] {
            let mut p = plot();
            p.size = size.into();
            assert_eq!(p.size_acres(), None);
            assert_eq!(p.validate(), Err(ValidationError::NotANumber("Size (acres)")));
        }
    }

    #[test]
    fn test_retain_crop_clears_unavailable_crop() {
        let mut p = plot();
        p.set_crop("Wheat");
        p.retain_crop_in(&["Wheat".to_string(), "Corn".to_string()]);
        assert_eq!(p.crop.as_deref(), Some("Wheat"));

        p.retain_crop_in(&["Corn".to_string()]);
        assert_eq!(p.crop, None);
    }

    #[test]
    fn test_blank_selects_clear_references() {
        let mut p = plot();
        p.set_customer("C1");
        assert_eq!(p.customer, Some(CustomerId::from_string("C1")));
        p.set_customer("");
        assert_eq!(p.customer, None);
        p.set_crop("  ");
        assert_eq!(p.crop, None);
    }

    #[test]
    fn test_new_for_insert_attaches_layout() {
        let layout = LayoutId::from_string("L9");
        let p = Plot::new_for_insert(layout.clone());
        assert!(p.belongs_to(&layout));
        assert_eq!(p.status, PlotStatus::Available);
        assert!(!p.id.as_str().is_empty());
    }
}
