use crate::domain::common::address::ADDRESS_FIELDS;
use crate::domain::common::{Address, AggregateId, AggregateRoot, ValidationError};
use crate::shared::metadata::{
    number_text, parse_number, parse_optional_number, EditableForm, FieldDescriptor, FieldKind,
    FormSection, ValidationRules,
};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a layout
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(pub String);

impl AggregateId for LayoutId {
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

/// Land development subdivided into plots.
///
/// Plot counts are not stored here; they are derived from the plot store
/// (see `PlotStats::for_layout`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub id: LayoutId,
    pub name: String,
    /// Total area in acres
    pub extent: f64,
    #[serde(flatten)]
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Layout {
    /// Blank layout with a fresh id, used by the add form
    pub fn new_for_insert() -> Self {
        Self {
            id: LayoutId::new_v4(),
            ..Self::default()
        }
    }

    /// Validate before saving
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_fields()
    }

    /// `lat, lon` when both coordinates are set
    pub fn coordinates_text(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(format!("{:.4}, {:.4}", lat, lon)),
            _ => None,
        }
    }
}

/// Placeholder for a dangling layout reference
pub const UNKNOWN_LAYOUT: &str = "Unknown Layout";

/// Name of the referenced layout, or the placeholder when it no longer exists
pub fn layout_name(layouts: &[Layout], id: Option<&LayoutId>) -> String {
    id.and_then(|id| layouts.iter().find(|l| &l.id == id))
        .map(|l| l.name.clone())
        .unwrap_or_else(|| UNKNOWN_LAYOUT.to_string())
}

impl AggregateRoot for Layout {
    type Id = LayoutId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "layout"
    }

    fn element_name() -> &'static str {
        "Layout"
    }

    fn list_name() -> &'static str {
        "Layouts"
    }
}

// ============================================================================
// Form
// ============================================================================

const BASIC_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("name", "Name", FieldKind::Text)
        .with_validation(ValidationRules::required())
        .with_placeholder("Green Acres"),
    FieldDescriptor::new("extent", "Extent (acres)", FieldKind::Number)
        .with_validation(ValidationRules::at_least(0.0)),
];

const LOCATION_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor::new("latitude", "Latitude", FieldKind::Number)
        .with_validation(ValidationRules::range(-90.0, 90.0)),
    FieldDescriptor::new("longitude", "Longitude", FieldKind::Number)
        .with_validation(ValidationRules::range(-180.0, 180.0)),
];

const LAYOUT_SECTIONS: &[FormSection] = &[
    FormSection {
        title: "Basic Information",
        icon: "layers",
        fields: BASIC_FIELDS,
    },
    FormSection {
        title: "Address",
        icon: "map-pin",
        fields: ADDRESS_FIELDS,
    },
    FormSection {
        title: "Location",
        icon: "compass",
        fields: LOCATION_FIELDS,
    },
];

impl EditableForm for Layout {
    fn sections() -> &'static [FormSection] {
        LAYOUT_SECTIONS
    }

    fn field_value(&self, name: &str) -> String {
        match name {
            "name" => self.name.clone(),
            "extent" => number_text(self.extent),
            "latitude" => self.latitude.map(number_text).unwrap_or_default(),
            "longitude" => self.longitude.map(number_text).unwrap_or_default(),
            other => self.address.field_value(other).unwrap_or_default(),
        }
    }

    fn set_field_value(&mut self, name: &str, value: &str) {
        match name {
            "name" => self.name = value.to_string(),
            "extent" => self.extent = parse_number(value),
            "latitude" => self.latitude = parse_optional_number(value),
            "longitude" => self.longitude = parse_optional_number(value),
            other => {
                self.address.set_field_value(other, value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout {
            id: LayoutId::from_string("L1"),
            name: "Green Acres".into(),
            extent: 50.0,
            latitude: Some(37.1234),
            longitude: Some(-119.1234),
            ..Layout::default()
        }
    }

    #[test]
    fn test_valid_layout_passes() {
        assert_eq!(layout().validate(), Ok(()));
    }

    #[test]
    fn test_name_is_required() {
        let mut l = layout();
        l.name = "  ".into();
        assert_eq!(l.validate().unwrap_err().to_string(), "Name is required.");
    }

    #[test]
    fn test_negative_extent_rejected() {
        let mut l = layout();
        l.extent = -1.0;
        assert_eq!(
            l.validate(),
            Err(ValidationError::Negative("Extent (acres)"))
        );
    }

    #[test]
    fn test_coordinate_ranges() {
        let mut l = layout();
        l.latitude = Some(90.5);
        assert!(matches!(
            l.validate(),
            Err(ValidationError::OutOfRange { field: "Latitude", .. })
        ));

        let mut l = layout();
        l.longitude = Some(-180.0);
        assert_eq!(l.validate(), Ok(()));
        l.longitude = Some(-180.01);
        assert!(l.validate().is_err());
    }

    #[test]
    fn test_form_fields_round_trip_through_text() {
        let mut l = layout();
        l.set_field_value("extent", "75.5");
        l.set_field_value("city", "Greenville");
        l.set_field_value("latitude", "");
        assert_eq!(l.extent, 75.5);
        assert_eq!(l.address.city, "Greenville");
        assert_eq!(l.latitude, None);
        assert_eq!(l.field_value("extent"), "75.5");
        assert_eq!(l.field_value("city"), "Greenville");
        assert_eq!(l.field_value("unknown"), "");
    }

    #[test]
    fn test_serializes_flat_camel_case() {
        let mut l = layout();
        l.address.addressline1 = "123 Green St".into();
        let json = serde_json::to_value(&l).unwrap();
        assert_eq!(json["addressline1"], "123 Green St");
        assert_eq!(json["extent"], 50.0);
        assert!(json.get("address").is_none());
    }
}
