use super::aggregate::{Layout, LayoutId};
use crate::domain::common::{Address, AggregateId};

#[allow(clippy::too_many_arguments)]
fn layout(
    id: &str,
    name: &str,
    extent: f64,
    street: &str,
    city: &str,
    state: &str,
    zip: &str,
    coordinates: (f64, f64),
) -> Layout {
    Layout {
        id: LayoutId::from_string(id),
        name: name.to_string(),
        extent,
        address: Address {
            addressline1: street.to_string(),
            addressline2: None,
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
            country: "USA".to_string(),
        },
        latitude: Some(coordinates.0),
        longitude: Some(coordinates.1),
    }
}

/// Layouts loaded at startup
pub fn seed_layouts() -> Vec<Layout> {
    vec![
        layout(
            "9e5e91aa-9598-4998-95f9-4607613b148d",
            "Green Acres",
            50.0,
            "123 Green St",
            "Greenville",
            "CA",
            "12345",
            (37.1234, -119.1234),
        ),
        layout(
            "ad18cc61-c43b-44d9-9d40-26f249267bbf",
            "Sunny Fields",
            75.0,
            "456 Sunny Ave",
            "Sunnytown",
            "TX",
            "23456",
            (31.1234, -97.1234),
        ),
        layout(
            "3e7f4c01-f24e-42c8-8ca1-b7d619427bb3",
            "River Side",
            100.0,
            "789 River Rd",
            "Rivertown",
            "NY",
            "34567",
            (40.7128, -74.006),
        ),
        layout(
            "4a8f4c01-f24e-42c8-8ca1-b7d619427bb4",
            "Hilltop Gardens",
            60.0,
            "101 Hilltop Blvd",
            "Hilltown",
            "FL",
            "45678",
            (27.1234, -81.1234),
        ),
        layout(
            "5b9f4c01-f24e-42c8-8ca1-b7d619427bb5",
            "Maple Woods",
            80.0,
            "202 Maple St",
            "Mapleton",
            "IL",
            "56789",
            (40.1234, -88.1234),
        ),
    ]
}
