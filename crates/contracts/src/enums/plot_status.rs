use serde::{Deserialize, Serialize};

/// Sales status of a plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlotStatus {
    #[default]
    Available,
    Sold,
    Registered,
}

impl PlotStatus {
    /// Stable code, also the select option value
    pub fn code(&self) -> &'static str {
        match self {
            PlotStatus::Available => "Available",
            PlotStatus::Sold => "Sold",
            PlotStatus::Registered => "Registered",
        }
    }

    /// CSS modifier for the status pill
    pub fn css_class(&self) -> &'static str {
        match self {
            PlotStatus::Available => "status-available",
            PlotStatus::Sold => "status-sold",
            PlotStatus::Registered => "status-registered",
        }
    }

    /// All statuses in select order
    pub fn all() -> Vec<PlotStatus> {
        vec![PlotStatus::Available, PlotStatus::Sold, PlotStatus::Registered]
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Available" => Some(PlotStatus::Available),
            "Sold" => Some(PlotStatus::Sold),
            "Registered" => Some(PlotStatus::Registered),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for status in PlotStatus::all() {
            assert_eq!(PlotStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(PlotStatus::from_code("Reserved"), None);
    }
}
