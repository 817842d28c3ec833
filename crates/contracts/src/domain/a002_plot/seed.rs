use super::aggregate::{Plot, PlotId};
use crate::domain::a001_layout::aggregate::LayoutId;
use crate::domain::a003_customer::aggregate::CustomerId;
use crate::domain::common::AggregateId;
use crate::enums::PlotStatus;

struct SeedPlot {
    id: &'static str,
    plot_number: &'static str,
    size: &'static str,
    lp_number: &'static str,
    status: PlotStatus,
    crop: &'static str,
    customer: Option<&'static str>,
    layout: &'static str,
    coordinates: (f64, f64),
}

const PLOTS: &[SeedPlot] = &[
    SeedPlot {
        id: "123dd0e7-17ca-49be-b460-f5079d80c1dd",
        plot_number: "A1",
        size: "2.5",
        lp_number: "LP1001",
        status: PlotStatus::Available,
        crop: "Wheat",
        customer: None,
        layout: "9e5e91aa-9598-4998-95f9-4607613b148d",
        coordinates: (37.1234, -119.1234),
    },
    SeedPlot {
        id: "ad18cc61-c43b-44d9-9d40-26f249267bbf",
        plot_number: "A2",
        size: "3.0",
        lp_number: "LP1002",
        status: PlotStatus::Sold,
        crop: "Corn",
        customer: Some("9bd4fc01-f24e-42c8-8ca1-b7d619427bb1"),
        layout: "ad18cc61-c43b-44d9-9d40-26f249267bbf",
        coordinates: (37.5678, -119.5678),
    },
    SeedPlot {
        id: "3e7f4c01-f24e-42c8-8ca1-b7d619427bb3",
        plot_number: "B1",
        size: "1.5",
        lp_number: "LP2001",
        status: PlotStatus::Registered,
        crop: "Soybeans",
        customer: Some("2c6f4c01-f24e-42c8-8ca1-b7d619427bb2"),
        layout: "3e7f4c01-f24e-42c8-8ca1-b7d619427bb3",
        coordinates: (37.9101, -119.9101),
    },
    SeedPlot {
        id: "4a8f4c01-f24e-42c8-8ca1-b7d619427bb4",
        plot_number: "B2",
        size: "4.0",
        lp_number: "LP2002",
        status: PlotStatus::Available,
        crop: "Rice",
        customer: None,
        layout: "4a8f4c01-f24e-42c8-8ca1-b7d619427bb4",
        coordinates: (37.3456, -119.3456),
    },
    SeedPlot {
        id: "5b9f4c01-f24e-42c8-8ca1-b7d619427bb5",
        plot_number: "C1",
        size: "2.0",
        lp_number: "LP3001",
        status: PlotStatus::Sold,
        crop: "Barley",
        customer: Some("3e7f4c01-f24e-42c8-8ca1-b7d619427bb3"),
        layout: "5b9f4c01-f24e-42c8-8ca1-b7d619427bb5",
        coordinates: (37.7890, -119.7890),
    },
];

/// Plots loaded at startup
pub fn seed_plots() -> Vec<Plot> {
    PLOTS
        .iter()
        .map(|p| Plot {
            id: PlotId::from_string(p.id),
            plot_number: p.plot_number.to_string(),
            size: p.size.to_string(),
            lp_number: p.lp_number.to_string(),
            status: p.status,
            crop: Some(p.crop.to_string()),
            customer: p.customer.map(CustomerId::from_string),
            layout: Some(LayoutId::from_string(p.layout)),
            latitude: Some(p.coordinates.0),
            longitude: Some(p.coordinates.1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_layout::seed::seed_layouts;
    use crate::domain::a002_plot::stats::PlotStats;

    #[test]
    fn test_every_seed_plot_points_at_a_seed_layout() {
        let layouts = seed_layouts();
        let plots = seed_plots();
        assert_eq!(plots.len(), 5);
        for plot in &plots {
            assert!(layouts.iter().any(|l| plot.layout.as_ref() == Some(&l.id)));
        }
        let green_acres = PlotStats::for_layout(&plots, &layouts[0].id);
        assert_eq!(green_acres.total, 1);
        assert_eq!(green_acres.available, 1);
    }
}
