use super::aggregate::Plot;
use crate::domain::a001_layout::aggregate::LayoutId;
use crate::enums::PlotStatus;
use std::iter::Sum;
use std::ops::Add;

/// Plot counts by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlotStats {
    pub total: usize,
    pub sold: usize,
    pub available: usize,
    pub registered: usize,
}

impl PlotStats {
    pub fn from_plots<'a, I>(plots: I) -> Self
    where
        I: IntoIterator<Item = &'a Plot>,
    {
        plots.into_iter().fold(Self::default(), |mut stats, plot| {
            stats.total += 1;
            match plot.status {
                PlotStatus::Sold => stats.sold += 1,
                PlotStatus::Available => stats.available += 1,
                PlotStatus::Registered => stats.registered += 1,
            }
            stats
        })
    }

    /// Counts for the plots attached to `layout_id`; a fresh scan on every call
    pub fn for_layout(plots: &[Plot], layout_id: &LayoutId) -> Self {
        Self::from_plots(plots.iter().filter(|p| p.belongs_to(layout_id)))
    }
}

impl Add for PlotStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            total: self.total + other.total,
            sold: self.sold + other.sold,
            available: self.available + other.available,
            registered: self.registered + other.registered,
        }
    }
}

impl Sum for PlotStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_plot::aggregate::PlotId;
    use crate::domain::common::AggregateId;

    fn plot(id: &str, layout: &str, status: PlotStatus) -> Plot {
        Plot {
            id: PlotId::from_string(id),
            status,
            layout: Some(LayoutId::from_string(layout)),
            ..Plot::default()
        }
    }

    #[test]
    fn test_counts_by_status() {
        let plots = vec![
            plot("p1", "L1", PlotStatus::Sold),
            plot("p2", "L1", PlotStatus::Sold),
            plot("p3", "L1", PlotStatus::Available),
            plot("p4", "L1", PlotStatus::Available),
            plot("p5", "L1", PlotStatus::Registered),
        ];
        let stats = PlotStats::for_layout(&plots, &LayoutId::from_string("L1"));
        assert_eq!(
            stats,
            PlotStats {
                total: 5,
                sold: 2,
                available: 2,
                registered: 1
            }
        );
        assert_eq!(stats.total, stats.sold + stats.available + stats.registered);
    }

    #[test]
    fn test_other_layouts_and_orphans_ignored() {
        let mut orphan = plot("p3", "L1", PlotStatus::Sold);
        orphan.layout = None;
        let plots = vec![
            plot("p1", "L1", PlotStatus::Sold),
            plot("p2", "L2", PlotStatus::Sold),
            orphan,
        ];
        let stats = PlotStats::for_layout(&plots, &LayoutId::from_string("L1"));
        assert_eq!(stats.total, 1);
        assert_eq!(
            PlotStats::for_layout(&plots, &LayoutId::from_string("missing")),
            PlotStats::default()
        );
    }

    #[test]
    fn test_sum_over_layouts() {
        let plots = vec![
            plot("p1", "L1", PlotStatus::Sold),
            plot("p2", "L2", PlotStatus::Available),
            plot("p3", "L2", PlotStatus::Registered),
        ];
        let total: PlotStats = ["L1", "L2"]
            .iter()
            .map(|id| PlotStats::for_layout(&plots, &LayoutId::from_string(id)))
            .sum();
        assert_eq!(total.total, 3);
        assert_eq!(total.sold, 1);
        assert_eq!(total.available, 1);
        assert_eq!(total.registered, 1);
    }
}
