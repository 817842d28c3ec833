use super::aggregate::Coupon;
use chrono::NaiveDate;

/// Summary shown above the coupon list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CouponStats {
    pub total: usize,
    pub unexpired: usize,
    pub expired: usize,
    /// Code with the highest used count; the first one wins a tie
    pub most_used: Option<String>,
    /// Code with the lowest used count; the last one wins a tie
    pub least_used: Option<String>,
}

impl CouponStats {
    pub fn compute(coupons: &[Coupon], today: NaiveDate) -> Self {
        let unexpired = coupons
            .iter()
            .filter(|c| c.status(today).is_unexpired())
            .count();

        let most_used = coupons
            .iter()
            .reduce(|best, c| if c.used_count > best.used_count { c } else { best })
            .map(|c| c.code.clone());
        let least_used = coupons
            .iter()
            .reduce(|best, c| if c.used_count <= best.used_count { c } else { best })
            .map(|c| c.code.clone());

        Self {
            total: coupons.len(),
            unexpired,
            expired: coupons.len() - unexpired,
            most_used,
            least_used,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_coupon::seed::seed_coupons;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_seed_stats_in_november() {
        let stats = CouponStats::compute(&seed_coupons(), date(2023, 11, 15));
        assert_eq!(stats.total, 5);
        // SAVE10, FALL20, WELCOME15
        assert_eq!(stats.unexpired, 3);
        assert_eq!(stats.expired, 2);
        assert_eq!(stats.most_used.as_deref(), Some("SPRING5"));
        assert_eq!(stats.least_used.as_deref(), Some("HOLIDAY25"));
    }

    #[test]
    fn test_usage_ties() {
        let mut coupons = seed_coupons();
        coupons.truncate(3);
        for (coupon, used) in coupons.iter_mut().zip([0, 5, 0]) {
            coupon.used_count = used;
        }
        let stats = CouponStats::compute(&coupons, date(2023, 6, 1));
        assert_eq!(stats.most_used.as_deref(), Some("FALL20"));
        assert_eq!(stats.least_used.as_deref(), Some("WELCOME15"));

        coupons[2].used_count = 5;
        let stats = CouponStats::compute(&coupons, date(2023, 6, 1));
        assert_eq!(stats.most_used.as_deref(), Some("FALL20"));
        assert_eq!(stats.least_used.as_deref(), Some("SAVE10"));
    }

    #[test]
    fn test_empty_list() {
        let stats = CouponStats::compute(&[], date(2023, 1, 1));
        assert_eq!(stats, CouponStats::default());
    }
}
