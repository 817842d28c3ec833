use chrono::NaiveDate;

/// Two-state validity of a dated rule (prices and coupons).
///
/// Display only: an expired coupon can still be edited and its usage counter
/// still changes elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidityStatus {
    Unexpired,
    Expired,
}

impl ValidityStatus {
    /// Classify a validity window against `today`. Both bounds are inclusive and
    /// a missing bound is open.
    pub fn classify(
        valid_from: Option<NaiveDate>,
        valid_to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        if is_within_window(valid_from, valid_to, today) {
            ValidityStatus::Unexpired
        } else {
            ValidityStatus::Expired
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidityStatus::Unexpired => "Unexpired",
            ValidityStatus::Expired => "Expired",
        }
    }

    pub fn is_unexpired(&self) -> bool {
        matches!(self, ValidityStatus::Unexpired)
    }
}

/// Shared window predicate for the status pill and the pricing eligibility query
pub fn is_within_window(
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
    today: NaiveDate,
) -> bool {
    valid_from.map_or(true, |from| from <= today) && valid_to.map_or(true, |to| to >= today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let from = Some(d(2023, 1, 1));
        let to = Some(d(2023, 12, 31));
        assert_eq!(
            ValidityStatus::classify(from, to, d(2023, 1, 1)),
            ValidityStatus::Unexpired
        );
        assert_eq!(
            ValidityStatus::classify(from, to, d(2023, 12, 31)),
            ValidityStatus::Unexpired
        );
    }

    #[test]
    fn test_expires_the_day_after_valid_to() {
        let status = ValidityStatus::classify(Some(d(2023, 1, 1)), Some(d(2023, 12, 31)), d(2024, 1, 1));
        assert_eq!(status, ValidityStatus::Expired);
    }

    #[test]
    fn test_not_yet_started_is_expired() {
        let status = ValidityStatus::classify(Some(d(2023, 12, 1)), None, d(2023, 11, 30));
        assert_eq!(status, ValidityStatus::Expired);
        assert_eq!(status.as_str(), "Expired");
    }

    #[test]
    fn test_open_window_is_always_unexpired() {
        assert!(ValidityStatus::classify(None, None, d(1999, 1, 1)).is_unexpired());
        assert!(ValidityStatus::classify(Some(d(2023, 1, 1)), None, d(2099, 1, 1)).is_unexpired());
    }
}
