use std::fmt::Debug;
use std::hash::Hash;

/// Trait for aggregate identifier types.
///
/// Identifiers are opaque strings: seed records carry fixed literals, records
/// created from forms get a fresh UUID v4 rendered as text.
pub trait AggregateId: Clone + PartialEq + Eq + Hash + Debug + Send + Sync + 'static {
    /// Borrow the identifier text
    fn as_str(&self) -> &str;

    /// Wrap an existing identifier
    fn from_string(s: &str) -> Self;

    /// Generate a fresh identifier
    fn new_v4() -> Self {
        Self::from_string(&uuid::Uuid::new_v4().to_string())
    }

    /// Owned copy of the identifier text
    fn as_string(&self) -> String {
        self.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_layout::aggregate::LayoutId;

    #[test]
    fn test_new_v4_is_uuid_text() {
        let id = LayoutId::new_v4();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, LayoutId::new_v4());
    }

    #[test]
    fn test_from_string_round_trips_text() {
        let id = LayoutId::from_string("L1");
        assert_eq!(id.as_str(), "L1");
        assert_eq!(id.as_string(), "L1".to_string());
    }
}
