use super::AggregateId;
use std::fmt::Debug;

/// Trait for an aggregate root
///
/// Defines identity plus the static names the UI and the stores use for every
/// entity of the system.
pub trait AggregateRoot: Clone + Debug + Send + Sync + 'static {
    /// Aggregate identifier type
    type Id: AggregateId;

    /// Record identifier
    fn id(&self) -> &Self::Id;

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name used in logs and store errors (e.g. "layout")
    fn collection_name() -> &'static str;

    /// UI name of a single element (e.g. "Layout")
    fn element_name() -> &'static str;

    /// UI name of the list (e.g. "Layouts")
    fn list_name() -> &'static str;
}
