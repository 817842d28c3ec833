//! Common types and traits for all aggregates

pub mod address;
pub mod aggregate_id;
pub mod aggregate_root;
pub mod errors;
pub mod validity;

// Re-exports
pub use address::Address;
pub use aggregate_id::AggregateId;
pub use aggregate_root::AggregateRoot;
pub use errors::{StoreError, ValidationError};
pub use validity::ValidityStatus;
