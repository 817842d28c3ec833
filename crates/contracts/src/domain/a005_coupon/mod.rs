pub mod aggregate;
pub mod seed;
pub mod stats;
