pub mod config;
pub mod format;
pub mod metadata;
pub mod store;
