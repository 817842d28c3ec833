//! Domain crate of the plot admin dashboard: entities, seed data, in-memory
//! stores and the pricing rules shared by every page.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
