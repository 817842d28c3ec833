pub mod aggregate;
pub mod eligibility;
pub mod seed;
