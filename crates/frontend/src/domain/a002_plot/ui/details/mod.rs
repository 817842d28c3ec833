//! Plot create/edit page
//!
//! - view_model.rs: form state, pricing lookups, save command
//! - view.rs: route component and editor

mod view;
mod view_model;

pub use view::PlotDetails;
pub use view_model::PlotDetailsViewModel;
