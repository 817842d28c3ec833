//! Layout details page: editable form, live plot counts, the layout's plots and prices
//!
//! - view_model.rs: form state and save command
//! - view.rs: route component

mod view;
mod view_model;

pub use view::LayoutDetails;
pub use view_model::LayoutDetailsViewModel;
