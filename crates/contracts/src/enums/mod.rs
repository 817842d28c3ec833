pub mod discount_type;
pub mod plot_status;

pub use discount_type::DiscountType;
pub use plot_status::PlotStatus;
