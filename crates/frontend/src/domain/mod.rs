pub mod a001_layout;
pub mod a002_plot;
pub mod a003_customer;
pub mod a004_price;
pub mod a005_coupon;
