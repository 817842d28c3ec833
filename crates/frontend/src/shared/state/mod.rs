pub mod app_stores;
