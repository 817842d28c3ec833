pub mod browser;
pub mod clock;
pub mod components;
pub mod icons;
pub mod list_utils;
pub mod state;
