pub mod confirm_dialog;
pub mod data_table;
pub mod descriptor_form;
pub mod drawer;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;
