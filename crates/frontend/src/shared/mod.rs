pub mod api;
pub mod collection_store;
pub mod date_utils;
pub mod dialog;
pub mod number_format;
pub mod picker;
