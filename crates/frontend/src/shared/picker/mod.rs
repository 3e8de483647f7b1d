//! Searchable single-select picker.
//!
//! Generic over any entry type implementing [`PickerEntry`]: the stock
//! forms feed it products, vendors and customers. The overlay is purely
//! presentational; data and loading state come in as signals from the
//! owning screen's collection store.

pub mod component;
pub mod traits;

pub use component::SearchablePicker;
pub use traits::{filter_entries, PickerEntry};
