pub mod list;
pub mod picker;

pub use list::VendorList;
pub use picker::VendorPicker;
