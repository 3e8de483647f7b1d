pub mod aggregate;

pub use aggregate::{NewVendor, Vendor};
