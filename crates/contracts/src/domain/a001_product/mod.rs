pub mod aggregate;

pub use aggregate::{MovementKind, Product, ProductUpdate, QtyDetail};
