pub mod stock_movement;

pub use stock_movement::{MovementParty, StockMovementRequest};
