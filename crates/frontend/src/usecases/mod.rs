pub mod u501_stock_in;
pub mod u502_stock_out;
