//! Write operations for products and their stock movements.
//!
//! Reads go through the shared products collection store; every call here
//! must be followed by a `refresh()` on that store.

use crate::shared::api::{self, ApiError};
use contracts::domain::a001_product::ProductUpdate;
use contracts::usecases::StockMovementRequest;

pub async fn update_product(qrcode: &str, dto: &ProductUpdate) -> Result<(), ApiError> {
    api::put_json(&format!("/products/{}", urlencoding::encode(qrcode)), dto).await
}

pub async fn delete_product(qrcode: &str) -> Result<(), ApiError> {
    api::delete(&format!("/products/{}", urlencoding::encode(qrcode))).await
}

pub async fn post_stock_movement(request: &StockMovementRequest) -> Result<(), ApiError> {
    api::post_json("/qtydetails", request).await
}
