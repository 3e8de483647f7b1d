//! Write operations for vendors; reads go through the shared vendors store.

use crate::shared::api::{self, ApiError};
use contracts::domain::a002_vendor::NewVendor;

pub async fn create_vendor(dto: &NewVendor) -> Result<(), ApiError> {
    api::post_json("/vendors", dto).await
}

pub async fn delete_vendor(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("/vendors/{}", id)).await
}
