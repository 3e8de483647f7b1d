//! Write operations for customers; reads go through the shared customers store.

use crate::shared::api::{self, ApiError};
use contracts::domain::a003_customer::NewCustomer;

pub async fn create_customer(dto: &NewCustomer) -> Result<(), ApiError> {
    api::post_json("/customers", dto).await
}

pub async fn delete_customer(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("/customers/{}", id)).await
}
