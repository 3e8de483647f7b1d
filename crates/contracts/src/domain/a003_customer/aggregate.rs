use serde::{Deserialize, Serialize};

/// Customer as served by `GET /customers`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    pub id: i64,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Payload for `POST /customers`.
#[derive(Debug, Clone, Serialize, Default)]
pub struct NewCustomer {
    #[serde(rename = "customerName")]
    pub customer_name: String,
}

impl NewCustomer {
    pub fn new(name: &str) -> Self {
        Self {
            customer_name: name.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.is_empty() {
            return Err("Customer name cannot be empty".into());
        }
        Ok(())
    }
}
