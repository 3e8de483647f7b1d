use serde::{Deserialize, Serialize};

/// Vendor as served by `GET /vendors`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Vendor {
    pub id: i64,

    #[serde(rename = "vendorName")]
    pub vendor_name: String,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Payload for `POST /vendors`.
#[derive(Debug, Clone, Serialize, Default)]
pub struct NewVendor {
    #[serde(rename = "vendorName")]
    pub vendor_name: String,
}

impl NewVendor {
    pub fn new(name: &str) -> Self {
        Self {
            vendor_name: name.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.vendor_name.is_empty() {
            return Err("Vendor name cannot be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vendor_trims_and_validates() {
        let dto = NewVendor::new("  Acme Clay  ");
        assert_eq!(dto.vendor_name, "Acme Clay");
        assert!(dto.validate().is_ok());
        assert!(NewVendor::new("   ").validate().is_err());
    }

    #[test]
    fn decodes_vendor_row() {
        let json = r#"{"id":3,"vendorName":"Acme Clay","createdAt":"2025-01-05T10:00:00Z"}"#;
        let vendor: Vendor = serde_json::from_str(json).unwrap();
        assert_eq!(vendor.id, 3);
        assert_eq!(vendor.vendor_name, "Acme Clay");
    }
}
