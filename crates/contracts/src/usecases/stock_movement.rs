use chrono::NaiveDate;
use serde::Serialize;

/// Payload for `POST /qtydetails`.
///
/// The direction is carried as a tagged variant here and collapses to the
/// backend's `vendorId` / `customerId` pair on serialization: exactly one of
/// the two keys appears in the JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct StockMovementRequest {
    #[serde(rename = "productQrcode")]
    pub product_qrcode: String,

    /// ISO date (`YYYY-MM-DD`).
    pub date: NaiveDate,

    pub qty: f64,
    pub price: f64,

    #[serde(flatten)]
    pub party: MovementParty,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum MovementParty {
    Inbound {
        #[serde(rename = "vendorId")]
        vendor_id: i64,
    },
    Outbound {
        #[serde(rename = "customerId")]
        customer_id: i64,
    },
}

impl StockMovementRequest {
    pub fn inbound(qrcode: &str, date: NaiveDate, qty: f64, price: f64, vendor_id: i64) -> Self {
        Self {
            product_qrcode: qrcode.to_string(),
            date,
            qty,
            price,
            party: MovementParty::Inbound { vendor_id },
        }
    }

    pub fn outbound(qrcode: &str, date: NaiveDate, qty: f64, price: f64, customer_id: i64) -> Self {
        Self {
            product_qrcode: qrcode.to_string(),
            date,
            qty,
            price,
            party: MovementParty::Outbound { customer_id },
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.product_qrcode.trim().is_empty() {
            return Err("Product is required".into());
        }
        if self.qty <= 0.0 {
            return Err("Quantity must be greater than zero".into());
        }
        if self.price < 0.0 {
            return Err("Price cannot be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn inbound_serializes_vendor_id_only() {
        let req = StockMovementRequest::inbound("QR-1", date(), 3.0, 2.5, 7);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["productQrcode"], "QR-1");
        assert_eq!(value["date"], "2025-03-10");
        assert_eq!(value["vendorId"], 7);
        assert!(value.get("customerId").is_none());
    }

    #[test]
    fn outbound_serializes_customer_id_only() {
        let req = StockMovementRequest::outbound("QR-1", date(), 3.0, 2.5, 4);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["customerId"], 4);
        assert!(value.get("vendorId").is_none());
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let req = StockMovementRequest::inbound("QR-1", date(), 0.0, 2.5, 7);
        assert!(req.validate().is_err());
    }
}
