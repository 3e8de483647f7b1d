use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Product as served by `GET /products`.
///
/// The qrcode is the stable identifier: update and delete address the
/// product by it, and the stock forms use it as the picker key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub qrcode: String,

    #[serde(rename = "productName")]
    pub product_name: String,

    #[serde(rename = "totalQuantity", default)]
    pub total_quantity: f64,

    #[serde(rename = "qtyDetails", default)]
    pub qty_details: Vec<QtyDetail>,
}

/// One stock movement attached to a product.
///
/// Date is kept as the raw wire string; screens format it for display.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "QtyDetailWire")]
pub struct QtyDetail {
    pub id: i64,
    pub date: String,
    pub qty: f64,
    pub price: f64,
    pub movement: MovementKind,
}

/// Movement direction, decoded from the `vendorId`/`customerId` pair.
///
/// The backend marks inbound rows with a vendor reference and outbound rows
/// with a null vendor; the customer reference may itself be null on legacy
/// rows, so `Outbound` carries an optional id.
#[derive(Debug, Clone, PartialEq)]
pub enum MovementKind {
    Inbound { vendor_id: i64 },
    Outbound { customer_id: Option<i64> },
}

impl MovementKind {
    pub fn is_inbound(&self) -> bool {
        matches!(self, MovementKind::Inbound { .. })
    }

    /// Short tag for tables: "In" / "Out".
    pub fn tag(&self) -> &'static str {
        if self.is_inbound() {
            "In"
        } else {
            "Out"
        }
    }
}

/// Raw wire shape of a movement row. Converted into [`QtyDetail`] on decode
/// so the rest of the app never re-infers the direction.
#[derive(Debug, Deserialize)]
struct QtyDetailWire {
    #[serde(default)]
    id: i64,
    date: String,
    qty: f64,
    price: f64,
    #[serde(rename = "vendorId", default)]
    vendor_id: Option<i64>,
    #[serde(rename = "customerId", default)]
    customer_id: Option<i64>,
}

impl From<QtyDetailWire> for QtyDetail {
    fn from(wire: QtyDetailWire) -> Self {
        let movement = match wire.vendor_id {
            Some(vendor_id) => MovementKind::Inbound { vendor_id },
            None => MovementKind::Outbound {
                customer_id: wire.customer_id,
            },
        };
        Self {
            id: wire.id,
            date: wire.date,
            qty: wire.qty,
            price: wire.price,
            movement,
        }
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Payload for `PUT /products/{qrcode}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductUpdate {
    #[serde(rename = "productName")]
    pub product_name: String,

    #[serde(rename = "totalQuantity")]
    pub total_quantity: f64,
}

impl ProductUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if self.product_name.trim().is_empty() {
            return Err("Product name cannot be empty".into());
        }
        if self.total_quantity < 0.0 {
            return Err("Total quantity cannot be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_inbound_when_vendor_present() {
        let json = r#"{"id":1,"date":"2025-03-10","qty":5,"price":12.5,"vendorId":7,"customerId":null}"#;
        let detail: QtyDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.movement, MovementKind::Inbound { vendor_id: 7 });
        assert_eq!(detail.movement.tag(), "In");
    }

    #[test]
    fn decodes_outbound_when_vendor_null() {
        let json = r#"{"id":2,"date":"2025-03-11","qty":3,"price":20,"vendorId":null,"customerId":4}"#;
        let detail: QtyDetail = serde_json::from_str(json).unwrap();
        assert_eq!(
            detail.movement,
            MovementKind::Outbound {
                customer_id: Some(4)
            }
        );
        assert_eq!(detail.movement.tag(), "Out");
    }

    #[test]
    fn outbound_tolerates_missing_customer() {
        // Legacy rows can lack both references; vendor absent still means "Out".
        let json = r#"{"id":3,"date":"2025-03-12","qty":1,"price":5}"#;
        let detail: QtyDetail = serde_json::from_str(json).unwrap();
        assert_eq!(
            detail.movement,
            MovementKind::Outbound { customer_id: None }
        );
    }

    #[test]
    fn decodes_product_without_details() {
        let json = r#"{"qrcode":"QR-1","productName":"Bricks","totalQuantity":120}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.qrcode, "QR-1");
        assert!(product.qty_details.is_empty());
    }

    #[test]
    fn update_dto_validation() {
        let dto = ProductUpdate {
            product_name: "Bricks".into(),
            total_quantity: 10.0,
        };
        assert!(dto.validate().is_ok());

        let empty = ProductUpdate {
            product_name: "  ".into(),
            total_quantity: 10.0,
        };
        assert!(empty.validate().is_err());
    }
}
