use crate::layout::use_app_stores;
use crate::shared::number_format::format_money;
use contracts::domain::a001_product::{MovementKind, Product};
use leptos::prelude::*;
use leptos_router::components::A;

/// Inbound/outbound totals aggregated over every product's movement history.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StockTotals {
    pub inbound_qty: f64,
    pub outbound_qty: f64,
    /// Outbound turnover: sum of qty x price over outbound movements.
    pub turnover: f64,
}

pub fn stock_totals(products: &[Product]) -> StockTotals {
    let mut totals = StockTotals::default();
    for product in products {
        for detail in &product.qty_details {
            match detail.movement {
                MovementKind::Inbound { .. } => totals.inbound_qty += detail.qty,
                MovementKind::Outbound { .. } => {
                    totals.outbound_qty += detail.qty;
                    totals.turnover += detail.qty * detail.price;
                }
            }
        }
    }
    totals
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let stores = use_app_stores();
    stores.products.refresh();

    let items = stores.products.items();
    let totals = Signal::derive(move || items.with(|products| stock_totals(products)));

    view! {
        <div class="page">
            <h1 class="page__title">"Inventory"</h1>

            <div class="stats">
                <div class="stats__card">
                    <span class="stats__label">"Stock In"</span>
                    <span class="stats__value">{move || format_money(totals.get().inbound_qty)}</span>
                </div>
                <div class="stats__card">
                    <span class="stats__label">"Stock Out"</span>
                    <span class="stats__value">{move || format_money(totals.get().outbound_qty)}</span>
                </div>
                <div class="stats__card">
                    <span class="stats__label">"Turnover"</span>
                    <span class="stats__value">{move || format_money(totals.get().turnover)}</span>
                </div>
            </div>

            <div class="sections">
                <div class="sections__group">
                    <h2 class="sections__title">"Transactions"</h2>
                    <A href="/stock-in">"Stock In"</A>
                    <A href="/stock-out">"Stock Out"</A>
                </div>
                <div class="sections__group">
                    <h2 class="sections__title">"Product Management"</h2>
                    <A href="/products">"View Products"</A>
                    <A href="/products/manage">"Update Products"</A>
                    <A href="/products/new">"Add New Product"</A>
                </div>
                <div class="sections__group">
                    <h2 class="sections__title">"People Management"</h2>
                    <A href="/vendors">"Vendors"</A>
                    <A href="/customers">"Customers"</A>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::QtyDetail;

    fn product(qrcode: &str, details: Vec<QtyDetail>) -> Product {
        Product {
            qrcode: qrcode.into(),
            product_name: "Bricks".into(),
            total_quantity: 0.0,
            qty_details: details,
        }
    }

    fn inbound(qty: f64, price: f64) -> QtyDetail {
        QtyDetail {
            id: 0,
            date: "2025-01-01".into(),
            qty,
            price,
            movement: MovementKind::Inbound { vendor_id: 1 },
        }
    }

    fn outbound(qty: f64, price: f64) -> QtyDetail {
        QtyDetail {
            id: 0,
            date: "2025-01-02".into(),
            qty,
            price,
            movement: MovementKind::Outbound {
                customer_id: Some(2),
            },
        }
    }

    #[test]
    fn totals_split_by_direction() {
        let products = vec![
            product("QR-1", vec![inbound(100.0, 5.0), outbound(40.0, 8.0)]),
            product("QR-2", vec![outbound(10.0, 12.0)]),
        ];
        let totals = stock_totals(&products);
        assert_eq!(totals.inbound_qty, 100.0);
        assert_eq!(totals.outbound_qty, 50.0);
        assert_eq!(totals.turnover, 40.0 * 8.0 + 10.0 * 12.0);
    }

    #[test]
    fn totals_of_empty_catalog_are_zero() {
        assert_eq!(stock_totals(&[]), StockTotals::default());
    }
}
