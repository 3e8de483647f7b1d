use crate::domain::a001_product::ui::{AddProduct, ManageProducts, ProductList};
use crate::domain::a002_vendor::ui::VendorList;
use crate::domain::a003_customer::ui::CustomerList;
use crate::layout::Shell;
use crate::routes::dashboard::Dashboard;
use crate::usecases::u501_stock_in::StockIn;
use crate::usecases::u502_stock_out::StockOut;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=Dashboard />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/products/manage") view=ManageProducts />
                    <Route path=path!("/products/new") view=AddProduct />
                    <Route path=path!("/stock-in") view=StockIn />
                    <Route path=path!("/stock-out") view=StockOut />
                    <Route path=path!("/vendors") view=VendorList />
                    <Route path=path!("/customers") view=CustomerList />
                </Routes>
            </Shell>
        </Router>
    }
}
