pub mod global_context;

pub use global_context::{use_app_stores, AppStores};

use leptos::prelude::*;
use leptos_router::components::A;

/// App chrome: top bar with navigation, content below.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <header class="app__header">
                <div class="app__brand">
                    <A href="/">"Aswath Hollow Bricks"</A>
                </div>
                <nav class="app__nav">
                    <A href="/stock-in">"Stock In"</A>
                    <A href="/stock-out">"Stock Out"</A>
                    <A href="/products">"Products"</A>
                    <A href="/vendors">"Vendors"</A>
                    <A href="/customers">"Customers"</A>
                </nav>
            </header>
            <main class="app__main">{children()}</main>
        </div>
    }
}
