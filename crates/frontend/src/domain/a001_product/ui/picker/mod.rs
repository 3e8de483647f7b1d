use crate::layout::use_app_stores;
use crate::shared::picker::{PickerEntry, SearchablePicker};
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

impl PickerEntry for Product {
    fn key(&self) -> String {
        self.qrcode.clone()
    }

    fn label(&self) -> String {
        self.product_name.clone()
    }
}

/// Product selector bound to the shared products store.
#[component]
pub fn ProductPicker(
    selected: Signal<Option<Product>>,
    on_select: impl Fn(Product) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let stores = use_app_stores();

    view! {
        <SearchablePicker
            label="Select Product".to_string()
            items=stores.products.items()
            selected=selected
            on_select=on_select
            loading=stores.products.loading()
            placeholder="Choose a product".to_string()
        />
    }
}
