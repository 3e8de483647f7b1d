use crate::layout::use_app_stores;
use crate::shared::picker::{PickerEntry, SearchablePicker};
use contracts::domain::a003_customer::Customer;
use leptos::prelude::*;

impl PickerEntry for Customer {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn label(&self) -> String {
        self.customer_name.clone()
    }
}

/// Customer selector bound to the shared customers store.
#[component]
pub fn CustomerPicker(
    selected: Signal<Option<Customer>>,
    on_select: impl Fn(Customer) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let stores = use_app_stores();

    view! {
        <SearchablePicker
            label="Select Customer".to_string()
            items=stores.customers.items()
            selected=selected
            on_select=on_select
            loading=stores.customers.loading()
            placeholder="Choose a customer".to_string()
        />
    }
}
