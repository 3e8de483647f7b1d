use crate::layout::use_app_stores;
use crate::shared::picker::{PickerEntry, SearchablePicker};
use contracts::domain::a002_vendor::Vendor;
use leptos::prelude::*;

impl PickerEntry for Vendor {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn label(&self) -> String {
        self.vendor_name.clone()
    }
}

/// Vendor selector bound to the shared vendors store.
#[component]
pub fn VendorPicker(
    selected: Signal<Option<Vendor>>,
    on_select: impl Fn(Vendor) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let stores = use_app_stores();

    view! {
        <SearchablePicker
            label="Select Vendor".to_string()
            items=stores.vendors.items()
            selected=selected
            on_select=on_select
            loading=stores.vendors.loading()
            placeholder="Choose a vendor".to_string()
        />
    }
}
