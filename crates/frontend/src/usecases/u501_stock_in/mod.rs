use crate::domain::a001_product::api as product_api;
use crate::domain::a001_product::ui::ProductPicker;
use crate::domain::a002_vendor::ui::VendorPicker;
use crate::layout::use_app_stores;
use crate::shared::date_utils::today_iso;
use crate::shared::dialog;
use crate::shared::number_format::{format_money, parse_decimal, total_amount};
use chrono::NaiveDate;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_vendor::Vendor;
use contracts::usecases::StockMovementRequest;
use leptos::prelude::*;

/// Record an inbound stock movement: product + vendor + qty/price/date.
#[component]
pub fn StockIn() -> impl IntoView {
    let stores = use_app_stores();
    stores.products.refresh();
    stores.vendors.refresh();

    let (product, set_product) = signal::<Option<Product>>(None);
    let (vendor, set_vendor) = signal::<Option<Vendor>>(None);
    let (quantity, set_quantity) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (date, set_date) = signal(today_iso());
    let (submitting, set_submitting) = signal(false);

    // Fetch failures surface as blocking dialogs; list state stays as-is.
    Effect::new(move |_| {
        if let Some(e) = stores.products.error().get() {
            dialog::alert(&e);
        }
    });
    Effect::new(move |_| {
        if let Some(e) = stores.vendors.error().get() {
            dialog::alert(&e);
        }
    });

    let total = Signal::derive(move || total_amount(&quantity.get(), &price.get()));

    let reset = move || {
        set_product.set(None);
        set_vendor.set(None);
        set_quantity.set(String::new());
        set_price.set(String::new());
        set_date.set(today_iso());
    };

    let handle_confirm = move |_| {
        let (Some(product), Some(vendor)) = (product.get_untracked(), vendor.get_untracked())
        else {
            dialog::alert("Please fill all required fields before confirming.");
            return;
        };
        if quantity.get_untracked().trim().is_empty() || price.get_untracked().trim().is_empty() {
            dialog::alert("Please fill all required fields before confirming.");
            return;
        }
        let Ok(date) = NaiveDate::parse_from_str(&date.get_untracked(), "%Y-%m-%d") else {
            dialog::alert("Invalid date.");
            return;
        };
        let request = StockMovementRequest::inbound(
            &product.qrcode,
            date,
            parse_decimal(&quantity.get_untracked()),
            parse_decimal(&price.get_untracked()),
            vendor.id,
        );
        if let Err(e) = request.validate() {
            dialog::alert(&e);
            return;
        }
        set_submitting.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match product_api::post_stock_movement(&request).await {
                Ok(()) => {
                    dialog::alert("Stock-In completed successfully!");
                    reset();
                    // the write never patches local state; re-sync explicitly
                    stores.products.refresh();
                }
                Err(e) => dialog::alert(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Stock In"</h1>

            <ProductPicker selected=product.into() on_select=move |p| set_product.set(Some(p)) />
            <VendorPicker selected=vendor.into() on_select=move |v| set_vendor.set(Some(v)) />

            <div class="field">
                <label class="field__label">"Quantity"</label>
                <input
                    class="field__input"
                    type="number"
                    placeholder="Enter quantity"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label class="field__label">"Price per Unit"</label>
                <input
                    class="field__input"
                    type="number"
                    placeholder="Enter price"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label class="field__label">"Total Amount"</label>
                <div class="field__total">
                    {move || format!("\u{20B9} {}", format_money(total.get()))}
                </div>
            </div>
            <div class="field">
                <label class="field__label">"Date"</label>
                <input
                    class="field__input"
                    type="date"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                />
            </div>

            <div class="form-actions">
                <button
                    class="button button--primary"
                    on:click=handle_confirm
                    disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Submitting..." } else { "Confirm" }}
                </button>
                <button
                    class="button button--danger"
                    on:click=move |_| reset()
                    disabled=move || submitting.get()
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
