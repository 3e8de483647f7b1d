use crate::shared::date_utils::today_iso;
use crate::shared::dialog;
use leptos::prelude::*;

/// New product intake form.
///
/// The consumed REST surface has no product-create endpoint yet, so saving
/// logs the captured record and clears the form for the next item.
/// TODO: wire to POST /products once the backend exposes it.
#[component]
pub fn AddProduct() -> impl IntoView {
    let (qrcode, set_qrcode) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (initial_stock, set_initial_stock) = signal(String::new());
    let (cost_price, set_cost_price) = signal(String::new());
    let (date, set_date) = signal(today_iso());
    let (base_price, set_base_price) = signal("0".to_string());
    let (notes, set_notes) = signal(String::new());

    let reset = move || {
        set_qrcode.set(String::new());
        set_name.set(String::new());
        set_initial_stock.set(String::new());
        set_cost_price.set(String::new());
        set_date.set(today_iso());
        set_base_price.set("0".to_string());
        set_notes.set(String::new());
    };

    let capture = move || -> bool {
        if qrcode.get_untracked().trim().is_empty() || name.get_untracked().trim().is_empty() {
            dialog::alert("QR code and product name are required.");
            return false;
        }
        log::info!(
            "product captured: qrcode={} name={} stock={} cost={} date={} base={} notes={}",
            qrcode.get_untracked(),
            name.get_untracked(),
            initial_stock.get_untracked(),
            cost_price.get_untracked(),
            date.get_untracked(),
            base_price.get_untracked(),
            notes.get_untracked(),
        );
        dialog::alert("Product saved successfully!");
        true
    };

    let handle_save = move |_| {
        capture();
    };

    let handle_save_and_again = move |_| {
        if capture() {
            reset();
        }
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Add Product"</h1>

            <div class="field">
                <label class="field__label">"QR Code"</label>
                <input
                    class="field__input"
                    type="text"
                    placeholder="Scan or enter code"
                    prop:value=move || qrcode.get()
                    on:input=move |ev| set_qrcode.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label class="field__label">"Product Name"</label>
                <input
                    class="field__input"
                    type="text"
                    placeholder="Enter product name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label class="field__label">"Initial Stock"</label>
                <input
                    class="field__input"
                    type="number"
                    placeholder="0"
                    prop:value=move || initial_stock.get()
                    on:input=move |ev| set_initial_stock.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label class="field__label">"Cost Price"</label>
                <input
                    class="field__input"
                    type="number"
                    placeholder="0.00"
                    prop:value=move || cost_price.get()
                    on:input=move |ev| set_cost_price.set(event_target_value(&ev))
                />
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
            <div class="field">
                <label class="field__label">"Base Price"</label>
                <input
                    class="field__input"
                    type="number"
                    prop:value=move || base_price.get()
                    on:input=move |ev| set_base_price.set(event_target_value(&ev))
                />
            </div>
            <div class="field">
                <label class="field__label">"Notes"</label>
                <textarea
                    class="field__input"
                    placeholder="Optional notes"
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-actions">
                <button class="button button--primary" on:click=handle_save>
                    "Save"
                </button>
                <button class="button button--secondary" on:click=handle_save_and_again>
                    "Save & Create Again"
                </button>
            </div>
        </div>
    }
}
