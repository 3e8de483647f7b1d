use crate::domain::a001_product::api;
use crate::layout::use_app_stores;
use crate::shared::dialog;
use crate::shared::number_format::parse_decimal;
use contracts::domain::a001_product::{Product, ProductUpdate};
use leptos::prelude::*;

/// Product maintenance: rename, adjust total quantity, delete.
#[component]
pub fn ManageProducts() -> impl IntoView {
    let stores = use_app_stores();
    let products = stores.products;
    products.refresh();

    let items = products.items();

    let (editing, set_editing) = signal::<Option<Product>>(None);
    let (name, set_name) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());

    let open_edit = move |product: Product| {
        set_name.set(product.product_name.clone());
        set_quantity.set(product.total_quantity.to_string());
        set_editing.set(Some(product));
    };

    let handle_update = move |_| {
        let Some(product) = editing.get_untracked() else {
            return;
        };
        // Blank fields keep the current value, as on paper stock cards.
        let name_input = name.get_untracked();
        let qty_input = quantity.get_untracked();
        let dto = ProductUpdate {
            product_name: if name_input.trim().is_empty() {
                product.product_name.clone()
            } else {
                name_input.trim().to_string()
            },
            total_quantity: if qty_input.trim().is_empty() {
                product.total_quantity
            } else {
                parse_decimal(&qty_input)
            },
        };
        if let Err(e) = dto.validate() {
            dialog::alert(&e);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::update_product(&product.qrcode, &dto).await {
                Ok(()) => {
                    dialog::alert("Product updated successfully");
                    set_editing.set(None);
                    products.refresh();
                }
                Err(e) => dialog::alert(&e.to_string()),
            }
        });
    };

    let handle_delete = move |qrcode: String| {
        if !dialog::confirm("Are you sure you want to delete this product?") {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_product(&qrcode).await {
                Ok(()) => {
                    dialog::alert("Product deleted successfully");
                    products.refresh();
                }
                Err(e) => dialog::alert(&e.to_string()),
            }
        });
    };

    view! {
        <div class="page">
            <h1 class="page__title">"Update Products"</h1>

            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|product| {
                        let qrcode = product.qrcode.clone();
                        let for_edit = product.clone();
                        view! {
                            <div class="card">
                                <div class="card__info">
                                    <span class="card__name">{product.product_name.clone()}</span>
                                    <span class="card__qty">
                                        {format!("Quantity: {}", product.total_quantity)}
                                    </span>
                                </div>
                                <div class="card__actions">
                                    <button
                                        class="button button--secondary"
                                        on:click=move |_| open_edit(for_edit.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="button button--danger"
                                        on:click=move |_| handle_delete(qrcode.clone())
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}

            <Show when=move || editing.get().is_some()>
                <div class="modal">
                    <div class="modal__panel">
                        <h3 class="modal__title">"Edit Product"</h3>
                        <label class="field__label">"Product Name"</label>
                        <input
                            class="field__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                        <label class="field__label">"Total Quantity"</label>
                        <input
                            class="field__input"
                            type="number"
                            prop:value=move || quantity.get()
                            on:input=move |ev| set_quantity.set(event_target_value(&ev))
                        />
                        <div class="modal__actions">
                            <button class="button button--primary" on:click=handle_update>
                                "Save"
                            </button>
                            <button
                                class="button button--secondary"
                                on:click=move |_| set_editing.set(None)
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
