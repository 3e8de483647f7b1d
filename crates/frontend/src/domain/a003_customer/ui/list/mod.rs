use crate::domain::a003_customer::api;
use crate::layout::use_app_stores;
use crate::shared::date_utils::format_date;
use crate::shared::dialog;
use contracts::domain::a003_customer::{Customer, NewCustomer};
use leptos::prelude::*;

/// Customer directory: searchable list, add modal, delete with confirm.
#[component]
pub fn CustomerList() -> impl IntoView {
    let stores = use_app_stores();
    let customers = stores.customers;
    customers.refresh();

    let (search, set_search) = signal(String::new());
    let (show_modal, set_show_modal) = signal(false);
    let (new_name, set_new_name) = signal(String::new());

    let items = customers.items();
    let loading = customers.loading();
    let error = customers.error();
    let filtered = Signal::derive(move || {
        let query = search.get().to_lowercase();
        items.with(|list| {
            if query.is_empty() {
                list.clone()
            } else {
                list.iter()
                    .filter(|c| {
                        c.customer_name.to_lowercase().contains(&query)
                            || c.id.to_string().contains(&query)
                    })
                    .cloned()
                    .collect::<Vec<Customer>>()
            }
        })
    });

    let handle_add = move |_| {
        let dto = NewCustomer::new(&new_name.get_untracked());
        if let Err(e) = dto.validate() {
            dialog::alert(&e);
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_customer(&dto).await {
                Ok(()) => {
                    dialog::alert("Customer added successfully");
                    set_show_modal.set(false);
                    set_new_name.set(String::new());
                    customers.refresh();
                }
                Err(e) => dialog::alert(&e.to_string()),
            }
        });
    };

    let handle_delete = move |id: i64| {
        if !dialog::confirm("Are you sure you want to delete this customer?") {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_customer(id).await {
                Ok(()) => {
                    dialog::alert("Customer deleted successfully");
                    customers.refresh();
                }
                Err(e) => dialog::alert(&e.to_string()),
            }
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Customers"</h1>
                <div class="header__actions">
                    <button class="button button--primary" on:click=move |_| set_show_modal.set(true)>
                        "Add Customer"
                    </button>
                </div>
            </div>

            <input
                class="field__input"
                type="text"
                placeholder="Search customers..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />

            {move || {
                if loading.get() {
                    return view! { <div class="page__loading">"Loading..."</div> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <div class="page__error">{err}</div> }.into_any();
                }
                let list = filtered.get();
                if list.is_empty() {
                    return view! { <div class="page__empty">"No customers found"</div> }.into_any();
                }
                list.into_iter()
                    .map(|customer| {
                        let created = customer
                            .created_at
                            .as_deref()
                            .map(format_date)
                            .unwrap_or_else(|| "-".to_string());
                        view! {
                            <div class="card">
                                <div class="card__info">
                                    <span class="card__name">
                                        {format!("Name: {}", customer.customer_name)}
                                    </span>
                                    <span class="card__qty">{format!("Created: {}", created)}</span>
                                </div>
                                <div class="card__actions">
                                    <button
                                        class="button button--danger"
                                        on:click=move |_| handle_delete(customer.id)
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}

            <Show when=move || show_modal.get()>
                <div class="modal">
                    <div class="modal__panel">
                        <h3 class="modal__title">"Add Customer"</h3>
                        <input
                            class="field__input"
                            type="text"
                            placeholder="Customer name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <div class="modal__actions">
                            <button class="button button--primary" on:click=handle_add>
                                "Add"
                            </button>
                            <button
                                class="button button--secondary"
                                on:click=move |_| set_show_modal.set(false)
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
