use crate::layout::use_app_stores;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_money;
use contracts::domain::a001_product::QtyDetail;
use leptos::prelude::*;

/// Product catalog with expandable movement history.
#[component]
pub fn ProductList() -> impl IntoView {
    let stores = use_app_stores();
    let products = stores.products;
    products.refresh();

    let items = products.items();
    let loading = products.loading();
    let error = products.error();

    let (expanded, set_expanded) = signal::<Option<String>>(None);

    let toggle = move |qrcode: String| {
        set_expanded.update(|current| {
            if current.as_deref() == Some(qrcode.as_str()) {
                *current = None;
            } else {
                *current = Some(qrcode);
            }
        });
    };

    view! {
        <div class="page">
            <h1 class="page__title">"View Products"</h1>

            {move || {
                if loading.get() {
                    return view! { <div class="page__loading">"Loading..."</div> }.into_any();
                }
                if let Some(err) = error.get() {
                    return view! { <div class="page__error">{err}</div> }.into_any();
                }
                let list = items.get();
                if list.is_empty() {
                    return view! { <div class="page__empty">"No products yet"</div> }.into_any();
                }
                list.into_iter()
                    .map(|product| {
                        let qrcode = product.qrcode.clone();
                        let qrcode_for_toggle = product.qrcode.clone();
                        let details = product.qty_details.clone();
                        view! {
                            <div class="card">
                                <div
                                    class="card__header"
                                    on:click=move |_| toggle(qrcode_for_toggle.clone())
                                >
                                    <div class="card__info">
                                        <span class="card__name">{product.product_name.clone()}</span>
                                        <span class="card__qty">
                                            {format!("Total Qty: {}", product.total_quantity)}
                                        </span>
                                    </div>
                                </div>
                                <Show when=move || expanded.get().as_deref() == Some(qrcode.as_str())>
                                    {
                                        let details = details.clone();
                                        move || movement_table(&details)
                                    }
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

fn movement_table(details: &[QtyDetail]) -> AnyView {
    if details.is_empty() {
        return view! { <div class="movements__empty">"No movements yet"</div> }.into_any();
    }
    view! {
        <table class="movements">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Qty"</th>
                    <th>"Price"</th>
                    <th>"Type"</th>
                </tr>
            </thead>
            <tbody>
                {details
                    .iter()
                    .map(|detail| {
                        let row_class = if detail.movement.is_inbound() {
                            "movements__row movements__row--in"
                        } else {
                            "movements__row movements__row--out"
                        };
                        view! {
                            <tr class=row_class>
                                <td>{format_date(&detail.date)}</td>
                                <td>{detail.qty}</td>
                                <td>{format!("\u{20B9}{}", format_money(detail.price))}</td>
                                <td>{detail.movement.tag()}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}
