use super::traits::{filter_entries, PickerEntry};
use leptos::prelude::*;

/// Searchable single-select picker.
///
/// Renders a labelled trigger button; clicking it opens a transient overlay
/// with a free-text search input and the filtered item list. Selecting a row
/// invokes `on_select` and closes the overlay. The currently selected row is
/// highlighted by key equality.
#[component]
pub fn SearchablePicker<T>(
    /// Field label, also the overlay title.
    label: String,
    /// Full collection to pick from.
    items: Signal<Vec<T>>,
    /// Currently chosen entry, if any.
    selected: Signal<Option<T>>,
    /// Callback invoked with the chosen entry.
    on_select: impl Fn(T) + Clone + Send + Sync + 'static,
    /// Shows a progress indicator instead of the list.
    #[prop(optional)]
    loading: Option<Signal<bool>>,
    /// Trigger text while nothing is selected.
    #[prop(optional)]
    placeholder: Option<String>,
) -> impl IntoView
where
    T: PickerEntry + Clone + Send + Sync + 'static,
{
    let (open, set_open) = signal(false);
    let (query, set_query) = signal(String::new());

    let loading = loading.unwrap_or_else(|| Signal::derive(|| false));
    let placeholder = placeholder.unwrap_or_else(|| format!("Choose {}", label.to_lowercase()));
    let title = label.clone();

    let selected_key = Signal::derive(move || selected.get().map(|s| s.key()));
    let filtered = Signal::derive(move || items.with(|list| filter_entries(list, &query.get())));

    view! {
        <div class="picker-field">
            <label class="picker-field__label">{label}</label>
            <button class="picker-field__trigger" on:click=move |_| set_open.set(true)>
                {move || selected.get().map(|s| s.label()).unwrap_or_else(|| placeholder.clone())}
            </button>

            <Show when=move || open.get()>
                <div class="picker-overlay" on:click=move |_| set_open.set(false)>
                    <div class="picker-overlay__panel" on:click=|ev| ev.stop_propagation()>
                        <div class="picker-overlay__header">
                            <h3>{title.clone()}</h3>
                        </div>

                        <input
                            class="picker-overlay__search"
                            type="text"
                            placeholder="Search..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />

                        {
                            let on_select = on_select.clone();
                            move || {
                                if loading.get() {
                                    return view! {
                                        <div class="picker-overlay__loading">"Loading..."</div>
                                    }
                                    .into_any();
                                }
                                let entries = filtered.get();
                                if entries.is_empty() {
                                    return view! {
                                        <div class="picker-overlay__empty">"No matches"</div>
                                    }
                                    .into_any();
                                }
                                entries
                                    .into_iter()
                                    .map(|entry| {
                                        let key = entry.key();
                                        let is_sel = move || {
                                            selected_key.get().as_deref() == Some(key.as_str())
                                        };
                                        let on_select = on_select.clone();
                                        let chosen = entry.clone();
                                        view! {
                                            <div
                                                class="picker-overlay__row"
                                                class:picker-overlay__row--selected=is_sel
                                                on:click=move |_| {
                                                    on_select(chosen.clone());
                                                    set_open.set(false);
                                                    set_query.set(String::new());
                                                }
                                            >
                                                <span class="picker-overlay__radio"></span>
                                                <span class="picker-overlay__text">{entry.label()}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }
                        }

                        <div class="picker-overlay__actions">
                            <button
                                class="button button--secondary"
                                on:click=move |_| {
                                    set_open.set(false);
                                    set_query.set(String::new());
                                }
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
