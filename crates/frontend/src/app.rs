use crate::layout::AppStores;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // One store instance per entity for the whole app, owned here.
    provide_context(AppStores::new());

    view! {
        <AppRoutes />
    }
}
