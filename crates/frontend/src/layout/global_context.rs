use crate::shared::collection_store::CollectionStore;
use contracts::domain::a001_product::Product;
use contracts::domain::a002_vendor::Vendor;
use contracts::domain::a003_customer::Customer;
use leptos::prelude::*;

/// One remote collection store per entity type.
///
/// Constructed once by the application root and shared via context, so every
/// screen observes the same collection and a refresh after a mutation is
/// visible everywhere.
#[derive(Clone, Copy)]
pub struct AppStores {
    pub products: CollectionStore<Product>,
    pub vendors: CollectionStore<Vendor>,
    pub customers: CollectionStore<Customer>,
}

impl AppStores {
    pub fn new() -> Self {
        Self {
            products: CollectionStore::new("/products"),
            vendors: CollectionStore::new("/vendors"),
            customers: CollectionStore::new("/customers"),
        }
    }
}

impl Default for AppStores {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_stores() -> AppStores {
    use_context::<AppStores>().expect("AppStores not found in context")
}
