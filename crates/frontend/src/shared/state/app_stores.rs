//! Application state: one in-memory store per entity
//!
//! Provided once through context in `App`. Pages read the stores through the
//! signals and mutate them only through the helpers below, which log the outcome.

use contracts::domain::a001_layout::aggregate::Layout;
use contracts::domain::a001_layout::seed::seed_layouts;
use contracts::domain::a002_plot::aggregate::Plot;
use contracts::domain::a002_plot::seed::seed_plots;
use contracts::domain::a003_customer::aggregate::Customer;
use contracts::domain::a003_customer::seed::seed_customers;
use contracts::domain::a004_price::aggregate::Price;
use contracts::domain::a004_price::seed::seed_prices;
use contracts::domain::a005_coupon::aggregate::Coupon;
use contracts::domain::a005_coupon::seed::seed_coupons;
use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::store::EntityStore;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppStores {
    pub layouts: RwSignal<EntityStore<Layout>>,
    pub plots: RwSignal<EntityStore<Plot>>,
    pub customers: RwSignal<EntityStore<Customer>>,
    pub prices: RwSignal<EntityStore<Price>>,
    pub coupons: RwSignal<EntityStore<Coupon>>,
}

impl AppStores {
    pub fn seeded() -> Self {
        Self {
            layouts: RwSignal::new(EntityStore::new(seed_layouts())),
            plots: RwSignal::new(EntityStore::new(seed_plots())),
            customers: RwSignal::new(EntityStore::new(seed_customers())),
            prices: RwSignal::new(EntityStore::new(seed_prices())),
            coupons: RwSignal::new(EntityStore::new(seed_coupons())),
        }
    }
}

pub fn use_stores() -> AppStores {
    use_context::<AppStores>().expect("AppStores not found in context")
}

/// Add a record; a duplicate id is logged and ignored
pub fn add_record<T: AggregateRoot>(store: RwSignal<EntityStore<T>>, item: T) -> bool {
    let id = item.id().as_string();
    match store.try_update(|s| s.add(item)) {
        Some(Ok(())) => {
            log::info!("{} {} added", T::collection_name(), id);
            true
        }
        Some(Err(e)) => {
            log::warn!("{}", e);
            false
        }
        None => false,
    }
}

/// Replace a record by id; a missing id is logged and ignored
pub fn update_record<T: AggregateRoot>(store: RwSignal<EntityStore<T>>, item: T) -> bool {
    let id = item.id().as_string();
    match store.try_update(|s| s.update(item)) {
        Some(Ok(())) => {
            log::info!("{} {} updated", T::collection_name(), id);
            true
        }
        Some(Err(e)) => {
            log::warn!("{}", e);
            false
        }
        None => false,
    }
}

/// Add when `is_new`, otherwise update
pub fn save_record<T: AggregateRoot>(
    store: RwSignal<EntityStore<T>>,
    item: T,
    is_new: bool,
) -> bool {
    if is_new {
        add_record(store, item)
    } else {
        update_record(store, item)
    }
}

/// Delete a record by id; a missing id is logged and ignored
pub fn delete_record<T: AggregateRoot>(store: RwSignal<EntityStore<T>>, id: &T::Id) -> bool {
    match store.try_update(|s| s.delete(id)) {
        Some(Ok(_)) => {
            log::info!("{} {} deleted", T::collection_name(), id.as_str());
            true
        }
        Some(Err(e)) => {
            log::warn!("{}", e);
            false
        }
        None => false,
    }
}
