//! In-memory entity store with copy-on-write mutations
//!
//! Each mutation builds a new list and swaps it in, so a snapshot taken before the
//! mutation (`snapshot()`) keeps observing the old contents.

use crate::domain::common::{AggregateId, AggregateRoot, StoreError};
use std::sync::Arc;

/// Flat list of aggregates indexed by id
#[derive(Debug, Clone)]
pub struct EntityStore<T: AggregateRoot> {
    items: Arc<Vec<T>>,
    seed: Arc<Vec<T>>,
}

impl<T: AggregateRoot> EntityStore<T> {
    /// Create a store holding `seed`; `reset` returns to it
    pub fn new(seed: Vec<T>) -> Self {
        let seed = Arc::new(seed);
        Self {
            items: Arc::clone(&seed),
            seed,
        }
    }

    pub fn all(&self) -> &[T] {
        &self.items
    }

    /// Shared handle to the current list
    pub fn snapshot(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get_by_id(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Clone out every item matching `predicate`, in store order
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).cloned().collect()
    }

    /// Append an item; an existing id leaves the store unchanged
    pub fn add(&mut self, item: T) -> Result<(), StoreError> {
        if self.contains(item.id()) {
            return Err(StoreError::DuplicateId {
                collection: T::collection_name(),
                id: item.id().as_string(),
            });
        }
        let mut next = Vec::with_capacity(self.items.len() + 1);
        next.extend(self.items.iter().cloned());
        next.push(item);
        self.items = Arc::new(next);
        Ok(())
    }

    /// Replace the record carrying the same id as `item`, keeping its position
    pub fn update(&mut self, item: T) -> Result<(), StoreError> {
        if !self.contains(item.id()) {
            return Err(self.not_found(item.id()));
        }
        let next = self
            .items
            .iter()
            .map(|existing| {
                if existing.id() == item.id() {
                    item.clone()
                } else {
                    existing.clone()
                }
            })
            .collect();
        self.items = Arc::new(next);
        Ok(())
    }

    /// Remove the record with `id` and return it
    pub fn delete(&mut self, id: &T::Id) -> Result<T, StoreError> {
        let removed = self.get_by_id(id).cloned().ok_or_else(|| self.not_found(id))?;
        let next = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        self.items = Arc::new(next);
        Ok(removed)
    }

    /// Restore the seed contents
    pub fn reset(&mut self) {
        self.items = Arc::clone(&self.seed);
    }

    fn not_found(&self, id: &T::Id) -> StoreError {
        StoreError::NotFound {
            collection: T::collection_name(),
            id: id.as_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_customer::aggregate::{Customer, CustomerId};
    use crate::domain::a001_layout::aggregate::layout_name;
    use crate::domain::a001_layout::seed::seed_layouts;
    use crate::domain::a002_plot::seed::seed_plots;
    use crate::domain::a003_customer::seed::seed_customers;

    fn customer(id: &str, name: &str) -> Customer {
        Customer {
            id: CustomerId::from_string(id),
            name: name.into(),
            email: format!("{}@example.com", id),
            ..Customer::default()
        }
    }

    #[test]
    fn test_add_and_lookup() {
        let mut store = EntityStore::new(vec![customer("c1", "Ann")]);
        store.add(customer("c2", "Ben")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_by_id(&CustomerId::from_string("c2")).unwrap().name, "Ben");
        assert!(store.get_by_id(&CustomerId::from_string("missing")).is_none());
    }

    #[test]
    fn test_add_duplicate_id_is_noop() {
        let mut store = EntityStore::new(seed_customers());
        let before = store.snapshot();
        let existing_id = before[0].id.clone();

        let err = store
            .add(customer(existing_id.as_str(), "Impostor"))
            .unwrap_err();

        assert!(matches!(err, StoreError::DuplicateId { .. }));
        assert_eq!(store.len(), before.len());
        assert_eq!(store.get_by_id(&existing_id).unwrap().name, before[0].name);
        assert!(Arc::ptr_eq(&before, &store.snapshot()));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut store = EntityStore::new(vec![customer("c1", "Ann"), customer("c2", "Ben")]);
        store.update(customer("c1", "Anne")).unwrap();
        let names: Vec<&str> = store.all().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Anne", "Ben"]);

        let err = store.update(customer("c9", "Nobody")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn test_delete_and_reset() {
        let mut store = EntityStore::new(vec![customer("c1", "Ann"), customer("c2", "Ben")]);
        let removed = store.delete(&CustomerId::from_string("c1")).unwrap();
        assert_eq!(removed.name, "Ann");
        assert_eq!(store.len(), 1);
        assert!(store.delete(&CustomerId::from_string("c1")).is_err());

        store.reset();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_snapshots_are_not_mutated() {
        let mut store = EntityStore::new(vec![customer("c1", "Ann")]);
        let before = store.snapshot();
        store.add(customer("c2", "Ben")).unwrap();
        store.update(customer("c1", "Anne")).unwrap();
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].name, "Ann");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_deleting_layout_keeps_its_plots() {
        let mut layouts = EntityStore::new(seed_layouts());
        let plots = EntityStore::new(seed_plots());
        let layout_id = layouts.all()[0].id.clone();

        layouts.delete(&layout_id).unwrap();

        let orphaned = plots.filter(|p| p.belongs_to(&layout_id));
        assert_eq!(orphaned.len(), 1);
        assert_eq!(
            layout_name(layouts.all(), orphaned[0].layout.as_ref()),
            "Unknown Layout"
        );
        assert_eq!(plots.len(), 5);
    }

    #[test]
    fn test_filter_keeps_store_order() {
        let store = EntityStore::new(vec![
            customer("c1", "Ann"),
            customer("c2", "Ben"),
            customer("c3", "Abe"),
        ]);
        let a_names: Vec<String> = store
            .filter(|c| c.name.starts_with('A'))
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(a_names, vec!["Ann", "Abe"]);
    }
}
