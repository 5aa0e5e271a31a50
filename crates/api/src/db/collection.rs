//! Generic keyed collection backing each entity kind.

use std::collections::BTreeMap;
use std::fmt;

use chrono::Utc;
use product_crud_core::Entity;

/// Records of one kind, keyed by id, plus the counter that issues ids.
///
/// Ids start at 1 and only ever increase, so iterating the map in key order
/// yields records in insertion order. Deleted ids are never reissued.
pub struct Collection<T: Entity> {
    records: BTreeMap<T::Id, T>,
    next_id: i64,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Entity> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("kind", &T::KIND)
            .field("len", &self.records.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<T: Entity> Collection<T> {
    /// Insert a new record, assigning the next id and the current time.
    ///
    /// Returns a copy of the stored record.
    pub fn create(&mut self, data: T::Create) -> T {
        let id: T::Id = self.next_id.into();
        self.next_id += 1;

        let record = T::from_create(id, data, Utc::now());
        self.records.insert(id, record.clone());

        tracing::debug!(kind = T::KIND, %id, "record created");
        record
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<T> {
        self.records.get(&id).cloned()
    }

    /// Apply a partial update to an existing record.
    ///
    /// Returns `None` if no record has this id.
    pub fn update(&mut self, id: T::Id, update: T::Update) -> Option<T> {
        let record = self.records.get_mut(&id)?;
        record.apply(update);

        tracing::debug!(kind = T::KIND, %id, "record updated");
        Some(record.clone())
    }

    /// Remove a record. Returns whether anything was removed.
    pub fn delete(&mut self, id: T::Id) -> bool {
        let removed = self.records.remove(&id).is_some();
        if removed {
            tracing::debug!(kind = T::KIND, %id, "record deleted");
        }
        removed
    }

    /// Number of records currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use product_crud_core::{
        Product, ProductCreate, ProductId, ProductUpdate, User, UserCreate, UserId,
    };

    use super::*;

    fn product(name: &str) -> ProductCreate {
        ProductCreate {
            name: name.to_owned(),
            description: "Test description".to_owned(),
            price: 25.0,
            category: "Test".to_owned(),
            tags: vec!["test".to_owned()],
            in_stock: true,
        }
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut products = Collection::<Product>::default();
        let first = products.create(product("A"));
        let second = products.create(product("B"));
        let third = products.create(product("C"));

        assert_eq!(first.id, ProductId::new(1));
        assert!(second.id > first.id);
        assert!(third.id > second.id);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut products = Collection::<Product>::default();
        let first = products.create(product("A"));
        let second = products.create(product("B"));
        assert!(products.delete(second.id));

        let third = products.create(product("C"));
        assert!(third.id > second.id);
        assert!(products.get(first.id).is_some());
    }

    #[test]
    fn test_list_all_keeps_insertion_order() {
        let mut products = Collection::<Product>::default();
        for name in ["first", "second", "third"] {
            products.create(product(name));
        }
        products.delete(ProductId::new(2));
        products.create(product("fourth"));

        let names: Vec<_> = products.list_all().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["first", "third", "fourth"]);
    }

    #[test]
    fn test_get_round_trips_create() {
        let mut products = Collection::<Product>::default();
        let created = products.create(product("Round Trip"));
        assert_eq!(products.get(created.id).unwrap(), created);
    }

    #[test]
    fn test_missing_ids() {
        let mut products = Collection::<Product>::default();
        products.create(product("A"));

        for raw in [0, -1, 999, 999_999_999] {
            let id = ProductId::new(raw);
            assert!(products.get(id).is_none());
            assert!(products.update(id, ProductUpdate::default()).is_none());
            assert!(!products.delete(id));
        }
    }

    #[test]
    fn test_update_keeps_id_and_created_at() {
        let mut products = Collection::<Product>::default();
        let created = products.create(product("Original"));

        let updated = products
            .update(
                created.id,
                ProductUpdate {
                    name: Some("Updated".to_owned()),
                    ..ProductUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Updated");
        assert_eq!(products.get(created.id).unwrap(), updated);
    }

    #[test]
    fn test_returned_records_do_not_alias_store() {
        let mut products = Collection::<Product>::default();
        let mut created = products.create(product("Stable"));
        created.name = "Mutated locally".to_owned();

        assert_eq!(products.get(created.id).unwrap().name, "Stable");
    }

    #[test]
    fn test_delete_twice() {
        let mut users = Collection::<User>::default();
        let user = users.create(UserCreate {
            name: "User To Delete".to_owned(),
            email: "delete@example.com".to_owned(),
            password: "password123".to_owned(),
        });

        assert!(users.delete(user.id));
        assert!(!users.delete(user.id));
        assert!(users.get(UserId::new(1)).is_none());
    }
}
