//! In-memory entity store.
//!
//! # Collections
//!
//! - `products` - seeded with three sample products unless disabled
//! - `users` - starts empty
//!
//! Each collection owns its own identifier counter, so product and user ids
//! are allocated independently. Nothing is persisted; a restart starts over.
//!
//! # Concurrency
//!
//! The store itself is plain data with `&mut self` mutators. `AppState`
//! wraps the whole store in one mutex so every operation (including id
//! allocation) is serialized across concurrent requests.

mod collection;
pub mod seed;

pub use collection::Collection;

use product_crud_core::{Product, User};

/// Process-lifetime keeper of every product and user record.
#[derive(Debug)]
pub struct Store {
    products: Collection<Product>,
    users: Collection<User>,
}

impl Store {
    /// Create a store seeded with the sample products.
    ///
    /// Use [`Store::empty`] for an unseeded store.
    #[must_use]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let mut store = Self::empty();
        seed::sample_products(&mut store.products);
        store
    }

    /// Create a store with no records at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            products: Collection::default(),
            users: Collection::default(),
        }
    }

    /// Product collection.
    #[must_use]
    pub const fn products(&self) -> &Collection<Product> {
        &self.products
    }

    /// Mutable product collection.
    pub const fn products_mut(&mut self) -> &mut Collection<Product> {
        &mut self.products
    }

    /// User collection.
    #[must_use]
    pub const fn users(&self) -> &Collection<User> {
        &self.users
    }

    /// Mutable user collection.
    pub const fn users_mut(&mut self) -> &mut Collection<User> {
        &mut self.users
    }
}
