//! Entity records and the payloads that create and update them.
//!
//! Each entity kind comes in three shapes:
//! - the stored record (`Product`, `User`), returned by every read
//! - a create payload with required fields and serde defaults
//! - an update payload where every field is optional
//!
//! The [`Entity`] trait ties the three together so a single store
//! implementation can serve both kinds.

pub mod product;
pub mod user;

use chrono::{DateTime, Utc};

pub use product::{Product, ProductCreate, ProductUpdate};
pub use user::{User, UserCreate, UserUpdate};

/// A record kept by the entity store.
pub trait Entity: Clone {
    /// Type-safe identifier for this kind.
    type Id: Copy + Ord + From<i64> + core::fmt::Display;
    /// Payload accepted on creation.
    type Create;
    /// Sparse payload accepted on update.
    type Update;

    /// Human-readable kind name, used in "not found" messages and logs.
    const KIND: &'static str;

    /// Build a record from a create payload and store-assigned metadata.
    fn from_create(id: Self::Id, data: Self::Create, created_at: DateTime<Utc>) -> Self;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// Overwrite the fields present in `update`, leaving the rest untouched.
    ///
    /// `id` and `created_at` are never part of an update payload.
    fn apply(&mut self, update: Self::Update);
}
