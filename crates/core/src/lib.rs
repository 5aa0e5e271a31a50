//! Product CRUD Core - Shared domain types.
//!
//! This crate provides the types shared by the API server and its tests:
//! - Type-safe entity identifiers
//! - `Product` and `User` records with their create/update payloads
//! - An `Email` newtype used by strict validation
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no locking. Storage and request handling live in `product-crud-api`.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs and emails
//! - [`models`] - Entity records and their create/update payloads

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
