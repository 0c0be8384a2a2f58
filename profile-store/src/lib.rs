//! # Profile Store
//!
//! `profile-store` owns the directory's state: the insertion-ordered
//! collection of [`Profile`](data_profile::Profile) records and the single
//! selection. All mutation flows through [`Directory`]'s `&mut` operations,
//! which keeps writers serialized by construction; reads hand out shared
//! references into the collection.
//!
//! The pure query operations (free-text search, facet filtering) live in
//! [`query`] and are also reachable through the store.

mod directory;
pub mod query;

pub use directory::{Committed, Directory};
pub use query::ProfileFilter;
