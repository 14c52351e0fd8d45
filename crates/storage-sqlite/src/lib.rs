//! SQLite storage for newsbrief.
//!
//! Implements the core crate's [`ClusterStore`](newsbrief_core::ClusterStore)
//! and [`UserStore`](newsbrief_core::UserStore) seams on Diesel + SQLite.

pub mod db;
pub mod documents;
mod schema;

pub use documents::{SqliteDocumentStore, ARTICLES_COLLECTION};
