//! Admin GraphQL client for review storage.
//!
//! Reviews live in one JSON metafield per product (namespace
//! [`REVIEWS_NAMESPACE`], key [`REVIEWS_KEY`]). [`AdminClient`] wraps the
//! shop's Admin GraphQL endpoint and implements
//! [`revdock_core::ReviewStore`], so the import, export, and single-review
//! paths all commit through it.

pub mod client;
pub mod error;
pub mod gql;
pub mod store_impl;
pub mod types;

pub use client::AdminClient;
pub use error::AdminError;
pub use gql::{REVIEWS_KEY, REVIEWS_NAMESPACE};
pub use types::{MetafieldDefinitionSummary, PageCursors, ProductListing, ProductsPage};
