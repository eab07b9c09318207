//! # yard-core
//!
//! Core types and synchronous logic for Shipyard.
//!
//! This crate holds everything that never touches the network:
//! - Summary and detail starship entities, with the `unknown` sentinel decoded
//!   once into [`Attribute`]
//! - The local view engine that filters and paginates an in-memory collection
//! - URL-style round-tripping of the view query
//! - The bounded comparison set shared across views
//! - Presentation-time formatters

pub mod attribute;
pub mod compare;
pub mod entities;
pub mod errors;
pub mod format;
pub mod query_string;
pub mod view;

pub use attribute::Attribute;
pub use compare::{ComparisonSet, MAX_COMPARE};
pub use entities::{CatalogRecord, Starship, StarshipDetails};
pub use errors::CompareError;
pub use view::{ViewQuery, ViewResult, view};
