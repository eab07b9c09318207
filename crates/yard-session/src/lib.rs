//! # yard-session
//!
//! The data layer as seen by presentation code.
//!
//! A [`Session`] ties a [`CatalogSource`](yard_catalog::CatalogSource) to
//! per-category query caches and a comparison set:
//! - [`Session::full_collection`], [`Session::detail`], [`Session::details`]
//!   are cache-backed and deduplicated
//! - [`Session::query_view`] slices the cached collection synchronously
//! - `compare_*` mutate the session's [`ComparisonSet`](yard_core::ComparisonSet)

mod error;
mod session;
mod settings;

pub use error::SessionError;
pub use session::{Session, SharedComparison};
pub use settings::SessionSettings;
