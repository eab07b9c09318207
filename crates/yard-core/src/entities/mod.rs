//! Starship entities as served by the catalog.

mod details;
mod starship;

pub use details::StarshipDetails;
pub use starship::Starship;

/// Anything the local view engine can search: records keyed by `uid` with a
/// display `name`.
pub trait CatalogRecord {
    fn uid(&self) -> &str;
    fn name(&self) -> &str;
}
