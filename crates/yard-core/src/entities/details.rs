use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CatalogRecord, Starship};
use crate::attribute::Attribute;

/// Full descriptive record for one starship, fetched on demand.
///
/// Descriptive fields keep the catalog's raw text; the `unknown` sentinel is
/// decoded into [`Attribute::Unknown`]. Fields the catalog omits default to
/// `Unknown` (or empty lists) rather than failing the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarshipDetails {
    /// Not part of the detail payload's `properties`; filled in by the client
    /// from the request when absent.
    #[serde(default)]
    pub uid: String,
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub model: Attribute,
    #[serde(default)]
    pub manufacturer: Attribute,
    #[serde(default)]
    pub crew: Attribute,
    #[serde(default)]
    pub passengers: Attribute,
    #[serde(default)]
    pub cost_in_credits: Attribute,
    #[serde(default)]
    pub length: Attribute,
    #[serde(default)]
    pub max_atmosphering_speed: Attribute,
    #[serde(default)]
    pub hyperdrive_rating: Attribute,
    #[serde(default, rename = "MGLT")]
    pub mglt: Attribute,
    #[serde(default)]
    pub cargo_capacity: Attribute,
    #[serde(default)]
    pub consumables: Attribute,
    #[serde(default, alias = "vehicle_class")]
    pub starship_class: Attribute,
    #[serde(default)]
    pub pilots: Vec<String>,
    #[serde(default)]
    pub films: Vec<String>,
    /// Raw catalog timestamp; see [`StarshipDetails::created_at`].
    #[serde(default)]
    pub created: Attribute,
    #[serde(default)]
    pub edited: Attribute,
}

impl StarshipDetails {
    /// Project the detail record down to its listing summary.
    #[must_use]
    pub fn summary(&self) -> Starship {
        Starship {
            uid: self.uid.clone(),
            name: self.name.clone(),
            url: self.url.clone(),
        }
    }

    /// `created` parsed as RFC 3339, if it is known and well-formed.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created)
    }

    /// `edited` parsed as RFC 3339, if it is known and well-formed.
    #[must_use]
    pub fn edited_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.edited)
    }
}

fn parse_timestamp(attribute: &Attribute) -> Option<DateTime<Utc>> {
    let raw = attribute.known()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|at| at.with_timezone(&Utc))
}

impl CatalogRecord for StarshipDetails {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn name(&self) -> &str {
        &self.name
    }
}
