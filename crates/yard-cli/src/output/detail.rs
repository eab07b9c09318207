//! Display rows for a detail record.

use yard_core::StarshipDetails;
use yard_core::format::{
    capitalize_first, format_attribute, format_crew, format_hyperdrive_rating,
    format_manufacturer, truncate_text,
};

const MAX_TEXT_LEN: usize = 48;

/// Labelled, display-formatted fields in comparison order.
#[must_use]
pub fn detail_fields(details: &StarshipDetails) -> Vec<(&'static str, String)> {
    vec![
        ("uid", details.uid.clone()),
        ("model", truncate_text(&format_attribute(&details.model), MAX_TEXT_LEN)),
        (
            "manufacturer",
            truncate_text(&format_manufacturer(&details.manufacturer), MAX_TEXT_LEN),
        ),
        ("class", capitalize_first(&format_attribute(&details.starship_class))),
        ("crew", format_crew(&details.crew)),
        ("passengers", format_attribute(&details.passengers)),
        ("cost (credits)", format_attribute(&details.cost_in_credits)),
        ("length", format_attribute(&details.length)),
        ("max speed", format_attribute(&details.max_atmosphering_speed)),
        ("hyperdrive", format_hyperdrive_rating(&details.hyperdrive_rating)),
        ("MGLT", format_attribute(&details.mglt)),
        ("cargo", format_attribute(&details.cargo_capacity)),
        ("consumables", format_attribute(&details.consumables)),
        ("pilots", details.pilots.len().to_string()),
        ("films", details.films.len().to_string()),
        (
            "edited",
            details
                .edited_at()
                .map_or_else(|| "Unknown".to_string(), |at| at.format("%Y-%m-%d").to_string()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn falcon() -> StarshipDetails {
        let mut details: StarshipDetails = serde_json::from_value(serde_json::json!({
            "name": "Millennium Falcon",
            "crew": "0",
            "hyperdrive_rating": "unknown",
            "starship_class": "light freighter",
            "pilots": ["https://www.swapi.tech/api/people/13"],
            "edited": "2014-12-20T21:23:49.880000Z"
        }))
        .unwrap();
        details.uid = "10".to_string();
        details
    }

    #[test]
    fn fields_use_presentation_formatting() {
        let fields = detail_fields(&falcon());
        let get = |label: &str| {
            fields
                .iter()
                .find(|(name, _)| *name == label)
                .map(|(_, value)| value.as_str())
        };

        assert_eq!(get("uid"), Some("10"));
        assert_eq!(get("crew"), Some("Droid-operated"));
        assert_eq!(get("hyperdrive"), Some("Unknown"));
        assert_eq!(get("manufacturer"), Some("Unknown"));
        assert_eq!(get("class"), Some("Light freighter"));
        assert_eq!(get("pilots"), Some("1"));
        assert_eq!(get("edited"), Some("2014-12-20"));
    }
}
