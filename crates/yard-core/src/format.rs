//! Presentation-time formatting.
//!
//! This is the only place the `unknown` sentinel is rewritten for display.

use crate::attribute::Attribute;

#[must_use]
pub fn format_crew(crew: &Attribute) -> String {
    match crew.known() {
        None => "Unknown".to_string(),
        Some("0") => "Droid-operated".to_string(),
        Some(value) => value.to_string(),
    }
}

#[must_use]
pub fn format_hyperdrive_rating(rating: &Attribute) -> String {
    rating.known().unwrap_or("Unknown").to_string()
}

#[must_use]
pub fn format_manufacturer(manufacturer: &Attribute) -> String {
    match manufacturer.known() {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => "Unknown".to_string(),
    }
}

/// Generic fallback for any other descriptive field.
#[must_use]
pub fn format_attribute(attribute: &Attribute) -> String {
    attribute.known().unwrap_or("Unknown").to_string()
}

/// Cut `text` to `max_len` characters, appending `...` when shortened.
#[must_use]
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_len).collect();
    out.push_str("...");
    out
}

#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Attribute::Unknown, "Unknown")]
    #[case(Attribute::from_raw("0"), "Droid-operated")]
    #[case(Attribute::from_raw("30-165"), "30-165")]
    fn crew(#[case] input: Attribute, #[case] expected: &str) {
        assert_eq!(format_crew(&input), expected);
    }

    #[test]
    fn hyperdrive_and_manufacturer() {
        assert_eq!(format_hyperdrive_rating(&Attribute::Unknown), "Unknown");
        assert_eq!(format_hyperdrive_rating(&Attribute::from_raw("2.0")), "2.0");
        assert_eq!(format_manufacturer(&Attribute::from_raw("")), "Unknown");
        assert_eq!(
            format_manufacturer(&Attribute::from_raw("Kuat Drive Yards")),
            "Kuat Drive Yards"
        );
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate_text("Executor", 20), "Executor");
        assert_eq!(truncate_text("Sentinel-class landing craft", 8), "Sentinel...");
    }

    #[test]
    fn capitalization() {
        assert_eq!(capitalize_first("starfighter"), "Starfighter");
        assert_eq!(capitalize_first(""), "");
    }
}
