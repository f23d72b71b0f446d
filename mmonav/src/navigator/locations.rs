//! Saved target locations.
//!
//! A location pairs a free-form coordinate string with an optional name.
//! Lookup compares scrubbed coordinates, so `"10,20,30"` and `"10 20 30"`
//! refer to the same saved spot. Persistence of the list is the settings
//! layer's business; these are plain serializable values.

use serde::{Deserialize, Serialize};

use crate::scrub;

/// A named (or unnamed) saved location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationItem {
    /// Optional display name; unnamed locations show their coordinates.
    pub name: Option<String>,
    /// Coordinate text as entered by the player.
    pub coordinates: String,
}

impl LocationItem {
    pub fn new(name: Option<String>, coordinates: impl Into<String>) -> Self {
        Self {
            name,
            coordinates: coordinates.into(),
        }
    }

    /// Name if present, otherwise the coordinate text.
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.coordinates,
        }
    }

    /// Canonical scrubbed form of the coordinates, used for equality.
    pub fn scrubbed(&self) -> String {
        scrub::scrub_entry(&self.coordinates)
    }
}

/// Find the saved location a target entry refers to, matching either the
/// display name verbatim or the scrubbed coordinates.
pub fn find_location<'a>(locations: &'a [LocationItem], entry: &str) -> Option<&'a LocationItem> {
    let scrubbed = scrub::scrub_entry(entry);
    locations
        .iter()
        .find(|l| l.display_name() == entry || l.scrubbed() == scrubbed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<LocationItem> {
        vec![
            LocationItem::new(Some("Bank".to_string()), "100, 200, 30"),
            LocationItem::new(None, "5 5"),
        ]
    }

    #[test]
    fn test_display_name_falls_back_to_coordinates() {
        let locations = sample_locations();
        assert_eq!(locations[0].display_name(), "Bank");
        assert_eq!(locations[1].display_name(), "5 5");
    }

    #[test]
    fn test_blank_name_falls_back_to_coordinates() {
        let item = LocationItem::new(Some("   ".to_string()), "1 2");
        assert_eq!(item.display_name(), "1 2");
    }

    #[test]
    fn test_find_by_display_name() {
        let locations = sample_locations();
        let found = find_location(&locations, "Bank").unwrap();
        assert_eq!(found.coordinates, "100, 200, 30");
    }

    #[test]
    fn test_find_by_scrubbed_coordinates() {
        let locations = sample_locations();
        // Different separators, same spot.
        let found = find_location(&locations, "100 200 30").unwrap();
        assert_eq!(found.display_name(), "Bank");
    }

    #[test]
    fn test_find_misses_unknown_entry() {
        let locations = sample_locations();
        assert!(find_location(&locations, "999 999").is_none());
        assert!(find_location(&locations, "Harbor").is_none());
    }
}
