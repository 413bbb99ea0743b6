//! Availability Model
//!
//! Closed allow-list: the feed only ever turns sizes on. Anything not marked
//! `true`, including unknown styles and sizes, is unavailable.

use super::{Catalog, SizeCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Style id → size → available
pub type AvailabilityOverrides = BTreeMap<String, BTreeMap<SizeCode, bool>>;

/// Availability document (`availability.json`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub styles: AvailabilityOverrides,
}

impl AvailabilityMap {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_available(&self, style_id: &str, size: &SizeCode) -> bool {
        self.styles
            .get(style_id)
            .and_then(|sizes| sizes.get(size))
            .copied()
            .unwrap_or(false)
    }

    /// Every size every catalog style declares, marked available
    pub fn seed_from_catalog(catalog: &Catalog) -> Self {
        let styles = catalog
            .styles
            .iter()
            .map(|style| {
                let sizes: BTreeMap<SizeCode, bool> =
                    style.sizes.iter().map(|size| (size.clone(), true)).collect();
                (style.id.clone(), sizes)
            })
            .collect();
        Self {
            updated_at: None,
            styles,
        }
    }

    /// Merge overrides in place; later values win
    pub fn apply_overrides(&mut self, overrides: &AvailabilityOverrides) {
        for (style_id, sizes) in overrides {
            let entry = self.styles.entry(style_id.clone()).or_default();
            for (size, available) in sizes {
                entry.insert(size.clone(), *available);
            }
        }
    }

    pub fn stamp(&mut self, now: DateTime<Utc>) {
        self.updated_at = Some(now.format("%Y-%m-%dT%H:%M:%SZ").to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn availability() -> AvailabilityMap {
        AvailabilityMap::from_json(
            r#"{"styles": {"sapphire": {"I": true, "T": false, "L": true}}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_is_available() {
        let map = availability();
        assert!(map.is_available("sapphire", &SizeCode::Infant));
        assert!(!map.is_available("sapphire", &SizeCode::Toddler));
    }

    #[test]
    fn test_missing_entries_default_false() {
        let map = availability();
        // size absent within a present style
        assert!(!map.is_available("sapphire", &SizeCode::Medium));
        // style absent
        assert!(!map.is_available("onyx", &SizeCode::Infant));
        assert!(!map.is_available("sapphire", &SizeCode::Other("Kids".into())));
        assert!(!AvailabilityMap::default().is_available("any", &SizeCode::Small));
    }

    #[test]
    fn test_keys_match_exact_codes_only() {
        let map = AvailabilityMap::from_json(
            r#"{"styles": {"bliss": {"small": true, "Medium": true, "l": true}}}"#,
        )
        .unwrap();
        assert!(!map.is_available("bliss", &SizeCode::Small));
        assert!(!map.is_available("bliss", &SizeCode::Medium));
        assert!(!map.is_available("bliss", &SizeCode::Large));
        assert!(map.is_available("bliss", &SizeCode::Other("small".into())));
    }

    #[test]
    fn test_seed_and_override() {
        let catalog = Catalog::from_json(
            r#"{"styles": [
                {"id": "sapphire", "name": "Sapphire", "sizes": ["I", "T", "S"]},
                {"id": "purple", "name": "Purple", "sizes": ["M"]}
            ]}"#,
        )
        .unwrap();
        let mut map = AvailabilityMap::seed_from_catalog(&catalog);
        assert!(map.is_available("sapphire", &SizeCode::Small));
        assert!(map.is_available("purple", &SizeCode::Medium));

        let first: AvailabilityOverrides =
            serde_json::from_str(r#"{"sapphire": {"T": false, "S": false}, "partybag": {"ONESIZE": true}}"#)
                .unwrap();
        let second: AvailabilityOverrides =
            serde_json::from_str(r#"{"sapphire": {"S": true}}"#).unwrap();
        map.apply_overrides(&first);
        map.apply_overrides(&second);

        assert!(map.is_available("sapphire", &SizeCode::Infant));
        assert!(!map.is_available("sapphire", &SizeCode::Toddler));
        assert!(map.is_available("sapphire", &SizeCode::Small));
        assert!(map.is_available("partybag", &SizeCode::OneSize));
    }

    #[test]
    fn test_stamp_format() {
        let mut map = AvailabilityMap::default();
        map.stamp(Utc.with_ymd_and_hms(2026, 10, 18, 9, 5, 0).unwrap());
        assert_eq!(map.updated_at.as_deref(), Some("2026-10-18T09:05:00Z"));
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json["updatedAt"], "2026-10-18T09:05:00Z");
    }
}
