//! Catalog Model
//!
//! Parks, styles and case-pack tables as published in `catalog.json`.

use super::{Park, SizeCode, SockStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name of the catalog-wide case-pack table
pub const DEFAULT_MAIN: &str = "defaultMain";

/// Size → pairs per case
pub type CasePackTable = BTreeMap<SizeCode, u32>;

/// Per-style case-pack reference
///
/// On the wire this is either a string naming a catalog-wide table or an
/// inline size table. Strings are tried first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CasePackRef {
    /// Named table, e.g. `"defaultMain"`
    Alias(String),
    /// Authoritative inline table; missing sizes are not offered
    Table(CasePackTable),
}

/// Case-pack rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePacks {
    #[serde(default)]
    pub default_main: CasePackTable,
    #[serde(default)]
    pub by_style: BTreeMap<String, CasePackRef>,
}

impl CasePacks {
    /// Catalog-wide table by name
    pub fn named_table(&self, name: &str) -> Option<&CasePackTable> {
        (name == DEFAULT_MAIN).then_some(&self.default_main)
    }
}

/// Catalog document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub parks: Vec<Park>,
    #[serde(default)]
    pub styles: Vec<SockStyle>,
    /// Absent in older feeds; every size then resolves to zero pairs
    #[serde(default)]
    pub case_packs: CasePacks,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn park(&self, id: &str) -> Option<&Park> {
        self.parks.iter().find(|p| p.id == id)
    }

    pub fn style(&self, id: &str) -> Option<&SockStyle> {
        self.styles.iter().find(|s| s.id == id)
    }

    /// Park an order goes to
    ///
    /// An explicit selection must exist in the catalog. With no selection
    /// the first park in catalog order is the default.
    pub fn resolve_park(&self, selected: Option<&str>) -> Option<&Park> {
        match selected {
            Some(id) => self.park(id),
            None => self.parks.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "parks": [
            {"id": "oak", "name": "Oak Hollow", "city": "Austin", "state": "TX"},
            {"id": "pine", "name": "Pine Ridge"}
        ],
        "styles": [
            {"id": "bliss", "name": "Bliss", "sizes": ["S", "M", "L"], "image": "https://cdn.example/bliss.png"},
            {"id": "partybag", "name": "Party Bag", "sizes": ["ONESIZE"]}
        ],
        "casePacks": {
            "defaultMain": {"S": 6, "M": 6, "L": 4},
            "byStyle": {
                "bliss": "defaultMain",
                "partybag": {"ONESIZE": 12}
            }
        }
    }"#;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.parks.len(), 2);
        assert_eq!(catalog.styles[0].sizes, vec![SizeCode::Small, SizeCode::Medium, SizeCode::Large]);
        assert_eq!(
            catalog.case_packs.by_style.get("bliss"),
            Some(&CasePackRef::Alias(DEFAULT_MAIN.to_string()))
        );
        match catalog.case_packs.by_style.get("partybag") {
            Some(CasePackRef::Table(table)) => assert_eq!(table.get(&SizeCode::OneSize), Some(&12)),
            other => panic!("expected inline table, got {:?}", other),
        }
    }

    #[test]
    fn test_case_packs_optional() {
        let catalog = Catalog::from_json(r#"{"parks": [], "styles": []}"#).unwrap();
        assert!(catalog.case_packs.default_main.is_empty());
        assert!(catalog.case_packs.by_style.is_empty());
    }

    #[test]
    fn test_negative_case_pack_rejected() {
        let result = Catalog::from_json(r#"{"casePacks": {"defaultMain": {"S": -1}}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_park() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.resolve_park(Some("pine")).map(|p| p.id.as_str()), Some("pine"));
        assert_eq!(catalog.resolve_park(None).map(|p| p.id.as_str()), Some("oak"));
        assert!(catalog.resolve_park(Some("gone")).is_none());
        assert!(Catalog::default().resolve_park(None).is_none());
    }
}
