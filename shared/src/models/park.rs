//! Park Model

use serde::{Deserialize, Serialize};

/// Park (delivery destination) entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Park {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl Park {
    /// Picker label, e.g. `"Oak Hollow — Austin, TX"`
    pub fn display_name(&self) -> String {
        let place = match (self.city.as_deref(), self.state.as_deref()) {
            (Some(city), Some(state)) => format!("{city}, {state}"),
            (Some(city), None) => city.to_string(),
            (None, Some(state)) => state.to_string(),
            (None, None) => return self.name.clone(),
        };
        format!("{} — {}", self.name, place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park(city: Option<&str>, state: Option<&str>) -> Park {
        Park {
            id: "oak".into(),
            name: "Oak Hollow".into(),
            city: city.map(Into::into),
            state: state.map(Into::into),
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            park(Some("Austin"), Some("TX")).display_name(),
            "Oak Hollow — Austin, TX"
        );
        assert_eq!(park(None, Some("TX")).display_name(), "Oak Hollow — TX");
        assert_eq!(park(None, None).display_name(), "Oak Hollow");
    }

    #[test]
    fn test_optional_fields_omitted() {
        let json = serde_json::to_value(park(None, None)).unwrap();
        assert_eq!(json, serde_json::json!({"id": "oak", "name": "Oak Hollow"}));
    }
}
