//! Order payload types

use crate::models::{Park, SizeCode};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One submittable line: a style/size and how many cases of it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub style_id: String,
    pub style_name: String,
    pub size: SizeCode,
    /// Always > 0
    pub cases: u32,
    /// Always > 0
    pub pairs_per_case: u32,
}

impl OrderLine {
    pub fn total_pairs(&self) -> u64 {
        u64::from(self.cases) * u64::from(self.pairs_per_case)
    }
}

impl Serialize for OrderLine {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut line = serializer.serialize_struct("OrderLine", 6)?;
        line.serialize_field("styleId", &self.style_id)?;
        line.serialize_field("styleName", &self.style_name)?;
        line.serialize_field("size", &self.size)?;
        line.serialize_field("cases", &self.cases)?;
        line.serialize_field("pairsPerCase", &self.pairs_per_case)?;
        line.serialize_field("totalPairs", &self.total_pairs())?;
        line.end()
    }
}

/// Validated order ready for the webhook
///
/// Totals are derived from the lines and written out at serialization time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderPayload {
    pub submitted_at: DateTime<Utc>,
    pub park: Park,
    /// Catalog order, never empty
    pub lines: Vec<OrderLine>,
    /// Trimmed, `None` when blank
    pub notes: Option<String>,
}

impl OrderPayload {
    pub fn total_pairs(&self) -> u64 {
        self.lines.iter().map(OrderLine::total_pairs).sum()
    }

    pub fn total_cases(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.cases)).sum()
    }
}

impl Serialize for OrderPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.notes.is_some() { 5 } else { 4 };
        let mut payload = serializer.serialize_struct("OrderPayload", fields)?;
        payload.serialize_field(
            "submittedAt",
            &self.submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        payload.serialize_field("park", &self.park)?;
        payload.serialize_field("lines", &self.lines)?;
        match &self.notes {
            Some(notes) => payload.serialize_field("notes", notes)?,
            None => payload.skip_field("notes")?,
        }
        payload.serialize_field("totalPairs", &self.total_pairs())?;
        payload.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn line(style_id: &str, size: SizeCode, cases: u32, pairs_per_case: u32) -> OrderLine {
        OrderLine {
            style_id: style_id.to_string(),
            style_name: style_id.to_uppercase(),
            size,
            cases,
            pairs_per_case,
        }
    }

    fn payload(notes: Option<&str>) -> OrderPayload {
        OrderPayload {
            submitted_at: Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap(),
            park: Park {
                id: "oak".into(),
                name: "Oak Hollow".into(),
                city: None,
                state: Some("TX".into()),
            },
            lines: vec![
                line("bliss", SizeCode::Small, 3, 6),
                line("partybag", SizeCode::OneSize, 1, 12),
            ],
            notes: notes.map(Into::into),
        }
    }

    #[test]
    fn test_totals_are_derived() {
        let payload = payload(None);
        assert_eq!(payload.lines[0].total_pairs(), 18);
        assert_eq!(payload.total_pairs(), 30);
        assert_eq!(payload.total_cases(), 4);
    }

    #[test]
    fn test_wire_shape() {
        let value = serde_json::to_value(payload(Some("Back gate"))).unwrap();
        assert_eq!(
            value,
            json!({
                "submittedAt": "2026-10-18T12:00:00.000Z",
                "park": {"id": "oak", "name": "Oak Hollow", "state": "TX"},
                "lines": [
                    {"styleId": "bliss", "styleName": "BLISS", "size": "S",
                     "cases": 3, "pairsPerCase": 6, "totalPairs": 18},
                    {"styleId": "partybag", "styleName": "PARTYBAG", "size": "ONESIZE",
                     "cases": 1, "pairsPerCase": 12, "totalPairs": 12}
                ],
                "notes": "Back gate",
                "totalPairs": 30
            })
        );
    }

    #[test]
    fn test_notes_omitted_when_none() {
        let value = serde_json::to_value(payload(None)).unwrap();
        assert!(value.get("notes").is_none());
    }
}
