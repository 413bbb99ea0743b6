//! Size codes
//!
//! Catalog feeds have shipped sizes both as the short codes below and as
//! arbitrary strings, so the enum keeps an `Other` escape hatch instead of
//! rejecting unknown values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sock size as it appears in catalog, availability and case-pack tables
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SizeCode {
    Infant,
    Toddler,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
    OneSize,
    /// Free-form size string, kept verbatim
    Other(String),
}

impl SizeCode {
    /// All known sizes in display order
    pub const KNOWN: [SizeCode; 8] = [
        SizeCode::Infant,
        SizeCode::Toddler,
        SizeCode::Small,
        SizeCode::Medium,
        SizeCode::Large,
        SizeCode::XLarge,
        SizeCode::XxLarge,
        SizeCode::OneSize,
    ];

    /// Stable short code used on the wire
    pub fn code(&self) -> &str {
        match self {
            Self::Infant => "I",
            Self::Toddler => "T",
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::XLarge => "XL",
            Self::XxLarge => "XXL",
            Self::OneSize => "ONESIZE",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &str {
        match self {
            Self::Infant => "Infant",
            Self::Toddler => "Toddler",
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::XLarge => "X-Large",
            Self::XxLarge => "XX-Large",
            Self::OneSize => "One Size",
            Self::Other(raw) => raw,
        }
    }

    /// Parse a size string
    ///
    /// Only the exact short codes map to known sizes. Anything else,
    /// including labels and other casings, is kept verbatim as `Other`, so
    /// availability and case-pack keys never match loosely.
    pub fn parse(raw: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|size| size.code() == raw)
            .unwrap_or_else(|| Self::Other(raw.to_string()))
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for SizeCode {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for SizeCode {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<SizeCode> for String {
    fn from(size: SizeCode) -> Self {
        match size {
            SizeCode::Other(raw) => raw,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for SizeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
