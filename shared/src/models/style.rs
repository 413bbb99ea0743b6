//! Sock Style Model

use super::SizeCode;
use serde::{Deserialize, Serialize};

/// Sock style entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SockStyle {
    pub id: String,
    pub name: String,
    /// Sizes offered, in display order
    #[serde(default)]
    pub sizes: Vec<SizeCode>,
    /// Product image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
