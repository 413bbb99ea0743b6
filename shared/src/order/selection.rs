//! Quantity selection
//!
//! Sparse style → size → cases map owned by the form session. Zero is never
//! stored, so "anything selected" is just a non-emptiness check.

use super::case_pack;
use crate::models::{AvailabilityMap, Catalog, SizeCode, SockStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantitySelection {
    entries: BTreeMap<String, BTreeMap<SizeCode, u32>>,
}

impl QuantitySelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the case count for a style/size
    ///
    /// Unavailable sizes are left untouched whatever the value. Negative
    /// values clamp to zero, and zero removes the entry.
    pub fn set_quantity(
        &mut self,
        availability: &AvailabilityMap,
        style_id: &str,
        size: &SizeCode,
        new_value: i64,
    ) {
        if !availability.is_available(style_id, size) {
            tracing::debug!(style = %style_id, size = %size, "Ignoring quantity change for unavailable size");
            return;
        }

        let cases = u32::try_from(new_value.max(0)).unwrap_or(u32::MAX);
        if cases == 0 {
            self.remove(style_id, size);
        } else {
            self.entries
                .entry(style_id.to_string())
                .or_default()
                .insert(size.clone(), cases);
        }
    }

    /// Stepper +/- built on [`Self::set_quantity`]
    pub fn step(&mut self, availability: &AvailabilityMap, style_id: &str, size: &SizeCode, delta: i64) {
        let current = i64::from(self.quantity(style_id, size));
        self.set_quantity(availability, style_id, size, current.saturating_add(delta));
    }

    pub fn quantity(&self, style_id: &str, size: &SizeCode) -> u32 {
        self.entries
            .get(style_id)
            .and_then(|sizes| sizes.get(size))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn remove(&mut self, style_id: &str, size: &SizeCode) {
        if let Some(sizes) = self.entries.get_mut(style_id) {
            sizes.remove(size);
            if sizes.is_empty() {
                self.entries.remove(style_id);
            }
        }
    }
}

/// Whether the stepper for a style/size should be enabled
pub fn is_orderable(
    catalog: &Catalog,
    availability: &AvailabilityMap,
    style: &SockStyle,
    size: &SizeCode,
) -> bool {
    availability.is_available(&style.id, size) && case_pack::resolve(style, size, catalog) > 0
}
