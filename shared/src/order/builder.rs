//! Order payload builder
//!
//! [`build`] is the only place that decides whether an order can be sent.
//! Front ends call it on every render to enable the submit action and again
//! on submit to get the payload, so the two can never disagree.

use super::case_pack;
use super::selection::QuantitySelection;
use super::types::{OrderLine, OrderPayload};
use crate::error::BuildError;
use crate::models::{AvailabilityMap, Catalog, Park};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Build a validated order from the current form state
///
/// Lines follow catalog style/size order. Availability and case packs are
/// checked again here; stale selections are dropped, not trusted. A
/// style/size listed more than once in the catalog yields a single line.
pub fn build(
    park: Option<&Park>,
    selection: &QuantitySelection,
    notes: &str,
    catalog: &Catalog,
    availability: &AvailabilityMap,
    now: DateTime<Utc>,
) -> Result<OrderPayload, BuildError> {
    let park = park.ok_or(BuildError::NoParkSelected)?;

    let mut lines = Vec::new();
    let mut emitted = HashSet::new();
    for style in &catalog.styles {
        for size in &style.sizes {
            if !emitted.insert((style.id.as_str(), size)) {
                continue;
            }
            let cases = selection.quantity(&style.id, size);
            if cases == 0 {
                continue;
            }
            if !availability.is_available(&style.id, size) {
                tracing::debug!(style = %style.id, size = %size, cases, "Dropping unavailable line");
                continue;
            }
            let pairs_per_case = case_pack::resolve(style, size, catalog);
            if pairs_per_case == 0 {
                tracing::debug!(style = %style.id, size = %size, cases, "Dropping line without case pack");
                continue;
            }
            lines.push(OrderLine {
                style_id: style.id.clone(),
                style_name: style.name.clone(),
                size: size.clone(),
                cases,
                pairs_per_case,
            });
        }
    }

    if lines.is_empty() {
        return Err(BuildError::NoSubmittableLines);
    }

    let notes = notes.trim();
    Ok(OrderPayload {
        submitted_at: now,
        park: park.clone(),
        lines,
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    })
}

/// Submit-eligibility; true exactly when [`build`] succeeds
pub fn can_submit(
    park: Option<&Park>,
    selection: &QuantitySelection,
    catalog: &Catalog,
    availability: &AvailabilityMap,
    now: DateTime<Utc>,
) -> bool {
    build(park, selection, "", catalog, availability, now).is_ok()
}
