//! Case-pack resolution
//!
//! Most styles share the catalog-wide `defaultMain` table. A style may point
//! at it by name or carry its own table; an own table is authoritative, so a
//! size missing from it is not offered at all.

use crate::models::{CasePackRef, Catalog, SizeCode, SockStyle};

/// Pairs per case for `size` of `style`; 0 means not orderable
pub fn resolve(style: &SockStyle, size: &SizeCode, catalog: &Catalog) -> u32 {
    let packs = &catalog.case_packs;
    let table = match packs.by_style.get(&style.id) {
        Some(CasePackRef::Table(table)) => table,
        Some(CasePackRef::Alias(name)) => packs.named_table(name).unwrap_or_else(|| {
            // Unknown aliases fall back leniently.
            tracing::trace!(style = %style.id, alias = %name, "Unknown case-pack alias, using defaultMain");
            &packs.default_main
        }),
        None => &packs.default_main,
    };
    table.get(size).copied().unwrap_or(0)
}
