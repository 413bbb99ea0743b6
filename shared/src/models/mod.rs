//! Data models
//!
//! Everything here is loaded once from static JSON and treated as read-only.

pub mod availability;
pub mod catalog;
pub mod park;
pub mod size;
pub mod style;

pub use availability::{AvailabilityMap, AvailabilityOverrides};
pub use catalog::{CasePackRef, CasePackTable, CasePacks, Catalog, DEFAULT_MAIN};
pub use park::Park;
pub use size::SizeCode;
pub use style::SockStyle;
