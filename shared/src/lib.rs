//! Shared types for the sock ordering form
//!
//! Catalog and availability models, case-pack resolution, quantity
//! selection and the order builder. Everything here is pure: inputs are
//! passed in explicitly and nothing performs I/O.

pub mod error;
pub mod models;
pub mod order;

// Re-exports
pub use error::{BuildError, ErrorCategory, ErrorCode};
pub use models::{AvailabilityMap, Catalog, Park, SizeCode, SockStyle};
pub use order::{OrderLine, OrderPayload, QuantitySelection};
