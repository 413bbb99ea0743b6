//! Order module
//!
//! - Case-pack resolution: pairs per case for a style/size
//! - Quantity selection: the sparse cases map edited by the form
//! - Builder: turns a selection into a validated payload

pub mod builder;
pub mod case_pack;
pub mod selection;
pub mod types;

// Re-exports
pub use builder::{build, can_submit};
pub use selection::{QuantitySelection, is_orderable};
pub use types::{OrderLine, OrderPayload};
