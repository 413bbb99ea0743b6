//! Sock Client - loads the order form and submits orders
//!
//! Fetches the catalog and availability documents, keeps the form session
//! state, and posts built orders to the webhook.

pub mod config;
pub mod error;
pub mod http;
pub mod loader;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, FormError, FormResult};
pub use http::HttpClient;
pub use loader::{FormData, load};
pub use session::{OrderSession, PendingSubmit};

// Re-export shared types for convenience
pub use shared::{AvailabilityMap, Catalog, OrderPayload, Park, QuantitySelection, SizeCode};
