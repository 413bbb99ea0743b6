//! Form loader
//!
//! Catalog and availability are fetched in parallel and both must succeed.
//! A retry is simply another call to [`load`]: nothing from a previous
//! attempt is reused.

use crate::{ClientConfig, FormError, FormResult, HttpClient};
use shared::{AvailabilityMap, Catalog};

/// Read-only snapshot the form works against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub catalog: Catalog,
    pub availability: AvailabilityMap,
}

/// Fetch both documents; either failure fails the whole load
pub async fn load(client: &HttpClient, config: &ClientConfig) -> FormResult<FormData> {
    let fetched = tokio::try_join!(
        client.get_fresh::<Catalog>(&config.catalog_url),
        client.get_fresh::<AvailabilityMap>(&config.availability_url),
    );

    match fetched {
        Ok((catalog, availability)) => {
            tracing::info!(
                parks = catalog.parks.len(),
                styles = catalog.styles.len(),
                availability_updated = availability.updated_at.as_deref().unwrap_or("unknown"),
                "Order form loaded"
            );
            Ok(FormData {
                catalog,
                availability,
            })
        }
        Err(e) => {
            tracing::warn!(error = %e, "Order form load failed");
            Err(FormError::LoadFailed(e))
        }
    }
}
