//! HTTP client for the static JSON feeds and the order webhook

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};

/// Query parameter used to defeat intermediary caches
pub const CACHE_BUST_PARAM: &str = "_ts";

static FETCH_SEQ: AtomicU64 = AtomicU64::new(0);

/// Milliseconds plus a process-wide counter, so fetches issued within the
/// same millisecond still get different URLs
fn cache_bust_stamp() -> String {
    let seq = FETCH_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", chrono::Utc::now().timestamp_millis(), seq)
}

/// HTTP client for fetching documents and posting orders
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET a JSON document, bypassing every HTTP cache on the way
    ///
    /// The feeds are edited in place, so each request carries a unique
    /// query parameter plus no-cache headers.
    pub async fn get_fresh<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let stamp = cache_bust_stamp();
        let response = self
            .client
            .get(url)
            .query(&[(CACHE_BUST_PARAM, stamp.as_str())])
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// POST a JSON body once; any 2xx is success and the body is ignored
    pub async fn post_json<B: Serialize + ?Sized>(&self, url: &str, body: &B) -> ClientResult<()> {
        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(())
    }
}
