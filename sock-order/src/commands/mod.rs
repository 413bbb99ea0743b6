pub mod availability;
pub mod catalog;
pub mod submit;

use anyhow::Result;
use sock_client::{ClientConfig, FormData, HttpClient};

/// Load config from the environment and fetch the form documents
pub(crate) async fn load_form() -> Result<(ClientConfig, HttpClient, FormData)> {
    let config = ClientConfig::from_env().map_err(config_error)?;
    let client = config.build_http_client()?;
    let data = sock_client::load(&client, &config)
        .await
        .map_err(|e| anyhow::anyhow!("{} ({e})", e.user_message()))?;
    Ok((config, client, data))
}

/// Attach the user-facing notice for errors that carry a code
pub(crate) fn config_error(e: sock_client::ClientError) -> anyhow::Error {
    match e.code() {
        Some(code) => anyhow::anyhow!("{} ({e})", code.message()),
        None => e.into(),
    }
}
