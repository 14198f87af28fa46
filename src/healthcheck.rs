use std::time::Duration;

use thiserror::Error;

use crate::config::http_port_or_default;

const HEALTH_PATH: &str = "/v1/health";
const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Error type for healthcheck failures
#[derive(Error, Debug)]
pub enum HealthcheckError {
    #[error("Healthcheck failed: could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Healthcheck failed: request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Healthcheck failed: health endpoint returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Probe the local server on `HTTP_PORT` (default 8000)
pub async fn healthcheck() -> Result<(), HealthcheckError> {
    healthcheck_with_port(http_port_or_default()).await
}

/// Probe the local server on a specific port
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .map_err(HealthcheckError::Client)?;

    let url = format!("http://127.0.0.1:{port}{HEALTH_PATH}");
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|source| HealthcheckError::Request {
            url: url.clone(),
            source,
        })?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(HealthcheckError::Status(resp.status()))
    }
}
