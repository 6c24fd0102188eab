//! Blocking HTTP download of the source workbook.

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use tracing::{debug, info};

use crate::error::IngestError;

/// Single-shot HTTP GET with a fixed timeout and no retry.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, accept_invalid_certs: bool) -> Result<Self, IngestError> {
        let client = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|source| IngestError::Client { source })?;
        Ok(Self { client })
    }

    /// Download `url`, failing on transport errors and non-2xx statuses.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>, IngestError> {
        let start = Instant::now();
        info!(url, "downloading source workbook");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| IngestError::Transport {
                url: url.to_string(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::Status {
                url: url.to_string(),
                status,
            });
        }
        let bytes = response.bytes().map_err(|source| IngestError::Transport {
            url: url.to_string(),
            source,
        })?;
        debug!(
            url,
            byte_count = bytes.len(),
            duration_ms = start.elapsed().as_millis(),
            "download complete"
        );
        Ok(bytes.to_vec())
    }
}
