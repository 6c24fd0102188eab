use thiserror::Error;

/// Failures before a table reaches schema validation.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to build HTTP client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to decode workbook: {source}")]
    Workbook {
        #[source]
        source: calamine::Error,
    },

    #[error("workbook has no worksheet")]
    NoWorksheet,

    #[error("worksheet has no header row")]
    MissingHeader,
}

impl IngestError {
    /// True for connect failures, timeouts and non-2xx responses.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            IngestError::Transport { .. } | IngestError::Status { .. }
        )
    }
}
