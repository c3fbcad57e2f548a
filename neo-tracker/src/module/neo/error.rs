use thiserror::Error;

/// Failure to obtain the upstream feed
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, including timeouts and refused connections
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("feed returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("feed body is not a NeoWs feed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single feed record that cannot be turned into an `AsteroidRecord`
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("record '{0}' has no close-approach data")]
    MissingCloseApproach(String),
}
