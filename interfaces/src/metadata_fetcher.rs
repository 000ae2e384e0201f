use entities::market::AssetMetadata;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("metadata uri '{uri}' is not a valid url: {reason}")]
    InvalidUri { uri: String, reason: String },
    #[error("metadata fetch from '{uri}' failed: {reason}")]
    Transport { uri: String, reason: String },
    #[error("metadata server answered {status} for '{uri}'")]
    HttpStatus { uri: String, status: u16 },
    #[error("metadata document at '{uri}' is malformed: {reason}")]
    Malformed { uri: String, reason: String },
}

/// Off-chain metadata document resolution.
#[async_trait::async_trait]
pub trait MetadataFetcher {
    /// Fetches and parses the document behind a token URI. Any non-2xx
    /// answer or unparsable body is a hard failure for that record.
    async fn fetch(&self, uri: &str) -> Result<AssetMetadata, MetadataError>;
}
