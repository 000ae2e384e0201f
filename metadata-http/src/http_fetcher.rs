use entities::market::AssetMetadata;
use interfaces::metadata_fetcher::{MetadataError, MetadataFetcher};
use url::Url;

/// Resolves token URIs over plain HTTP(S).
///
/// One shared client, so connections are pooled across the catalog
/// fan-out.
#[derive(Debug, Clone, Default)]
pub struct HttpMetadataFetcher {
    client: reqwest::Client,
}

impl HttpMetadataFetcher {
    pub fn new() -> HttpMetadataFetcher {
        HttpMetadataFetcher { client: reqwest::Client::new() }
    }

    /// Reuses an externally configured client (proxies, request timeouts).
    pub fn with_client(client: reqwest::Client) -> HttpMetadataFetcher {
        HttpMetadataFetcher { client }
    }
}

#[async_trait::async_trait]
impl MetadataFetcher for HttpMetadataFetcher {
    async fn fetch(&self, uri: &str) -> Result<AssetMetadata, MetadataError> {
        let url = Url::parse(uri).map_err(|e| MetadataError::InvalidUri {
            uri: uri.to_string(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| MetadataError::Transport { uri: uri.to_string(), reason: e.to_string() })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::HttpStatus { uri: uri.to_string(), status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MetadataError::Transport { uri: uri.to_string(), reason: e.to_string() })?;

        tracing::trace!(uri, bytes = body.len(), "metadata document fetched");

        parse_document(uri, &body)
    }
}

/// Parses a metadata document body. Split out so shape handling is
/// testable without a live server.
fn parse_document(uri: &str, body: &[u8]) -> Result<AssetMetadata, MetadataError> {
    serde_json::from_slice(body).map_err(|e| MetadataError::Malformed {
        uri: uri.to_string(),
        reason: e.to_string(),
    })
}
