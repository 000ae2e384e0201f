use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use entities::market::AssetMetadata;
use interfaces::metadata_fetcher::{MetadataError, MetadataFetcher};

#[derive(Debug, Clone)]
struct MetadataScript {
    delay: Duration,
    outcome: Result<AssetMetadata, u16>,
}

/// In-memory stand-in for the metadata server. Unknown URIs answer 404.
#[derive(Debug, Default)]
pub struct FakeMetadataStore {
    entries: Mutex<HashMap<String, MetadataScript>>,
}

impl FakeMetadataStore {
    pub fn new() -> FakeMetadataStore {
        FakeMetadataStore::default()
    }

    pub fn serve(self, uri: impl Into<String>, image: impl Into<String>) -> Self {
        self.serve_with_delay(uri, image, Duration::ZERO)
    }

    /// Serves a document after a (virtual-time) delay, for completion-order
    /// scenarios.
    pub fn serve_with_delay(
        self,
        uri: impl Into<String>,
        image: impl Into<String>,
        delay: Duration,
    ) -> Self {
        self.entries.lock().unwrap().insert(
            uri.into(),
            MetadataScript {
                delay,
                outcome: Ok(AssetMetadata { image: image.into(), name: None, description: None }),
            },
        );
        self
    }

    pub fn failing(self, uri: impl Into<String>, status: u16) -> Self {
        self.entries
            .lock()
            .unwrap()
            .insert(uri.into(), MetadataScript { delay: Duration::ZERO, outcome: Err(status) });
        self
    }

    /// Rescripts one URI to fail, for reload scenarios.
    pub fn set_failing(&self, uri: impl Into<String>, status: u16) {
        self.entries
            .lock()
            .unwrap()
            .insert(uri.into(), MetadataScript { delay: Duration::ZERO, outcome: Err(status) });
    }
}

#[async_trait::async_trait]
impl MetadataFetcher for FakeMetadataStore {
    async fn fetch(&self, uri: &str) -> Result<AssetMetadata, MetadataError> {
        let script = self.entries.lock().unwrap().get(uri).cloned();
        let Some(script) = script else {
            return Err(MetadataError::HttpStatus { uri: uri.to_string(), status: 404 });
        };

        if !script.delay.is_zero() {
            tokio::time::sleep(script.delay).await;
        }

        match script.outcome {
            Ok(document) => Ok(document),
            Err(status) => Err(MetadataError::HttpStatus { uri: uri.to_string(), status }),
        }
    }
}
