//! HTTP implementation of the metadata-document boundary.

mod http_fetcher;

pub use http_fetcher::HttpMetadataFetcher;
