use serde::{Deserialize, Serialize};

use crate::market::AssetRecord;

/// Catalog loading state.
///
/// `NotLoaded` is the initial state. `Loaded` carries the assembled
/// snapshot, which may be empty; a repeat load replaces the payload but
/// never returns the state to `NotLoaded`. Consumers must branch on the
/// variant, never on payload length, to tell "owns nothing" apart from
/// "not fetched yet".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CatalogState {
    #[default]
    NotLoaded,
    Loaded(Vec<AssetRecord>),
}

impl CatalogState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }

    /// Assembled records, or `None` while no load has completed.
    pub fn assets(&self) -> Option<&[AssetRecord]> {
        match self {
            CatalogState::NotLoaded => None,
            CatalogState::Loaded(assets) => Some(assets),
        }
    }
}
