//! Asset registry

use crate::{Asset, Bin2JsError, Result};
use std::collections::HashMap;

/// Mapping from asset name to asset, filled once and read afterwards.
///
/// Registering a name that is already present replaces the earlier asset.
#[derive(Debug, Default, Clone)]
pub struct AssetRegistry {
    assets: HashMap<String, Asset>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an asset under its own name, returning the one it replaced
    pub fn register(&mut self, asset: Asset) -> Option<Asset> {
        self.assets.insert(asset.name.clone(), asset)
    }

    /// Look up an asset by name
    pub fn get_asset(&self, name: &str) -> Result<&Asset> {
        self.assets
            .get(name)
            .ok_or_else(|| Bin2JsError::AssetNotFound(name.to_string()))
    }

    /// Intentionally does nothing: the bundle runtime ships `listAssets` as an
    /// empty stub and no listing contract exists.
    pub fn list_assets(&self) {}

    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
