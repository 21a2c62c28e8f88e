//! Upstream catalog input
//!
//! The catalog API answers with `{"versionNameList": ["v5.27.0", ...]}`. Fetching
//! it is the caller's job; this module decodes the response body and picks the
//! version to install, falling back to a configured default.

use std::path::Path;

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use tracing::{info, warn};

use crate::version::error::CatalogError;
use crate::version::sort::get_latest;

/// Response body of the catalog API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    /// Raw version names, in no particular order
    #[serde(default)]
    pub version_name_list: Vec<String>,
}

impl CatalogResponse {
    pub fn new(version_name_list: Vec<String>) -> Self {
        Self { version_name_list }
    }

    /// Decode a catalog response body
    pub fn from_json_str(body: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Read and decode a saved catalog response
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let body = std::fs::read_to_string(path)?;
        Self::from_json_str(&body)
    }
}

/// Source of raw version names for one component
#[cfg_attr(test, automock)]
pub trait VersionCatalog {
    /// Returns every version name the catalog knows, unordered
    fn version_names(&self) -> Result<Vec<String>, CatalogError>;
}

impl VersionCatalog for CatalogResponse {
    fn version_names(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.version_name_list.clone())
    }
}

/// Pick the latest valid version from a catalog, or `fallback`.
///
/// Falls back when the catalog cannot be read or lists no valid version.
pub fn latest_or_default<C: VersionCatalog + ?Sized>(catalog: &C, fallback: &str) -> String {
    let names = match catalog.version_names() {
        Ok(names) => names,
        Err(e) => {
            warn!("Failed to read version catalog, using '{}': {}", fallback, e);
            return fallback.to_string();
        }
    };

    match get_latest(&names) {
        Some(latest) => {
            info!("Latest catalog version: {}", latest);
            latest
        }
        None => {
            warn!(
                "No valid version in catalog ({} entries), using '{}'",
                names.len(),
                fallback
            );
            fallback.to_string()
        }
    }
}
