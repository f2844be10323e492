//! Network document loading and writing
//!
//! The document is kept as an order-preserving `serde_json::Value`, so every
//! field this tool does not touch is written back exactly as read.

use crate::{Error, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::info;

const BOM: char = '\u{feff}';

/// Network document exported by the visualization tool
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    doc: Value,
}

impl Network {
    /// Read a network file, tolerating a leading byte-order mark
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::MissingFile {
            path: path.to_path_buf(),
            source,
        })?;
        let network = Self::from_json_str(&text, path)?;
        info!(
            "Loaded network from {} ({} items)",
            path.display(),
            network.items().map(|items| items.len()).unwrap_or(0)
        );
        Ok(network)
    }

    /// Parse network JSON text
    ///
    /// `path` is only used for error reporting.
    pub fn from_json_str(text: &str, path: &Path) -> Result<Self> {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        let doc: Value = serde_json::from_str(text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { doc })
    }

    /// Wrap an already-parsed document
    pub fn from_value(doc: Value) -> Self {
        Self { doc }
    }

    /// Whole document
    pub fn as_value(&self) -> &Value {
        &self.doc
    }

    /// Consume into the underlying document
    pub fn into_value(self) -> Value {
        self.doc
    }

    fn network_object_mut(&mut self) -> Result<&mut Map<String, Value>> {
        self.doc
            .as_object_mut()
            .ok_or_else(|| Error::Structure("document root is not an object".to_string()))?
            .get_mut("network")
            .ok_or_else(|| Error::Structure("missing \"network\" object".to_string()))?
            .as_object_mut()
            .ok_or_else(|| Error::Structure("\"network\" is not an object".to_string()))
    }

    /// Replace `network.clusters` wholesale, creating it if absent
    pub fn set_clusters(&mut self, clusters: Value) -> Result<()> {
        self.network_object_mut()?
            .insert("clusters".to_string(), clusters);
        Ok(())
    }

    /// Node records in `network.items`
    pub fn items(&self) -> Result<&Vec<Value>> {
        self.doc
            .get("network")
            .and_then(|network| network.get("items"))
            .ok_or_else(|| Error::Structure("missing \"network.items\" array".to_string()))?
            .as_array()
            .ok_or_else(|| Error::Structure("\"network.items\" is not an array".to_string()))
    }

    /// Mutable node records in `network.items`, each checked to be an object
    pub fn items_mut(&mut self) -> Result<Vec<&mut Map<String, Value>>> {
        let items = self
            .network_object_mut()?
            .get_mut("items")
            .ok_or_else(|| Error::Structure("missing \"network.items\" array".to_string()))?
            .as_array_mut()
            .ok_or_else(|| Error::Structure("\"network.items\" is not an array".to_string()))?;

        items
            .iter_mut()
            .enumerate()
            .map(|(index, item)| {
                item.as_object_mut().ok_or_else(|| {
                    Error::Structure(format!("network.items[{}] is not an object", index))
                })
            })
            .collect()
    }

    /// Serialize with 2-space indentation
    pub fn to_pretty_json(&self, path: &Path) -> Result<String> {
        serde_json::to_string_pretty(&self.doc).map_err(|e| Error::Write {
            path: PathBuf::from(path),
            source: e.into(),
        })
    }

    /// Serialize and overwrite `path`
    ///
    /// The document is fully serialized before the file is opened.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_pretty_json(path)?;
        std::fs::write(path, json).map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Wrote network to {}", path.display());
        Ok(())
    }
}
