//! Item description file loading
//!
//! Tab-separated `<identifier>\t<title>` lines. Lines that do not split into
//! exactly two columns are skipped, and a repeated identifier replaces the
//! earlier entry.

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Default record lookup URL
pub const DEFAULT_RECORD_URL: &str =
    "https://www.scopus.com/record/display.uri?origin=inward&eid={eid}";

const EID_PLACEHOLDER: &str = "{eid}";

/// URL pattern with an `{eid}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUrlTemplate {
    pattern: String,
}

impl RecordUrlTemplate {
    /// Validate and wrap a URL pattern
    pub fn new(pattern: &str) -> Result<Self> {
        if !pattern.contains(EID_PLACEHOLDER) {
            return Err(Error::Config(format!(
                "record URL template {:?} has no {} placeholder",
                pattern, EID_PLACEHOLDER
            )));
        }
        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    /// Substitute the identifier verbatim (no URL encoding)
    pub fn render(&self, eid: &str) -> String {
        self.pattern.replace(EID_PLACEHOLDER, eid)
    }
}

impl Default for RecordUrlTemplate {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_RECORD_URL.to_string(),
        }
    }
}

/// Title and derived link for one identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfoRecord {
    pub title: String,
    pub url: String,
}

/// Item records keyed by identifier
pub type ItemInfoMap = HashMap<String, ItemInfoRecord>;

/// Read and parse an item description file
pub fn load_item_info(path: &Path, template: &RecordUrlTemplate) -> Result<ItemInfoMap> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;
    let map = parse_item_info(&text, template);
    info!("Loaded {} item descriptions from {}", map.len(), path.display());
    Ok(map)
}

/// Parse item description text
pub fn parse_item_info(text: &str, template: &RecordUrlTemplate) -> ItemInfoMap {
    let mut map = ItemInfoMap::new();
    let mut skipped = 0usize;

    for line in text.lines() {
        let columns: Vec<&str> = line.trim().split('\t').collect();
        if columns.len() != 2 {
            skipped += 1;
            continue;
        }

        let (eid, title) = (columns[0], columns[1]);
        let record = ItemInfoRecord {
            title: title.to_string(),
            url: template.render(eid),
        };
        if map.insert(eid.to_string(), record).is_some() {
            debug!("Duplicate item identifier {}, keeping later title", eid);
        }
    }

    if skipped > 0 {
        debug!("Skipped {} item lines without exactly two columns", skipped);
    }

    map
}
