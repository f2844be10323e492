//! Merging side-file descriptions into the network document

use crate::cluster_info::ClusterRecord;
use crate::item_info::{ItemInfoMap, ItemInfoRecord};
use crate::network::Network;
use crate::{Error, Result};
use serde_json::Value;
use tracing::debug;

/// Description markup for a matched node
///
/// Title and URL are embedded as-is; markup characters in a title are not
/// escaped.
pub fn render_description(record: &ItemInfoRecord) -> String {
    format!(
        "<b>Title: {}\n<a href=\"{}\">URL</a></b>",
        record.title, record.url
    )
}

/// Replace `network.clusters` with the loaded cluster records
pub fn replace_clusters(network: &mut Network, clusters: &[ClusterRecord]) -> Result<()> {
    let value = serde_json::to_value(clusters)
        .map_err(|e| Error::Structure(format!("cannot encode clusters: {}", e)))?;
    network.set_clusters(value)
}

/// Set `description` on every node whose `label` has an item record
///
/// Returns `(items_total, items_described)`.
pub fn describe_items(network: &mut Network, items: &ItemInfoMap) -> Result<(usize, usize)> {
    let nodes = network.items_mut()?;
    let total = nodes.len();
    let mut described = 0;

    for node in nodes {
        let record = match node.get("label").and_then(Value::as_str) {
            Some(label) => match items.get(label) {
                Some(record) => record,
                None => continue,
            },
            None => continue,
        };

        debug!("Describing item {}", record.url);
        node.insert(
            "description".to_string(),
            Value::String(render_description(record)),
        );
        described += 1;
    }

    Ok((total, described))
}
