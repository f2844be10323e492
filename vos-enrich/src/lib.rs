//! # vos-enrich
//!
//! Adds cluster labels and per-item descriptions to a VOSviewer JSON network
//! export:
//! - Cluster labels come from a tab-separated `<number>\t<text>` file and
//!   replace `network.clusters`
//! - Item titles come from a tab-separated `<identifier>\t<title>` file and
//!   become an HTML `description` (with a record link) on every item whose
//!   `label` matches an identifier
//!
//! All inputs are loaded before the output is written, so a fatal error never
//! leaves a partially enriched file behind.

use std::path::PathBuf;
use tracing::info;

pub mod cli;
pub mod cluster_info;
pub mod config;
pub mod error;
pub mod item_info;
pub mod merge;
pub mod network;

pub use cluster_info::ClusterRecord;
pub use config::Settings;
pub use error::{Error, Result};
pub use item_info::{ItemInfoRecord, RecordUrlTemplate};
pub use network::Network;

/// Input and output locations for one enrichment run
#[derive(Debug, Clone)]
pub struct EnrichPaths {
    pub input_network: PathBuf,
    pub output_network: PathBuf,
    pub cluster_info: PathBuf,
    pub item_info: PathBuf,
}

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnrichSummary {
    /// Cluster records written to `network.clusters`
    pub clusters: usize,
    /// Distinct identifiers in the item file
    pub item_records: usize,
    /// Nodes in `network.items`
    pub items_total: usize,
    /// Nodes that received a description
    pub items_described: usize,
}

/// Load all inputs, merge, and write the enriched network
pub fn enrich(paths: &EnrichPaths, settings: &Settings) -> Result<EnrichSummary> {
    let template = settings.record_url_template()?;

    let mut network = Network::load(&paths.input_network)?;
    let clusters = cluster_info::load_cluster_info(&paths.cluster_info)?;
    let items = item_info::load_item_info(&paths.item_info, &template)?;

    merge::replace_clusters(&mut network, &clusters)?;
    let (items_total, items_described) = merge::describe_items(&mut network, &items)?;

    network.write(&paths.output_network)?;

    let summary = EnrichSummary {
        clusters: clusters.len(),
        item_records: items.len(),
        items_total,
        items_described,
    };
    info!(
        "Enriched network: {} clusters, {}/{} items described",
        summary.clusters, summary.items_described, summary.items_total
    );
    Ok(summary)
}
