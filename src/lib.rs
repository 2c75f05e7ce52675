//! AWS network-topology inventory.
//!
//! Fetches the account's network resources through the `aws` CLI (or a cached
//! snapshot), correlates heuristic ENI ownership across them, and renders the
//! containment tree to the terminal:
//! - [`aws`] - CLI shell-out, per-category fetchers, snapshot cache
//! - [`models`] - Normalized resource records and the [`models::AllResources`] snapshot
//! - [`processing`] - Ownership correlation and the query graph
//! - [`output`] - Terminal tree rendering

pub mod aws;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

/// Error type used throughout; `Send + Sync` so fetches can cross task
/// boundaries.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Load the inventory (cache or live fetch), correlate it, and wrap it in the
/// query graph the renderer walks.
pub async fn load_inventory(
    cache_file: Option<&str>,
) -> Result<processing::ResourceGraph, BoxError> {
    let all = aws::read_inventory_cache(cache_file).await?;
    let all = processing::correlate(all);
    Ok(processing::ResourceGraph::new(all))
}
