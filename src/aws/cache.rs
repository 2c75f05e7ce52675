//! Snapshot cache for fetched inventory.
//!
//! A run can be served from a dated JSON cache file instead of hitting the
//! provider, which also makes whole-inventory test fixtures possible.

use super::fetch::fetch_all;
use crate::config;
use crate::models::AllResources;
use crate::BoxError;
use std::path::Path;

/// Read the inventory from a cache file, or fetch live and write the cache.
///
/// # Arguments
/// * `cache_file` - Optional path to a specific cache file. If None, uses
///   today's default file name.
///
/// # Returns
/// * `Ok(AllResources)` - The snapshot from cache or a live fetch
/// * `Err` - If an explicit cache file doesn't exist, or the fetch fails
pub async fn read_inventory_cache(cache_file: Option<&str>) -> Result<AllResources, BoxError> {
    let cache_file = match cache_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Cache file does not exist: {file}").into());
            }
            log::info!("Using provided cache file: {file}");
            file.to_string()
        }
        None => format!(
            "{prefix}_{date}.json",
            prefix = config::cache_file_prefix(),
            date = chrono::Utc::now().format("%Y-%m-%d")
        ),
    };

    let all = match std::fs::read_to_string(&cache_file) {
        Ok(json) => {
            log::info!("Reading from cache file: {cache_file}");
            serde_json::from_str(&json).map_err(|e| format!("Error parsing cache JSON: {e}"))?
        }
        Err(_) => {
            log::warn!("Cache file not found: {cache_file}");
            let all = fetch_all().await?;

            let json =
                serde_json::to_string(&all).map_err(|e| format!("Error serializing JSON: {e}"))?;
            log::warn!("Writing inventory to cache file: {cache_file}");
            std::fs::write(&cache_file, json)
                .map_err(|e| format!("Error writing cache file {cache_file}: {e}"))?;
            all
        }
    };

    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_explicit_cache_is_an_error() {
        let result = read_inventory_cache(Some("src/tests/test_data/no_such_file.json")).await;
        assert!(result.is_err(), "explicit cache path must exist");
    }

    #[tokio::test]
    async fn test_read_inventory_cache() {
        let all = read_inventory_cache(Some("src/tests/test_data/inventory_test_cache_01.json"))
            .await
            .expect("Error reading inventory cache");
        assert!(!all.vpcs.is_empty(), "VPCs should not be empty");
        assert_eq!(all.vpcs[0].id, "vpc-0a1b2c3d", "Wrong vpc from test sample.");
        assert!(!all.enis.is_empty(), "ENIs should not be empty");
    }
}
