//! Runtime configuration.

/// Default prefix for the dated inventory cache file.
pub const CACHE_FILE_PREFIX: &str = "inventory_cache";

/// Cache file prefix, overridable via the environment (picked up from
/// `.env` through dotenv at startup).
pub fn cache_file_prefix() -> String {
    std::env::var("INVENTORY_CACHE_PREFIX").unwrap_or_else(|_| CACHE_FILE_PREFIX.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefix() {
        assert_eq!(CACHE_FILE_PREFIX, "inventory_cache");
        assert!(!cache_file_prefix().is_empty());
    }
}
