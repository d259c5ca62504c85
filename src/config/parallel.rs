//! Parallelism configuration for bulk normalization.
//!
//! Rows are independent, so a batch can be split across rayon's thread
//! pool without changing any result. Output order always follows input order.

use serde::{Deserialize, Serialize};

/// Default value for parallel processing enabled
fn default_enabled() -> bool {
    true
}

/// Default minimum number of rows handed to a worker at once
fn default_batch_size() -> usize {
    100
}

fn default_batch_size_option() -> Option<usize> {
    Some(default_batch_size())
}

/// Configuration for parallel batch normalization.
///
/// # Example
///
/// ```rust
/// use parcelfmt::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     max_concurrency: Some(4),
///     batch_size: Some(50),
/// };
/// assert_eq!(config.effective_batch_size(), 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParallelConfig {
    /// Enable parallel processing (default: true)
    ///
    /// When disabled, rows are normalized sequentially on the calling thread.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Maximum worker threads (default: available cores)
    ///
    /// When set, the batch runs in a dedicated pool of this size instead of
    /// rayon's global pool.
    #[serde(default)]
    pub max_concurrency: Option<usize>,

    /// Minimum rows per work unit (default: 100)
    ///
    /// Identifiers are cheap to normalize; small work units spend more time
    /// on scheduling than on matching.
    #[serde(default = "default_batch_size_option")]
    pub batch_size: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_concurrency: None,
            batch_size: default_batch_size_option(),
        }
    }
}

impl ParallelConfig {
    /// Create a config with parallel processing disabled.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn effective_batch_size(&self) -> usize {
        self.batch_size.unwrap_or(default_batch_size()).max(1)
    }

    /// Apply command-line overrides on top of file configuration.
    ///
    /// `jobs == 0` keeps the configured concurrency.
    pub fn with_overrides(mut self, no_parallel: bool, jobs: usize) -> Self {
        if no_parallel {
            self.enabled = false;
        }
        if jobs > 0 {
            self.max_concurrency = Some(jobs);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_config_default() {
        let config = ParallelConfig::default();
        assert!(config.enabled);
        assert!(config.max_concurrency.is_none());
        assert_eq!(config.batch_size, Some(100));
    }

    #[test]
    fn test_parallel_config_sequential() {
        let config = ParallelConfig::sequential();
        assert!(!config.enabled);
    }

    #[test]
    fn test_effective_batch_size() {
        let config = ParallelConfig::default();
        assert_eq!(config.effective_batch_size(), 100);

        let config = ParallelConfig {
            batch_size: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_batch_size(), 1);

        let config = ParallelConfig {
            batch_size: None,
            ..Default::default()
        };
        assert_eq!(config.effective_batch_size(), 100);
    }

    #[test]
    fn test_with_overrides() {
        let config = ParallelConfig::default().with_overrides(true, 0);
        assert!(!config.enabled);
        assert!(config.max_concurrency.is_none());

        let config = ParallelConfig::default().with_overrides(false, 3);
        assert!(config.enabled);
        assert_eq!(config.max_concurrency, Some(3));
    }

    #[test]
    fn test_parallel_config_toml_defaults() {
        let config: ParallelConfig = toml::from_str("max_concurrency = 2").unwrap();
        assert!(config.enabled);
        assert_eq!(config.max_concurrency, Some(2));
        assert_eq!(config.batch_size, Some(100));
    }
}
