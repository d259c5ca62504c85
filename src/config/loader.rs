use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::ParcelfmtConfig;
use crate::errors::{Error, Result};
use crate::io::OutputFormat;

/// Name of the configuration file searched for in the directory hierarchy
pub const CONFIG_FILE_NAME: &str = ".parcelfmt.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_config(contents: &str) -> Result<ParcelfmtConfig> {
    let config = toml::from_str::<ParcelfmtConfig>(contents)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ParcelfmtConfig) -> Result<()> {
    if let Some(parallel) = &config.parallel {
        if parallel.max_concurrency == Some(0) {
            return Err(Error::Config(
                "parallel.max_concurrency must be at least 1".to_string(),
            ));
        }
    }

    if let Some(format) = config.default_format() {
        if let Err(e) = format.parse::<OutputFormat>() {
            return Err(Error::Config(format!("output.default_format: {}", e)));
        }
    }

    Ok(())
}

/// Load a specific configuration file, reporting every failure.
pub fn load_config_from(path: &Path) -> Result<ParcelfmtConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let config = parse_config(&contents)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a discovered path; failures fall back to defaults.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ParcelfmtConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}: {}. Using defaults.", config_path.display(), e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for `.parcelfmt.toml`.
pub fn discover_config(start: PathBuf) -> ParcelfmtConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ParcelfmtConfig::default()
        })
}

/// Discover configuration from the current directory upward.
pub fn load_config() -> ParcelfmtConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ParcelfmtConfig::default()
        }
    }
}
