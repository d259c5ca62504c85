//! Error types for the fallible edges of parcelfmt.
//!
//! Template extraction and matching never fail; an identifier that no
//! template accepts is reported as data. Errors only arise around them:
//! reading inputs, loading configuration and writing reports.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// File system errors with the path that caused them
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed `.parcelfmt.toml`
    #[error("Failed to parse configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Normalization requested without any example identifier
    #[error("No templates available: pass --example or set [templates].examples in .parcelfmt.toml")]
    NoTemplates,

    #[error("Configuration file {} already exists. Use --force to overwrite.", .0.display())]
    ConfigExists(PathBuf),

    /// Stream errors without a file path (stdin, stdout)
    #[error(transparent)]
    Stream(#[from] std::io::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the user can resolve the error by changing input or flags.
    pub fn is_user_fixable(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::TomlParse(_) | Error::NoTemplates | Error::ConfigExists(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
