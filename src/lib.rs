//! Parcel identifier normalization.
//!
//! A template is inferred from a correctly formatted example such as
//! `12-345.6789`: where its dashes and periods sit relative to the letters
//! and digits, and how long it is. Raw identifiers are stripped to their
//! letters and digits, the first template whose separators produce the right
//! length wins, and the result is either the reformatted identifier or the
//! `Unable to reformat` sentinel.
//!
//! ```rust
//! use parcelfmt::{detect, segment, TemplateSet};
//!
//! let templates = TemplateSet::from_examples(["12-345.6789"]);
//! let detection = detect("123456789", &templates);
//! assert_eq!(detection.result.as_output(), "12-345.6789");
//! assert_eq!(segment("123456789", &templates), vec!["12", "345", "6789"]);
//! assert_eq!(detect("1234", &templates).result.as_output(), "Unable to reformat");
//! ```

// Export modules for library usage
pub mod analysis;
pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod matching;

// Re-export commonly used types
pub use crate::core::{
    Detection, InsertionPoint, MatchResult, Separator, Template, TemplateSet, UNMATCHED_SENTINEL,
};

pub use crate::matching::{attempt, detect, extract, reconstruct, segment, strip_non_alphanumeric};

pub use crate::batch::{normalize_batch, normalize_record, BatchReport, BatchSummary, NormalizedRecord};

pub use crate::analysis::{profile, summarize_shapes, ShapeCount, ShapeProfile};

pub use crate::config::{ParallelConfig, ParcelfmtConfig};

pub use crate::errors::{Error, Result};
