//! Configuration for parcelfmt.
//!
//! Settings come from `.parcelfmt.toml`, discovered from the working
//! directory upward, and are overridden by command-line flags.
//!
//! ```toml
//! [templates]
//! examples = ["12-345.6789"]
//!
//! [parallel]
//! enabled = true
//! max_concurrency = 4
//!
//! [output]
//! default_format = "terminal"
//! ```

mod core;
mod loader;
mod parallel;

pub use core::{OutputConfig, ParcelfmtConfig, TemplatesConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from, parse_config,
    CONFIG_FILE_NAME,
};
pub use parallel::ParallelConfig;

/// Contents written by `parcelfmt init`.
pub const DEFAULT_CONFIG: &str = r#"# parcelfmt configuration

[templates]
# Correctly formatted example identifiers, tried in this order
examples = ["12-345.6789"]

[parallel]
enabled = true
# max_concurrency = 4
batch_size = 100

[output]
default_format = "terminal"
"#;
