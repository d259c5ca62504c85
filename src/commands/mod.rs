//! CLI command implementations.
//!
//! - **normalize**: reformat raw identifiers against learned templates
//! - **template**: show the templates inferred from examples
//! - **inspect**: summarize the shapes present in raw identifiers
//! - **init**: write a default `.parcelfmt.toml`

pub mod init;
pub mod inspect;
pub mod normalize;
pub mod template;

pub use init::init_config;
pub use inspect::handle_inspect;
pub use normalize::{handle_normalize, run_normalize, NormalizeConfig};
pub use template::handle_template;
