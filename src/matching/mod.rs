//! Template inference and application.
//!
//! The extractor turns an example identifier such as `12-345.6789` into a
//! [`Template`](crate::core::Template). The matcher strips a raw identifier
//! down to its letters and digits, re-inserts the template's separators and
//! accepts the result only when its length equals the template's target
//! length. With several templates, the first one to accept wins.

mod extractor;
mod matcher;

pub use extractor::extract;
pub use matcher::{attempt, detect, reconstruct, segment, strip_non_alphanumeric};
