//! Core data model: templates, their ordered collection and match outcomes.

pub mod template_set;
pub mod types;

pub use template_set::TemplateSet;
pub use types::{
    Detection, InsertionPoint, MatchResult, Separator, Template, UNMATCHED_SENTINEL,
};
