//! Diagnostics over batches of raw identifiers.

pub mod shape;

pub use shape::{profile, summarize_shapes, ShapeCount, ShapeProfile};
