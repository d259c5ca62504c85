use anyhow::Result;
use std::path::Path;

use super::normalize::{resolve_format, write_output};
use crate::analysis::summarize_shapes;
use crate::config::ParcelfmtConfig;
use crate::io::{self, create_writer, OutputFormat};

/// Profile raw identifiers and list their distinct shapes, most common first.
pub fn handle_inspect(
    input: Option<&Path>,
    format: Option<OutputFormat>,
    config: &ParcelfmtConfig,
) -> Result<()> {
    let raws = io::read_identifiers(input)?;
    let shapes = summarize_shapes(&raws);
    tracing::info!("Found {} distinct shapes in {} identifiers", shapes.len(), raws.len());

    let format = resolve_format(format, config);
    write_output(None, |writer| {
        create_writer(format, Box::new(writer)).write_shapes(&shapes)
    })
}
