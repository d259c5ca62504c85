use anyhow::Result;

use super::normalize::{resolve_format, write_output};
use crate::config::ParcelfmtConfig;
use crate::core::TemplateSet;
use crate::io::{create_writer, output::TemplateEntry, OutputFormat};

/// Show the template inferred from each example, in priority order.
pub fn handle_template(
    examples: &[String],
    format: Option<OutputFormat>,
    config: &ParcelfmtConfig,
) -> Result<()> {
    let templates = TemplateSet::from_examples(examples);
    let entries = TemplateEntry::collect(examples, &templates);
    let format = resolve_format(format, config);

    write_output(None, |writer| {
        create_writer(format, Box::new(writer)).write_templates(&entries)
    })
}
