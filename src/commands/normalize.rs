use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::batch::{normalize_batch, BatchReport};
use crate::config::ParcelfmtConfig;
use crate::errors::Error;
use crate::io::{self, create_writer, OutputFormat};

pub struct NormalizeConfig {
    pub input: Option<PathBuf>,
    pub examples: Vec<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub no_parallel: bool,
    pub jobs: usize,
}

/// Pure function to choose the output format: flag, then config, then terminal
pub fn resolve_format(flag: Option<OutputFormat>, config: &ParcelfmtConfig) -> OutputFormat {
    flag.or_else(|| config.default_format().and_then(|f| f.parse().ok()))
        .unwrap_or(OutputFormat::Terminal)
}

/// Normalize raw identifiers already in memory.
pub fn run_normalize(
    raws: &[String],
    cli_examples: &[String],
    no_parallel: bool,
    jobs: usize,
    config: &ParcelfmtConfig,
) -> Result<BatchReport, Error> {
    let templates = config.template_set(cli_examples);
    if templates.is_empty() {
        return Err(Error::NoTemplates);
    }

    let parallel = config.parallel().with_overrides(no_parallel, jobs);
    Ok(normalize_batch(raws, &templates, &parallel))
}

pub fn handle_normalize(command: NormalizeConfig, config: &ParcelfmtConfig) -> Result<()> {
    let raws = io::read_identifiers(command.input.as_deref())?;
    let report = run_normalize(
        &raws,
        &command.examples,
        command.no_parallel,
        command.jobs,
        config,
    )?;

    info!(
        "Normalized {} of {} identifiers",
        report.summary.matched, report.summary.total
    );

    let format = resolve_format(command.format, config);
    write_output(command.output.as_deref(), |writer| {
        create_writer(format, Box::new(writer)).write_report(&report)
    })
}

/// Run `write` against the output file, or stdout when none is given.
pub(crate) fn write_output<F>(output: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            write(&mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}
