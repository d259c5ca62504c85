use anyhow::Result;
use parcelfmt::cli::{self, Commands};
use parcelfmt::commands::{self, NormalizeConfig};
use parcelfmt::config::{self, ParcelfmtConfig};
use std::path::Path;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    let config = load_configuration(cli.config.as_deref())?;
    if let Some(use_color) = config.output.as_ref().and_then(|o| o.use_color) {
        colored::control::set_override(use_color);
    }

    match cli.command {
        Commands::Normalize {
            input,
            examples,
            format,
            output,
            no_parallel,
            jobs,
        } => commands::handle_normalize(
            NormalizeConfig {
                input,
                examples,
                format,
                output,
                no_parallel,
                jobs,
            },
            &config,
        ),
        Commands::Template { examples, format } => {
            commands::handle_template(&examples, format, &config)
        }
        Commands::Inspect { input, format } => {
            commands::handle_inspect(input.as_deref(), format, &config)
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
            Ok(())
        }
    }
}

// An explicit --config must load; discovery falls back to defaults
fn load_configuration(path: Option<&Path>) -> Result<ParcelfmtConfig> {
    match path {
        Some(path) => Ok(config::load_config_from(path)?),
        None => Ok(config::load_config()),
    }
}
