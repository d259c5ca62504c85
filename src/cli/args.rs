use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "parcelfmt")]
#[command(about = "Normalize parcel identifiers against example templates", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to .parcelfmt.toml in this or a parent directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reformat raw identifiers using templates learned from examples
    Normalize {
        /// File with one raw identifier per line (stdin if omitted or '-')
        input: Option<PathBuf>,

        /// Correctly formatted example identifier; repeat to add templates in priority order
        #[arg(short, long = "example")]
        examples: Vec<String>,

        /// Output format (defaults to the config file setting, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Normalize rows sequentially
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (0 = use config or all cores)
        #[arg(short = 'j', long = "jobs", default_value = "0")]
        jobs: usize,
    },

    /// Show the templates inferred from example identifiers
    Template {
        /// Example identifiers, in priority order
        #[arg(required = true)]
        examples: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Summarize the character shapes found in raw identifiers
    Inspect {
        /// File with one raw identifier per line (stdin if omitted or '-')
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Write a default .parcelfmt.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_normalize_with_repeated_examples() {
        let cli = Cli::try_parse_from([
            "parcelfmt",
            "-vv",
            "normalize",
            "ids.txt",
            "-e",
            "12-345.6789",
            "--example",
            "123-45.67-890",
            "--format",
            "json",
            "--jobs",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Normalize {
                input,
                examples,
                format,
                jobs,
                no_parallel,
                ..
            } => {
                assert_eq!(input, Some(PathBuf::from("ids.txt")));
                assert_eq!(examples, vec!["12-345.6789", "123-45.67-890"]);
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(jobs, 2);
                assert!(!no_parallel);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_template_requires_examples() {
        assert!(Cli::try_parse_from(["parcelfmt", "template"]).is_err());
    }
}
