//! quizscore CLI — score a submitted answer set against the answer key.

use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

const USAGE_EXAMPLE: &str = r#"Example: quizscore '["A","B","C"]' '["A","B","D"]'"#;

#[derive(Parser)]
#[command(
    name = "quizscore",
    version,
    about = "Score quiz answers against an answer key",
    after_help = USAGE_EXAMPLE
)]
struct Cli {
    /// Submitted answers as a JSON array of strings
    #[arg(allow_hyphen_values = true)]
    user_answers: String,

    /// Expected answers as a JSON array of strings
    #[arg(allow_hyphen_values = true)]
    correct_answers: String,

    /// Anything past the two answer sets is accepted and ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    extra: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// How the score is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The bare integer score
    Plain,
    /// `{"score":N,"total":M}`
    Json,
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("quizscore={level}").parse()?)
        .add_directive(format!("quizscore_core={level}").parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            eprintln!("{USAGE_EXAMPLE}");
            process::exit(1);
        }
    };

    let result = init_logging(cli.verbose).and_then(|()| {
        if !cli.extra.is_empty() {
            tracing::debug!("ignoring {} extra argument(s)", cli.extra.len());
        }
        commands::score::execute(&cli.user_answers, &cli.correct_answers, cli.format)
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
