use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use oad_diff::OutputStyle;

#[derive(Parser, Debug)]
#[command(
    name = "openapi-diff",
    about = "Structural diff between two OpenAPI documents",
    version
)]
pub struct Cli {
    /// The document before the change (JSON or YAML)
    pub before: PathBuf,

    /// The document after the change (JSON or YAML)
    pub after: PathBuf,

    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Hide schema body differences
    #[arg(long)]
    pub skip_schemas: bool,

    /// Also print fields that did not change
    #[arg(long)]
    pub show_unchanged: bool,

    /// Depth at which markdown output folds single-child sections
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub flatten_depth: Option<usize>,

    /// TOML file with default rendering options
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Plaintext,
    Markdown,
    Stats,
}

impl From<OutputFormat> for OutputStyle {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plaintext => OutputStyle::Plaintext,
            OutputFormat::Markdown => OutputStyle::Markdown,
            OutputFormat::Stats => OutputStyle::Stats,
        }
    }
}

/// Exit status for a failed parse: `--help` and `--version` succeed, every
/// usage error exits 1.
pub fn usage_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
