use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.storyfix.toml):
  Looked up in the current directory and its parents.

  [storyfix]
  # Relative to the directory holding .storyfix.toml
  stories_dir = \"apps/storybook/stories\"
  # Processed and reported in this order
  files = [\"Toast.stories.tsx\", \"Menu.stories.tsx\"]
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output raw JSON instead of report lines.
    /// The array is written when the run ends, including after a failure.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output for debugging (config, directory, per-file counts).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Options controlling whether files are written.
#[derive(Args, Debug, Default, Clone)]
pub struct WriteOptions {
    /// Show which files would change without writing them.
    #[arg(long)]
    pub dry_run: bool,

    /// Like --dry-run, but exit with code 1 if any file would change.
    #[arg(long)]
    pub check: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    name = "storyfix",
    author,
    version,
    about = "Remove empty `args: {}` blocks that sit directly under story definitions",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    #[command(subcommand)]
    /// Optional subcommand; without one the story files are rewritten.
    pub command: Option<Commands>,

    /// Story files to rewrite, relative to the stories directory.
    /// Replaces the configured list when given.
    pub files: Vec<String>,

    /// Stories directory. Replaces the configured `stories_dir` when given.
    #[arg(long, short = 'd')]
    pub dir: Option<PathBuf>,

    /// Configuration file to use instead of searching for .storyfix.toml.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Write behavior options.
    #[command(flatten)]
    pub write: WriteOptions,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}

#[derive(Subcommand, Debug)]
/// Available subcommands.
pub enum Commands {
    /// Create a default .storyfix.toml in the current directory.
    Init,
}
