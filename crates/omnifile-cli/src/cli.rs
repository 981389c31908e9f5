//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Omnifile - Sort a folder of documents into categorized, descriptively named copies.
#[derive(Debug, Parser)]
#[command(name = "omnifile")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (destinations only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Copy every supported document from INPUT into OUTPUT/<category>/
    Organize(OrganizeArgs),

    /// Classify a single document without copying it
    Classify(ClassifyArgs),

    /// Store the API key or change settings
    Configure(ConfigureArgs),

    /// List the categories documents are sorted into
    Categories,
}

/// Arguments for the organize command.
#[derive(Debug, Parser)]
pub struct OrganizeArgs {
    /// Folder to read documents from (recursively)
    pub input: PathBuf,

    /// Folder to create the categorized copies in
    pub output: PathBuf,

    /// Classify by filename keywords only, without calling Gemini
    #[arg(long)]
    pub offline: bool,

    /// Show where files would go without copying anything
    #[arg(long)]
    pub dry_run: bool,

    /// Gemini model to use for this run
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Document to classify
    pub file: PathBuf,

    /// Classify by filename keywords only, without calling Gemini
    #[arg(long)]
    pub offline: bool,

    /// Gemini model to use
    #[arg(short, long)]
    pub model: Option<String>,
}

/// Arguments for the configure command.
#[derive(Debug, Parser)]
pub struct ConfigureArgs {
    /// Gemini API key to store in the credential file
    #[arg(long)]
    pub api_key: Option<String>,

    /// Default Gemini model
    #[arg(short, long)]
    pub model: Option<String>,

    /// Print the current configuration
    #[arg(long)]
    pub show: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
