//! CLI argument definitions for the treepath binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Document text format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// JSON text
    Json,
    /// YAML text
    Yaml,
}

impl From<Format> for treepath::codec::Format {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => treepath::codec::Format::Json,
            Format::Yaml => treepath::codec::Format::Yaml,
        }
    }
}

/// Output style for printed values
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Output {
    /// Scalars printed bare, containers as pretty JSON
    Human,
    /// Everything as compact JSON
    Json,
}

impl From<Output> for OutputFormat {
    fn from(output: Output) -> Self {
        match output {
            Output::Human => OutputFormat::Human,
            Output::Json => OutputFormat::Json,
        }
    }
}

/// Read and write values inside JSON and YAML documents by path
#[derive(Parser, Debug)]
#[command(name = "treepath")]
#[command(about = "treepath: path-addressed reads and writes for JSON and YAML documents")]
#[command(version)]
pub struct Cli {
    /// Document format. Inferred from the file extension when omitted.
    #[arg(short, long, global = true, env = "TREEPATH_FORMAT")]
    pub format: Option<Format>,

    /// How values are printed
    #[arg(short, long, global = true, default_value = "human", env = "TREEPATH_OUTPUT")]
    pub output: Output,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path
    Get(GetArgs),
    /// Set the value at a path, creating intermediate objects and arrays
    Set(SetArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Document file
    pub file: PathBuf,

    /// Path such as `user.tags[1]`. An empty path selects the whole document.
    #[arg(default_value = "")]
    pub path: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Document file
    pub file: PathBuf,

    /// Path such as `user.tags[1]`
    pub path: String,

    /// New value, parsed as JSON. Text that is not valid JSON is stored as a string.
    pub value: String,

    /// Write the result back to the file instead of printing it
    #[arg(short, long)]
    pub write: bool,
}
