//! Command line argument parsing.
use crate::config::OutputFormat;
use std::path::PathBuf;

#[derive(clap::Parser)]
#[command(
    version,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true,
    name = "choice-enum"
)]
pub struct Args {
    #[command(subcommand)]
    pub subcommand: Option<Command>,

    /// Format of the extracted document
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Configuration file for choice-enum
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,

    /// File to write output to, stdout when absent. mtime will be preserved
    /// if the file contents don't change
    #[arg(short = 'o', long = "output-file")]
    pub output_file: Option<PathBuf>,

    // If given, we're going to output a new template configuration file
    // instead of extracting, so we make it mutually exclusive with running
    // normally
    /// Generates a configuration file based on the other options specified.
    /// The file will be written to choice-enum.toml by default or to the file
    /// path specified by the --config-file option.
    #[arg(short, long, conflicts_with = "output_file")]
    pub generate_config: bool,

    /// Follow symbolic links to directories instead of ignoring them.
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// Directories within which to recursively find and process rust files
    #[arg(required_unless_present = "generate_config", num_args = 1..)]
    pub directories: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, clap::Subcommand)]
pub enum Command {
    /// Generate shell completions
    Completions {
        /// The shell to generate the completions for
        shell: clap_complete::Shell,
    },
}
