//! This is the command line tool for choice-enum. It extracts every
//! `#[derive(ChoiceEnum)]` enum from Rust sources into one JSON or TOML
//! document of items and choices.

mod args;
mod config;
mod parse;
mod writer;

use std::{io, path::Path};

use anyhow::{anyhow, Context};
use clap::{CommandFactory, Parser};
use clap_complete::aot::generate;
use flexi_logger::AdaptiveFormat;
use ignore::{types::TypesBuilder, WalkBuilder};
use log::{error, info};

use crate::{
    args::{Args, Command},
    config::Config,
    parse::{parse_input, parser_inputs, ParsedFiles},
    writer::{document, render, write_output},
};

fn main() -> anyhow::Result<()> {
    flexi_logger::Logger::try_with_env_or_str("info")?
        .adaptive_format_for_stderr(AdaptiveFormat::Opt)
        .start()?;

    let options = Args::parse();

    if let Some(options) = options.subcommand {
        match options {
            Command::Completions { shell } => {
                let mut cmd = Args::command();
                let bin_name = cmd.get_name().to_string();
                generate(shell, &mut cmd, bin_name, &mut io::stdout());
            }
        }

        return Ok(());
    }

    // Note that this can be `None`; the relevant functions handle this case
    // on their own.
    let config_file = options.config_file.as_deref();

    if options.generate_config {
        let config = override_configuration(Config::default(), &options);
        config::store_config(&config, config_file)
            .map_err(anyhow::Error::from)
            .inspect_err(|err| error!("choice-enum failed to create new config file: {err}"))
    } else {
        extract_choices(config_file, &options).inspect_err(|err| {
            error!("choice-enum failed to extract choices: {err}");
        })
    }
}

fn extract_choices(config_file: Option<&Path>, options: &Args) -> anyhow::Result<()> {
    info!("choice-enum started extracting choices");

    let config = config::load_config(config_file).context("Unable to read configuration file")?;
    let config = override_configuration(config, options);

    let directories = options.directories.as_slice();

    info!("Using directories: {directories:?}");

    let walker = walker_builder(directories, config.follow_links)?;
    let parsed = parse_input(parser_inputs(walker))?;

    check_parse_errors(&parsed)?;

    info!(
        "choice-enum found choice enums in {} file(s)",
        parsed.files.len()
    );

    let document = document(&parsed.files, &config.labels)?;
    let output = render(&document, config.format)?;
    write_output(options.output_file.as_deref(), output)?;

    info!("choice-enum finished writing {} output", config.format);
    Ok(())
}

fn walker_builder(
    directories: &[std::path::PathBuf],
    follow_links: bool,
) -> anyhow::Result<WalkBuilder> {
    let mut types = TypesBuilder::new();
    types
        .add("rust", "*.rs")
        .context("Failed to add rust type extensions")?;
    types.select("rust");

    let (first_root, rest) = directories
        .split_first()
        .ok_or_else(|| anyhow!("no directories to search"))?;
    let mut walker_builder = WalkBuilder::new(first_root);
    walker_builder
        .sort_by_file_path(Path::cmp)
        .types(types.build().context("Failed to build types")?)
        .follow_links(follow_links);
    for root in rest {
        walker_builder.add(root);
    }
    Ok(walker_builder)
}

/// Overrides any configuration values with provided arguments
fn override_configuration(mut config: Config, options: &Args) -> Config {
    if let Some(format) = options.format {
        config.format = format;
    }

    config.follow_links |= options.follow_links;

    config
}

/// Prints out all parsing errors if any and returns Err.
fn check_parse_errors(parsed: &ParsedFiles) -> anyhow::Result<()> {
    for failure in &parsed.failures {
        error!(
            "Parsing error: \"{}\" in file \"{}\"",
            failure.error,
            failure.file_path.display()
        );
    }

    if parsed.failures.is_empty() {
        Ok(())
    } else {
        error!("Errors encountered during parsing.");
        Err(anyhow!("Errors encountered during parsing."))
    }
}
