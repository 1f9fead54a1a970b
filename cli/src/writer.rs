//! Extracted document output.
use crate::config::{LabelParams, OutputFormat};
use anyhow::{bail, Context};
use choice_enum_core::parsed_types::{ParsedChoiceEnum, ParsedData};
use itertools::Itertools;
use log::info;
use serde::Serialize;
use std::{
    collections::BTreeMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

/// One enum in the extracted document.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct EnumEntry<'a> {
    /// File the enum was declared in.
    pub file: &'a Path,
    pub items: Vec<(&'a str, i64)>,
    pub choices: Vec<(i64, String)>,
}

impl<'a> EnumEntry<'a> {
    fn new(file: &'a Path, choice_enum: &'a ParsedChoiceEnum, labels: &LabelParams) -> Self {
        let choices = if labels.include_description {
            choice_enum.choices()
        } else {
            choice_enum
                .members
                .iter()
                .map(|member| (member.value, member.name.clone()))
                .collect()
        };

        Self {
            file,
            items: choice_enum.items(),
            choices,
        }
    }
}

/// Build the document: every parsed enum keyed by its identifier.
///
/// Enum identifiers must be unique across the walked files, since they are
/// the document keys.
pub fn document<'a>(
    files: &'a BTreeMap<PathBuf, ParsedData>,
    labels: &LabelParams,
) -> anyhow::Result<BTreeMap<&'a str, EnumEntry<'a>>> {
    let declared = || {
        files
            .values()
            .flat_map(|parsed_data| parsed_data.enums.iter().map(move |e| (parsed_data, e)))
    };

    let duplicates = declared()
        .map(|(_, choice_enum)| choice_enum.ident.as_str())
        .duplicates()
        .join(", ");
    if !duplicates.is_empty() {
        bail!("choice enums declared more than once: {duplicates}");
    }

    Ok(declared()
        .map(|(parsed_data, choice_enum)| {
            (
                choice_enum.ident.as_str(),
                EnumEntry::new(&parsed_data.file_path, choice_enum, labels),
            )
        })
        .collect())
}

/// Render the document in the requested format.
pub fn render<T: Serialize>(document: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut output =
                serde_json::to_string_pretty(document).context("Failed to render JSON")?;
            output.push('\n');
            Ok(output)
        }
        OutputFormat::Toml => toml::to_string_pretty(document).context("Failed to render TOML"),
    }
}

/// Write the rendered document to `output_file`, or to stdout when there is none.
pub fn write_output(output_file: Option<&Path>, output: String) -> anyhow::Result<()> {
    match output_file {
        Some(outfile) => check_write_file(outfile, output.into_bytes()),
        None => io::stdout()
            .lock()
            .write_all(output.as_bytes())
            .context("failed to write to stdout"),
    }
}

/// Write the file if the contents have changed.
fn check_write_file(outfile: &Path, output: Vec<u8>) -> anyhow::Result<()> {
    match fs::read(outfile) {
        Ok(buf) if buf == output => {
            // avoid writing the file to leave the mtime intact
            // for tools which might use it to know when to
            // rebuild.
            info!("Skipping writing to {outfile:?} no changes");
            return Ok(());
        }
        _ => {}
    }

    if let Some(out_dir) = outfile.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        // If the output directory doesn't already exist, create it.
        if !out_dir.exists() {
            fs::create_dir_all(out_dir).context("failed to create output directory")?;
        }
    }

    fs::write(outfile, output)
        .with_context(|| format!("failed to write output: {}", outfile.to_string_lossy()))
}
