//! Source file parsing.
use anyhow::Context;
use choice_enum_core::{context::ParseFileContext, parsed_types::ParsedData};
use ignore::WalkBuilder;
use log::debug;
use rayon::iter::{ParallelBridge, ParallelIterator};
use std::{collections::BTreeMap, fs, path::PathBuf};

/// A source file that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub file_path: PathBuf,
    pub error: String,
}

/// Everything read from the walked directories.
#[derive(Debug, Default)]
pub struct ParsedFiles {
    /// Files declaring at least one choice enum, keyed by path.
    pub files: BTreeMap<PathBuf, ParsedData>,
    /// Files that failed to parse, sorted by path.
    pub failures: Vec<ParseFailure>,
}

impl ParsedFiles {
    fn merge(mut self, other: Self) -> Self {
        for (file_path, parsed_data) in other.files {
            self.files.entry(file_path).or_default().add(parsed_data);
        }
        self.failures.extend(other.failures);
        self
    }
}

/// Walk the source folders and collect every rust file to parse.
pub fn parser_inputs(walker_builder: WalkBuilder) -> impl Iterator<Item = PathBuf> {
    walker_builder
        .build()
        .filter_map(Result::ok)
        .filter(|dir_entry| !dir_entry.path().is_dir())
        .map(|dir_entry| dir_entry.into_path())
}

/// Parse every input file in parallel.
///
/// Files that fail to read abort the run. Files that fail to parse are
/// collected in [`ParsedFiles::failures`] so they can all be reported.
pub fn parse_input(inputs: impl Iterator<Item = PathBuf> + Send) -> anyhow::Result<ParsedFiles> {
    let mut parsed = inputs
        .par_bridge()
        .try_fold(ParsedFiles::default, |mut parsed: ParsedFiles, file_path| {
            let source_code = fs::read_to_string(&file_path)
                .with_context(|| format!("Failed to read input: {}", file_path.display()))?;

            let parse_file_context = ParseFileContext {
                source_code,
                file_path: file_path.clone(),
            };

            match choice_enum_core::parser::parse(parse_file_context) {
                Ok(Some(parsed_data)) => {
                    debug!(
                        "{} choice enum(s) in {}",
                        parsed_data.enums.len(),
                        file_path.display()
                    );
                    parsed
                        .files
                        .entry(file_path)
                        .or_default()
                        .add(parsed_data);
                }
                Ok(None) => {}
                Err(err) => parsed.failures.push(ParseFailure {
                    file_path,
                    error: err.to_string(),
                }),
            }

            anyhow::Ok(parsed)
        })
        .try_reduce(ParsedFiles::default, |left, right| Ok(left.merge(right)))?;

    parsed
        .failures
        .sort_by(|left, right| left.file_path.cmp(&right.file_path));
    Ok(parsed)
}
