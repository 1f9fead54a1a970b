use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

const DEFAULT_CONFIG_FILE_NAME: &str = "choice-enum.toml";

/// Document format written by the extractor.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Toml,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LabelParams {
    /// Append `(description)` to member names in `choices`.
    pub include_description: bool,
}

impl Default for LabelParams {
    fn default() -> Self {
        Self {
            include_description: true,
        }
    }
}

/// The parameters that are used to configure the behaviour of choice-enum
/// from the configuration file `choice-enum.toml`
#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
#[serde(default)]
pub(crate) struct Config {
    pub format: OutputFormat,
    pub follow_links: bool,
    pub labels: LabelParams,
}

pub(crate) fn store_config(config: &Config, file_path: Option<&Path>) -> Result<(), io::Error> {
    let file_path = file_path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE_NAME));

    // Fail if trying to overwrite an existing config file
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(file_path)?;

    let config_output =
        toml::to_string_pretty(config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    file.write_all(config_output.as_bytes())?;

    Ok(())
}

pub(crate) fn load_config<P>(file_path: Option<P>) -> Result<Config, io::Error>
where
    PathBuf: From<P>,
{
    let file_path = file_path
        .map(PathBuf::from)
        .or_else(find_configuration_file);

    if let Some(file_path) = file_path {
        let config_string = fs::read_to_string(file_path)?;
        toml::from_str(&config_string).map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    } else {
        Ok(Config::default())
    }
}

/// Search each ancestor directory for configuration file
fn find_configuration_file() -> Option<PathBuf> {
    let current_dir = env::current_dir().ok()?;
    current_dir
        .ancestors()
        .map(|dir| dir.join(DEFAULT_CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod test {
    use super::*;

    const CURRENT_DIR: &str = env!("CARGO_MANIFEST_DIR");
    const TEST_DIR: &str = "data/tests";

    fn config_file_path(filename: &str) -> PathBuf {
        [CURRENT_DIR, TEST_DIR, filename].iter().collect()
    }

    #[test]
    fn default_test() {
        let path = config_file_path("default_config.toml");
        let config = load_config(Some(path)).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn empty_test() {
        let path = config_file_path("empty_config.toml");
        let config = load_config(Some(path)).unwrap();

        assert_eq!(config, Config::default());
        assert!(config.labels.include_description);
    }

    #[test]
    fn toml_format_test() {
        let path = config_file_path("toml_format_config.toml");
        let config = load_config(Some(path)).unwrap();

        assert_eq!(config.format, OutputFormat::Toml);
        assert!(config.follow_links);
        assert!(!config.labels.include_description);
    }

    #[test]
    fn rejects_unknown_format() {
        let path = config_file_path("bad_format_config.toml");
        assert!(load_config(Some(path)).is_err());
    }

    #[test]
    fn stored_config_reloads() {
        let dir = env::temp_dir().join(format!("choice-enum-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(DEFAULT_CONFIG_FILE_NAME);
        let _ = fs::remove_file(&path);

        let config = Config {
            format: OutputFormat::Toml,
            ..Config::default()
        };
        store_config(&config, Some(&path)).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap(), config);

        // An existing file is never overwritten.
        let err = store_config(&Config::default(), Some(&path)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);

        fs::remove_dir_all(&dir).unwrap();
    }
}
