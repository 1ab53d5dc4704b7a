//! Configuration file loading for clusterconv.
//!
//! Discovers and loads `clusterconv.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "clusterconv.toml";

/// Serialization of input and output documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Guesses the format from a file extension; anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Top-level configuration from clusterconv.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClusterconvConfig {
    pub output: OutputConfig,
    pub convert: ConvertConfig,
}

/// Output section of the config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format. When unset the input format is reused.
    pub format: Option<DocumentFormat>,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            pretty: true,
        }
    }
}

/// Convert section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// apiVersion used when `--to` is not given.
    pub default_target: Option<String>,
}

/// Discover the clusterconv.toml config file in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a clusterconv.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<ClusterconvConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<ClusterconvConfig> {
    let config: ClusterconvConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `dir`, or return default if not found.
pub fn load_or_default(dir: &Utf8Path) -> anyhow::Result<ClusterconvConfig> {
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(ClusterconvConfig::default()),
    }
}

/// Settings for one `convert` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedConfig {
    pub target: Option<String>,
    pub input_format: DocumentFormat,
    pub output_format: DocumentFormat,
    pub pretty: bool,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: ClusterconvConfig,
}

impl ConfigMerger {
    pub fn new(config: ClusterconvConfig) -> Self {
        Self { config }
    }

    /// Merge with convert command CLI arguments.
    ///
    /// The input format follows the input file extension (JSON for stdin). The output
    /// format is `--format`, then `[output] format`, then the input format.
    pub fn merge_convert_args(
        self,
        cli_target: Option<&str>,
        cli_format: Option<DocumentFormat>,
        input: Option<&Utf8Path>,
    ) -> MergedConfig {
        let input_format = input.map_or(DocumentFormat::Json, DocumentFormat::from_path);
        MergedConfig {
            target: cli_target
                .map(str::to_string)
                .or(self.config.convert.default_target),
            input_format,
            output_format: cli_format
                .or(self.config.output.format)
                .unwrap_or(input_format),
            pretty: self.config.output.pretty,
        }
    }
}
