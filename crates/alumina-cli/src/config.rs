use crate::error::{CliError, Result};
use alumina::core::io::hin::{AtomOrder, ParserOptions, WriterOptions};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    #[serde(rename = "atom-order")]
    atom_order: Option<AtomOrder>,
}

/// The contents of a TOML configuration file. Every table and key is optional.
///
/// ```toml
/// [parser]
/// lenient = true
///
/// [output]
/// atom-order = "id"
/// ```
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialConfig {
    parser: Option<ParserOptions>,
    output: Option<PartialOutputConfig>,
}

/// Fully resolved settings handed to the subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub parser: ParserOptions,
    pub writer: WriterOptions,
}

impl PartialConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| CliError::Config(format!("'{}': {}", path.display(), e)))
    }

    fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolves the file settings, letting `--lenient` force lenient parsing.
    pub fn merge_with_cli(self, lenient: bool) -> AppConfig {
        let mut parser = self.parser.unwrap_or_default();
        parser.lenient |= lenient;
        let writer = WriterOptions {
            atom_order: self
                .output
                .and_then(|output| output.atom_order)
                .unwrap_or_default(),
        };
        AppConfig { parser, writer }
    }
}

/// Loads the optional configuration file and merges it with global flags.
pub fn load(path: Option<&Path>, lenient: bool) -> Result<AppConfig> {
    let partial = match path {
        Some(path) => PartialConfig::from_file(path)?,
        None => PartialConfig::default(),
    };
    let config = partial.merge_with_cli(lenient);
    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}
