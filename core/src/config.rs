//! Parser configuration.
//!
//! Defines the YAML-serializable configuration that controls how a raw
//! request string is split and interpreted: delimiter tokens, option
//! prefixes, quoting, hierarchy assembly, and text comparison mode. Nothing
//! in the pipeline hardcodes a token; everything comes from here.
//!
//! # Example YAML
//!
//! ```yaml
//! separator: " "
//! value_separator: "="
//! option_prefix: "--"
//! alias_prefix: "-"
//! value_delimiter: "\""
//! parse_hierarchy: false
//! comparison: Exact
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::TextComparison;
use crate::error::ConfigError;

/// Tokens and switches controlling the parsing pipeline.
///
/// The separator and value separator may be multi-character. The option
/// prefix marks option keys matched by identifier, the alias prefix marks
/// keys matched by alias; the two may be configured to the same string, in
/// which case an identifier match takes precedence.
///
/// # Examples
///
/// ```
/// use command_router_core::ParserConfig;
///
/// let config = ParserConfig::default();
/// assert_eq!(config.separator, " ");
/// assert_eq!(config.option_prefix, "--");
/// assert!(!config.parse_hierarchy);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Primary token dividing commands, arguments, and options.
    pub separator: String,
    /// Token dividing an option key from its value.
    pub value_separator: String,
    /// Prefix marking an option keyed by identifier (e.g., `--`).
    pub option_prefix: String,
    /// Prefix marking an option keyed by alias (e.g., `-`).
    pub alias_prefix: String,
    /// Quoting token enclosing multi-segment values (e.g., `"`).
    pub value_delimiter: String,
    /// Whether to assemble the Root/Group/SubCommand hierarchy.
    pub parse_hierarchy: bool,
    /// Comparison mode for all token and identifier matching.
    pub comparison: TextComparison,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            value_separator: "=".to_string(),
            option_prefix: "--".to_string(),
            alias_prefix: "-".to_string(),
            value_delimiter: "\"".to_string(),
            parse_hierarchy: false,
            comparison: TextComparison::Exact,
        }
    }
}

impl ParserConfig {
    /// Enables hierarchy assembly.
    pub fn with_hierarchy(mut self) -> Self {
        self.parse_hierarchy = true;
        self
    }

    /// Sets the comparison mode.
    pub fn with_comparison(mut self, comparison: TextComparison) -> Self {
        self.comparison = comparison;
        self
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ConfigError::IoError) if the file cannot be read,
    /// or [`YamlError`](ConfigError::YamlError) if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](ConfigError::IoError) if the file cannot be
    /// written, or [`YamlError`](ConfigError::YamlError) if serialization
    /// fails.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.separator, " ");
        assert_eq!(config.value_separator, "=");
        assert_eq!(config.option_prefix, "--");
        assert_eq!(config.alias_prefix, "-");
        assert_eq!(config.value_delimiter, "\"");
        assert!(!config.parse_hierarchy);
        assert_eq!(config.comparison, TextComparison::Exact);
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("parser.yaml");

        let config = ParserConfig::default()
            .with_hierarchy()
            .with_comparison(TextComparison::IgnoreCase);
        config.save(&path).expect("failed to save config");

        let loaded = ParserConfig::load(&path).expect("failed to load config");
        assert_eq!(loaded.separator, config.separator);
        assert_eq!(loaded.option_prefix, config.option_prefix);
        assert!(loaded.parse_hierarchy);
        assert_eq!(loaded.comparison, TextComparison::IgnoreCase);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ParserConfig::load("/nonexistent/parser.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
