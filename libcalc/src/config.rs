//! Configuration management for the calculator front ends

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print the readout after every action instead of only at the end
    pub trace: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// `text`, `json` or `pretty`
    pub format: String,
    pub level: String,
}

/// How a front end prints the calculator state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The readout only
    #[default]
    Text,
    /// The whole state as one JSON object
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid output format: '{}'. Valid options: text, json",
                s
            )),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            trace: false,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; every field has a default.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CALC_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("calc").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalcError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[output]
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(!config.output.trace);
        assert_eq!(config.logging, LoggingSection::default());
    }

    #[test]
    fn test_load_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[output]
trace = true

[logging]
format = "json"
level = "debug"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.output.trace);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_from_path_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[output\ntrace = ").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, CalcError::Config(ConfigError::ParseError(_))));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_unknown_output_format_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, CalcError::Config(ConfigError::ParseError(_))));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml"
            .parse::<OutputFormat>()
            .unwrap_err()
            .contains("Invalid output format: 'xml'"));
    }

    #[test]
    fn test_load_from_missing_path_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load_from_path(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CalcError::Config(ConfigError::ReadError(_))));
    }

    #[test]
    #[serial]
    fn test_resolve_config_path_honours_env() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        std::env::set_var("CALC_CONFIG", &path);

        let resolved = resolve_config_path().unwrap();
        std::env::remove_var("CALC_CONFIG");

        assert_eq!(resolved, path);
    }

    #[test]
    #[serial]
    fn test_load_defaults_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var("CALC_CONFIG", temp_dir.path().join("absent.toml"));

        let config = Config::load();
        std::env::remove_var("CALC_CONFIG");

        assert_eq!(config.unwrap(), Config::default());
    }
}
