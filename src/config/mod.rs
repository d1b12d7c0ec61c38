//! Configuration system for slotpath.
//!
//! Settings are read from `~/.config/slotpath/config.toml`. Every field has a
//! default, so a partial file (or no file at all) is fine. Command-line flags
//! take precedence over anything loaded here.
//!
//! # Example
//!
//! ```
//! use slotpath::config::{Config, OutputFormat};
//!
//! let config = Config::default();
//! assert_eq!(config.output_format, OutputFormat::Yaml);
//! assert!(config.parse_values);
//!
//! let custom = Config {
//!     output_format: OutputFormat::Json,
//!     ..Config::default()
//! };
//! assert!(custom.parse_values);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Document format written after assignments are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// YAML, with records written as tagged mappings
    #[default]
    Yaml,
    /// Pretty-printed JSON, records written as plain objects
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration for the slotpath command.
///
/// # Fields
///
/// * `output_format` - Format of the written document (default: yaml)
/// * `parse_values` - Parse assignment values as YAML fragments (default: true)
/// * `create_backup` - Create .bak files before overwriting (default: false)
/// * `log_filter` - Tracing filter used when neither `RUST_LOG` nor `-v` is given (default: "warn")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format of the written document
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Parse `PATH=VALUE` values as YAML rather than taking them verbatim
    #[serde(default = "default_parse_values")]
    pub parse_values: bool,

    /// Create .bak files before overwriting
    #[serde(default)]
    pub create_backup: bool,

    /// Default tracing filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_parse_values() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            parse_values: default_parse_values(),
            create_backup: false,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/slotpath/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("slotpath");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields the defaults; a file that exists but cannot be
    /// read or parsed is an error, which callers usually log before falling
    /// back to `Config::default()`.
    pub fn try_load() -> anyhow::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::try_load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from `path`. A missing file yields the defaults.
    pub fn try_load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
