//! Overlay settings and file loading.
//!
//! [`OverlayConfig`] holds the user-authored text: the caption template, the
//! custom text expanded by `<Custom>`, and the default pattern for `<Date>`.
//! [`load_file`] reads any of the deserialisable inputs (overlay settings,
//! [`Snapshot`](crate::Snapshot), [`CalendarConfig`](caption_calendar::CalendarConfig))
//! from a `.yaml`, `.yml` or `.json` file.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Pattern used by `<Date>` when no argument is given.
pub const DEFAULT_DATE_FORMAT: &str = "yyy-MM-dd";

/// User-authored overlay text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OverlayConfig {
    /// The caption template.
    pub template: String,
    /// Text substituted for `<Custom>`; may itself contain tags.
    pub custom_text: String,
    /// Calendar pattern for `<Date>` without arguments.
    pub date_format: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            template: String::new(),
            custom_text: String::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl OverlayConfig {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Self::default()
        }
    }

    pub fn with_custom_text(mut self, text: impl Into<String>) -> Self {
        self.custom_text = text.into();
        self
    }

    pub fn with_date_format(mut self, pattern: impl Into<String>) -> Self {
        self.date_format = pattern.into();
        self
    }

    /// Parses overlay settings from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads overlay settings from a YAML or JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_file(path)
    }
}

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<T, ConfigError> {
        match self {
            Format::Yaml => Ok(serde_yaml::from_str(content)?),
            Format::Json => Ok(serde_json::from_str(content)?),
        }
    }
}

/// Reads and deserialises a YAML or JSON file, chosen by extension.
pub fn load_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;

    tracing::debug!(path = %path.display(), ?format, "loading config file");
    format.parse(&content).map_err(|err| err.in_file(path))
}
