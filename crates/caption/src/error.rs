//! Error types for caption rendering and configuration loading.
//!
//! Rendering itself never fails: a [`TagError`] returned by a handler is
//! turned into an inline marker by the expander. [`ConfigError`] covers
//! loading snapshots and settings from disk.

use std::path::Path;

use caption_calendar::CalendarError;

const INLINE: &str = "<inline>";

/// Failure of a single tag handler.
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    /// The snapshot lacks the data this tag reads.
    #[error("no {0} data available")]
    MissingData(&'static str),

    /// An argument the handler could not interpret.
    #[error("invalid argument '{value}' for <{tag}>")]
    InvalidArgument { tag: &'static str, value: String },

    /// Date arithmetic failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Failure reported by a handler registered outside this crate.
    #[error("{0}")]
    Custom(String),
}

impl TagError {
    /// Creates a free-form handler error.
    pub fn custom(message: impl Into<String>) -> Self {
        TagError::Custom(message.into())
    }
}

/// Failure loading a configuration or snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file content could not be parsed.
    #[error("failed to parse {origin}: {message}")]
    Parse {
        /// Source file, or `<inline>` for text parsed from memory.
        origin: String,
        message: String,
    },

    /// The file extension is not one of the supported formats.
    #[error("unsupported config format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },
}

impl ConfigError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Attaches the file a parse error came from.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                origin: path.display().to_string(),
                message,
            },
            other => other,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse {
            origin: INLINE.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse {
            origin: INLINE.to_string(),
            message: err.to_string(),
        }
    }
}
