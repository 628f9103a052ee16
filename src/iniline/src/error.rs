// iniline/src/error.rs

//! Error types for reading, converting and rewriting INI files.

use std::io;
use thiserror::Error;

/// Result type alias for iniline operations.
pub type Result<T> = std::result::Result<T, IniError>;

/// Errors that can occur when accessing or rewriting an INI file.
///
/// Parsing itself never fails on content: malformed lines are skipped.
/// Errors come from file I/O, rejected writes and the fail-fast accessors.
#[derive(Debug, Error)]
pub enum IniError {
    /// I/O error when reading, writing or renaming the backing file
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The temporary file could not be renamed over the original
    #[error("failed to replace file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// The manager was asked to touch disk before a path was set
    #[error("no INI file is bound to this manager")]
    NoFileBound,

    /// A write was rejected before touching the file
    #[error("refusing to write [{section}] '{key}': {reason}")]
    InvalidEntry {
        section: String,
        key: String,
        reason: &'static str,
    },

    /// A fail-fast lookup named a section that is not in the document
    #[error("section [{section}] not found")]
    SectionNotFound { section: String },

    /// A fail-fast lookup named a key that is not in its section
    #[error("key '{key}' not found in section [{section}]")]
    KeyNotFound { section: String, key: String },

    /// A stored value could not be converted to the requested type
    #[error("cannot convert [{section}] {key}='{value}' to {target}")]
    Conversion {
        section: String,
        key: String,
        value: String,
        target: &'static str,
    },

    /// Wide text handed to a setter was not valid UTF-16
    #[error("invalid UTF-16 text for [{section}] '{key}'")]
    Utf16 { section: String, key: String },

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IniError {
    pub fn key_not_found<S: Into<String>>(section: S, key: S) -> Self {
        IniError::KeyNotFound {
            section: section.into(),
            key: key.into(),
        }
    }

    pub fn invalid_entry<S: Into<String>>(section: S, key: S, reason: &'static str) -> Self {
        IniError::InvalidEntry {
            section: section.into(),
            key: key.into(),
            reason,
        }
    }

    pub fn conversion<S: Into<String>>(section: S, key: S, value: S, target: &'static str) -> Self {
        IniError::Conversion {
            section: section.into(),
            key: key.into(),
            value: value.into(),
            target,
        }
    }

    /// Whether this error reports a missing section or key rather than bad data.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            IniError::SectionNotFound { .. } | IniError::KeyNotFound { .. }
        )
    }

    /// Short category name, handy for logs.
    pub fn category(&self) -> &'static str {
        match self {
            IniError::Io(_) | IniError::Persist(_) => "io",
            IniError::NoFileBound => "binding",
            IniError::InvalidEntry { .. } => "write",
            IniError::SectionNotFound { .. } | IniError::KeyNotFound { .. } => "lookup",
            IniError::Conversion { .. } | IniError::Utf16 { .. } => "conversion",
            #[cfg(feature = "json")]
            IniError::Json(_) => "serialization",
        }
    }
}
