//! Structured error types shared across cplx crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`CplxError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (paths, problem names, families).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for the cplx pipeline.
///
/// Untranslatable notation is never reported through this type; the
/// translator signals it with `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum CplxError {
    /// A source resource could not be opened or scanned.
    #[error("source error: {0}")]
    Source(ErrorInfo),
    /// A source schema descriptor is inconsistent.
    #[error("schema error: {0}")]
    Schema(ErrorInfo),
    /// Pipeline configuration could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and deserialization errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Filesystem errors outside of source scanning.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl CplxError {
    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            CplxError::Source(info)
            | CplxError::Schema(info)
            | CplxError::Config(info)
            | CplxError::Serde(info)
            | CplxError::Io(info) => info,
        }
    }

    /// Returns the error with an additional context entry attached.
    pub fn with_context(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match self {
            CplxError::Source(info) => CplxError::Source(info.with_context(key, value)),
            CplxError::Schema(info) => CplxError::Schema(info.with_context(key, value)),
            CplxError::Config(info) => CplxError::Config(info.with_context(key, value)),
            CplxError::Serde(info) => CplxError::Serde(info.with_context(key, value)),
            CplxError::Io(info) => CplxError::Io(info.with_context(key, value)),
        }
    }
}
