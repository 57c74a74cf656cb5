//! Miette-based diagnostics for configuration files.
//!
//! A TOML syntax or type error is shown with the offending span of the
//! file highlighted instead of a bare message.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(tradebook::config))]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error with source location.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        path: &Path,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(path.display().to_string(), src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Build a diagnostic from a TOML parse failure of `src`.
    ///
    /// Errors without a location point at the start of the file.
    #[must_use]
    pub fn from_toml(path: &Path, src: &str, err: &toml::de::Error) -> Self {
        let span = err.span().unwrap_or(0..0);
        Self::new(
            format!("invalid configuration: {}", err.message().trim()),
            path,
            src,
            span.start,
            span.end.saturating_sub(span.start),
        )
        .with_help("run `tradebook config init --force` to regenerate a template")
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}
