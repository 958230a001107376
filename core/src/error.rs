//! Error types shared across the crate.
//!
//! Only table construction and rule-file I/O can fail. Translation itself
//! never returns an error: characters no rule matches pass through unchanged.

use std::path::PathBuf;

use thiserror::Error;

/// Failures from direction parsing, rule-file loading and table export.
#[derive(Debug, Error)]
pub enum Error {
    /// A direction value outside the two recognized options.
    #[error("invalid direction `{0}`, expected `forward` or `reverse`")]
    InvalidDirection(String),

    /// The rules file path does not exist.
    #[error("rules file not found: {0}")]
    RuleSourceNotFound(PathBuf),

    /// The rules file is unreadable or its `#=BIT` header is missing.
    #[error("invalid rules file format: {0}")]
    InvalidFormat(String),

    /// The rules file parsed but contained no usable rules.
    #[error("no valid rules found in rule source")]
    EmptyRuleSource,

    /// Writing a compiled table to disk failed.
    #[error("failed to write rules table to {path}: {source}")]
    SerializationFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
