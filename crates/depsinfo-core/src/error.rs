//! Error types for depsinfo core.

use thiserror::Error;

/// Result type for depsinfo operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the graph or analyzing a root.
#[derive(Debug, Error)]
pub enum Error {
    /// The report does not match the expected schema.
    ///
    /// Fatal: no graph is built and no root is analyzed.
    #[error("Malformed report: {reason}")]
    MalformedReport {
        /// What was wrong with the report.
        reason: String,
    },

    /// A root specifier, after redirect resolution, has no module in the graph.
    #[error("Root not found in module graph: {specifier}")]
    RootNotFound {
        /// The resolved root specifier.
        specifier: String,
    },

    /// A redirect chain revisited a specifier while being resolved.
    #[error("Redirect cycle detected: {}", chain.join(" -> "))]
    RedirectCycle {
        /// The specifiers followed, ending with the one that recurred.
        chain: Vec<String>,
    },

    /// I/O error while reading a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedReport {
            reason: reason.into(),
        }
    }

    /// Returns true if this error only affects a single root.
    ///
    /// Per-root errors are recorded and analysis continues with the next root.
    pub fn is_per_root(&self) -> bool {
        matches!(self, Error::RootNotFound { .. } | Error::RedirectCycle { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::malformed(err.to_string())
        }
    }
}
