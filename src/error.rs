//! Error types shared across the crate.

/// Errors raised while configuring or running a two-driver route search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An engine parameter is outside its valid range.
    #[error("invalid configuration: {field} {reason}")]
    Configuration {
        /// Name of the offending configuration field.
        field: &'static str,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// Location data or a candidate broke a structural invariant.
    #[error("data invariant violated: {0}")]
    DataInvariant(String),

    /// A location file could not be parsed.
    #[error("parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number where the problem was found.
        line: usize,
        /// Human-readable description of the problem.
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn configuration(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn invariant(reason: impl Into<String>) -> Self {
        Self::DataInvariant(reason.into())
    }
}

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;
