//! Error types for catchnet operations.
//!
//! All failures come from building a network: the edge source could not be
//! queried, a row could not be decoded, or the row stream broke part way
//! through. Traversal and rendering never fail on their own; asking about a
//! node that is not in the network yields an empty network instead.
//!
//! ## Error Philosophy
//!
//! - Nothing is retried and nothing is logged-and-continued inside the library
//! - The underlying cause is always kept as the error `source()`
//! - Only the binary decides to print and exit

use thiserror::Error;

/// Boxed cause carried by source-level errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for catchnet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for catchnet operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The edge source could not be queried at all.
    #[error("error with query")]
    Query(#[source] BoxError),

    /// A row could not be read as a `(from, to)` pair of integers.
    #[error("error reading row {row}")]
    RowDecode {
        /// 1-based position of the offending row in the stream.
        row: usize,
        /// Why the row could not be decoded.
        #[source]
        source: BoxError,
    },

    /// The source failed while producing rows.
    #[error("error streaming rows")]
    Stream(#[source] BoxError),

    /// Database could not be opened
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Wrap any error as a query failure.
    pub fn query(cause: impl Into<BoxError>) -> Self {
        Self::Query(cause.into())
    }

    /// Wrap any error as a decode failure for the given row.
    pub fn row_decode(row: usize, cause: impl Into<BoxError>) -> Self {
        Self::RowDecode {
            row,
            source: cause.into(),
        }
    }

    /// Wrap any error as a stream failure.
    pub fn stream(cause: impl Into<BoxError>) -> Self {
        Self::Stream(cause.into())
    }

    /// Returns `true` if this error was raised while the edge stream was
    /// being consumed (query, decode, or stream failure).
    #[must_use]
    pub fn is_source_error(&self) -> bool {
        matches!(
            self,
            Self::Query(_) | Self::RowDecode { .. } | Self::Stream(_)
        )
    }
}
