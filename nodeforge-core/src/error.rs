//! Error types for the nodeforge core library.
//!
//! Generation itself cannot fail once a generator has been built; errors come
//! from builder validation and from reading operating-system entropy for
//! unseeded runs.

use std::fmt;

use thiserror::Error;

/// Stable machine-readable identifiers for [`FixtureError`] variants.
///
/// # Examples
/// ```
/// use nodeforge_core::FixtureErrorCode;
///
/// assert_eq!(FixtureErrorCode::InvalidNodeCount.as_str(), "INVALID_NODE_COUNT");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum FixtureErrorCode {
    /// The builder was given a node count of zero.
    InvalidNodeCount,
    /// Operating-system entropy could not be read.
    EntropyUnavailable,
}

impl FixtureErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidNodeCount => "INVALID_NODE_COUNT",
            Self::EntropyUnavailable => "ENTROPY_UNAVAILABLE",
        }
    }
}

impl fmt::Display for FixtureErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by fixture configuration and seed resolution.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Node count must be greater than zero.
    #[error("node_count must be at least 1 (got {got})")]
    InvalidNodeCount {
        /// The invalid node count supplied by the caller.
        got: usize,
    },
    /// No seed was configured and the operating system could not supply one.
    #[error("failed to draw a fixture seed from operating-system entropy: {source}")]
    EntropyUnavailable {
        /// Failure reported by the entropy source.
        #[source]
        source: rand::Error,
    },
}

impl FixtureError {
    /// Retrieve the stable [`FixtureErrorCode`] for this error.
    ///
    /// # Examples
    /// ```
    /// use nodeforge_core::{FixtureError, FixtureErrorCode};
    ///
    /// let err = FixtureError::InvalidNodeCount { got: 0 };
    /// assert_eq!(err.code(), FixtureErrorCode::InvalidNodeCount);
    /// ```
    #[must_use]
    pub const fn code(&self) -> FixtureErrorCode {
        match self {
            Self::InvalidNodeCount { .. } => FixtureErrorCode::InvalidNodeCount,
            Self::EntropyUnavailable { .. } => FixtureErrorCode::EntropyUnavailable,
        }
    }
}

/// Convenient result alias for nodeforge operations.
pub type Result<T> = core::result::Result<T, FixtureError>;
