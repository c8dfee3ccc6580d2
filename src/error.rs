//! Error types for toruslife.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors raised while building a grid or reading configuration.
///
/// Stepping a simulation never fails; everything here happens before the
/// first generation exists.
#[derive(Debug, Error)]
pub enum Error {
    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be non-zero, got {w}x{h}")]
    ZeroDimension {
        /// Requested width.
        w: usize,
        /// Requested height.
        h: usize,
    },

    /// Dimensions that do not fit the signed coordinate space or overflow `w * h`.
    #[error("grid dimensions {w}x{h} are too large")]
    TooLarge {
        /// Requested width.
        w: usize,
        /// Requested height.
        h: usize,
    },

    /// The cell buffer could not be allocated.
    #[error("failed to allocate grid storage: {0}")]
    Alloc(#[from] TryReserveError),

    /// A rule name that is neither `life` nor `lifelike`.
    #[error("unknown rule: {0:?}")]
    UnknownRule(String),
}

/// Result type for toruslife operations.
pub type Result<T> = std::result::Result<T, Error>;
