//! Defines [`WkbError`], representing all errors returned by this crate.

use thiserror::Error;

use crate::geometry::GeometryKind;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum WkbError {
    /// A typed decode entry point was called on a record of a different kind.
    #[error("Shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        expected: GeometryKind,
        found: GeometryKind,
    },

    /// A destination slice cannot hold the encoded record.
    #[error("Buffer too small: needed {needed} bytes, {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    /// A varint ran past its maximum encoded length without terminating.
    #[error("Malformed varint")]
    MalformedVarint,

    /// An ordinate demanded by a declared dimension is absent, or a
    /// discriminator carries an unsupported dimension combination.
    #[error("Unsupported dimensionality: {0}")]
    UnsupportedDimensionality(String),

    /// The input buffer ended before the record did.
    #[error("Insufficient data: needed {needed} more bytes, {remaining} remaining")]
    InsufficientData { needed: usize, remaining: usize },

    /// General errors that don't fit into the above categories.
    #[error("General error: {0}")]
    General(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type WkbResult<T> = std::result::Result<T, WkbError>;
