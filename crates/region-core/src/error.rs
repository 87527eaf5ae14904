//! Error types for region-core

use std::ops::Range;

/// Result type for region-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in region-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Source is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Byte range {range:?} is outside the source (length {len})")]
    RangeOutOfBounds { range: Range<usize>, len: usize },

    #[error("Byte range {range:?} does not fall on character boundaries")]
    RangeNotCharAligned { range: Range<usize> },

    #[error("Malformed region at byte {position}: {message}")]
    MalformedRegion { position: usize, message: String },

    #[error("Regions overlap at range {0:?}")]
    OverlappingRegions(Range<usize>),

    #[error("Invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Segment scanner failed: {0}")]
    Scan(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub fn malformed(position: usize, message: impl Into<String>) -> Self {
        Self::MalformedRegion {
            position,
            message: message.into(),
        }
    }

    /// Wraps an arbitrary scanner failure for propagation through engine
    /// construction.
    pub fn scan(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Scan(source.into())
    }
}
