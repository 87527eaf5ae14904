//! Error types for region-transform

use crate::region::{RegionHandle, ScanId};

/// Result type for region-transform operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in region-transform operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] region_core::Error),

    #[error("Region belongs to a different scan (expected {expected}, got {actual})")]
    ForeignRegion { expected: ScanId, actual: ScanId },

    #[error("No coordinates recorded for region {handle}")]
    MissingCoordinates { handle: RegionHandle },

    #[error("Transform callback failed: {message}")]
    Callback { message: String },
}

impl Error {
    /// Wraps a user transform failure.
    pub fn callback(message: impl Into<String>) -> Self {
        Self::Callback {
            message: message.into(),
        }
    }
}
