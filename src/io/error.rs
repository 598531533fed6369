//! Error types for partition generation and rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all partition operations
#[derive(Debug)]
pub enum PartitionError {
    /// Grid size fails entry validation
    InvalidSize {
        /// Requested grid side length
        size: usize,
        /// Explanation of why the size is invalid
        reason: &'static str,
    },

    /// Allowed-size configuration fails entry validation
    InvalidConfig {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No candidate dimensions at a live free position
    ///
    /// A free cell always admits a width-1 block when 1 belongs to the
    /// allowed-size set, so this surfaces either a configuration that cannot
    /// tile the grid or an internal invariant breach. Generation aborts
    /// rather than skipping the position.
    GenerationStalled {
        /// Grid position where enumeration came up empty
        position: [i32; 2],
        /// Quads placed before the stall
        placed: usize,
    },

    /// Failed to save a rendered partition to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, reason } => {
                write!(f, "Invalid grid size {size}: {reason}")
            }
            Self::InvalidConfig {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::GenerationStalled { position, placed } => {
                write!(
                    f,
                    "No candidate dimensions at ({}, {}) after {placed} placements",
                    position[0], position[1]
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PartitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PartitionError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for partition results
pub type Result<T> = std::result::Result<T, PartitionError>;

/// Create an invalid configuration error
pub fn invalid_config(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PartitionError {
    PartitionError::InvalidConfig {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
