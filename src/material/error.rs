//! Error types for MTL parsing.

use thiserror::Error;

/// Errors that can occur during MTL parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MtlError {
    /// A color directive used the `spectral` or `xyz` form, which this
    /// parser does not support. Convert the colors to RGB.
    #[error("unsupported {space} color space; convert the MTL colors to RGB")]
    UnsupportedColorSpace {
        /// The color-space token that was rejected.
        space: String,
    },
}
