//! Error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the transform pipeline and path files.
#[derive(Debug, Error)]
pub enum Error {
    /// The input path has no points, so N = 0 and the DFT is undefined.
    #[error("no input samples")]
    NoSamples,

    /// A sample had a NaN or infinite coordinate.
    #[error("sample {index} is not finite")]
    NonFiniteSample { index: usize },

    /// Downsampling with a stride of zero.
    #[error("stride must be at least 1")]
    InvalidStride,

    /// Malformed path data or configuration.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a path file failed.
    #[error("io error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
