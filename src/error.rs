//! Error types for skin compositing

use thiserror::Error;

use crate::output::OutputError;

/// Error raised while interpreting or applying a command line.
///
/// Every variant is recoverable in interactive mode and fatal in batch mode.
#[derive(Debug, Error)]
pub enum SkinmashError {
    /// Line has fewer than two whitespace-separated tokens
    #[error("malformed line '{line}': expected '<region> <skin>'")]
    MalformedLine { line: String },
    /// Region name is not in the region table
    #[error("unknown region '{name}'")]
    UnknownRegion { name: String },
    /// Skin source could not be read, fetched or decoded
    #[error("could not resolve skin source '{reference}'")]
    SourceResolution {
        reference: String,
        #[source]
        cause: SourceError,
    },
    /// Decoded image is not a 64x64 or 64x32 skin
    #[error("bad skin dimensions: {width}x{height} (expected 64x64 or 64x32)")]
    InvalidSkinDimensions { width: u32, height: u32 },
    /// Legacy skin asked for a region it does not have
    #[error("skin '{reference}' uses the legacy 64x32 layout and has no '{region}' region")]
    UnsupportedRegionForLayout { region: String, reference: String },
    /// Command file could not be read
    #[error("cannot read '{path}': {source}")]
    ReadCommands {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Canvas could not be written
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Underlying cause of a [`SkinmashError::SourceResolution`].
///
/// Kept for `Debug` output and logs; the user-facing message only names the
/// reference that failed.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Local file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Bytes are not a decodable image
    #[error("decode error: {0}")]
    Decode(#[from] image::ImageError),
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    /// Profile response did not have the expected shape
    #[error("bad profile data: {0}")]
    Profile(String),
}
