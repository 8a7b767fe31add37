//! Error type shared by the renderer, batch driver and profile loader.

use std::io;
use std::path::PathBuf;

/// Errors produced while rendering or persisting launcher icons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The parent directory of an output file could not be created.
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An encoded icon could not be written to disk.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// PNG encoding of an in-memory icon failed.
    #[error("failed to encode PNG")]
    Encode(#[from] image::ImageError),

    /// The glyph could not be rasterized at the requested size.
    #[error("failed to rasterize icon at {size}px")]
    Rasterize { size: u32 },

    /// Icons must be at least one pixel wide.
    #[error("invalid icon size {0}, expected a positive pixel size")]
    InvalidSize(u32),

    #[error("failed to read profile {}", path.display())]
    ReadProfile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse profile")]
    ParseProfile(#[from] serde_json::Error),

    #[error("invalid color {value:?}")]
    InvalidColor {
        value: String,
        #[source]
        source: palette::rgb::FromHexError,
    },

    #[error("unknown density bucket {0:?}")]
    UnknownDensity(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
