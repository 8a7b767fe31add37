//! Serializable generation settings.
//!
//! An [`IconProfile`] captures everything that can vary between runs: the
//! output directory, the palette and whether edges are antialiased. With no
//! profile the defaults reproduce the stock launcher icons.
//!
//! # Example
//!
//! ```
//! use mipmap_icons::IconProfile;
//!
//! let profile = IconProfile::from_json(r##"{ "background": "#112233" }"##).unwrap();
//! assert_eq!(profile.background.to_hex(), "#112233");
//! assert_eq!(profile.foreground.to_hex(), "#ffffff");
//!
//! let json = profile.to_json().unwrap();
//! let restored = IconProfile::from_json(&json).unwrap();
//! assert_eq!(restored, profile);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::{Color, DEFAULT_BACKGROUND, DEFAULT_FOREGROUND, Palette};
use crate::error::{Error, Result};

/// Resource directory of a conventional Android module.
pub const DEFAULT_BASE_DIR: &str = "app/src/main/res";

/// Settings for a generation run.
///
/// # JSON Format
///
/// ```json
/// {
///   "baseDir": "app/src/main/res",
///   "background": "#667eea",
///   "foreground": "#ffffff",
///   "antialias": false
/// }
/// ```
///
/// Missing fields take their default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconProfile {
    /// Directory the `mipmap-*` folders are created in.
    pub base_dir: PathBuf,

    /// Badge fill color.
    pub background: Color,

    /// Glyph outline color.
    pub foreground: Color,

    /// Smooth shape edges instead of hard pixel edges.
    pub antialias: bool,
}

impl Default for IconProfile {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            background: Color::from_tuple(DEFAULT_BACKGROUND),
            foreground: Color::from_tuple(DEFAULT_FOREGROUND),
            antialias: false,
        }
    }
}

impl IconProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output base directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Sets both palette colors.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.background = palette.background;
        self.foreground = palette.foreground;
        self
    }

    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// The colors to draw with.
    pub fn palette(&self) -> Palette {
        Palette::new(self.background, self.foreground)
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON profile file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::ReadProfile {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = Self::from_json(&json)?;
        tracing::debug!("loaded profile from {}", path.display());
        Ok(profile)
    }
}
