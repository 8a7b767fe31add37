//! Screen density buckets and launcher icon variants.
//!
//! Android resolves launcher icons from `res/mipmap-<density>/` directories.
//! Each bucket has a fixed pixel size; all of them describe the same 48dp
//! logical icon at a different display scale.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// Density
// ============================================================================

/// A screen density bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

impl Density {
    /// Every bucket, in the order icons are generated.
    pub const ALL: [Density; 5] = [
        Density::Mdpi,
        Density::Hdpi,
        Density::Xhdpi,
        Density::Xxhdpi,
        Density::Xxxhdpi,
    ];

    /// Edge length of the square icon in pixels.
    pub const fn size(self) -> u32 {
        match self {
            Density::Mdpi => 48,
            Density::Hdpi => 72,
            Density::Xhdpi => 96,
            Density::Xxhdpi => 144,
            Density::Xxxhdpi => 192,
        }
    }

    /// Display scale relative to mdpi (1.0 for mdpi, 4.0 for xxxhdpi).
    pub fn scale(self) -> f32 {
        match self {
            Density::Mdpi => 1.0,
            Density::Hdpi => 1.5,
            Density::Xhdpi => 2.0,
            Density::Xxhdpi => 3.0,
            Density::Xxxhdpi => 4.0,
        }
    }

    /// The bucket qualifier, e.g. `"xhdpi"`.
    pub const fn name(self) -> &'static str {
        match self {
            Density::Mdpi => "mdpi",
            Density::Hdpi => "hdpi",
            Density::Xhdpi => "xhdpi",
            Density::Xxhdpi => "xxhdpi",
            Density::Xxxhdpi => "xxxhdpi",
        }
    }

    /// The resource directory name, e.g. `"mipmap-xhdpi"`.
    pub fn dir_name(self) -> String {
        format!("mipmap-{}", self.name())
    }

    /// Returns the resource directory for this bucket under `base`.
    pub fn dir(self, base: &Path) -> PathBuf {
        base.join(self.dir_name())
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Density {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Density::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| Error::UnknownDensity(s.to_string()))
    }
}

// ============================================================================
// IconVariant
// ============================================================================

/// Launcher icon file written for each density.
///
/// Both variants are drawn identically; the badge is already circular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconVariant {
    Standard,
    Round,
}

impl IconVariant {
    /// Every variant, standard first.
    pub const ALL: [IconVariant; 2] = [IconVariant::Standard, IconVariant::Round];

    pub const fn file_name(self) -> &'static str {
        match self {
            IconVariant::Standard => "ic_launcher.png",
            IconVariant::Round => "ic_launcher_round.png",
        }
    }

    /// Full output path of this variant for `density` under `base`.
    pub fn path(self, base: &Path, density: Density) -> PathBuf {
        density.dir(base).join(self.file_name())
    }
}
