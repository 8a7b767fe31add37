//! Rendering a single launcher icon to disk.

use std::path::Path;

use image::RgbaImage;

use crate::color::Palette;
use crate::density::Density;
use crate::error::{Error, Result};
use crate::glyph::CameraGlyph;
use crate::icon::{IconImage, encode_png};
use crate::profile::IconProfile;
use crate::svg::render_glyph;

/// Draws camera badge icons with a fixed palette.
///
/// # Example
///
/// ```no_run
/// use mipmap_icons::IconRenderer;
///
/// let renderer = IconRenderer::default();
/// renderer.render_icon(48, "out/mipmap-mdpi/ic_launcher.png").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IconRenderer {
    pub palette: Palette,
    pub antialias: bool,
}

impl IconRenderer {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            antialias: false,
        }
    }

    /// Creates a renderer using a profile's palette and edge mode.
    pub fn from_profile(profile: &IconProfile) -> Self {
        Self {
            palette: profile.palette(),
            antialias: profile.antialias,
        }
    }

    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }

    /// Draws the icon onto a transparent `size x size` canvas.
    pub fn render(&self, size: u32) -> Result<RgbaImage> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }

        let glyph = CameraGlyph::for_size(size);
        tracing::debug!(
            size,
            stroke = glyph.stroke_width,
            "rasterizing camera glyph"
        );
        render_glyph(&glyph, &self.palette, self.antialias)
    }

    /// Draws the icon for a density bucket.
    pub fn render_density(&self, density: Density) -> Result<IconImage> {
        let data = self.render(density.size())?;
        Ok(IconImage::new(data, density))
    }

    /// Draws a `size x size` icon and writes it as PNG to `output_path`.
    ///
    /// Missing parent directories are created and an existing file is
    /// overwritten.
    pub fn render_icon(&self, size: u32, output_path: impl AsRef<Path>) -> Result<()> {
        let output_path = output_path.as_ref();
        let data = self.render(size)?;
        let bytes = encode_png(&data)?;
        write_file(output_path, &bytes)?;
        tracing::info!("wrote {}", output_path.display());
        Ok(())
    }
}

/// Renders an icon with the default palette and writes it to `output_path`.
pub fn render_icon(size: u32, output_path: impl AsRef<Path>) -> Result<()> {
    IconRenderer::default().render_icon(size, output_path)
}

/// Writes `bytes` to `path`, creating parent directories first.
fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| Error::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mipmap-icons-renderer-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn zero_size_is_rejected() {
        let dir = scratch_dir("zero");
        let err = render_icon(0, dir.join("ic_launcher.png")).unwrap_err();
        assert!(matches!(err, Error::InvalidSize(0)));
        assert!(!dir.exists());
    }

    #[test]
    fn creates_missing_directories() {
        let dir = scratch_dir("missing");
        let path = dir.join("out/mipmap-mdpi/ic_launcher.png");
        assert!(!dir.exists());

        render_icon(48, &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (48, 48));
        assert!(img.color().has_alpha());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = scratch_dir("overwrite");
        let path = dir.join("ic_launcher.png");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, b"stale").unwrap();

        render_icon(72, &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), 72);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn parent_that_is_a_file_fails_with_create_dir() {
        let dir = scratch_dir("blocked");
        std::fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("mipmap-mdpi");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = render_icon(48, blocker.join("ic_launcher.png")).unwrap_err();
        assert!(matches!(err, Error::CreateDir { ref path, .. } if *path == blocker));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn render_density_tags_image() {
        let icon = IconRenderer::default().render_density(Density::Xxhdpi).unwrap();
        assert_eq!(icon.dimensions().width, 144);
        assert_eq!(icon.density, Density::Xxhdpi);
    }

    #[test]
    fn custom_palette_is_used() {
        let palette = Palette::new(
            crate::color::Color::new(10, 20, 30),
            crate::color::Color::new(200, 0, 0),
        );
        let img = IconRenderer::new(palette).render(48).unwrap();
        assert_eq!(img.get_pixel(3, 24).0, [10, 20, 30, 255]);
        assert_eq!(img.get_pixel(10, 24).0, [200, 0, 0, 255]);
    }
}
