//! In-memory launcher icon images.
//!
//! A rendered icon is an RGBA raster tagged with the density bucket it was
//! drawn for. Icon sets group one image per density.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::density::Density;
use crate::error::Result;

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// A single rendered icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format.
    pub data: RgbaImage,

    /// The density bucket the image was drawn for.
    pub density: Density,
}

impl IconImage {
    pub fn new(data: RgbaImage, density: Density) -> Self {
        Self { data, density }
    }

    /// Returns the pixel dimensions of the image.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.data.width(), self.data.height())
    }

    /// The display scale factor of the density bucket.
    pub fn scale(&self) -> f32 {
        self.density.scale()
    }

    /// Returns the logical size of the icon (dimensions / scale).
    ///
    /// Every launcher icon is 48x48 logical units regardless of density.
    pub fn logical_size(&self) -> (f32, f32) {
        (
            self.data.width() as f32 / self.scale(),
            self.data.height() as f32 / self.scale(),
        )
    }

    /// Encodes the image as PNG.
    ///
    /// Encoding is deterministic: the same pixels always produce the same
    /// bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        encode_png(&self.data)
    }
}

/// Encodes an RGBA raster as PNG bytes.
pub(crate) fn encode_png(data: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Cursor::new(Vec::new());
    data.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// One rendered icon per density bucket.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    /// The individual icon images, in density order.
    pub images: Vec<IconImage>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Creates an icon set from a vector of images.
    pub fn from_images(images: Vec<IconImage>) -> Self {
        Self { images }
    }

    /// Adds an image to the icon set.
    pub fn add_image(&mut self, image: IconImage) {
        self.images.push(image);
    }

    /// Returns the number of images in the set.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the icon set contains no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Finds the image drawn for a density bucket.
    pub fn find_by_density(&self, density: Density) -> Option<&IconImage> {
        self.images.iter().find(|img| img.density == density)
    }

    /// Returns an iterator over the icon images.
    pub fn iter(&self) -> impl Iterator<Item = &IconImage> {
        self.images.iter()
    }
}

impl IntoIterator for IconSet {
    type Item = IconImage;
    type IntoIter = std::vec::IntoIter<IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconImage;
    type IntoIter = std::slice::Iter<'a, IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
