// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/raster.rs

use std::path::Path;

use anyhow::{Context, bail};
use image::{DynamicImage, GenericImageView, ImageReader};

use super::ImageHandle;
use crate::domain::crop::CropRegion;

/// A decoded raster image (PNG, JPEG, WebP, ...) ready for display.
pub struct RasterImage {
    /// The decoded bitmap.
    image: DynamicImage,
    /// Cached handle for rendering.
    pub handle: ImageHandle,
}

impl RasterImage {
    /// Decode an image from disk.
    ///
    /// Bitmaps without pixels are rejected, so a successfully opened image
    /// always has a usable aspect ratio.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let image = ImageReader::open(path)
            .with_context(|| format!("cannot open {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("cannot read {}", path.display()))?
            .decode()
            .with_context(|| format!("cannot decode {}", path.display()))?;

        Self::from_image(image)
    }

    /// Wrap an already decoded image.
    pub fn from_image(image: DynamicImage) -> anyhow::Result<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            bail!("invalid bitmap: {width}x{height}");
        }

        let handle = super::create_image_handle(&image);
        Ok(Self { image, handle })
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Cut `region` out of the image and write it to `path`.
    pub fn save_region(&self, region: CropRegion, path: &Path) -> anyhow::Result<()> {
        self.image
            .crop_imm(region.x, region.y, region.width, region.height)
            .save(path)
            .with_context(|| format!("cannot save {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_rejects_empty_bitmap() {
        let empty = DynamicImage::ImageRgba8(RgbaImage::new(0, 10));
        assert!(RasterImage::from_image(empty).is_err());
    }

    #[test]
    fn test_open_and_save_region() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source.png");
        DynamicImage::ImageRgba8(RgbaImage::new(40, 20))
            .save(&source)
            .unwrap();

        let raster = RasterImage::open(&source).unwrap();
        assert_eq!(raster.dimensions(), (40, 20));

        let target = dir.path().join("cropped.png");
        raster
            .save_region(CropRegion::new(5, 2, 30, 10), &target)
            .unwrap();
        let cropped = image::open(&target).unwrap();
        assert_eq!(cropped.dimensions(), (30, 10));
    }

    #[test]
    fn test_open_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(RasterImage::open(&path).is_err());
    }
}
