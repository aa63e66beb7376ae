// SPDX-License-Identifier: GPL-3.0-or-later
// src/document/raster.rs
//
// Raster image document: decode, crop, and write-back.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use image::{DynamicImage, GenericImageView, ImageReader};

use crate::select::CropRegion;

use super::ImageHandle;

/// A raster image document (PNG, JPEG, WebP, ...).
pub struct RasterDocument {
    /// The decoded image.
    document: DynamicImage,
    /// Source path on disk.
    path: PathBuf,
    /// Cached handle for rendering.
    pub handle: ImageHandle,
}

impl RasterDocument {
    /// Load a raster document from disk.
    pub fn open(path: &Path) -> Result<Self> {
        let document = ImageReader::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?
            .decode()
            .with_context(|| format!("failed to decode {}", path.display()))?;
        let handle = super::create_image_handle(&document);

        Ok(Self {
            document,
            path: path.to_path_buf(),
            handle,
        })
    }

    /// Rebuild the handle after mutating `document`.
    fn refresh_handle(&mut self) {
        self.handle = super::create_image_handle(&self.document);
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Crop to the given pixel region and overwrite the source file.
    ///
    /// The region is clamped to the image bounds before cropping; the
    /// in-memory document and render handle are refreshed on success.
    pub fn crop_and_save(&mut self, region: CropRegion) -> Result<()> {
        if !region.is_valid() {
            bail!("crop region has no area");
        }

        self.document = crop_image(&self.document, region)?;
        self.document
            .save(&self.path)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        self.refresh_handle();

        log::info!(
            "cropped {} to {}x{}",
            self.path.display(),
            self.document.width(),
            self.document.height()
        );
        Ok(())
    }

    /// Save the current document to another path.
    pub fn save_as(&self, path: &Path) -> Result<()> {
        self.document
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("saved copy to {}", path.display());
        Ok(())
    }
}

/// Crop an image to `region`, clamping the region to the image bounds.
fn crop_image(img: &DynamicImage, region: CropRegion) -> Result<DynamicImage> {
    let (img_w, img_h) = img.dimensions();
    if img_w == 0 || img_h == 0 {
        bail!("image has no pixels");
    }

    let x = region.x.min(img_w - 1);
    let y = region.y.min(img_h - 1);
    let width = region.width.min(img_w - x).max(1);
    let height = region.height.min(img_h - y).max(1);

    Ok(img.crop_imm(x, y, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};

    /// Image where each pixel encodes its own coordinates.
    fn coordinate_image(width: u32, height: u32) -> DynamicImage {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([x as u8, y as u8, 0, 255])
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn crop_extracts_expected_region() {
        let img = coordinate_image(100, 80);
        let out = crop_image(&img, CropRegion::new(10, 20, 30, 40)).unwrap();
        assert_eq!(out.dimensions(), (30, 40));
        assert_eq!(out.get_pixel(0, 0), Rgba([10, 20, 0, 255]));
        assert_eq!(out.get_pixel(29, 39), Rgba([39, 59, 0, 255]));
    }

    #[test]
    fn crop_clamps_region_to_image_bounds() {
        let img = coordinate_image(50, 50);
        let out = crop_image(&img, CropRegion::new(40, 45, 100, 100)).unwrap();
        assert_eq!(out.dimensions(), (10, 5));
    }

    #[test]
    fn crop_origin_outside_image_degrades_to_last_pixel() {
        let img = coordinate_image(50, 50);
        let out = crop_image(&img, CropRegion::new(200, 200, 10, 10)).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(out.get_pixel(0, 0), Rgba([49, 49, 0, 255]));
    }
}
