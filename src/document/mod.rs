// SPDX-License-Identifier: GPL-3.0-or-later
// src/document/mod.rs
//
// Document module root: image handle creation and format detection.

pub mod raster;

use std::path::Path;

use image::{GenericImageView, ImageFormat};

pub use raster::RasterDocument;

/// Re-export the image handle type for use by the view layer.
pub type ImageHandle = cosmic::iced::widget::image::Handle;

/// Create an iced image handle from a DynamicImage.
pub fn create_image_handle(img: &image::DynamicImage) -> ImageHandle {
    let (w, h) = img.dimensions();
    let rgba = img.to_rgba8();
    let pixels = rgba.into_raw();
    ImageHandle::from_rgba(w, h, pixels)
}

/// Whether a path looks like a raster image we can open.
///
/// Derived from the file extension via image-rs; content is validated on
/// decode.
pub fn is_supported_image(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn recognizes_common_raster_extensions() {
        for name in ["a.png", "b.jpg", "c.jpeg", "d.bmp", "e.webp"] {
            assert!(is_supported_image(&PathBuf::from(name)), "{name}");
        }
    }

    #[test]
    fn rejects_unknown_extensions() {
        for name in ["a.pdf", "b.svg", "c.txt", "noext"] {
            assert!(!is_supported_image(&PathBuf::from(name)), "{name}");
        }
    }
}
