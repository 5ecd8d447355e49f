// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// Document module root: decoded images and their display handles.

pub mod raster;

use image::GenericImageView;

pub use self::raster::RasterImage;

/// Re-export the image handle type for use by submodules.
pub type ImageHandle = cosmic::iced::widget::image::Handle;

/// Create an iced image handle from a DynamicImage.
pub fn create_image_handle(img: &image::DynamicImage) -> ImageHandle {
    let (w, h) = img.dimensions();
    let rgba = img.to_rgba8();
    let pixels = rgba.into_raw();
    ImageHandle::from_rgba(w, h, pixels)
}
