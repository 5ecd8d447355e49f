// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/margins.rs
//
// Crop margins and the pixel region they select.

use std::fmt;

/// Pixels trimmed from each edge of the source image.
///
/// Values live in image space. Drag-derived margins are never negative;
/// values set directly are taken as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CropMargins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl CropMargins {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.left == 0 && self.right == 0 && self.top == 0 && self.bottom == 0
    }

    /// Clamp each margin to `0..=dimension`, and shrink the right/bottom
    /// margins so opposite edges never cross.
    #[must_use]
    pub fn clamped(self, image_width: u32, image_height: u32) -> Self {
        let width = i32::try_from(image_width).unwrap_or(i32::MAX);
        let height = i32::try_from(image_height).unwrap_or(i32::MAX);

        let left = self.left.clamp(0, width);
        let top = self.top.clamp(0, height);
        Self {
            left,
            right: self.right.clamp(0, width - left),
            top,
            bottom: self.bottom.clamp(0, height - top),
        }
    }

    /// The region of a `image_width` x `image_height` image left over after
    /// trimming. Returns `None` when nothing remains.
    #[must_use]
    pub fn to_region(&self, image_width: u32, image_height: u32) -> Option<CropRegion> {
        let m = self.clamped(image_width, image_height);
        #[allow(clippy::cast_sign_loss)]
        let (left, right, top, bottom) = (m.left as u32, m.right as u32, m.top as u32, m.bottom as u32);

        let region = CropRegion::new(
            left,
            top,
            image_width.saturating_sub(left + right),
            image_height.saturating_sub(top + bottom),
        );
        region.is_valid().then_some(region)
    }
}

impl fmt::Display for CropMargins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "top={} left={} bottom={} right={}",
            self.top, self.left, self.bottom, self.right
        )
    }
}

/// Crop region in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
