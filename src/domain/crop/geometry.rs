// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/geometry.rs
//
// View-space geometry for the crop marker: letterbox fit and the
// conversions between marker rectangles and image-space crop margins.

use super::margins::CropMargins;

/// A point in view space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair, used for both view bounds and image sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An edge-based rectangle: `right - left` is the width.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle anchored at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Rectangle spanning two arbitrary corners, normalized so that
    /// `left <= right` and `top <= bottom`.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    #[cfg(test)]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.right <= self.right
            && other.top >= self.top
            && other.bottom <= self.bottom
    }

    /// Nearest point inside this rectangle.
    pub fn clamp_point(&self, point: Point) -> Point {
        Point::new(
            point.x.max(self.left).min(self.right),
            point.y.max(self.top).min(self.bottom),
        )
    }
}

/// Result of fitting an image into view bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Fit {
    /// Where the scaled image is painted.
    pub drawing_rect: Rect,
    /// View pixels per image pixel.
    pub resize_factor: f32,
}

/// Letterbox `image` into `bounds`, preserving its aspect ratio.
///
/// The factor is first derived from the height. If the image would then be
/// wider than the bounds, the factor is re-derived from the width and the
/// leftover height is split evenly above and below; otherwise the leftover
/// width is split evenly left and right.
pub fn fit_rect(bounds: Rect, image: Size) -> Fit {
    if image.is_empty() {
        let center = bounds.center();
        return Fit {
            drawing_rect: Rect::new(center.x, center.y, center.x, center.y),
            resize_factor: 0.0,
        };
    }

    let mut drawing_rect = bounds;
    let mut resize_factor = drawing_rect.height() / image.height;
    let drawing_width = image.width * resize_factor;

    if drawing_width > drawing_rect.width() {
        resize_factor = drawing_rect.width() / image.width;
        let drawing_height = image.height * resize_factor;
        let delta = (drawing_rect.height() - drawing_height) / 2.0;
        drawing_rect.top += delta;
        drawing_rect.bottom -= delta;
    } else {
        let delta = (drawing_rect.width() - drawing_width) / 2.0;
        drawing_rect.left += delta;
        drawing_rect.right -= delta;
    }

    Fit {
        drawing_rect,
        resize_factor,
    }
}

/// Inset each edge of the drawing rect by its margin scaled into view space.
pub fn marker_from_margins(drawing_rect: Rect, resize_factor: f32, margins: CropMargins) -> Rect {
    Rect::new(
        drawing_rect.left + margins.left as f32 * resize_factor,
        drawing_rect.top + margins.top as f32 * resize_factor,
        drawing_rect.right - margins.right as f32 * resize_factor,
        drawing_rect.bottom - margins.bottom as f32 * resize_factor,
    )
}

/// Image-space margins between the drawing rect and a marker, truncated
/// toward zero.
#[allow(clippy::cast_possible_truncation)]
pub fn margins_from_marker(drawing_rect: Rect, resize_factor: f32, marker: Rect) -> CropMargins {
    if resize_factor <= 0.0 {
        return CropMargins::default();
    }

    CropMargins {
        left: ((marker.left - drawing_rect.left) / resize_factor) as i32,
        right: ((drawing_rect.right - marker.right) / resize_factor) as i32,
        top: ((marker.top - drawing_rect.top) / resize_factor) as i32,
        bottom: ((drawing_rect.bottom - marker.bottom) / resize_factor) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_fit_wide_image_letterboxes_vertically() {
        let fit = fit_rect(Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(800.0, 400.0));
        assert!(approx(fit.resize_factor, 0.5));
        assert_eq!(fit.drawing_rect, Rect::new(0.0, 50.0, 400.0, 250.0));
    }

    #[test]
    fn test_fit_tall_image_letterboxes_horizontally() {
        let fit = fit_rect(Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(300.0, 600.0));
        assert!(approx(fit.resize_factor, 0.5));
        assert_eq!(fit.drawing_rect, Rect::new(125.0, 0.0, 275.0, 300.0));
    }

    #[test]
    fn test_fit_upscales_small_image() {
        let fit = fit_rect(Rect::new(0.0, 0.0, 200.0, 100.0), Size::new(20.0, 10.0));
        assert!(approx(fit.resize_factor, 10.0));
        assert_eq!(fit.drawing_rect, Rect::new(0.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn test_fit_empty_image() {
        let fit = fit_rect(Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(0.0, 100.0));
        assert_eq!(fit.resize_factor, 0.0);
        assert_eq!(fit.drawing_rect.size(), Size::new(0.0, 0.0));
    }

    #[test]
    fn test_marker_from_left_margin() {
        let drawing_rect = Rect::new(0.0, 50.0, 400.0, 250.0);
        let margins = CropMargins::new(10, 0, 0, 0);
        let marker = marker_from_margins(drawing_rect, 0.5, margins);
        assert_eq!(marker, Rect::new(5.0, 50.0, 400.0, 250.0));
    }

    #[test]
    fn test_margins_truncate_toward_zero() {
        let drawing_rect = Rect::new(0.0, 0.0, 300.0, 300.0);
        let marker = Rect::new(10.0, 20.0, 290.0, 280.0);
        let margins = margins_from_marker(drawing_rect, 3.0, marker);
        assert_eq!(margins, CropMargins::new(3, 3, 6, 6));
    }

    #[test]
    fn test_margins_with_zero_factor() {
        let drawing_rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let margins = margins_from_marker(drawing_rect, 0.0, Rect::new(1.0, 1.0, 2.0, 2.0));
        assert!(margins.is_zero());
    }

    #[test]
    fn test_from_corners_normalizes() {
        let rect = Rect::from_corners(Point::new(30.0, 5.0), Point::new(10.0, 25.0));
        assert_eq!(rect, Rect::new(10.0, 5.0, 30.0, 25.0));
    }

    #[test]
    fn test_clamp_point() {
        let rect = Rect::new(0.0, 50.0, 400.0, 250.0);
        assert_eq!(rect.clamp_point(Point::new(-5.0, 300.0)), Point::new(0.0, 250.0));
        assert_eq!(rect.clamp_point(Point::new(20.0, 60.0)), Point::new(20.0, 60.0));
    }

    proptest! {
        #[test]
        fn fit_preserves_aspect_and_stays_inside(
            bw in 1.0f32..4000.0,
            bh in 1.0f32..4000.0,
            iw in 1.0f32..8000.0,
            ih in 1.0f32..8000.0,
        ) {
            let bounds = Rect::new(0.0, 0.0, bw, bh);
            let fit = fit_rect(bounds, Size::new(iw, ih));
            let rect = fit.drawing_rect;

            let tol = bw.max(bh) * 1e-4;
            prop_assert!(rect.left >= -tol && rect.top >= -tol);
            prop_assert!(rect.right <= bw + tol && rect.bottom <= bh + tol);

            // Same factor on both axes.
            prop_assert!((rect.width() - iw * fit.resize_factor).abs() <= tol);
            prop_assert!((rect.height() - ih * fit.resize_factor).abs() <= tol);

            // Centered on both axes (the filled axis trivially so).
            prop_assert!((rect.left - (bw - rect.right)).abs() <= tol);
            prop_assert!((rect.top - (bh - rect.bottom)).abs() <= tol);

            // One axis is filled.
            prop_assert!(
                (rect.width() - bw).abs() <= tol || (rect.height() - bh).abs() <= tol
            );
        }

        #[test]
        fn marker_stays_inside_drawing_rect(
            left in 0i32..200,
            right in 0i32..200,
            top in 0i32..100,
            bottom in 0i32..100,
        ) {
            let fit = fit_rect(Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(800.0, 400.0));
            let margins = CropMargins::new(left, right, top, bottom);
            let marker = marker_from_margins(fit.drawing_rect, fit.resize_factor, margins);

            prop_assert!(approx(marker.left, fit.drawing_rect.left + left as f32 * 0.5));
            prop_assert!(approx(marker.right, fit.drawing_rect.right - right as f32 * 0.5));
            prop_assert!(approx(marker.top, fit.drawing_rect.top + top as f32 * 0.5));
            prop_assert!(approx(marker.bottom, fit.drawing_rect.bottom - bottom as f32 * 0.5));
            prop_assert!(fit.drawing_rect.contains_rect(&marker));
        }

        #[test]
        fn drag_round_trip_within_one_image_pixel(
            ax in 0.0f32..1.0,
            ay in 0.0f32..1.0,
            bx in 0.0f32..1.0,
            by in 0.0f32..1.0,
            iw in 16.0f32..3000.0,
            ih in 16.0f32..3000.0,
        ) {
            let fit = fit_rect(Rect::new(0.0, 0.0, 640.0, 480.0), Size::new(iw, ih));
            let dr = fit.drawing_rect;
            let a = Point::new(dr.left + ax * dr.width(), dr.top + ay * dr.height());
            let b = Point::new(dr.left + bx * dr.width(), dr.top + by * dr.height());
            let drag = Rect::from_corners(a, b);

            let margins = margins_from_marker(dr, fit.resize_factor, drag);
            let marker = marker_from_margins(dr, fit.resize_factor, margins);

            // Truncation loses less than one image pixel per edge.
            let tol = fit.resize_factor * 1.001 + 1e-3;
            prop_assert!((marker.left - drag.left).abs() <= tol);
            prop_assert!((marker.right - drag.right).abs() <= tol);
            prop_assert!((marker.top - drag.top).abs() <= tol);
            prop_assert!((marker.bottom - drag.bottom).abs() <= tol);
            prop_assert!(margins.left >= 0 && margins.right >= 0);
            prop_assert!(margins.top >= 0 && margins.bottom >= 0);
        }
    }
}
