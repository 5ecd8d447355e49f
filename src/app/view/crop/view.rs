// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/view.rs
//
// Crop view state: image fit, marker rectangle, crop margins and dragging.

use std::fmt;
use std::path::Path;

use crate::app::document::{ImageHandle, RasterImage};
use crate::app::view::crop::listener::CropListener;
use crate::domain::crop::{
    CropMargins, Fit, Point, Rect, Size, fit_rect, margins_from_marker, marker_from_margins,
};

/// Mouse buttons as seen by the crop view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// Pointer interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// A marker is being dragged out from `anchor`.
    Dragging { anchor: Point },
}

/// What the host should paint for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropPaint {
    /// Target rectangle of the scaled image.
    pub image_rect: Rect,
    /// Marker outline, present when any margin is nonzero.
    pub marker: Option<Rect>,
    /// Dimming fill, present while the view is disabled.
    pub dim: Option<Rect>,
}

/// Image view with a draggable crop marker.
///
/// All geometry lives in view space relative to the widget's top-left
/// corner. The marker is always derived from the drawing rect, the resize
/// factor and the margins.
pub struct CropView {
    image: Option<RasterImage>,
    bounds: Size,
    fit: Fit,
    marker: Rect,
    margins: CropMargins,
    enabled: bool,
    drag: DragState,
    redraw: bool,
    listener: Option<Box<dyn CropListener>>,
}

impl Default for CropView {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CropView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropView")
            .field("image", &self.image_size())
            .field("bounds", &self.bounds)
            .field("fit", &self.fit)
            .field("marker", &self.marker)
            .field("margins", &self.margins)
            .field("enabled", &self.enabled)
            .field("drag", &self.drag)
            .field("redraw", &self.redraw)
            .finish_non_exhaustive()
    }
}

impl CropView {
    /// Empty view: no image, zero margins, disabled.
    pub fn new() -> Self {
        Self {
            image: None,
            bounds: Size::default(),
            fit: Fit::default(),
            marker: Rect::default(),
            margins: CropMargins::default(),
            enabled: false,
            drag: DragState::Idle,
            redraw: false,
            listener: None,
        }
    }

    /// Register the receiver of drag updates, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl CropListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // =========================================================================
    // Image
    // =========================================================================

    /// Decode the image at `path` and display it.
    ///
    /// On failure the previously loaded image and all geometry are kept.
    pub fn load_image(&mut self, path: &Path) -> anyhow::Result<()> {
        let raster = RasterImage::open(path)?;
        log::info!(
            "loaded {} ({}x{})",
            path.display(),
            raster.dimensions().0,
            raster.dimensions().1
        );
        self.set_image(raster);
        Ok(())
    }

    /// Replace the displayed image with an already decoded one.
    pub fn set_image(&mut self, raster: RasterImage) {
        self.image = Some(raster);
        self.drag = DragState::Idle;
        self.update_drawing_rect();
        self.update_marker();
        self.redraw = true;
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    pub fn handle(&self) -> Option<&ImageHandle> {
        self.image.as_ref().map(|raster| &raster.handle)
    }

    /// Natural size of the loaded image.
    pub fn image_size(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(RasterImage::dimensions)
    }

    // =========================================================================
    // Margins
    // =========================================================================

    pub fn set_left_crop(&mut self, left: i32) {
        self.margins.left = left;
        self.update_marker();
        self.redraw = true;
    }

    pub fn set_right_crop(&mut self, right: i32) {
        self.margins.right = right;
        self.update_marker();
        self.redraw = true;
    }

    pub fn set_top_crop(&mut self, top: i32) {
        self.margins.top = top;
        self.update_marker();
        self.redraw = true;
    }

    pub fn set_bottom_crop(&mut self, bottom: i32) {
        self.margins.bottom = bottom;
        self.update_marker();
        self.redraw = true;
    }

    pub fn set_margins(&mut self, margins: CropMargins) {
        self.margins = margins;
        self.update_marker();
        self.redraw = true;
    }

    pub fn margins(&self) -> CropMargins {
        self.margins
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Toggle interactivity. Disabling ends an ongoing drag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.drag = DragState::Idle;
        }
        self.redraw = true;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The view's bounds changed.
    pub fn layout_changed(&mut self, bounds: Size) {
        self.bounds = bounds;
        if self.image.is_some() {
            self.update_drawing_rect();
            self.update_marker();
            self.redraw = true;
        }
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn drawing_rect(&self) -> Rect {
        self.fit.drawing_rect
    }

    #[cfg(test)]
    pub fn resize_factor(&self) -> f32 {
        self.fit.resize_factor
    }

    #[cfg(test)]
    pub fn marker_rect(&self) -> Rect {
        self.marker
    }

    #[cfg(test)]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// True while a drag is active and moves outside the view must still
    /// be delivered.
    pub fn wants_pointer_history(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Report whether the view changed since the last call, and clear it.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Paint instructions for the current state, `None` without an image.
    pub fn paint(&self) -> Option<CropPaint> {
        self.image.as_ref()?;

        let image_rect = self.fit.drawing_rect;
        Some(CropPaint {
            image_rect,
            marker: (!self.margins.is_zero()).then_some(self.marker),
            dim: (!self.enabled).then_some(image_rect),
        })
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Start a drag if the primary button went down over the image.
    ///
    /// Returns whether a drag was started.
    pub fn pointer_pressed(&mut self, point: Point, button: PointerButton) -> bool {
        if !self.enabled || self.image.is_none() {
            return false;
        }

        if button == PointerButton::Primary && self.fit.drawing_rect.contains(point) {
            log::debug!("mouse down at {}:{}", point.x, point.y);
            self.drag = DragState::Dragging { anchor: point };
            return true;
        }

        false
    }

    /// Extend the marker from the drag anchor to `point` and notify the
    /// listener. The point is clamped to the drawing rect.
    pub fn pointer_moved(&mut self, point: Point) -> Option<CropMargins> {
        let DragState::Dragging { anchor } = self.drag else {
            return None;
        };

        let drawing_rect = self.fit.drawing_rect;
        let drag_rect = Rect::from_corners(anchor, drawing_rect.clamp_point(point));
        self.margins = margins_from_marker(drawing_rect, self.fit.resize_factor, drag_rect);
        self.update_marker();
        self.redraw = true;

        log::trace!(
            "marker between {}:{} and {}:{}",
            anchor.x,
            anchor.y,
            point.x,
            point.y
        );

        if let Some(listener) = self.listener.as_mut() {
            listener.crop_changed(self.margins);
        }

        Some(self.margins)
    }

    /// Finish the drag, if one is active.
    pub fn pointer_released(&mut self, point: Point) {
        if self.wants_pointer_history() {
            self.drag = DragState::Idle;
            log::debug!("mouse up at {}:{}", point.x, point.y);
            log::debug!("cropping: {}", self.margins);
        }
    }

    /// The pointer was lost mid-drag (window unfocused, cursor left the
    /// window). Ends the drag keeping the margins of the last move.
    pub fn pointer_lost(&mut self) {
        if self.wants_pointer_history() {
            self.drag = DragState::Idle;
            log::debug!("pointer lost while dragging, keeping {}", self.margins);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    #[allow(clippy::cast_precision_loss)]
    fn update_drawing_rect(&mut self) {
        let Some((width, height)) = self.image_size() else {
            return;
        };
        self.fit = fit_rect(
            Rect::from_size(self.bounds),
            Size::new(width as f32, height as f32),
        );
    }

    fn update_marker(&mut self) {
        if self.image.is_some() {
            self.marker =
                marker_from_margins(self.fit.drawing_rect, self.fit.resize_factor, self.margins);
        }
    }
}
