// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Crop view widget: scaled image, marker outline, dimming, and pointer routing.

use cosmic::{
    Element, Renderer,
    iced::{
        Color, Length, Point as IcedPoint, Radians, Rectangle, Size as IcedSize,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            renderer::{Quad, Renderer as QuadRenderer},
            widget::Tree,
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
        window,
    },
    iced_core::image::{FilterMethod, Renderer as ImageRenderer},
};

use crate::app::AppMessage;
use crate::app::view::crop::{CropView, PointerButton};
use crate::constant::{MARKER_DARK, MARKER_LIGHT, MARKER_LINE_WIDTH};
use crate::domain::crop::{Point, Rect, Size};

pub struct CropOverlay<'a> {
    view: &'a CropView,
    dim_color: Color,
}

impl<'a> CropOverlay<'a> {
    pub fn new(view: &'a CropView, dim_alpha: f32) -> Self {
        Self {
            view,
            dim_color: Color::from_rgba(0.0, 0.0, 0.0, dim_alpha.clamp(0.0, 1.0)),
        }
    }

    fn draw_marker(&self, renderer: &mut Renderer, bounds: Rectangle, marker: Rect) {
        // Dark outer line, light inner line: visible on any image.
        let x = bounds.x + marker.left;
        let y = bounds.y + marker.top;
        let w = marker.width();
        let h = marker.height();
        stroke_rect(renderer, x, y, w, h, MARKER_DARK);
        stroke_rect(
            renderer,
            x + MARKER_LINE_WIDTH,
            y + MARKER_LINE_WIDTH,
            w - 2.0 * MARKER_LINE_WIDTH,
            h - 2.0 * MARKER_LINE_WIDTH,
            MARKER_LIGHT,
        );
    }
}

impl Widget<AppMessage, cosmic::Theme, Renderer> for CropOverlay<'_> {
    fn size(&self) -> IcedSize<Length> {
        IcedSize::new(Length::Fill, Length::Fill)
    }

    fn layout(&self, _tree: &mut Tree, _renderer: &Renderer, limits: &Limits) -> Node {
        Node::new(limits.max())
    }

    fn draw(
        &self,
        _tree: &Tree,
        renderer: &mut Renderer,
        _theme: &cosmic::Theme,
        _style: &cosmic::iced::advanced::renderer::Style,
        layout: Layout<'_>,
        _cursor: Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let (Some(paint), Some(handle)) = (self.view.paint(), self.view.handle()) else {
            return;
        };

        ImageRenderer::draw_image(
            renderer,
            handle.clone(),
            FilterMethod::Linear,
            to_screen(bounds, paint.image_rect),
            Radians(0.0),
            1.0,
            [0.0, 0.0, 0.0, 0.0],
        );

        if let Some(marker) = paint.marker {
            self.draw_marker(renderer, bounds, marker);
        }

        if let Some(dim) = paint.dim {
            draw_quad(renderer, to_screen(bounds, dim), self.dim_color);
        }
    }

    fn on_event(
        &mut self,
        _tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, AppMessage>,
        _viewport: &Rectangle,
    ) -> Status {
        let bounds = layout.bounds();

        let size = Size::new(bounds.width, bounds.height);
        if self.view.bounds() != size {
            shell.publish(AppMessage::CropLayoutChanged(size));
        }

        let dragging = self.view.wants_pointer_history();
        // While dragging, follow the pointer even outside the widget.
        let local = |cursor: Cursor| {
            cursor
                .position()
                .map(|pos| Point::new(pos.x - bounds.x, pos.y - bounds.y))
        };

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(button)) => {
                if let Some(pos) = cursor.position_in(bounds) {
                    shell.publish(AppMessage::CropPressed {
                        position: Point::new(pos.x, pos.y),
                        button: pointer_button(button),
                    });
                    if self.view.is_enabled() && self.view.has_image() {
                        return Status::Captured;
                    }
                }
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if dragging => {
                if let Some(pos) = local(cursor) {
                    shell.publish(AppMessage::CropMoved(pos));
                    return Status::Captured;
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(Button::Left)) if dragging => {
                let pos = local(cursor).unwrap_or_default();
                shell.publish(AppMessage::CropReleased(pos));
                return Status::Captured;
            }
            Event::Mouse(mouse::Event::CursorLeft)
            | Event::Window(window::Event::Unfocused)
                if dragging =>
            {
                shell.publish(AppMessage::CropPointerLost);
            }
            _ => {}
        }

        Status::Ignored
    }

    fn mouse_interaction(
        &self,
        _tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        if self.view.wants_pointer_history() {
            return mouse::Interaction::Crosshair;
        }

        if self.view.is_enabled() && self.view.has_image() {
            if let Some(pos) = cursor.position_in(layout.bounds()) {
                if self.view.drawing_rect().contains(Point::new(pos.x, pos.y)) {
                    return mouse::Interaction::Crosshair;
                }
            }
        }

        mouse::Interaction::default()
    }
}

impl<'a> From<CropOverlay<'a>> for Element<'a, AppMessage> {
    fn from(widget: CropOverlay<'a>) -> Self {
        Element::new(widget)
    }
}

fn pointer_button(button: Button) -> PointerButton {
    match button {
        Button::Left => PointerButton::Primary,
        Button::Right => PointerButton::Secondary,
        _ => PointerButton::Other,
    }
}

fn to_screen(bounds: Rectangle, rect: Rect) -> Rectangle {
    Rectangle::new(
        IcedPoint::new(bounds.x + rect.left, bounds.y + rect.top),
        IcedSize::new(rect.width(), rect.height()),
    )
}

fn stroke_rect(renderer: &mut Renderer, x: f32, y: f32, w: f32, h: f32, color: Color) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }

    let line = MARKER_LINE_WIDTH;
    let edges = [
        (IcedPoint::new(x, y), IcedSize::new(w, line)),
        (IcedPoint::new(x, y + h - line), IcedSize::new(w, line)),
        (IcedPoint::new(x, y), IcedSize::new(line, h)),
        (IcedPoint::new(x + w - line, y), IcedSize::new(line, h)),
    ];
    for (position, size) in edges {
        draw_quad(renderer, Rectangle::new(position, size), color);
    }
}

fn draw_quad(renderer: &mut Renderer, bounds: Rectangle, color: Color) {
    renderer.fill_quad(
        Quad {
            bounds,
            ..Quad::default()
        },
        color,
    );
}

pub fn crop_overlay<'a>(view: &'a CropView, dim_alpha: f32) -> Element<'a, AppMessage> {
    CropOverlay::new(view, dim_alpha).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::document::RasterImage;
    use image::{DynamicImage, RgbaImage};

    #[test]
    fn test_image_lands_on_drawing_rect() {
        let mut view = CropView::new();
        view.layout_changed(Size::new(400.0, 300.0));
        view.set_image(
            RasterImage::from_image(DynamicImage::ImageRgba8(RgbaImage::new(800, 400))).unwrap(),
        );

        let bounds = Rectangle::new(IcedPoint::new(20.0, 10.0), IcedSize::new(400.0, 300.0));
        let paint = view.paint().unwrap();
        let target = to_screen(bounds, paint.image_rect);

        assert_eq!(
            target,
            Rectangle::new(IcedPoint::new(20.0, 60.0), IcedSize::new(400.0, 200.0))
        );
    }

    #[test]
    fn test_pointer_button_mapping() {
        assert_eq!(pointer_button(Button::Left), PointerButton::Primary);
        assert_eq!(pointer_button(Button::Right), PointerButton::Secondary);
        assert_eq!(pointer_button(Button::Middle), PointerButton::Other);
    }
}
