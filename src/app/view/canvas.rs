// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Render the center canvas area: the crop view or a placeholder.

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::iced_widget::stack;
use cosmic::widget::{container, text};

use super::crop::crop_overlay;
use crate::app::{AppMessage, AppModel};
use crate::config::AppConfig;
use crate::fl;

/// Render the center canvas area with the current image.
pub fn view<'a>(model: &'a AppModel, config: &'a AppConfig) -> Element<'a, AppMessage> {
    let overlay = crop_overlay(&model.view, config.dim_alpha);

    if model.view.has_image() {
        // The overlay paints the image into its drawing rect itself.
        overlay
    } else {
        // Keep the overlay in the tree so it tracks the layout before a load.
        stack![
            container(text(fl!("no-image")))
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill),
            overlay
        ]
        .into()
    }
}
