// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// Top-level layout: canvas on the left, crop values panel on the right.

pub mod canvas;
pub mod crop;
pub mod panel;

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget::row;

use crate::app::{AppMessage, AppModel};
use crate::config::AppConfig;

pub fn view<'a>(model: &'a AppModel, config: &'a AppConfig) -> Element<'a, AppMessage> {
    row()
        .push(canvas::view(model, config))
        .push(panel::view(model))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
