// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/panel.rs
//
// Side panel: image path, crop values, enable toggle and save action.

use cosmic::Element;
use cosmic::iced::Length;
use cosmic::widget::{self, button, column, row, text, text_input};

use crate::app::message::CropEdge;
use crate::app::{AppMessage, AppModel};
use crate::constant::PANEL_WIDTH;
use crate::fl;

pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let path_row = row()
        .push(
            text_input(fl!("image-path"), &model.path_input)
                .on_input(AppMessage::PathInput)
                .width(Length::Fill),
        )
        .push(button::standard(fl!("load-image")).on_press(AppMessage::LoadPath))
        .spacing(8);

    let mut panel = column()
        .push(path_row)
        .push(text::heading(fl!("crop-values")))
        .push(crop_field(model, CropEdge::Left, fl!("crop-left")))
        .push(crop_field(model, CropEdge::Right, fl!("crop-right")))
        .push(crop_field(model, CropEdge::Top, fl!("crop-top")))
        .push(crop_field(model, CropEdge::Bottom, fl!("crop-bottom")))
        .push(
            widget::checkbox(fl!("enabled"), model.view.is_enabled())
                .on_toggle(AppMessage::SetEnabled),
        )
        .push(
            button::suggested(fl!("save-cropped"))
                .on_press_maybe(model.view.has_image().then_some(AppMessage::SaveCropped)),
        )
        .spacing(12)
        .padding(12)
        .width(Length::Fixed(PANEL_WIDTH));

    if let Some(status) = &model.status {
        panel = panel.push(text::body(status.clone()));
    }

    if let Some(error) = &model.error {
        panel = panel.push(button::text(error.clone()).on_press(AppMessage::ClearError));
    }

    panel.into()
}

fn crop_field(model: &AppModel, edge: CropEdge, label: String) -> Element<'_, AppMessage> {
    row()
        .push(text::body(label).width(Length::Fixed(64.0)))
        .push(
            text_input("0", model.crop_inputs.get(edge))
                .on_input(move |value| AppMessage::CropInput(edge, value))
                .width(Length::Fill),
        )
        .spacing(8)
        .into()
}
