// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;

use crate::app::view::crop::PointerButton;
use crate::domain::crop::{Point, Size};

/// One of the four crop edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropEdge {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File.
    OpenPath(PathBuf),
    PathInput(String),
    LoadPath,
    SaveCropped,

    // Crop values from the side panel.
    CropInput(CropEdge, String),
    SetEnabled(bool),

    // Crop view events.
    CropLayoutChanged(Size),
    CropPressed { position: Point, button: PointerButton },
    CropMoved(Point),
    CropReleased(Point),
    CropPointerLost,

    // Errors.
    ClearError,
}
