// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

use cosmic::iced::Color;

/// Width of each of the two crop marker lines in logical pixels.
pub const MARKER_LINE_WIDTH: f32 = 1.0;

/// Outer crop marker line.
pub const MARKER_DARK: Color = Color::BLACK;

/// Inner crop marker line.
pub const MARKER_LIGHT: Color = Color::WHITE;

/// Suffix appended to the file stem of saved crops.
pub const CROPPED_SUFFIX: &str = "-cropped";

/// Fallback extension when the source path has none.
pub const CROPPED_FALLBACK_EXT: &str = "png";

/// Width of the crop values panel.
pub const PANEL_WIDTH: f32 = 240.0;
