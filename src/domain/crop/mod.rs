// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/crop/mod.rs
//
// Toolkit-independent crop geometry.

pub mod geometry;
pub mod margins;

pub use geometry::{Fit, Point, Rect, Size, fit_rect, margins_from_marker, marker_from_margins};
pub use margins::{CropMargins, CropRegion};
