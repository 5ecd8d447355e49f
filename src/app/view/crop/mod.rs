// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop view module: view state, listener and the overlay widget.

mod listener;
mod overlay;
mod view;

pub use overlay::crop_overlay;
pub use view::{CropView, PointerButton};
