// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/listener.rs
//
// Receivers for crop value updates produced while dragging.

use std::sync::mpsc::Sender;

use crate::domain::crop::CropMargins;

/// Receives the margins after every marker drag update.
///
/// Delivery is fire-and-forget: there is no acknowledgment and no retry.
pub trait CropListener {
    fn crop_changed(&mut self, margins: CropMargins);
}

impl<F> CropListener for F
where
    F: FnMut(CropMargins),
{
    fn crop_changed(&mut self, margins: CropMargins) {
        self(margins);
    }
}

impl CropListener for Sender<CropMargins> {
    fn crop_changed(&mut self, margins: CropMargins) {
        if self.send(margins).is_err() {
            log::debug!("crop listener channel closed, dropping {margins}");
        }
    }
}
