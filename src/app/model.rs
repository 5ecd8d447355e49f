// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use crate::app::message::CropEdge;
use crate::app::view::crop::CropView;
use crate::config::AppConfig;
use crate::domain::crop::CropMargins;

// =============================================================================
// Crop inputs
// =============================================================================

/// Text shown in the four crop value fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropInputs {
    pub left: String,
    pub right: String,
    pub top: String,
    pub bottom: String,
}

impl CropInputs {
    pub fn from_margins(margins: CropMargins) -> Self {
        Self {
            left: margins.left.to_string(),
            right: margins.right.to_string(),
            top: margins.top.to_string(),
            bottom: margins.bottom.to_string(),
        }
    }

    pub fn get(&self, edge: CropEdge) -> &str {
        match edge {
            CropEdge::Left => &self.left,
            CropEdge::Right => &self.right,
            CropEdge::Top => &self.top,
            CropEdge::Bottom => &self.bottom,
        }
    }

    pub fn set(&mut self, edge: CropEdge, value: String) {
        match edge {
            CropEdge::Left => self.left = value,
            CropEdge::Right => self.right = value,
            CropEdge::Top => self.top = value,
            CropEdge::Bottom => self.bottom = value,
        }
    }
}

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    // Image.
    pub view: CropView,
    pub current_path: Option<PathBuf>,
    pub path_input: String,

    // Crop values reported by the view while dragging.
    pub crop_updates: Receiver<CropMargins>,
    pub crop_inputs: CropInputs,

    // UI state.
    pub error: Option<String>,
    pub status: Option<String>,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        let mut view = CropView::new();
        view.set_listener(tx);

        let path_input = config
            .default_image_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_default();

        Self {
            view,
            current_path: None,
            path_input,
            crop_updates: rx,
            crop_inputs: CropInputs::from_margins(CropMargins::default()),
            error: None,
            status: None,
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Mirror the latest dragged margins into the input fields.
    pub fn drain_crop_updates(&mut self) {
        if let Some(margins) = self.crop_updates.try_iter().last() {
            self.crop_inputs = CropInputs::from_margins(margins);
        }
    }
}
