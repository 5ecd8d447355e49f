// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use std::path::PathBuf;

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Optional directory offered as the initial image path.
    pub default_image_dir: Option<PathBuf>,
    /// Clamp manually entered crop values to the image size.
    pub clamp_crop_values: bool,
    /// Opacity of the dimming fill drawn while cropping is disabled.
    pub dim_alpha: f32,
    /// Enable cropping as soon as an image loads.
    pub enable_on_load: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_image_dir: dirs::picture_dir().or_else(dirs::home_dir),
            clamp_crop_values: false,
            dim_alpha: 0.5,
            enable_on_load: true,
        }
    }
}
