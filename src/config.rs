// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use std::path::PathBuf;

use crate::constant::{IMAGE_SCALE_STEP, MAX_IMAGE_SCALE, MIN_IMAGE_SCALE};

/// Global configuration for the application.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Optional default directory to open images from.
    pub default_image_dir: Option<PathBuf>,
    /// Additive zoom step per zoom action.
    pub scale_step: f32,
    /// Minimum zoom scale.
    pub min_scale: f32,
    /// Maximum zoom scale.
    pub max_scale: f32,
    /// Whether the rule-of-thirds grid is drawn inside the selection.
    pub show_grid: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_image_dir: dirs::picture_dir().or_else(dirs::home_dir),
            scale_step: IMAGE_SCALE_STEP,
            min_scale: MIN_IMAGE_SCALE,
            max_scale: MAX_IMAGE_SCALE,
            show_grid: true,
        }
    }
}
