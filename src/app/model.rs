// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use std::path::PathBuf;

use crate::document::RasterDocument;
use crate::fl;
use crate::select::{to_pixel_rect, CropRegion, RangeSelector, Rect, ScaleContext, COMMON_RATIOS};

#[derive(Debug, Clone, Copy)]
pub enum ViewMode {
    Fit,
    ActualSize,
    Custom(f32),
}

impl ViewMode {
    pub fn zoom_factor(&self) -> Option<f32> {
        match self {
            ViewMode::Fit => None,
            ViewMode::ActualSize => Some(1.0),
            ViewMode::Custom(z) => Some(*z),
        }
    }
}

pub struct AppModel {
    // Document.
    pub document: Option<RasterDocument>,

    // Folder navigation.
    pub folder_entries: Vec<PathBuf>,
    pub current_index: Option<usize>,

    // View.
    pub view_mode: ViewMode,
    /// Display scale and horizontal offset as last reported by the canvas.
    pub scale_ctx: ScaleContext,
    /// Display-space rectangle of the scaled image, as last reported.
    pub display: Rect,

    // Selection.
    pub selector: RangeSelector,
    /// Index into the ratio dropdown; the last entry is "custom".
    pub ratio_choice: usize,
    pub ratio_labels: Vec<String>,

    // UI state.
    pub error: Option<String>,
}

impl AppModel {
    pub fn new() -> Self {
        let mut ratio_labels: Vec<String> =
            COMMON_RATIOS.iter().map(|p| p.label.to_string()).collect();
        ratio_labels.push(fl!("ratio-custom"));

        Self {
            document: None,
            folder_entries: Vec::new(),
            current_index: None,
            view_mode: ViewMode::Fit,
            scale_ctx: ScaleContext::default(),
            display: Rect::default(),
            selector: RangeSelector::new(),
            ratio_choice: COMMON_RATIOS.len(),
            ratio_labels,
            error: None,
        }
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn zoom_factor(&self) -> Option<f32> {
        self.view_mode.zoom_factor()
    }

    /// Pixel-space crop region for the current selection, if it has area.
    pub fn selection_region(&self) -> Option<CropRegion> {
        self.document.as_ref()?;
        if !self.selector.can_draw_selection() {
            return None;
        }
        let region = to_pixel_rect(self.selector.selection(), self.scale_ctx);
        region.is_valid().then_some(region)
    }
}
