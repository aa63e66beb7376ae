// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;

use crate::select::{PointerEvent, Rect};

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File / navigation.
    OpenFileDialog,
    OpenPath(PathBuf),
    NextImage,
    PrevImage,
    SaveAs,

    // View / zoom.
    ZoomIn,
    ZoomOut,
    ZoomFit,
    ZoomActualSize,
    ViewerStateChanged {
        scale: f32,
        offset_x: f32,
    },

    // Selection.
    SelectionPointer {
        event: PointerEvent,
        display: Rect,
    },
    CenterSelection,
    MaximizeSelection,
    ResetSelection,

    // Aspect ratio lock.
    RatioLockToggled(bool),
    RatioPresetSelected(usize),
    RatioWidthChanged(f32),
    RatioHeightChanged(f32),

    // Crop.
    ApplyCrop,

    // UI.
    ToggleGrid,
    ClearError,
}
