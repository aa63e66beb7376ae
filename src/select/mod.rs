// SPDX-License-Identifier: GPL-3.0-or-later
// src/select/mod.rs
//
// Selection module: interactive rectangle selector, display-space geometry,
// and the display-to-pixel crop mapping.

pub mod geometry;
pub mod ratio;
pub mod selector;

pub use geometry::{clamp_axis, to_pixel_rect, CropRegion, Rect, ScaleContext, Vec2};
pub use ratio::{preset_index, RatioConstraint, RatioPreset, COMMON_RATIOS};
pub use selector::{PointerButton, PointerEvent, PointerKind, RangeSelector, SelectionState};
