// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Minimum zoom scale.
pub const MIN_IMAGE_SCALE: f32 = 0.01;

/// Maximum zoom scale.
pub const MAX_IMAGE_SCALE: f32 = 3.0;

/// Additive zoom step per zoom action.
pub const IMAGE_SCALE_STEP: f32 = 0.05;

/// Tolerance for scale comparisons (float precision in zoom synchronization).
pub const SCALE_EPSILON: f32 = 0.0001;

/// Tolerance for offset comparisons (float precision in layout synchronization).
pub const OFFSET_EPSILON: f32 = 0.01;

/// Minimum selection edge length before the rule-of-thirds grid is drawn.
pub const MIN_GRID_SELECTION: f32 = 10.0;
