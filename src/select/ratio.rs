// SPDX-License-Identifier: GPL-3.0-or-later
// src/select/ratio.rs
//
// Aspect ratio constraint and the common preset table.

/// Aspect ratio lock for the selection rectangle.
///
/// While enabled, every completed selection update keeps
/// `width / height == width_ratio / height_ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioConstraint {
    pub enabled: bool,
    pub width: f32,
    pub height: f32,
}

impl Default for RatioConstraint {
    fn default() -> Self {
        Self {
            enabled: false,
            width: 1.0,
            height: 1.0,
        }
    }
}

impl RatioConstraint {
    pub fn new(enabled: bool, width: f32, height: f32) -> Self {
        Self {
            enabled,
            width,
            height,
        }
    }

    /// Target `width / height` ratio, or `None` when unconstrained.
    ///
    /// Non-positive or non-finite terms disable the constraint for the
    /// update instead of producing NaN geometry.
    pub fn target_ratio(&self) -> Option<f32> {
        if !self.enabled {
            return None;
        }
        if !self.width.is_finite() || !self.height.is_finite() {
            return None;
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(self.width / self.height)
    }
}

/// A named aspect ratio preset.
#[derive(Debug, Clone, Copy)]
pub struct RatioPreset {
    pub label: &'static str,
    pub width: f32,
    pub height: f32,
}

/// Presets offered in the toolbar dropdown.
pub const COMMON_RATIOS: &[RatioPreset] = &[
    RatioPreset { label: "1:1", width: 1.0, height: 1.0 },
    RatioPreset { label: "3:2", width: 3.0, height: 2.0 },
    RatioPreset { label: "2:3", width: 2.0, height: 3.0 },
    RatioPreset { label: "5:4", width: 5.0, height: 4.0 },
    RatioPreset { label: "4:5", width: 4.0, height: 5.0 },
    RatioPreset { label: "4:3", width: 4.0, height: 3.0 },
    RatioPreset { label: "3:4", width: 3.0, height: 4.0 },
    RatioPreset { label: "16:9", width: 16.0, height: 9.0 },
    RatioPreset { label: "9:16", width: 9.0, height: 16.0 },
    RatioPreset { label: "16:10", width: 16.0, height: 10.0 },
    RatioPreset { label: "10:16", width: 10.0, height: 16.0 },
];

/// Find the preset index matching a width/height pair, if any.
pub fn preset_index(width: f32, height: f32) -> Option<usize> {
    COMMON_RATIOS
        .iter()
        .position(|p| p.width == width && p.height == height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_constraint_has_no_target() {
        let ratio = RatioConstraint::new(false, 16.0, 9.0);
        assert_eq!(ratio.target_ratio(), None);
    }

    #[test]
    fn enabled_constraint_yields_quotient() {
        let ratio = RatioConstraint::new(true, 16.0, 9.0);
        let target = ratio.target_ratio().unwrap();
        assert!((target - 16.0 / 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn degenerate_terms_fall_back_to_unconstrained() {
        assert_eq!(RatioConstraint::new(true, 0.0, 1.0).target_ratio(), None);
        assert_eq!(RatioConstraint::new(true, 1.0, 0.0).target_ratio(), None);
        assert_eq!(RatioConstraint::new(true, -2.0, 3.0).target_ratio(), None);
        assert_eq!(
            RatioConstraint::new(true, f32::NAN, 3.0).target_ratio(),
            None
        );
        assert_eq!(
            RatioConstraint::new(true, 1.0, f32::INFINITY).target_ratio(),
            None
        );
    }

    #[test]
    fn preset_lookup_round_trips() {
        for (i, preset) in COMMON_RATIOS.iter().enumerate() {
            assert_eq!(preset_index(preset.width, preset.height), Some(i));
        }
        assert_eq!(preset_index(7.0, 5.0), None);
    }
}
