// SPDX-License-Identifier: GPL-3.0-or-later
// src/select/geometry.rs
//
// Display-space geometry primitives and the display-to-pixel crop mapping.

/// A point or offset in 2-D display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Clamp a point into this rectangle, per axis.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(point.x, self.x, self.right()),
            clamp_axis(point.y, self.y, self.bottom()),
        )
    }
}

/// Clamp with the lower bound winning when the range is inverted.
///
/// `f32::clamp` panics on an inverted range; an inverted range here means a
/// degenerate display rect, which must still produce a usable coordinate.
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Zoom scale and horizontal centering offset of the drawn image.
///
/// The display coordinate space puts the image's top edge at `y = 0`; only
/// the x axis carries a centering offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleContext {
    pub image_scale: f32,
    pub horizontal_offset: f32,
}

impl Default for ScaleContext {
    fn default() -> Self {
        Self {
            image_scale: 1.0,
            horizontal_offset: 0.0,
        }
    }
}

/// Crop region in source-image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if the region has croppable dimensions.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Map a display-space selection into source-image pixel coordinates.
///
/// Coordinates are truncated to whole pixels for the downstream crop call.
/// The caller guarantees `image_scale > 0`; the zoom controls never let the
/// scale reach zero.
pub fn to_pixel_rect(selection: Rect, ctx: ScaleContext) -> CropRegion {
    let scale = ctx.image_scale;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    CropRegion::new(
        ((selection.x - ctx.horizontal_offset) / scale) as u32,
        (selection.y / scale) as u32,
        (selection.width / scale) as u32,
        (selection.height / scale) as u32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_includes_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(rect.contains(Vec2::new(110.0, 70.0)));
        assert!(rect.contains(Vec2::new(60.0, 45.0)));
        assert!(!rect.contains(Vec2::new(9.9, 45.0)));
        assert!(!rect.contains(Vec2::new(60.0, 70.1)));
    }

    #[test]
    fn clamp_point_stays_inside() {
        let rect = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(
            rect.clamp_point(Vec2::new(-50.0, 300.0)),
            Vec2::new(0.0, 300.0)
        );
        assert_eq!(
            rect.clamp_point(Vec2::new(900.0, 700.0)),
            Vec2::new(800.0, 600.0)
        );
        let inside = Vec2::new(400.0, 300.0);
        assert_eq!(rect.clamp_point(inside), inside);
    }

    #[test]
    fn clamp_axis_inverted_range_returns_lower_bound() {
        // Degenerate display rects must not panic.
        assert_eq!(clamp_axis(5.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn pixel_rect_applies_scale_and_offset() {
        // Scale 0.5, offset 20: selection (120, 40, 100, 50) maps to
        // pixel rect (200, 80, 200, 100).
        let ctx = ScaleContext {
            image_scale: 0.5,
            horizontal_offset: 20.0,
        };
        let region = to_pixel_rect(Rect::new(120.0, 40.0, 100.0, 50.0), ctx);
        assert_eq!(region, CropRegion::new(200, 80, 200, 100));
    }

    #[test]
    fn pixel_rect_truncates_to_whole_pixels() {
        let ctx = ScaleContext {
            image_scale: 1.0,
            horizontal_offset: 0.0,
        };
        let region = to_pixel_rect(Rect::new(10.7, 4.2, 99.9, 50.5), ctx);
        assert_eq!(region, CropRegion::new(10, 4, 99, 50));
    }

    #[test]
    fn pixel_rect_is_scale_invertible_within_one_pixel() {
        let ctx = ScaleContext {
            image_scale: 0.37,
            horizontal_offset: 12.5,
        };
        let selection = Rect::new(100.0, 55.0, 123.0, 77.0);
        let region = to_pixel_rect(selection, ctx);
        let round_trip = region.width as f32 * ctx.image_scale;
        assert!((round_trip - selection.width).abs() <= ctx.image_scale.recip());
    }

    #[test]
    fn crop_region_validity() {
        assert!(CropRegion::new(0, 0, 1, 1).is_valid());
        assert!(!CropRegion::new(5, 5, 0, 10).is_valid());
        assert!(!CropRegion::new(5, 5, 10, 0).is_valid());
    }
}
