use crate::coords::{Rect, Vec2};

use super::Color;

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// `start` and `end` are positions in the same coordinate space as geometry.
/// Outside the line the edge stops extend (CSS pad behavior).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Builds the gradient line CSS uses for `linear-gradient(<angle>, ...)` over `rect`.
    ///
    /// The line passes through the rect's center and is long enough that the
    /// 0% and 100% stops land exactly on the corners perpendicular to it.
    pub fn css_angle(rect: Rect, angle_deg: f32, stops: Vec<ColorStop>) -> Self {
        let dir = Vec2::from_css_angle(angle_deg);
        let half_len = (rect.size.x * dir.x.abs() + rect.size.y * dir.y.abs()) * 0.5;
        let center = rect.center();
        Self::new(center - dir * half_len, center + dir * half_len, stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Color::from_hex(0x667eea)),
            ColorStop::new(1.0, Color::from_hex(0x764ba2)),
        ]
    }

    #[test]
    fn css_angle_135_spans_top_left_to_bottom_right_on_square() {
        let g = LinearGradient::css_angle(Rect::new(0.0, 0.0, 100.0, 100.0), 135.0, stops());
        assert!((g.start.x - 0.0).abs() < 1e-3 && (g.start.y - 0.0).abs() < 1e-3);
        assert!((g.end.x - 100.0).abs() < 1e-3 && (g.end.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn css_angle_on_wide_rect_reaches_far_corners() {
        // 135deg over 200x100: half length is (200 + 100) * sqrt(1/2) / 2.
        let g = LinearGradient::css_angle(Rect::new(0.0, 0.0, 200.0, 100.0), 135.0, stops());
        let half = 150.0 * core::f32::consts::FRAC_1_SQRT_2;
        let h = half * core::f32::consts::FRAC_1_SQRT_2;
        assert!((g.start.x - (100.0 - h)).abs() < 1e-3 && (g.start.y - (50.0 - h)).abs() < 1e-3);
        assert!((g.end.x - (100.0 + h)).abs() < 1e-3 && (g.end.y - (50.0 + h)).abs() < 1e-3);
    }

    #[test]
    fn css_angle_90_is_horizontal() {
        let g = LinearGradient::css_angle(Rect::new(0.0, 0.0, 200.0, 50.0), 90.0, stops());
        assert!((g.start.x - 0.0).abs() < 1e-3);
        assert!((g.end.x - 200.0).abs() < 1e-3);
        assert!((g.start.y - 25.0).abs() < 1e-3);
    }
}
