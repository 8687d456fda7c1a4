use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` whose center sits on `center`.
    ///
    /// The origin is `center - size / 2`; negative sizes are kept as-is so
    /// degenerate inputs stay visible to callers.
    #[inline]
    pub fn centered_at(center: Vec2, size: Vec2) -> Self {
        Self { origin: center - size * 0.5, size }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Half of the shorter side; the radius of the largest inscribed circle.
    #[inline]
    pub fn inner_radius(self) -> f32 {
        self.size.x.abs().min(self.size.y.abs()) * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Maps a point given in percent of this rectangle (0–100 on each axis)
    /// to logical pixels.
    #[inline]
    pub fn point_at_percent(self, pct: Vec2) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x * pct.x / 100.0,
            self.origin.y + self.size.y * pct.y / 100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── centered_at ───────────────────────────────────────────────────────

    #[test]
    fn centered_at_offsets_by_half_size() {
        let rect = Rect::centered_at(Vec2::new(300.0, 200.0), Vec2::new(480.0, 240.0));
        assert_eq!(rect.origin, Vec2::new(60.0, 80.0));
        assert_eq!(rect.center(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn centered_at_allows_negative_origin() {
        let rect = Rect::centered_at(Vec2::new(10.0, 10.0), Vec2::new(100.0, 40.0));
        assert_eq!(rect.origin, Vec2::new(-40.0, -10.0));
    }

    // ── inner_radius / percent mapping ────────────────────────────────────

    #[test]
    fn inner_radius_uses_shorter_side() {
        assert_eq!(r(0.0, 0.0, 200.0, 120.0).inner_radius(), 60.0);
    }

    #[test]
    fn point_at_percent_maps_corners() {
        let rect = r(10.0, 20.0, 200.0, 100.0);
        assert_eq!(rect.point_at_percent(Vec2::new(0.0, 0.0)), Vec2::new(10.0, 20.0));
        assert_eq!(rect.point_at_percent(Vec2::new(50.0, 100.0)), Vec2::new(110.0, 120.0));
    }
}
