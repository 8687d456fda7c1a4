//! Derived style records, one per visual layer.
//!
//! These are output-only values. They carry CSS semantics (lengths in px or
//! percent, colors as 8-bit channels plus alpha) so the CSS fallback path and
//! the draw-list painter read the same record.

use vitra_engine::coords::{Rect, Vec2};
use vitra_engine::paint::Color;

use crate::media::BackgroundPaint;

/// `rgba()` color: 8-bit-scaled channels, left unclamped, plus alpha.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CssColor {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: f32,
}

impl CssColor {
    pub const BLACK: CssColor = CssColor::rgba(0, 0, 0, 1.0);

    pub const fn rgba(r: i32, g: i32, b: i32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(c: [i32; 3]) -> Self {
        Self::rgba(c[0], c[1], c[2], 1.0)
    }

    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Engine color, clamped into range the way a browser would.
    pub fn to_color(self) -> Color {
        let unit = |c: i32| c.clamp(0, 255) as f32 / 255.0;
        Color::from_straight(unit(self.r), unit(self.g), unit(self.b), self.a)
    }
}

/// CSS length.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
}

impl Length {
    pub const ZERO: Length = Length::Px(0.0);

    /// Logical pixels, with percentages taken of `basis`.
    pub fn resolve(self, basis: f32) -> f32 {
        match self {
            Length::Px(v) => v,
            Length::Percent(p) => basis * p / 100.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Fill {
    Transparent,
    Color(CssColor),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BorderStyle {
    pub width: f32,
    pub color: CssColor,
}

/// Single drop shadow, no spread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoxShadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: CssColor,
}

/// Clip outline in percent of the panel box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ClipPath {
    None,
    Circle { radius: Length, center: Vec2 },
    Polygon(&'static [Vec2]),
}

/// Backdrop filter of the panel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Backdrop {
    pub blur_px: f32,
    pub saturate_pct: f32,
}

/// Outer container: paints the background and saturates everything inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStyle {
    pub background: BackgroundPaint,
    pub saturate_pct: f32,
}

/// Full-bleed background layer under the panel.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundLayerStyle {
    pub background: BackgroundPaint,
}

/// The glass panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    pub width: f32,
    pub height: f32,
    /// Panel center (`left`/`top` before `translate(-50%, -50%)`).
    pub anchor: Vec2,
    pub corner_radius: Length,
    pub backdrop: Backdrop,
    pub fill: Fill,
    pub border: BorderStyle,
    pub shadow: BoxShadow,
    pub clip: ClipPath,
}

impl PanelStyle {
    /// Box as rendered, centered on the anchor.
    pub fn rect(&self) -> Rect {
        Rect::centered_at(self.anchor, Vec2::new(self.width, self.height))
    }

    /// Top-left corner as rendered: `(x - width / 2, y - height / 2)`.
    pub fn top_left(&self) -> Vec2 {
        self.rect().origin
    }
}

/// Centered label or icon glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelStyle {
    pub color: CssColor,
    pub font_size: f32,
    pub font_family: &'static str,
    pub text: String,
    pub text_shadow: BoxShadow,
}

/// Complete style of the surface for one `(uniforms, background)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedStyle {
    pub container: ContainerStyle,
    pub background: BackgroundLayerStyle,
    pub panel: PanelStyle,
    pub label: LabelStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_lengths_resolve_against_basis() {
        assert_eq!(Length::Percent(50.0).resolve(240.0), 120.0);
        assert_eq!(Length::Px(12.0).resolve(240.0), 12.0);
    }

    #[test]
    fn css_color_clamps_on_conversion() {
        let c = CssColor::rgba(510, -20, 255, 0.5).to_color();
        assert_eq!(c, Color::from_straight(1.0, 0.0, 1.0, 0.5));
    }
}
