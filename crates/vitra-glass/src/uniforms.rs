//! Declarative inputs of the glass surface.
//!
//! "Uniform" is shader vocabulary; here every field is a plain value. Nothing
//! is validated: out-of-range numbers flow through the derivation and produce
//! degenerate but well-defined styles.

use serde::{Deserialize, Serialize};
use vitra_engine::coords::Vec2;

/// Color with channels expected in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Channels as 8-bit values after multiplying by `factor`, rounded half-up.
    ///
    /// Out-of-range inputs are not clamped; `2.0` yields `510`.
    pub fn to_rgb8_scaled(self, factor: f32) -> [i32; 3] {
        [self.r, self.g, self.b].map(|c| round_half_up(c * 255.0 * factor))
    }
}

fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// Tint-opacity blending formula of the panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlassMode {
    /// Brighter, more transparent panel with a lighter border.
    #[default]
    Light,
    /// Darker tint at higher opacity with a fainter border.
    Dark,
}

/// Size and anchor of the panel, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    /// Anchor the panel is centered on; tracks the pointer when following it.
    pub x: f32,
    pub y: f32,
}

impl Geometry {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn anchor(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self { width: 300.0, height: 200.0, x: 400.0, y: 300.0 }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Optics {
    /// 1.0 keeps colors unchanged.
    pub saturation: f32,
    /// Backdrop blur in units of 3px.
    pub blur: f32,
    /// Only meaningful to a shader backend.
    pub distortion: f32,
    /// Only meaningful to a shader backend.
    pub chromatic_aberration: f32,
}

impl Default for Optics {
    fn default() -> Self {
        Self { saturation: 1.0, blur: 5.0, distortion: 0.5, chromatic_aberration: 0.0 }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorUniforms {
    pub tint: Rgb,
    pub mode: GlassMode,
    pub icon_color: Rgb,
}

impl Default for ColorUniforms {
    fn default() -> Self {
        Self { tint: Rgb::WHITE, mode: GlassMode::Light, icon_color: Rgb::WHITE }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowUniforms {
    /// Alpha of the black shadow, expected in `[0, 1]`.
    pub intensity: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
}

impl Default for ShadowUniforms {
    fn default() -> Self {
        Self { intensity: 0.3, offset_x: 0.0, offset_y: 8.0, blur: 32.0 }
    }
}

/// Outline of the panel. Each variant carries only the fields it uses.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Rectangle {
        /// Visually capped at 50px.
        corner_radius: f32,
    },
    Circle,
    Hexagon,
    Star {
        /// Accepted but not consulted: the star outline is a fixed five-point polygon.
        points: u32,
        /// Fraction of the outer radius; accepted but not consulted.
        inner_radius: f32,
    },
    Donut {
        /// Ring thickness as a fraction of the panel width.
        thickness: f32,
    },
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rectangle { .. } => "rectangle",
            Shape::Circle => "circle",
            Shape::Hexagon => "hexagon",
            Shape::Star { .. } => "star",
            Shape::Donut { .. } => "donut",
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Rectangle { corner_radius: 24.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    /// Label rendered verbatim; empty renders nothing.
    pub text: String,
    /// Font size in units of 100px.
    pub icon_size: f32,
}

impl Default for Content {
    fn default() -> Self {
        Self { text: String::new(), icon_size: 0.5 }
    }
}

/// Complete configuration of the glass surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UniformSet {
    pub geometry: Geometry,
    pub optics: Optics,
    pub color: ColorUniforms,
    pub shadow: ShadowUniforms,
    pub shape: Shape,
    pub content: Content,
}

impl UniformSet {
    /// Same uniforms with the panel anchored at `pos`.
    pub fn anchored_at(mut self, pos: Vec2) -> Self {
        self.geometry.x = pos.x;
        self.geometry.y = pos.y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_channels_round_half_up() {
        assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_rgb8_scaled(1.0), [255, 128, 0]);
        assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_rgb8_scaled(0.3), [77, 38, 0]);
        assert_eq!(Rgb::new(0.2, 0.2, 0.2).to_rgb8_scaled(0.8), [41, 41, 41]);
    }

    #[test]
    fn scaled_channels_are_not_clamped() {
        assert_eq!(Rgb::new(2.0, -0.2, 0.0).to_rgb8_scaled(1.0), [510, -51, 0]);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{
            "geometry": { "width": 480 },
            "color": { "mode": "dark" },
            "shape": { "kind": "donut", "thickness": 0.3 }
        }"#;
        let u: UniformSet = serde_json::from_str(json).unwrap();
        assert_eq!(u.geometry.width, 480.0);
        assert_eq!(u.geometry.height, Geometry::default().height);
        assert_eq!(u.color.mode, GlassMode::Dark);
        assert_eq!(u.shape, Shape::Donut { thickness: 0.3 });
        assert_eq!(u.optics, Optics::default());
    }

    #[test]
    fn star_parameters_are_kept_in_the_schema() {
        let u: UniformSet =
            serde_json::from_str(r#"{ "shape": { "kind": "star", "points": 7, "inner_radius": 0.4 } }"#).unwrap();
        assert_eq!(u.shape, Shape::Star { points: 7, inner_radius: 0.4 });
        assert_eq!(u.shape.name(), "star");
    }

    #[test]
    fn anchored_at_moves_only_the_anchor() {
        let u = UniformSet::default().anchored_at(Vec2::new(12.0, 34.0));
        assert_eq!(u.geometry.anchor(), Vec2::new(12.0, 34.0));
        assert_eq!(u.geometry.size(), UniformSet::default().geometry.size());
    }
}
