//! Per-shape outline derivation.
//!
//! Every variant of [`Shape`] has its own pure function producing a
//! [`ShapeOutline`]; [`outline`] only dispatches. A donut is drawn as a thick
//! circular border because subtracting the hole with a clip is not available
//! to the CSS fallback path.

use vitra_engine::coords::Vec2;

use crate::style::{ClipPath, Length};
use crate::uniforms::Shape;

/// Largest visible rectangle corner radius in px.
pub const MAX_CORNER_RADIUS: f32 = 50.0;

/// Regular hexagon with flat top and bottom, in percent of the panel box.
pub const HEXAGON: [Vec2; 6] = [
    Vec2::new(30.0, 0.0),
    Vec2::new(70.0, 0.0),
    Vec2::new(100.0, 50.0),
    Vec2::new(70.0, 100.0),
    Vec2::new(30.0, 100.0),
    Vec2::new(0.0, 50.0),
];

/// Five-point star (outer and inner vertices alternating), in percent of the panel box.
pub const STAR: [Vec2; 10] = [
    Vec2::new(50.0, 0.0),
    Vec2::new(61.0, 35.0),
    Vec2::new(98.0, 35.0),
    Vec2::new(68.0, 57.0),
    Vec2::new(79.0, 91.0),
    Vec2::new(50.0, 70.0),
    Vec2::new(21.0, 91.0),
    Vec2::new(32.0, 57.0),
    Vec2::new(2.0, 35.0),
    Vec2::new(39.0, 35.0),
];

const CENTER: Vec2 = Vec2::new(50.0, 50.0);

/// How a shape is carried by the panel: rounding, clip, or a ring border.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeOutline {
    pub corner_radius: Length,
    pub clip: ClipPath,
    /// Border width of a ring; `Some` turns the panel into a hollow circle.
    pub ring_width: Option<f32>,
}

/// Outline for `shape` on a panel `width` px wide.
pub fn outline(shape: &Shape, width: f32) -> ShapeOutline {
    match *shape {
        Shape::Rectangle { corner_radius } => rectangle(corner_radius),
        Shape::Circle => circle(),
        Shape::Hexagon => hexagon(),
        Shape::Star { .. } => star(),
        Shape::Donut { thickness } => donut(width, thickness),
    }
}

fn rectangle(corner_radius: f32) -> ShapeOutline {
    ShapeOutline {
        corner_radius: Length::Px(corner_radius.min(MAX_CORNER_RADIUS)),
        clip: ClipPath::None,
        ring_width: None,
    }
}

fn circle() -> ShapeOutline {
    ShapeOutline {
        corner_radius: Length::Percent(50.0),
        clip: ClipPath::Circle { radius: Length::Percent(50.0), center: CENTER },
        ring_width: None,
    }
}

fn hexagon() -> ShapeOutline {
    ShapeOutline { corner_radius: Length::ZERO, clip: ClipPath::Polygon(&HEXAGON), ring_width: None }
}

fn star() -> ShapeOutline {
    ShapeOutline { corner_radius: Length::ZERO, clip: ClipPath::Polygon(&STAR), ring_width: None }
}

fn donut(width: f32, thickness: f32) -> ShapeOutline {
    ShapeOutline {
        corner_radius: Length::Percent(50.0),
        clip: ClipPath::None,
        ring_width: Some(width * thickness * 0.5),
    }
}
