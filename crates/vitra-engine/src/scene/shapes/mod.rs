pub mod backdrop;
pub mod circle;
pub mod polygon;
pub mod rect;
pub mod rounded_rect;
pub mod shadow;
pub mod text;

use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::{Color, Paint};

pub use shadow::Shadow;

/// Stroke drawn along the outer edge of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// True when neither the fill nor the border would put any pixels down.
pub(crate) fn paints_nothing(paint: &Paint, border: Option<&Border>) -> bool {
    paint.is_transparent() && border.is_none_or(|b| b.width <= 0.0 || b.color.a <= 0.0)
}

/// Closed outline used by effects that follow a shape (shadows, backdrops).
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    RoundedRect { rect: Rect, radii: CornerRadii },
    Circle { center: Vec2, radius: f32 },
    /// Points in logical pixels, implicitly closed.
    Polygon(Vec<Vec2>),
}
