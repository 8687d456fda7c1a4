//! Paint model shared between the glass surface and draw-list consumers.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - paint sources (solid, gradients, images referenced by URL)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient};

/// Reference to an image a backend loads on its own.
///
/// `source` is either a remote/file URL or an inline `data:` URL. The image
/// scales to cover the geometry it paints, centered; overflow is cropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub source: String,
}

impl ImageRef {
    #[inline]
    pub fn cover(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }
}

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    Image(ImageRef),
}

impl Paint {
    #[inline]
    pub fn is_transparent(&self) -> bool {
        matches!(self, Paint::Solid(c) if c.a <= 0.0)
    }
}

impl From<Color> for Paint {
    #[inline]
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(g: LinearGradient) -> Self {
        Paint::LinearGradient(g)
    }
}
