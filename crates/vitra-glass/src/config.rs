//! Configuration for the resolver and the surface.
//!
//! Plain structs with defaults matching the stock glass surface; adjust with
//! the builder-style setters.

use crate::media::FallbackGradient;

/// Text of the badge shown once the surface is ready.
pub const DEFAULT_FALLBACK_BADGE: &str = "CSS Fallback Mode";

/// Tunables for [`crate::media::MediaResolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    /// Raster size placeholders decode into.
    pub placeholder_width: u32,
    pub placeholder_height: u32,
    /// Contrast factor passed to the placeholder decoder.
    pub punch: f32,
    /// Last rung of the ladder.
    pub fallback: FallbackGradient,
}

impl ResolverConfig {
    pub fn placeholder_size(mut self, width: u32, height: u32) -> Self {
        self.placeholder_width = width;
        self.placeholder_height = height;
        self
    }

    pub fn punch(mut self, punch: f32) -> Self {
        self.punch = punch;
        self
    }

    pub fn fallback(mut self, fallback: FallbackGradient) -> Self {
        self.fallback = fallback;
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            placeholder_width: 64,
            placeholder_height: 64,
            punch: 1.0,
            fallback: FallbackGradient::default(),
        }
    }
}

/// Tunables for [`crate::surface::GlassSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    /// Static badge shown once the background is ready. `None` hides it.
    pub fallback_badge: Option<String>,
}

impl SurfaceConfig {
    pub fn badge(mut self, text: impl Into<String>) -> Self {
        self.fallback_badge = Some(text.into());
        self
    }

    pub fn without_badge(mut self) -> Self {
        self.fallback_badge = None;
        self
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { fallback_badge: Some(DEFAULT_FALLBACK_BADGE.to_string()) }
    }
}
