//! Background media: descriptors, resolved paint values and the fallback ladder.
//!
//! The only asynchronous part of the glass surface lives here. Everything the
//! resolver produces is a plain value; committing it into visible state is
//! the job of [`crate::surface::GlassSurface`].

mod error;
mod fetch;
mod placeholder;
mod resolver;

use serde::{Deserialize, Serialize};

pub use error::MediaError;
pub use fetch::{DataFetcher, FsFetcher, MediaFetcher, SourceFetcher};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use placeholder::{BlurHashDecoder, PlaceholderDecoder, PlaceholderError, Raster};
pub use resolver::MediaResolver;

/// Kind of background asset.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    /// Accepted, but never decoded: videos always resolve to the fallback gradient.
    Video,
}

/// Descriptor of a background asset.
///
/// Identity is the whole triple; a new identity restarts resolution.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundMedia {
    /// Remote, `file://` or plain filesystem location. Empty means "use the default".
    pub url: String,
    #[serde(alias = "type")]
    pub kind: MediaKind,
    /// Compact BlurHash placeholder, consulted only for images whose load failed.
    #[serde(alias = "blurhash", skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl BackgroundMedia {
    pub fn image(url: impl Into<String>) -> Self {
        Self { url: url.into(), kind: MediaKind::Image, placeholder: None }
    }

    pub fn video(url: impl Into<String>) -> Self {
        Self { url: url.into(), kind: MediaKind::Video, placeholder: None }
    }

    /// No asset at all; resolves straight to the fallback gradient.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, code: impl Into<String>) -> Self {
        self.placeholder = Some(code.into());
        self
    }
}

/// Fixed two-stop diagonal gradient used when nothing better is available.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FallbackGradient {
    /// CSS angle; 135 runs from the top-left corner to the bottom-right one.
    pub angle_deg: f32,
    pub from: [u8; 3],
    pub to: [u8; 3],
}

impl Default for FallbackGradient {
    fn default() -> Self {
        Self {
            angle_deg: 135.0,
            from: [0x66, 0x7e, 0xea],
            to: [0x76, 0x4b, 0xa2],
        }
    }
}

/// Decoded placeholder, ready to paint as an inline image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderImage {
    pub width: u32,
    pub height: u32,
    /// `data:image/png;base64,...`
    pub data_url: String,
}

/// A single paintable background value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BackgroundPaint {
    /// Nothing resolved yet; the caller shows its own transient state.
    #[default]
    Empty,
    /// Direct reference to the loaded asset.
    Url(String),
    Placeholder(PlaceholderImage),
    Gradient(FallbackGradient),
}

impl BackgroundPaint {
    /// Source string for image-backed paints.
    pub fn image_source(&self) -> Option<&str> {
        match self {
            BackgroundPaint::Url(url) => Some(url),
            BackgroundPaint::Placeholder(p) => Some(&p.data_url),
            BackgroundPaint::Empty | BackgroundPaint::Gradient(_) => None,
        }
    }
}

/// Output of one resolution attempt. Replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedBackground {
    pub paint: BackgroundPaint,
    pub ready: bool,
}

impl ResolvedBackground {
    /// State before any attempt finished.
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn ready(paint: BackgroundPaint) -> Self {
        Self { paint, ready: true }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.paint, BackgroundPaint::Gradient(_))
    }
}
