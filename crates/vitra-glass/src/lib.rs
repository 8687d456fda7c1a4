//! Parameter-driven glass surface.
//!
//! Two halves:
//! - [`media`] resolves a background descriptor through a fallback ladder
//!   (image, BlurHash placeholder, fixed gradient). This is the only async part.
//! - [`compositor`] derives a [`style::DerivedStyle`] from the uniforms and the
//!   resolved background. Pure; rendered either as CSS ([`css`]) or as an
//!   engine draw list ([`painter`]).
//!
//! [`surface::GlassSurface`] ties them together and guards against stale
//! results.

pub mod compositor;
pub mod config;
pub mod css;
pub mod media;
pub mod painter;
pub mod shape;
pub mod style;
pub mod surface;
pub mod uniforms;

pub use compositor::derive;
pub use config::{ResolverConfig, SurfaceConfig};
pub use media::{BackgroundMedia, BackgroundPaint, MediaKind, MediaResolver, ResolvedBackground};
pub use style::DerivedStyle;
pub use surface::{GlassSurface, Lifecycle, ResolveTicket};
pub use uniforms::{GlassMode, Rgb, Shape, UniformSet};
