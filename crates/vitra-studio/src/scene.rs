//! Scene files: one surface described as JSON.
//!
//! ```json
//! {
//!   "media": { "url": "backdrop.jpg", "type": "image", "blurhash": "LEHV6nWB2yk8pyo0adR*.7kCMdnj" },
//!   "uniforms": { "shape": { "kind": "donut", "thickness": 0.3 } },
//!   "viewport": { "width": 1280, "height": 720 }
//! }
//! ```
//!
//! Every field is optional.

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;
use vitra_engine::coords::Viewport;
use vitra_glass::{BackgroundMedia, UniformSet};

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub media: BackgroundMedia,
    pub uniforms: UniformSet,
    pub viewport: ViewportSize,
}

#[derive(Debug, Copy, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0 }
    }
}

impl From<ViewportSize> for Viewport {
    fn from(v: ViewportSize) -> Self {
        Viewport::new(v.width, v.height)
    }
}

impl Scene {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("parse scene JSON")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read scene '{}'", path.display()))?;
        Self::from_json(&json).with_context(|| format!("load scene '{}'", path.display()))
    }
}
