//! `(UniformSet, ResolvedBackground) -> DerivedStyle`.
//!
//! Pure and total: no I/O, no state, no validation. Calling [`derive`] twice
//! with equal inputs yields equal outputs.

use crate::media::ResolvedBackground;
use crate::shape::{self, ShapeOutline};
use crate::style::{
    Backdrop, BackgroundLayerStyle, BorderStyle, BoxShadow, ContainerStyle, CssColor,
    DerivedStyle, Fill, LabelStyle, PanelStyle,
};
use crate::uniforms::{ColorUniforms, GlassMode, Rgb, UniformSet};

pub const LABEL_FONT_FAMILY: &str =
    r#"-apple-system, BlinkMacSystemFont, "SF Pro Display", system-ui, sans-serif"#;

/// Label shadow, independent of every uniform.
pub const LABEL_TEXT_SHADOW: BoxShadow = BoxShadow {
    offset_x: 0.0,
    offset_y: 2.0,
    blur: 8.0,
    color: CssColor::rgba(0, 0, 0, 0.3),
};

/// Backdrop blur px per unit of the `blur` uniform.
const BLUR_SCALE: f32 = 3.0;
/// Label font px per unit of `icon_size`.
const ICON_FONT_SCALE: f32 = 100.0;

pub fn derive(uniforms: &UniformSet, background: &ResolvedBackground) -> DerivedStyle {
    let saturate_pct = uniforms.optics.saturation * 100.0;

    DerivedStyle {
        container: ContainerStyle { background: background.paint.clone(), saturate_pct },
        background: BackgroundLayerStyle { background: background.paint.clone() },
        panel: panel(uniforms, saturate_pct),
        label: label(uniforms),
    }
}

fn panel(uniforms: &UniformSet, saturate_pct: f32) -> PanelStyle {
    let geometry = &uniforms.geometry;
    let tint = tint_fill(&uniforms.color);
    let ShapeOutline { corner_radius, clip, ring_width } =
        shape::outline(&uniforms.shape, geometry.width);

    let (fill, border) = match ring_width {
        // The ring is the border itself, painted in the tint.
        Some(width) => (Fill::Transparent, BorderStyle { width, color: tint }),
        None => (Fill::Color(tint), edge_border(uniforms.color.mode)),
    };

    let size = geometry.size();
    PanelStyle {
        width: size.x,
        height: size.y,
        anchor: geometry.anchor(),
        corner_radius,
        backdrop: Backdrop { blur_px: uniforms.optics.blur * BLUR_SCALE, saturate_pct },
        fill,
        border,
        shadow: BoxShadow {
            offset_x: uniforms.shadow.offset_x,
            offset_y: uniforms.shadow.offset_y,
            blur: uniforms.shadow.blur,
            color: CssColor::BLACK.with_alpha(uniforms.shadow.intensity),
        },
        clip,
    }
}

/// Tint fill of the panel: dark mode is deeper and more opaque.
pub fn tint_fill(color: &ColorUniforms) -> CssColor {
    match color.mode {
        GlassMode::Dark => CssColor::rgb(color.tint.to_rgb8_scaled(0.3)).with_alpha(0.3),
        GlassMode::Light => CssColor::rgb(color.tint.to_rgb8_scaled(0.8)).with_alpha(0.1),
    }
}

fn edge_border(mode: GlassMode) -> BorderStyle {
    let alpha = match mode {
        GlassMode::Dark => 0.2,
        GlassMode::Light => 0.3,
    };
    BorderStyle { width: 1.0, color: CssColor::rgba(255, 255, 255, alpha) }
}

fn label(uniforms: &UniformSet) -> LabelStyle {
    LabelStyle {
        color: label_color(uniforms.color.icon_color),
        font_size: uniforms.content.icon_size * ICON_FONT_SCALE,
        font_family: LABEL_FONT_FAMILY,
        text: uniforms.content.text.clone(),
        text_shadow: LABEL_TEXT_SHADOW,
    }
}

fn label_color(c: Rgb) -> CssColor {
    CssColor::rgb(c.to_rgb8_scaled(1.0))
}
