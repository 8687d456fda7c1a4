//! CSS rendering of a [`DerivedStyle`].
//!
//! Each layer becomes an ordered list of declarations. Numbers use Rust's
//! shortest float formatting, so `72.0` renders as `72px`.

use std::fmt;

use crate::media::{BackgroundPaint, FallbackGradient};
use crate::style::{
    Backdrop, BorderStyle, BoxShadow, ClipPath, CssColor, DerivedStyle, Fill, Length,
};

/// Ordered `property: value` pairs of one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: Vec<(&'static str, String)>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: &'static str, value: impl Into<String>) {
        self.entries.push((property, value.into()));
    }

    /// Value of the last declaration of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Declarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (property, value) in &self.entries {
            writeln!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}

/// CSS of the whole surface, one block per element.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceCss {
    pub container: Declarations,
    pub background: Declarations,
    pub panel: Declarations,
    pub label: Declarations,
    /// Badge element with its text, when shown.
    pub badge: Option<(Declarations, String)>,
}

impl SurfaceCss {
    /// Selector-style blocks, in stacking order.
    pub fn blocks(&self) -> Vec<(&'static str, &Declarations)> {
        let mut blocks = vec![
            (".glass-container", &self.container),
            (".glass-background", &self.background),
            (".glass-panel", &self.panel),
            (".glass-label", &self.label),
        ];
        if let Some((badge, _)) = &self.badge {
            blocks.push((".glass-badge", badge));
        }
        blocks
    }
}

impl fmt::Display for SurfaceCss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (selector, decls)) in self.blocks().into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{selector} {{")?;
            for (property, value) in decls.iter() {
                writeln!(f, "  {property}: {value};")?;
            }
            writeln!(f, "}}")?;
        }
        if let Some((_, text)) = &self.badge {
            writeln!(f, "/* .glass-badge text: {text} */")?;
        }
        Ok(())
    }
}

/// Renders every layer of `style`. `badge` is the fallback notice text, if shown.
pub fn render(style: &DerivedStyle, badge: Option<&str>) -> SurfaceCss {
    SurfaceCss {
        container: container(style),
        background: background_layer(style),
        panel: panel(style),
        label: label(style),
        badge: badge.map(|text| (badge_declarations(), text.to_string())),
    }
}

// ── layers ───────────────────────────────────────────────────────────────

fn container(style: &DerivedStyle) -> Declarations {
    let mut d = Declarations::new();
    d.push("position", "relative");
    d.push("overflow", "hidden");
    push_background(&mut d, &style.container.background);
    d.push("filter", format!("saturate({}%)", style.container.saturate_pct));
    d
}

fn background_layer(style: &DerivedStyle) -> Declarations {
    let mut d = Declarations::new();
    d.push("position", "absolute");
    d.push("inset", "0");
    push_background(&mut d, &style.background.background);
    d
}

fn panel(style: &DerivedStyle) -> Declarations {
    let p = &style.panel;
    let mut d = Declarations::new();
    d.push("position", "absolute");
    d.push("width", px(p.width));
    d.push("height", px(p.height));
    d.push("left", px(p.anchor.x));
    d.push("top", px(p.anchor.y));
    d.push("transform", "translate(-50%, -50%)");
    d.push("border-radius", length(p.corner_radius));
    let backdrop = backdrop_filter(p.backdrop);
    d.push("backdrop-filter", backdrop.clone());
    d.push("-webkit-backdrop-filter", backdrop);
    d.push("background-color", fill(p.fill));
    d.push("border", border(p.border));
    d.push("box-shadow", shadow(p.shadow));
    d.push("clip-path", clip_path(p.clip));
    d.push("will-change", "transform, backdrop-filter");
    d
}

fn label(style: &DerivedStyle) -> Declarations {
    let l = &style.label;
    let mut d = Declarations::new();
    d.push("color", color(l.color));
    d.push("font-size", px(l.font_size));
    d.push("font-family", l.font_family);
    d.push("text-shadow", shadow(l.text_shadow));
    d.push("text-align", "center");
    d.push("line-height", "1");
    d.push("user-select", "none");
    d
}

fn badge_declarations() -> Declarations {
    let mut d = Declarations::new();
    d.push("position", "absolute");
    d.push("bottom", "16px");
    d.push("right", "16px");
    d.push("font-size", "12px");
    d.push("opacity", "0.5");
    d.push("background-color", "rgba(0, 0, 0, 0.2)");
    d.push("color", "rgb(255, 255, 255)");
    d.push("padding", "4px 8px");
    d.push("border-radius", "4px");
    d
}

// ── values ───────────────────────────────────────────────────────────────

fn push_background(d: &mut Declarations, paint: &BackgroundPaint) {
    let Some(value) = background(paint) else {
        return;
    };
    d.push("background", value);
    d.push("background-size", "cover");
    d.push("background-position", "center");
}

/// `background` value of a paint; `None` while nothing is resolved.
pub fn background(paint: &BackgroundPaint) -> Option<String> {
    match paint {
        BackgroundPaint::Empty => None,
        BackgroundPaint::Url(url) => Some(format!("url({url})")),
        BackgroundPaint::Placeholder(p) => Some(format!("url({})", p.data_url)),
        BackgroundPaint::Gradient(g) => Some(gradient(g)),
    }
}

fn gradient(g: &FallbackGradient) -> String {
    format!(
        "linear-gradient({}deg, {} 0%, {} 100%)",
        g.angle_deg,
        hex(g.from),
        hex(g.to)
    )
}

fn hex([r, g, b]: [u8; 3]) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn px(v: f32) -> String {
    format!("{v}px")
}

fn length(l: Length) -> String {
    match l {
        Length::Px(v) if v == 0.0 => "0".to_string(),
        Length::Px(v) => px(v),
        Length::Percent(p) => format!("{p}%"),
    }
}

pub fn color(c: CssColor) -> String {
    if c.a == 1.0 {
        format!("rgb({}, {}, {})", c.r, c.g, c.b)
    } else {
        format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a)
    }
}

fn fill(f: Fill) -> String {
    match f {
        Fill::Transparent => "transparent".to_string(),
        Fill::Color(c) => color(c),
    }
}

fn border(b: BorderStyle) -> String {
    format!("{} solid {}", px(b.width), color(b.color))
}

fn shadow(s: BoxShadow) -> String {
    format!("{} {} {} {}", px(s.offset_x), px(s.offset_y), px(s.blur), color(s.color))
}

fn backdrop_filter(b: Backdrop) -> String {
    format!("blur({}) saturate({}%)", px(b.blur_px), b.saturate_pct)
}

pub fn clip_path(clip: ClipPath) -> String {
    match clip {
        ClipPath::None => "none".to_string(),
        ClipPath::Circle { radius, center } => {
            format!("circle({} at {}% {}%)", length(radius), center.x, center.y)
        }
        ClipPath::Polygon(points) => {
            let points: Vec<String> = points.iter().map(|p| format!("{}% {}%", p.x, p.y)).collect();
            format!("polygon({})", points.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::derive;
    use crate::media::{PlaceholderImage, ResolvedBackground};
    use crate::uniforms::{GlassMode, Rgb, Shape, UniformSet};

    fn css_for(u: &UniformSet, bg: &ResolvedBackground) -> SurfaceCss {
        render(&derive(u, bg), None)
    }

    #[test]
    fn fallback_gradient_css() {
        let paint = BackgroundPaint::Gradient(FallbackGradient::default());
        assert_eq!(
            background(&paint).as_deref(),
            Some("linear-gradient(135deg, #667eea 0%, #764ba2 100%)")
        );
    }

    #[test]
    fn image_backgrounds_are_url_references() {
        assert_eq!(background(&BackgroundPaint::Url("a.png".into())).as_deref(), Some("url(a.png)"));
        let placeholder = BackgroundPaint::Placeholder(PlaceholderImage {
            width: 64,
            height: 64,
            data_url: "data:image/png;base64,AAAA".into(),
        });
        assert_eq!(background(&placeholder).as_deref(), Some("url(data:image/png;base64,AAAA)"));
        assert_eq!(background(&BackgroundPaint::Empty), None);
    }

    #[test]
    fn pending_background_emits_no_background_declarations() {
        let css = css_for(&UniformSet::default(), &ResolvedBackground::pending());
        assert_eq!(css.container.get("background"), None);
        assert_eq!(css.container.get("filter"), Some("saturate(100%)"));
        assert_eq!(css.background.get("background-size"), None);
    }

    #[test]
    fn ready_background_is_cover_and_centered() {
        let bg = ResolvedBackground::ready(BackgroundPaint::Url("bg.jpg".into()));
        let css = css_for(&UniformSet::default(), &bg);
        for layer in [&css.container, &css.background] {
            assert_eq!(layer.get("background"), Some("url(bg.jpg)"));
            assert_eq!(layer.get("background-size"), Some("cover"));
            assert_eq!(layer.get("background-position"), Some("center"));
        }
    }

    #[test]
    fn dark_panel_declarations() {
        let mut u = UniformSet::default();
        u.color.mode = GlassMode::Dark;
        u.color.tint = Rgb::new(1.0, 0.5, 0.0);
        u.optics.blur = 5.0;
        u.optics.saturation = 1.5;
        u.shape = Shape::Rectangle { corner_radius: 80.0 };

        let css = css_for(&u, &ResolvedBackground::pending());
        assert_eq!(css.panel.get("background-color"), Some("rgba(77, 38, 0, 0.3)"));
        assert_eq!(css.panel.get("border"), Some("1px solid rgba(255, 255, 255, 0.2)"));
        assert_eq!(css.panel.get("border-radius"), Some("50px"));
        assert_eq!(css.panel.get("backdrop-filter"), Some("blur(15px) saturate(150%)"));
        assert_eq!(css.panel.get("-webkit-backdrop-filter"), css.panel.get("backdrop-filter"));
        assert_eq!(css.panel.get("box-shadow"), Some("0px 8px 32px rgba(0, 0, 0, 0.3)"));
        assert_eq!(css.panel.get("clip-path"), Some("none"));
        assert_eq!(css.panel.get("will-change"), Some("transform, backdrop-filter"));
    }

    #[test]
    fn donut_renders_as_ring() {
        let mut u = UniformSet::default();
        u.geometry.width = 480.0;
        u.shape = Shape::Donut { thickness: 0.3 };
        u.color.tint = Rgb::new(1.0, 1.0, 1.0);

        let css = css_for(&u, &ResolvedBackground::pending());
        assert_eq!(css.panel.get("border"), Some("72px solid rgba(204, 204, 204, 0.1)"));
        assert_eq!(css.panel.get("background-color"), Some("transparent"));
        assert_eq!(css.panel.get("border-radius"), Some("50%"));
        assert_eq!(css.panel.get("clip-path"), Some("none"));
    }

    #[test]
    fn polygon_clip_paths() {
        let mut u = UniformSet::default();
        u.shape = Shape::Hexagon;
        let css = css_for(&u, &ResolvedBackground::pending());
        assert_eq!(
            css.panel.get("clip-path"),
            Some("polygon(30% 0%, 70% 0%, 100% 50%, 70% 100%, 30% 100%, 0% 50%)")
        );
        assert_eq!(css.panel.get("border-radius"), Some("0"));

        u.shape = Shape::Star { points: 5, inner_radius: 0.5 };
        let css = css_for(&u, &ResolvedBackground::pending());
        assert_eq!(
            css.panel.get("clip-path"),
            Some("polygon(50% 0%, 61% 35%, 98% 35%, 68% 57%, 79% 91%, 50% 70%, 21% 91%, 32% 57%, 2% 35%, 39% 35%)")
        );

        u.shape = Shape::Circle;
        let css = css_for(&u, &ResolvedBackground::pending());
        assert_eq!(css.panel.get("clip-path"), Some("circle(50% at 50% 50%)"));
    }

    #[test]
    fn label_declarations() {
        let mut u = UniformSet::default();
        u.content.text = "=".into();
        u.content.icon_size = 0.64;
        let css = css_for(&u, &ResolvedBackground::pending());
        assert_eq!(css.label.get("color"), Some("rgb(255, 255, 255)"));
        assert_eq!(css.label.get("text-shadow"), Some("0px 2px 8px rgba(0, 0, 0, 0.3)"));
        assert!(css.label.get("font-family").is_some_and(|f| f.starts_with("-apple-system")));
    }

    #[test]
    fn badge_block_only_when_requested() {
        let style = derive(&UniformSet::default(), &ResolvedBackground::pending());
        assert!(render(&style, None).badge.is_none());

        let css = render(&style, Some("CSS Fallback Mode"));
        let text = css.to_string();
        assert!(text.contains(".glass-badge {"));
        assert!(text.contains("CSS Fallback Mode"));
        assert_eq!(css.blocks().len(), 5);
    }
}
