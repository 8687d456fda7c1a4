//! Lowers a [`DerivedStyle`] into the engine's [`DrawList`].
//!
//! Layers are pushed back-to-front with increasing z: background, shadow,
//! backdrop, panel, label. Everything sits inside the container's saturate
//! filter.

use vitra_engine::coords::{CornerRadii, Rect, Vec2, Viewport};
use vitra_engine::paint::{Color, ColorStop, ImageRef, LinearGradient, Paint};
use vitra_engine::scene::shapes::text::TextCmd;
use vitra_engine::scene::{Border, DrawList, Filter, Outline, Shadow, ZIndex};

use crate::media::{BackgroundPaint, FallbackGradient};
use crate::style::{BoxShadow, ClipPath, DerivedStyle, Fill, PanelStyle};

/// Records one surface into a draw list.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    pub fn paint(&mut self, style: &DerivedStyle, viewport: Viewport) {
        self.draw_list
            .push_filter(Filter::saturate(style.container.saturate_pct / 100.0));

        let full = viewport.rect();
        self.background(&style.container.background, full);
        self.background(&style.background.background, full);

        let panel = &style.panel;
        let rect = panel.rect();
        let outline = outline(panel, rect);

        // clip-path cuts the box shadow away along with everything else.
        if panel.clip == ClipPath::None {
            let z = self.next_z();
            self.draw_list.push_shadow(z, outline.clone(), shadow(panel.shadow));
        }

        let z = self.next_z();
        self.draw_list.push_backdrop(
            z,
            outline.clone(),
            panel.backdrop.blur_px,
            panel.backdrop.saturate_pct / 100.0,
        );

        self.panel(panel, outline);

        let label = &style.label;
        let z = self.next_z();
        self.draw_list.push_text(
            z,
            TextCmd {
                text: label.text.clone(),
                font_family: label.font_family.to_string(),
                size: label.font_size,
                color: label.color.to_color(),
                center: rect.center(),
                shadow: Some(shadow(label.text_shadow)),
            },
        );

        self.draw_list.pop_filter();
    }

    // ── layers ────────────────────────────────────────────────────────────

    fn background(&mut self, paint: &BackgroundPaint, rect: Rect) {
        let paint = match paint {
            BackgroundPaint::Empty => return,
            BackgroundPaint::Url(url) => Paint::Image(ImageRef::cover(url.as_str())),
            BackgroundPaint::Placeholder(p) => Paint::Image(ImageRef::cover(p.data_url.as_str())),
            BackgroundPaint::Gradient(g) => gradient(g, rect).into(),
        };
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint);
    }

    fn panel(&mut self, panel: &PanelStyle, outline: Outline) {
        let paint = match panel.fill {
            // Ring: the border carries the tint.
            Fill::Transparent => Paint::Solid(Color::transparent()),
            Fill::Color(c) => Paint::Solid(c.to_color()),
        };
        let border = Some(Border::new(panel.border.width, panel.border.color.to_color()));

        let z = self.next_z();
        match outline {
            Outline::RoundedRect { rect, radii } => {
                self.draw_list.push_rounded_rect(z, rect, radii, paint, border)
            }
            Outline::Circle { center, radius } => {
                self.draw_list.push_circle(z, center, radius, paint, border)
            }
            // The box border lies outside the clip.
            Outline::Polygon(points) => self.draw_list.push_polygon(z, points, paint, None),
        }
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

/// Visible outline of the panel box once rounding and clipping apply.
///
/// Elliptical rounding is approximated by the inscribed circle or a pill.
pub fn outline(panel: &PanelStyle, rect: Rect) -> Outline {
    match panel.clip {
        ClipPath::Circle { .. } => Outline::Circle { center: rect.center(), radius: rect.inner_radius() },
        ClipPath::Polygon(points) => {
            Outline::Polygon(points.iter().map(|&p| rect.point_at_percent(p)).collect())
        }
        ClipPath::None => {
            let shorter = rect.size.x.abs().min(rect.size.y.abs());
            let radius = panel.corner_radius.resolve(shorter).min(rect.inner_radius());
            Outline::RoundedRect { rect, radii: CornerRadii::all(radius) }
        }
    }
}

fn gradient(g: &FallbackGradient, rect: Rect) -> LinearGradient {
    let stop = |t, c: [u8; 3]| ColorStop::new(t, Color::from_srgb_u8(c[0], c[1], c[2], 255));
    LinearGradient::css_angle(rect, g.angle_deg, vec![stop(0.0, g.from), stop(1.0, g.to)])
}

fn shadow(s: BoxShadow) -> Shadow {
    Shadow {
        offset: Vec2::new(s.offset_x, s.offset_y),
        blur: s.blur,
        color: s.color.to_color(),
    }
}
