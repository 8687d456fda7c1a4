use crate::scene::shapes::backdrop::BackdropCmd;
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::polygon::PolygonCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::shadow::ShadowCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
    Polygon(PolygonCmd),
    Text(TextCmd),
    Shadow(ShadowCmd),
    Backdrop(BackdropCmd),
}

impl DrawCmd {
    /// Short, stable name used by debug dumps.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Rect(_) => "rect",
            DrawCmd::RoundedRect(_) => "rounded_rect",
            DrawCmd::Circle(_) => "circle",
            DrawCmd::Polygon(_) => "polygon",
            DrawCmd::Text(_) => "text",
            DrawCmd::Shadow(_) => "shadow",
            DrawCmd::Backdrop(_) => "backdrop",
        }
    }
}
