use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Shadow;

/// Single-line text draw payload, centered on a point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Comma-separated family fallback list, most preferred first.
    pub font_family: String,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Center of the text block in logical pixels.
    pub center: Vec2,
    pub shadow: Option<Shadow>,
}

impl DrawList {
    /// Records a text draw command. Empty text records nothing.
    pub fn push_text(&mut self, z: ZIndex, cmd: TextCmd) {
        if cmd.text.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Text(cmd));
    }
}
