use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Outline;

/// Drop shadow parameters (CSS `box-shadow` / `text-shadow` without spread).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub offset: Vec2,
    /// Blur radius in logical pixels.
    pub blur: f32,
    pub color: Color,
}

/// Shadow cast by an outline.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowCmd {
    pub outline: Outline,
    pub shadow: Shadow,
}

impl DrawList {
    /// Records a drop shadow. Fully transparent shadows record nothing.
    #[inline]
    pub fn push_shadow(&mut self, z: ZIndex, outline: Outline, shadow: Shadow) {
        if shadow.color.a <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::Shadow(ShadowCmd { outline, shadow }));
    }
}
