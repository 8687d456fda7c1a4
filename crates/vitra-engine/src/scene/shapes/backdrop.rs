use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Outline;

/// Backdrop filter: blurs and re-saturates whatever was drawn below,
/// restricted to `outline`.
#[derive(Debug, Clone, PartialEq)]
pub struct BackdropCmd {
    pub outline: Outline,
    /// Blur radius in logical pixels. Negative values are treated as zero by consumers.
    pub blur: f32,
    /// CSS `saturate()` factor; `1.0` is identity.
    pub saturate: f32,
}

impl DrawList {
    /// Records a backdrop filter region.
    #[inline]
    pub fn push_backdrop(&mut self, z: ZIndex, outline: Outline, blur: f32, saturate: f32) {
        self.push(z, DrawCmd::Backdrop(BackdropCmd { outline, blur, saturate }));
    }
}
