use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Border, paints_nothing};

#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a circle. Non-positive radii and invisible paints draw nothing.
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        paint: Paint,
        border: Option<Border>,
    ) {
        if radius.is_nan() || radius <= 0.0 || paints_nothing(&paint, border.as_ref()) {
            log::trace!("skipping invisible circle at {center:?}");
            return;
        }
        self.push(z, DrawCmd::Circle(CircleCmd { center, radius, paint, border }));
    }
}
