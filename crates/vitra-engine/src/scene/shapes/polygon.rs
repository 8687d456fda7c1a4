use crate::coords::Vec2;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Border, paints_nothing};

/// Closed polygon draw payload. Points are in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Vec2>,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    /// Records a polygon draw command. Fewer than three points draws nothing.
    #[inline]
    pub fn push_polygon(&mut self, z: ZIndex, points: Vec<Vec2>, paint: Paint, border: Option<Border>) {
        if points.len() < 3 {
            log::trace!("skipping degenerate polygon with {} points", points.len());
            return;
        }
        if paints_nothing(&paint, border.as_ref()) {
            return;
        }
        self.push(z, DrawCmd::Polygon(PolygonCmd { points, paint, border }));
    }
}
