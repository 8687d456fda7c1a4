use crate::coords::{CornerRadii, Rect};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Border, paints_nothing};

/// Rounded box with an optional inside border. A transparent fill with a
/// thick border draws a ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
    pub border: Option<Border>,
}

impl DrawList {
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        radii: CornerRadii,
        paint: Paint,
        border: Option<Border>,
    ) {
        if rect.is_empty() || !rect.is_finite() || paints_nothing(&paint, border.as_ref()) {
            log::trace!("skipping invisible rounded rect {rect:?}");
            return;
        }
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd { rect, radii, paint, border }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn transparent_ring_is_kept() {
        let mut list = DrawList::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        list.push_rounded_rect(
            ZIndex::new(0),
            rect,
            CornerRadii::pill(rect),
            Paint::Solid(Color::transparent()),
            Some(Border::new(20.0, Color::from_hex(0xcccccc))),
        );
        assert_eq!(list.len(), 1);

        list.push_rounded_rect(ZIndex::new(0), rect, CornerRadii::all(0.0), Paint::Solid(Color::transparent()), None);
        assert_eq!(list.len(), 1);
    }
}
