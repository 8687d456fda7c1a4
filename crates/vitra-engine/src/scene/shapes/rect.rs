use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Axis-aligned fill, used for full-bleed background layers.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl DrawList {
    /// Records a filled rectangle. Empty, non-finite or fully transparent fills are dropped.
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: Paint) {
        if rect.is_empty() || !rect.is_finite() || paint.is_transparent() {
            log::trace!("skipping invisible rect {rect:?}");
            return;
        }
        self.push(z, DrawCmd::Rect(RectCmd { rect, paint }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn invisible_rects_are_dropped() {
        let mut list = DrawList::new();
        let white = Paint::Solid(Color::from_hex(0xffffff));
        list.push_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 0.0, 10.0), white.clone());
        list.push_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 10.0, 10.0), Paint::Solid(Color::transparent()));
        list.push_rect(ZIndex::new(0), Rect::new(f32::NAN, 0.0, 10.0, 10.0), white.clone());
        assert!(list.is_empty());

        list.push_rect(ZIndex::new(0), Rect::new(0.0, 0.0, 10.0, 10.0), white);
        assert_eq!(list.len(), 1);
    }
}
