use super::{DrawCmd, Filter, SortKey, ZIndex};

/// A single draw item: sort key + command + the filter in effect when it was pushed.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Color filter. `None` = draw unfiltered.
    pub filter: Option<Filter>,
}

/// Recorded draw stream for a surface.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no allocation once warmed
///
/// # Scoping
///
/// [`push_filter`](Self::push_filter) / [`pop_filter`](Self::pop_filter) scope a color
/// filter (composed with the parent).
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Top is always the effective filter, already composed with all parents.
    filter_stack: Vec<Filter>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current filter.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            filter: self.filter_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a filtered region. Calls must be balanced with [`pop_filter`](Self::pop_filter).
    #[inline]
    pub fn push_filter(&mut self, filter: Filter) {
        let effective = match self.filter_stack.last() {
            None => filter,
            Some(&parent) => parent.then(filter),
        };
        self.filter_stack.push(effective);
    }

    /// Ends the most recent filtered region.
    #[inline]
    pub fn pop_filter(&mut self) {
        debug_assert!(!self.filter_stack.is_empty(), "pop_filter called without matching push_filter");
        self.filter_stack.pop();
    }

    /// Iterates items in paint order (back-to-front) without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));
        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Rect;
    use crate::paint::{Color, Paint};

    fn solid(list: &mut DrawList, z: i32) {
        list.push_rect(ZIndex::new(z), Rect::new(0.0, 0.0, 1.0, 1.0), Paint::Solid(Color::from_hex(0xffffff)));
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let mut list = DrawList::new();
        solid(&mut list, 2);
        solid(&mut list, 0);
        solid(&mut list, 2);
        let order: Vec<u32> = list.iter_in_paint_order().map(|i| i.key.order).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }

    #[test]
    fn nested_filters_compose() {
        let mut list = DrawList::new();
        list.push_filter(Filter::saturate(2.0));
        solid(&mut list, 0);
        list.push_filter(Filter::saturate(0.5));
        solid(&mut list, 0);
        list.pop_filter();
        list.pop_filter();
        solid(&mut list, 0);
        assert_eq!(list.items()[0].filter, Some(Filter::saturate(2.0)));
        assert_eq!(list.items()[1].filter, Some(Filter::saturate(1.0)));
        assert_eq!(list.items()[2].filter, None);
    }
}
