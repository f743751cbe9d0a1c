use super::{DrawCmd, SortKey, ZIndex};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Commands recorded for one frame.
///
/// The editor rebuilds the list every frame; `clear` keeps the allocation.
#[derive(Debug)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    /// Whether `items` is already in paint order.
    sorted: bool,
}

impl Default for DrawList {
    fn default() -> Self {
        Self { items: Vec::new(), next_order: 0, sorted: true }
    }
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted = true;
    }

    /// Recorded items. In recording order until the first
    /// [`DrawList::iter_in_paint_order`] call sorts them.
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

    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let key = SortKey::new(z, self.next_order);
        self.next_order = self.next_order.wrapping_add(1);

        self.sorted &= self.items.last().is_none_or(|last| last.key <= key);
        self.items.push(DrawItem { key, cmd });
    }

    /// Items back to front. Sorts in place at most once per frame.
    pub fn iter_in_paint_order(&mut self) -> std::slice::Iter<'_, DrawItem> {
        if !self.sorted {
            self.items.sort_unstable_by_key(|item| item.key);
            self.sorted = true;
        }
        self.items.iter()
    }
}
