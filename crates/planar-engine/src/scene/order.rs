/// Paint layer. Items on a higher layer are drawn after lower ones of the same kind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Axes, grid, clip window and shapes.
    pub const CANVAS: ZIndex = ZIndex(0);
    /// Selection markers, pivot and pending clicks.
    pub const OVERLAY: ZIndex = ZIndex(10);
    /// Status swatches, always last.
    pub const HUD: ZIndex = ZIndex(20);

    /// The layer directly on top of this one.
    #[inline]
    pub const fn above(self) -> Self {
        ZIndex(self.0.saturating_add(1))
    }
}

/// Layer first, then recording order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
