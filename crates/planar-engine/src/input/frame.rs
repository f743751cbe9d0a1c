use std::collections::HashSet;
use std::hash::Hash;

use super::types::{InputEvent, Key, MouseButton};

/// Press and release edges of one kind of input, for a single frame.
#[derive(Debug, Clone)]
pub struct Edges<T> {
    pressed: HashSet<T>,
    released: HashSet<T>,
}

impl<T: Eq + Hash> Edges<T> {
    #[inline]
    pub fn pressed(&self, item: &T) -> bool {
        self.pressed.contains(item)
    }

    #[inline]
    pub fn released(&self, item: &T) -> bool {
        self.released.contains(item)
    }

    pub(super) fn press(&mut self, item: T) {
        self.pressed.insert(item);
    }

    pub(super) fn release(&mut self, item: T) {
        self.released.insert(item);
    }

    fn clear(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}

impl<T> Default for Edges<T> {
    fn default() -> Self {
        Self { pressed: HashSet::new(), released: HashSet::new() }
    }
}

/// What happened to one window's input since its last frame.
///
/// Held state lives in [`super::InputState`]; this only carries deltas and
/// is cleared by the runtime after every frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Translated events in arrival order.
    pub events: Vec<InputEvent>,
    pub keys: Edges<Key>,
    pub buttons: Edges<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys.clear();
        self.buttons.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
