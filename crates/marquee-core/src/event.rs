// File: crates/marquee-core/src/event.rs
// Summary: Input event model: pointer identity, button masks, keys.

use crate::geometry::Point;

/// Identity of one pointer (mouse cursor, finger, pen tip) across its
/// down/move/up lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerType {
    Mouse,
    Touch,
    Pen,
}

/// Bitmask of currently pressed buttons (primary = bit 0, secondary = bit 1,
/// auxiliary = bit 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Buttons(pub u32);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const PRIMARY: Buttons = Buttons(1);
    pub const SECONDARY: Buttons = Buttons(2);
    pub const AUXILIARY: Buttons = Buttons(4);

    pub const fn union(self, other: Buttons) -> Buttons {
        Buttons(self.0 | other.0)
    }

    pub const fn intersects(self, other: Buttons) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Buttons) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Buttons) {
        self.0 &= !other.0;
    }
}

/// One pointer event as delivered by the host. `position` is in viewport
/// coordinates; conversion to surface-local space happens per event against
/// the surface's current bounds.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub pointer_id: PointerId,
    pub pointer_type: PointerType,
    pub buttons: Buttons,
    pub position: Point,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Character(char),
}

#[derive(Clone, Copy, Debug)]
pub struct KeyEvent {
    pub key: Key,
}

/// Everything a chart host feeds into its interaction set.
#[derive(Clone, Copy, Debug)]
pub enum InputEvent {
    PointerDown(PointerEvent),
    PointerUp(PointerEvent),
    PointerMove(PointerEvent),
    PointerCancel(PointerEvent),
    KeyDown(KeyEvent),
}
