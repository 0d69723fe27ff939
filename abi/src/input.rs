//! Pointer input types.

use bitflags::bitflags;

bitflags! {
    /// Button state as reported in the low three bits of a PS/2 status byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        const LEFT = 0x01;
        const RIGHT = 0x02;
        const MIDDLE = 0x04;
    }
}

impl MouseButtons {
    /// Extracts the button bits from a packet's first byte.
    #[inline]
    pub fn from_status(byte: u8) -> Self {
        Self::from_bits_truncate(byte & 0x07)
    }

    /// Buttons held now that were not held in `previous`.
    #[inline]
    pub fn pressed_since(self, previous: Self) -> Self {
        self & !previous
    }

    /// Buttons held in `previous` that are no longer held.
    #[inline]
    pub fn released_since(self, previous: Self) -> Self {
        previous & !self
    }
}

/// One decoded pointer update in screen coordinates, carrying the position
/// it moved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerSample {
    pub x: i32,
    pub y: i32,
    pub buttons: MouseButtons,
    pub prev_x: i32,
    pub prev_y: i32,
}

impl PointerSample {
    #[inline]
    pub fn moved(&self) -> bool {
        self.x != self.prev_x || self.y != self.prev_y
    }
}
