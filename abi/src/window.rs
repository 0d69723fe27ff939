//! Window identity and flag types.

use core::fmt;

use bitflags::bitflags;

/// Opaque window identifier. Assigned from 1 upward and never reused while
/// the registry that issued it is alive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u32);

impl WindowId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

bitflags! {
    /// Window decoration and visibility flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        /// Draw a one-pixel frame around the window.
        const BORDERED = 1 << 0;
        /// Edges may be dragged to change the window size.
        const RESIZABLE = 1 << 1;
        /// Window takes part in rendering and hit-testing.
        const VISIBLE = 1 << 2;
        /// Window has a title bar band that acts as a drag handle.
        const TITLED = 1 << 3;

        const DECORATED = Self::BORDERED.bits() | Self::TITLED.bits();
    }
}

bitflags! {
    /// Window edges grabbed by a resize. At most one horizontal and one
    /// vertical bit are ever set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ResizeEdges: u8 {
        const LEFT = 0x01;
        const RIGHT = 0x02;
        const TOP = 0x04;
        const BOTTOM = 0x08;

        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl ResizeEdges {
    #[inline]
    pub fn is_corner(self) -> bool {
        self.intersects(Self::LEFT | Self::RIGHT) && self.intersects(Self::TOP | Self::BOTTOM)
    }
}
