//! Colour values in 0xAARRGGBB layout.

/// Construct an ARGB color value: 0xAARRGGBB (alpha high byte, blue low byte).
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Construct an opaque ARGB color value (alpha=0xFF).
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    rgba(r, g, b, 0xFF)
}

/// A 32-bit ARGB colour as stored in window pixel buffers.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color32(pub u32);

impl Color32 {
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    /// Opaque colour from a 0xRRGGBB literal.
    #[inline]
    pub const fn from_rgb_hex(hex: u32) -> Self {
        Self(0xFF00_0000 | (hex & 0x00FF_FFFF))
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(rgb(r, g, b))
    }

    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}
