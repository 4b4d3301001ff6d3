//! Packed RGB [`Color`].

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u32);

impl Color {
    /// White.
    pub const WHITE: Self = Self(0x00FF_FFFF);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red component.
    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green component.
    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue component.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Components as an `[r, g, b]` array.
    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}
