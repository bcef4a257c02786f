//! 24-bit colours with a transparent sentinel.

/// Packed `0x00RRGGBB` colour, or [`Color::TRANSPARENT`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Self = Self::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Self = Self::rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Self = Self::rgb(0x00, 0x00, 0xFF);
    /// Leaves the destination pixel untouched when used as a background.
    pub const TRANSPARENT: Self = Self(0xFF00_0000);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn is_transparent(self) -> bool {
        self.0 == Self::TRANSPARENT.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Returns the framebuffer byte order. Transparent maps to black.
    pub const fn to_bgr(self) -> [u8; 3] {
        if self.is_transparent() {
            return [0, 0, 0];
        }
        [self.b(), self.g(), self.r()]
    }

    pub const fn from_bgr(bgr: [u8; 3]) -> Self {
        Self::rgb(bgr[2], bgr[1], bgr[0])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgr_order_is_reversed_from_rgb() {
        assert_eq!(Color::rgb(0x11, 0x22, 0x33).to_bgr(), [0x33, 0x22, 0x11]);
        assert_eq!(Color::from_bgr([0x33, 0x22, 0x11]), Color::rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn transparent_is_distinct_from_every_rgb_value() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(!Color::BLACK.is_transparent());
        assert!(!Color::rgb(0xFF, 0xFF, 0xFF).is_transparent());
        assert_eq!(Color::TRANSPARENT.to_bgr(), [0, 0, 0]);
    }
}
