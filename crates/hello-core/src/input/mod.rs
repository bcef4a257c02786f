//! Button input abstraction.

use core::ops::BitOr;

pub mod mock;

/// Set of pressed buttons, one bit per button.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Buttons(u32);

impl Buttons {
    pub const NONE: Self = Self(0);
    pub const A: Self = Self(1 << 0);
    pub const B: Self = Self(1 << 1);
    pub const SELECT: Self = Self(1 << 2);
    pub const START: Self = Self(1 << 3);
    pub const RIGHT: Self = Self(1 << 4);
    pub const LEFT: Self = Self(1 << 5);
    pub const UP: Self = Self(1 << 6);
    pub const DOWN: Self = Self(1 << 7);
    pub const R: Self = Self(1 << 8);
    pub const L: Self = Self(1 << 9);
    pub const X: Self = Self(1 << 10);
    pub const Y: Self = Self(1 << 11);
    /// Any directional button.
    pub const ARROW: Self = Self(Self::RIGHT.0 | Self::LEFT.0 | Self::UP.0 | Self::DOWN.0);

    const ALL_BITS: u32 = 0x0FFF;

    /// Builds a set from raw pressed bits; unknown bits are dropped.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & Self::ALL_BITS)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Every button of `other` is pressed.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// At least one button of `other` is pressed.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Blocking button source.
pub trait ButtonSource {
    type Error;

    /// Blocks until the button state changes, then returns the pressed set.
    fn wait_buttons(&mut self) -> Result<Buttons, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_covers_exactly_the_dpad() {
        assert!(Buttons::ARROW.contains(Buttons::UP | Buttons::DOWN));
        assert!(Buttons::ARROW.contains(Buttons::LEFT | Buttons::RIGHT));
        assert!(!Buttons::ARROW.intersects(Buttons::A | Buttons::B | Buttons::L | Buttons::R));
    }

    #[test]
    fn unknown_bits_are_dropped() {
        assert_eq!(Buttons::from_bits(0xFFFF_F000), Buttons::NONE);
        assert_eq!(Buttons::from_bits(0x1_0002), Buttons::B);
    }
}
