use crate::bidi_class::BidiClass;
use crate::direction::Direction;

/// Maximum explicit embedding depth; UBA guarantees that it will never
/// increase in later versions of the algorithm.
pub const MAX_DEPTH: usize = 125;

/// An embedding level in `0..=MAX_DEPTH`.
/// Even levels are left-to-right, odd levels right-to-left.
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level(pub i8);

impl Level {
    pub fn direction(self) -> Direction {
        Direction::with_level(self.0)
    }

    pub fn is_rtl(self) -> bool {
        self.0 % 2 == 1
    }

    /// The strong class (L or R) matching the parity of this level;
    /// this is how sos, eos and the embedding direction are expressed.
    pub fn as_bidi_class(self) -> BidiClass {
        self.direction().as_bidi_class()
    }

    pub fn max(self, other: Level) -> Level {
        Level(self.0.max(other.0))
    }

    /// Raises the level by `amount`, as rules I1 and I2 do.
    pub(crate) fn raise(self, amount: i8) -> Level {
        let level = Level(self.0 + amount);
        debug_assert!(level.0 as usize <= MAX_DEPTH + 1, "{:?} overflows", level);
        level
    }

    /// The least odd level that is >= this one.
    pub(crate) fn round_up_to_odd(self) -> Level {
        if self.is_rtl() {
            self
        } else {
            Level(self.0 + 1)
        }
    }

    pub(crate) fn least_greater_even(self) -> Option<Level> {
        let level = if self.is_rtl() { self.0 + 1 } else { self.0 + 2 };
        Self::checked(level)
    }

    pub(crate) fn least_greater_odd(self) -> Option<Level> {
        let level = if self.is_rtl() { self.0 + 2 } else { self.0 + 1 };
        Self::checked(level)
    }

    fn checked(level: i8) -> Option<Level> {
        if level as usize > MAX_DEPTH {
            None
        } else {
            Some(Self(level))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn next_levels() {
        assert_eq!(Level(0).least_greater_odd(), Some(Level(1)));
        assert_eq!(Level(0).least_greater_even(), Some(Level(2)));
        assert_eq!(Level(1).least_greater_odd(), Some(Level(3)));
        assert_eq!(Level(1).least_greater_even(), Some(Level(2)));
        assert_eq!(Level(124).least_greater_odd(), Some(Level(125)));
        assert_eq!(Level(124).least_greater_even(), None);
        assert_eq!(Level(125).least_greater_odd(), None);
    }

    #[test]
    fn parity() {
        assert_eq!(Level(2).as_bidi_class(), BidiClass::LeftToRight);
        assert_eq!(Level(3).as_bidi_class(), BidiClass::RightToLeft);
        assert_eq!(Level(2).round_up_to_odd(), Level(3));
        assert_eq!(Level(3).round_up_to_odd(), Level(3));
    }
}
