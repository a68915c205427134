use crate::bidi_class::BidiClass;

/// The resolved direction of a paragraph or a run of text.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    pub fn with_level(level: i8) -> Self {
        if level % 2 == 1 {
            Self::RightToLeft
        } else {
            Self::LeftToRight
        }
    }

    /// Maps a resolved class to a direction. Only R, AL, EN and AN are
    /// right-to-left; this is the mapping N0 uses for enclosed strongs.
    pub fn from_class(bc: BidiClass) -> Option<Self> {
        match bc {
            BidiClass::LeftToRight => Some(Self::LeftToRight),
            BidiClass::RightToLeft
            | BidiClass::ArabicLetter
            | BidiClass::EuropeanNumber
            | BidiClass::ArabicNumber => Some(Self::RightToLeft),
            _ => None,
        }
    }

    pub fn as_bidi_class(self) -> BidiClass {
        match self {
            Self::RightToLeft => BidiClass::RightToLeft,
            Self::LeftToRight => BidiClass::LeftToRight,
        }
    }
}
