//! Classification helpers over the generated `BidiClass` enum.
use crate::bidi_class::BidiClass;
use crate::Error;

impl BidiClass {
    /// LRI, RLI or FSI
    pub fn is_iso_init(self) -> bool {
        matches!(
            self,
            BidiClass::RightToLeftIsolate
                | BidiClass::LeftToRightIsolate
                | BidiClass::FirstStrongIsolate
        )
    }

    /// An isolate initiator or PDI
    pub fn is_isolate_formatter(self) -> bool {
        self.is_iso_init() || self == BidiClass::PopDirectionalIsolate
    }

    /// The classes that X9 removes from the paragraph.
    pub fn is_removed_by_x9(self) -> bool {
        matches!(
            self,
            BidiClass::RightToLeftEmbedding
                | BidiClass::LeftToRightEmbedding
                | BidiClass::RightToLeftOverride
                | BidiClass::LeftToRightOverride
                | BidiClass::PopDirectionalFormat
                | BidiClass::BoundaryNeutral
        )
    }

    /// NI in the terminology of rules N1 and N2.
    pub fn is_neutral_or_isolate(self) -> bool {
        matches!(
            self,
            BidiClass::ParagraphSeparator
                | BidiClass::SegmentSeparator
                | BidiClass::WhiteSpace
                | BidiClass::OtherNeutral
        ) || self.is_isolate_formatter()
    }

    /// L, R or AL
    pub fn is_strong(self) -> bool {
        matches!(
            self,
            BidiClass::LeftToRight | BidiClass::RightToLeft | BidiClass::ArabicLetter
        )
    }

    /// The short alias used by the UCD data files.
    pub fn abbreviation(self) -> &'static str {
        match self {
            BidiClass::ArabicLetter => "AL",
            BidiClass::ArabicNumber => "AN",
            BidiClass::BoundaryNeutral => "BN",
            BidiClass::CommonSeparator => "CS",
            BidiClass::EuropeanNumber => "EN",
            BidiClass::EuropeanSeparator => "ES",
            BidiClass::EuropeanTerminator => "ET",
            BidiClass::FirstStrongIsolate => "FSI",
            BidiClass::LeftToRight => "L",
            BidiClass::LeftToRightEmbedding => "LRE",
            BidiClass::LeftToRightIsolate => "LRI",
            BidiClass::LeftToRightOverride => "LRO",
            BidiClass::NonspacingMark => "NSM",
            BidiClass::OtherNeutral => "ON",
            BidiClass::ParagraphSeparator => "B",
            BidiClass::PopDirectionalFormat => "PDF",
            BidiClass::PopDirectionalIsolate => "PDI",
            BidiClass::RightToLeft => "R",
            BidiClass::RightToLeftEmbedding => "RLE",
            BidiClass::RightToLeftIsolate => "RLI",
            BidiClass::RightToLeftOverride => "RLO",
            BidiClass::SegmentSeparator => "S",
            BidiClass::WhiteSpace => "WS",
        }
    }
}

impl std::str::FromStr for BidiClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(match s {
            "AL" => BidiClass::ArabicLetter,
            "AN" => BidiClass::ArabicNumber,
            "BN" => BidiClass::BoundaryNeutral,
            "CS" => BidiClass::CommonSeparator,
            "EN" => BidiClass::EuropeanNumber,
            "ES" => BidiClass::EuropeanSeparator,
            "ET" => BidiClass::EuropeanTerminator,
            "FSI" => BidiClass::FirstStrongIsolate,
            "L" => BidiClass::LeftToRight,
            "LRE" => BidiClass::LeftToRightEmbedding,
            "LRI" => BidiClass::LeftToRightIsolate,
            "LRO" => BidiClass::LeftToRightOverride,
            "NSM" => BidiClass::NonspacingMark,
            "ON" => BidiClass::OtherNeutral,
            "B" => BidiClass::ParagraphSeparator,
            "PDF" => BidiClass::PopDirectionalFormat,
            "PDI" => BidiClass::PopDirectionalIsolate,
            "R" => BidiClass::RightToLeft,
            "RLE" => BidiClass::RightToLeftEmbedding,
            "RLI" => BidiClass::RightToLeftIsolate,
            "RLO" => BidiClass::RightToLeftOverride,
            "S" => BidiClass::SegmentSeparator,
            "WS" => BidiClass::WhiteSpace,
            _ => return Err(Error::UnknownBidiClass(s.to_string())),
        })
    }
}

impl std::fmt::Display for BidiClass {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.write_str(self.abbreviation())
    }
}
