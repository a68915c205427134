//! Access to the Unicode character properties that the algorithm consults.
use crate::bidi_brackets::{BracketType, BIDI_BRACKETS};
use crate::bidi_class::{BidiClass, BIDI_CLASS_RANGES};
use crate::bidi_mirroring::BIDI_MIRRORING;
use crate::Error;
pub use unicode_general_category::GeneralCategory;

/// The read-only character database used by the bidi passes.
/// `Ucd` is the built-in implementation; embedders with their own
/// property tables can supply a different one.
pub trait UnicodeData {
    fn bidi_class(&self, c: char) -> BidiClass;

    fn general_category(&self, c: char) -> GeneralCategory;

    /// Bidi_Paired_Bracket_Type
    fn bracket_type(&self, c: char) -> BracketType;

    /// Bidi_Mirroring_Glyph, or `c` itself when it has none.
    fn mirroring_glyph(&self, c: char) -> char;

    /// The singleton canonical decomposition of `c`, if it has one.
    fn canonical_equivalent(&self, c: char) -> Option<char>;

    fn describe(&self, c: char) -> CharDescription {
        CharDescription {
            bidi_class: self.bidi_class(c),
            general_category: self.general_category(c),
            bracket_type: self.bracket_type(c),
            mirroring_glyph: self.mirroring_glyph(c),
            canonical_equivalent: self.canonical_equivalent(c),
        }
    }
}

/// A snapshot of the properties of one code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharDescription {
    pub bidi_class: BidiClass,
    pub general_category: GeneralCategory,
    pub bracket_type: BracketType,
    pub mirroring_glyph: char,
    pub canonical_equivalent: Option<char>,
}

impl CharDescription {
    /// Describes a placeholder for a character known only by its class.
    pub(crate) fn with_class(bidi_class: BidiClass) -> Self {
        Self {
            bidi_class,
            general_category: GeneralCategory::OtherSymbol,
            bracket_type: BracketType::None,
            mirroring_glyph: char::REPLACEMENT_CHARACTER,
            canonical_equivalent: None,
        }
    }

    /// True for Zl and Zp, the characters that L4 may move.
    pub fn is_line_or_paragraph_separator(&self) -> bool {
        matches!(
            self.general_category,
            GeneralCategory::LineSeparator | GeneralCategory::ParagraphSeparator
        )
    }
}

/// The Unicode Character Database, from the tables generated into this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ucd;

impl Ucd {
    pub fn describe_u32(&self, code_point: u32) -> Result<CharDescription, Error> {
        let c = char::from_u32(code_point).ok_or(Error::InvalidCodePoint(code_point))?;
        Ok(self.describe(c))
    }
}

impl UnicodeData for Ucd {
    fn bidi_class(&self, c: char) -> BidiClass {
        bidi_class_for_char(c)
    }

    fn general_category(&self, c: char) -> GeneralCategory {
        unicode_general_category::get_general_category(c)
    }

    fn bracket_type(&self, c: char) -> BracketType {
        lookup_bracket(c)
            .map(|(_, bt)| bt)
            .unwrap_or(BracketType::None)
    }

    fn mirroring_glyph(&self, c: char) -> char {
        if let Some((paired, _)) = lookup_bracket(c) {
            return paired;
        }
        let cp = c as u32;
        BIDI_MIRRORING
            .binary_search_by_key(&cp, |&(from, _)| from)
            .ok()
            .and_then(|idx| char::from_u32(BIDI_MIRRORING[idx].1))
            .unwrap_or(c)
    }

    fn canonical_equivalent(&self, c: char) -> Option<char> {
        let mut decomposed = [None; 2];
        let mut count = 0;
        unicode_normalization::char::decompose_canonical(c, |d| {
            if count < decomposed.len() {
                decomposed[count] = Some(d);
            }
            count += 1;
        });
        match (count, decomposed[0]) {
            (1, Some(d)) if d != c => Some(d),
            _ => None,
        }
    }
}

pub fn bidi_class_for_char(c: char) -> BidiClass {
    let cp = c as u32;
    match BIDI_CLASS_RANGES.binary_search_by(|&(lower, upper, _)| {
        if cp < lower {
            std::cmp::Ordering::Greater
        } else if cp > upper {
            std::cmp::Ordering::Less
        } else {
            std::cmp::Ordering::Equal
        }
    }) {
        Ok(idx) => BIDI_CLASS_RANGES[idx].2,
        Err(_) => BidiClass::LeftToRight,
    }
}

/// Returns the paired bracket and the bracket type of `c`.
fn lookup_bracket(c: char) -> Option<(char, BracketType)> {
    let cp = c as u32;
    let idx = BIDI_BRACKETS
        .binary_search_by_key(&cp, |&(from, _, _)| from)
        .ok()?;
    let (_, paired, bt) = BIDI_BRACKETS[idx];
    Some((char::from_u32(paired)?, bt))
}
