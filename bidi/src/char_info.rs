use crate::bidi_brackets::BracketType;
use crate::bidi_class::BidiClass;
use crate::level::Level;
use crate::ucd::{CharDescription, Ucd, UnicodeData};
use crate::Error;

/// The per-character record that the passes operate on.
///
/// `bidi_class` is the class the character was created with and is
/// never modified; L1 needs it after the other rules have rewritten
/// `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidiChar {
    /// Position of the character in the caller's input.
    pub index: usize,
    pub code_point: char,
    pub description: CharDescription,
    pub bidi_class: BidiClass,
    /// The working class; rewritten by the X, W and N rules.
    pub direction: BidiClass,
    pub embedding_level: Level,
}

impl BidiChar {
    pub fn new<D: UnicodeData + ?Sized>(index: usize, code_point: char, data: &D) -> Self {
        Self::with_description(index, code_point, data.describe(code_point))
    }

    pub fn from_u32(index: usize, code_point: u32) -> Result<Self, Error> {
        let description = Ucd.describe_u32(code_point)?;
        let c = char::from_u32(code_point).ok_or(Error::InvalidCodePoint(code_point))?;
        Ok(Self::with_description(index, c, description))
    }

    /// Creates a record for a character known only by its bidi class.
    /// It is never a bracket and never a line separator.
    pub fn with_class(index: usize, bidi_class: BidiClass) -> Self {
        Self::with_description(
            index,
            char::REPLACEMENT_CHARACTER,
            CharDescription::with_class(bidi_class),
        )
    }

    pub fn with_description(index: usize, code_point: char, description: CharDescription) -> Self {
        Self {
            index,
            code_point,
            description,
            bidi_class: description.bidi_class,
            direction: description.bidi_class,
            embedding_level: Level::default(),
        }
    }

    /// Builds records for each char of `text`, numbering them from 0.
    pub fn from_text<D: UnicodeData + ?Sized>(text: &str, data: &D) -> Vec<Self> {
        text.chars()
            .enumerate()
            .map(|(index, c)| Self::new(index, c, data))
            .collect()
    }

    pub(crate) fn bracket_type(&self) -> BracketType {
        self.description.bracket_type
    }

    /// Restores the state that the caller originally supplied.
    pub fn reset(&mut self) {
        self.direction = self.bidi_class;
        self.embedding_level = Level::default();
    }
}
