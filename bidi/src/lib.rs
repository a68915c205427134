//! An implementation of the Unicode Bidirectional Algorithm (UAX #9,
//! revision 13) including the paired bracket rules of N0.
//!
//! The passes operate on a buffer of [`BidiChar`] records which is
//! resolved and reordered in place:
//!
//! ```
//! use bidi_engine::{resolve, BidiChar, BidiContext, Direction, Ucd};
//!
//! let mut chars = BidiChar::from_text("abc \u{05d0}\u{05d1}", &Ucd);
//! let (len, directions) = resolve(&mut chars, &BidiContext::default(), &Ucd);
//! assert_eq!(len, 6);
//! assert_eq!(directions, vec![Direction::LeftToRight]);
//! let visual: String = chars.iter().map(|c| c.code_point).collect();
//! assert_eq!(visual, "abc \u{05d1}\u{05d0}");
//! ```
//!
//! [`reorder`] does the same for arbitrary items that can be keyed by a
//! code point.

mod bidi_brackets;
mod bidi_class;
mod bidi_mirroring;
mod char_info;
mod class;
mod context;
mod direction;
mod error;
mod level;
mod level_stack;
mod reorder;
mod ucd;

pub mod brackets;
pub mod explicit;
pub mod implicit;
pub mod line;
pub mod neutral;
pub mod paragraph;
pub mod sequence;
pub mod weak;

pub use bidi_brackets::BracketType;
pub use bidi_class::BidiClass;
pub use char_info::BidiChar;
pub use context::{BidiContext, ParagraphDirectionHint};
pub use direction::Direction;
pub use error::Error;
pub use level::{Level, MAX_DEPTH};
pub use line::{visual_runs, VisualRun};
pub use paragraph::{reorder_lines, resolve, resolve_paragraph};
pub use reorder::{control_filter, paragraph_direction, reorder};
pub use sequence::{IsolatedRunSequence, LevelRun};
pub use ucd::{bidi_class_for_char, CharDescription, GeneralCategory, Ucd, UnicodeData};
