//! Paired brackets: BD16 and rule N0.
use crate::bidi_brackets::BracketType;
use crate::bidi_class::BidiClass;
use crate::char_info::BidiChar;
use crate::direction::Direction;
use crate::sequence::IsolatedRunSequence;
use crate::ucd::UnicodeData;
use log::trace;

/// Positions, within an isolated run sequence, of a matched pair of brackets.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BracketPair {
    pub opening: usize,
    pub closing: usize,
}

impl std::fmt::Debug for BracketPair {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "Pair{{{},{}}}", self.opening, self.closing)
    }
}

pub const MAX_PAIRING_DEPTH: usize = 63;

#[derive(Clone, Copy)]
struct Opener {
    /// The closing bracket that would match this opener
    closing_bracket: char,
    position: usize,
}

/// The fixed size stack of BD16.
struct BracketStack {
    openers: [Opener; MAX_PAIRING_DEPTH],
    depth: usize,
}

impl BracketStack {
    fn new() -> Self {
        Self {
            openers: [Opener {
                closing_bracket: '\0',
                position: 0,
            }; MAX_PAIRING_DEPTH],
            depth: 0,
        }
    }

    /// Returns false when the stack is full.
    fn push(&mut self, closing_bracket: char, position: usize) -> bool {
        if self.depth == MAX_PAIRING_DEPTH {
            return false;
        }
        self.openers[self.depth] = Opener {
            closing_bracket,
            position,
        };
        self.depth += 1;
        true
    }

    /// Finds the nearest opener that `c` closes; pops it and every opener
    /// above it and returns its position.
    fn pop_matching(&mut self, c: &BidiChar) -> Option<usize> {
        let equivalent = c.description.canonical_equivalent;
        let depth = self.openers[..self.depth].iter().rposition(|opener| {
            opener.closing_bracket == c.code_point || Some(opener.closing_bracket) == equivalent
        })?;
        self.depth = depth;
        Some(self.openers[depth].position)
    }
}

/// BD16: locate the bracket pairs of a sequence.
///
/// Only characters whose current type is ON take part. An opener is
/// remembered by the bracket that would close it; where the opener has
/// a canonical equivalent (U+2329 and U+3008 for example) the equivalent's
/// mirror is used so that either form of closer matches.
/// If more than MAX_PAIRING_DEPTH openers are pending, discovery stops and
/// only the pairs found so far are returned.
pub fn locate_brackets<D: UnicodeData + ?Sized>(
    chars: &[BidiChar],
    seq: &IsolatedRunSequence,
    data: &D,
) -> Vec<BracketPair> {
    let mut stack = BracketStack::new();
    let mut pairs = vec![];

    for (pos, &idx) in seq.indices.iter().enumerate() {
        let c = &chars[idx];
        if c.direction != BidiClass::OtherNeutral {
            continue;
        }
        match c.bracket_type() {
            BracketType::Open => {
                let closing_bracket = match c.description.canonical_equivalent {
                    Some(equivalent) => data.mirroring_glyph(equivalent),
                    None => c.description.mirroring_glyph,
                };
                if !stack.push(closing_bracket, pos) {
                    trace!("bracket stack overflow at {}", pos);
                    break;
                }
            }
            BracketType::Close => {
                if let Some(opening) = stack.pop_matching(c) {
                    pairs.push(BracketPair {
                        opening,
                        closing: pos,
                    });
                }
            }
            BracketType::None => {}
        }
    }

    pairs.sort();
    trace!("bracket pairs: {:?}", pairs);
    pairs
}

/// The strong direction N0 sees in a resolved type; EN and AN count as R.
fn strong_direction(bc: BidiClass) -> Option<BidiClass> {
    Direction::from_class(bc).map(Direction::as_bidi_class)
}

/// This is the method for Rule N0.
///
/// Resolves each bracket pair, in order of the opening brackets, to the
/// embedding direction when the brackets enclose a strong type matching
/// it. Otherwise, when they enclose only the opposite direction, the
/// pair takes that direction if the context before the opening bracket
/// has it too, and the embedding direction if not. Pairs enclosing no
/// strong type are left alone for N1 and N2.
pub fn resolve_paired_brackets<D: UnicodeData + ?Sized>(
    chars: &mut [BidiChar],
    seq: &IsolatedRunSequence,
    data: &D,
) {
    let pairs = locate_brackets(chars, seq, data);
    let embedding_direction = seq.embedding_direction();
    let indices = &seq.indices;

    for pair in pairs {
        let mut found_opposite = false;
        let mut found_embedding = false;
        for &idx in &indices[pair.opening + 1..pair.closing] {
            match strong_direction(chars[idx].direction) {
                Some(dir) if dir == embedding_direction => {
                    found_embedding = true;
                    break;
                }
                Some(_) => found_opposite = true,
                None => {}
            }
        }

        let pair_direction = if found_embedding {
            embedding_direction
        } else if found_opposite {
            let preceding = indices[..pair.opening]
                .iter()
                .rev()
                .find_map(|&idx| strong_direction(chars[idx].direction))
                .unwrap_or(seq.sos);
            if preceding != embedding_direction {
                preceding
            } else {
                embedding_direction
            }
        } else {
            continue;
        };
        trace!("{:?} resolved to {:?}", pair, pair_direction);

        for bracket in [pair.opening, pair.closing] {
            chars[indices[bracket]].direction = pair_direction;
            // NSMs that followed the bracket before W1 change with it
            for &idx in &indices[bracket + 1..] {
                if chars[idx].bidi_class != BidiClass::NonspacingMark {
                    break;
                }
                chars[idx].direction = pair_direction;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use crate::ucd::Ucd;
    use k9::assert_equal as assert_eq;

    fn setup(text: &str, level: i8) -> (Vec<BidiChar>, IsolatedRunSequence) {
        let chars: Vec<BidiChar> = BidiChar::from_text(text, &Ucd)
            .into_iter()
            .map(|mut c| {
                c.embedding_level = Level(level);
                // Stand in for W1-W7 having run
                if c.direction == BidiClass::ArabicLetter {
                    c.direction = BidiClass::RightToLeft;
                }
                c
            })
            .collect();
        let seq = IsolatedRunSequence {
            runs: vec![0..chars.len()],
            level: Level(level),
            sos: Level(level).as_bidi_class(),
            eos: Level(level).as_bidi_class(),
            indices: (0..chars.len()).collect(),
        };
        (chars, seq)
    }

    fn pairs(text: &str) -> Vec<(usize, usize)> {
        let (chars, seq) = setup(text, 0);
        locate_brackets(&chars, &seq, &Ucd)
            .into_iter()
            .map(|p| (p.opening, p.closing))
            .collect()
    }

    #[test]
    fn bd16() {
        assert!(pairs("a)b(c").is_empty());
        assert!(pairs("a(b]c").is_empty());
        assert_eq!(pairs("a(b[c)d]"), vec![(1, 5)]);
        assert_eq!(pairs("a(b]c)d"), vec![(1, 5)]);
        assert_eq!(pairs("a(b)c)d"), vec![(1, 3)]);
        assert_eq!(pairs("a(b(c)d(e)f)g"), vec![(1, 11), (3, 5), (7, 9)]);
        assert_eq!(pairs("a(b[c)d(e]f)g"), vec![(1, 5), (7, 11)]);
    }

    #[test]
    fn canonical_equivalents() {
        assert_eq!(pairs("\u{2329}x\u{3009}"), vec![(0, 2)]);
        assert_eq!(pairs("\u{3008}x\u{232a}"), vec![(0, 2)]);
        assert_eq!(pairs("\u{2329}x\u{232a}"), vec![(0, 2)]);
    }

    #[test]
    fn overflow() {
        let mut text = "(".repeat(MAX_PAIRING_DEPTH);
        text.push_str("x)");
        // All openers fit; the innermost pair is found
        assert_eq!(pairs(&text), vec![(MAX_PAIRING_DEPTH - 1, MAX_PAIRING_DEPTH + 1)]);

        let mut text = "()".to_string();
        text.push_str(&"(".repeat(MAX_PAIRING_DEPTH + 1));
        text.push_str("x)");
        // Discovery stops at the overflowing opener
        assert_eq!(pairs(&text), vec![(0, 1)]);
    }

    #[test]
    fn n0() {
        // Embedding direction inside wins
        let (mut chars, seq) = setup("a(b\u{05d0})", 0);
        resolve_paired_brackets(&mut chars, &seq, &Ucd);
        assert_eq!(chars[1].direction, BidiClass::LeftToRight);
        assert_eq!(chars[4].direction, BidiClass::LeftToRight);

        // Only opposite inside, opposite context before
        let (mut chars, seq) = setup("\u{05d0}(\u{05d1})", 0);
        resolve_paired_brackets(&mut chars, &seq, &Ucd);
        assert_eq!(chars[1].direction, BidiClass::RightToLeft);
        assert_eq!(chars[3].direction, BidiClass::RightToLeft);

        // Only opposite inside, embedding context before
        let (mut chars, seq) = setup("a(\u{05d1})", 0);
        resolve_paired_brackets(&mut chars, &seq, &Ucd);
        assert_eq!(chars[1].direction, BidiClass::LeftToRight);
        assert_eq!(chars[3].direction, BidiClass::LeftToRight);

        // Nothing strong inside
        let (mut chars, seq) = setup("a( )", 0);
        resolve_paired_brackets(&mut chars, &seq, &Ucd);
        assert_eq!(chars[1].direction, BidiClass::OtherNeutral);
        assert_eq!(chars[3].direction, BidiClass::OtherNeutral);
    }

    #[test]
    fn n0_nsm() {
        // The NSM after the closing bracket was made ON by W1
        let (mut chars, seq) = setup("\u{05d0}(\u{05d1})\u{0301}", 0);
        chars[4].direction = BidiClass::OtherNeutral;
        resolve_paired_brackets(&mut chars, &seq, &Ucd);
        assert_eq!(chars[3].direction, BidiClass::RightToLeft);
        assert_eq!(chars[4].direction, BidiClass::RightToLeft);
    }
}
