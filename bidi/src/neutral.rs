//! Resolving neutral and isolate formatting types (N1, N2).
use crate::bidi_class::BidiClass;
use crate::char_info::BidiChar;
use crate::sequence::IsolatedRunSequence;

/// The strong context a number provides to N1: EN and AN count as R.
fn as_strong_context(bc: BidiClass) -> BidiClass {
    match bc {
        BidiClass::EuropeanNumber | BidiClass::ArabicNumber => BidiClass::RightToLeft,
        other => other,
    }
}

/// This is the method for Rule N1.
///
/// A sequence of NIs takes the direction of the surrounding strong text
/// if the text on both sides has the same direction. European and Arabic
/// numbers act as if they were R. sos and eos are used at the sequence
/// boundaries.
pub fn resolve_neutrals_by_context(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    let indices = &seq.indices;
    let mut before = seq.sos;
    let mut pos = 0;
    while pos < indices.len() {
        let bc = chars[indices[pos]].direction;
        if !bc.is_neutral_or_isolate() {
            before = as_strong_context(bc);
            pos += 1;
            continue;
        }

        let start = pos;
        while pos < indices.len() && chars[indices[pos]].direction.is_neutral_or_isolate() {
            pos += 1;
        }
        let after = match indices.get(pos) {
            Some(&idx) => as_strong_context(chars[idx].direction),
            None => seq.eos,
        };

        if before == after && matches!(before, BidiClass::LeftToRight | BidiClass::RightToLeft) {
            for &idx in &indices[start..pos] {
                chars[idx].direction = before;
            }
        }
    }
}

/// This is the method for Rule N2.
///
/// Any remaining NIs take the embedding direction.
pub fn resolve_neutrals_by_level(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    let embedding_direction = seq.embedding_direction();
    for &idx in &seq.indices {
        if chars[idx].direction.is_neutral_or_isolate() {
            chars[idx].direction = embedding_direction;
        }
    }
}
