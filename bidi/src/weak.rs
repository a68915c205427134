//! Resolving weak types (W1-W7) over one isolated run sequence.
use crate::bidi_class::BidiClass;
use crate::char_info::BidiChar;
use crate::sequence::IsolatedRunSequence;

/// Applies W1 through W7 in order.
pub fn resolve_weak_types(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    resolve_combining_marks(chars, seq);
    resolve_european_numbers(chars, seq);
    resolve_arabic_letters(chars, seq);
    resolve_separators(chars, seq);
    resolve_terminators(chars, seq);
    resolve_es_cs_et(chars, seq);
    resolve_en(chars, seq);
}

/// This is the method for Rule W1.
///
/// Each NSM takes the type of the character before it, or sos at the
/// start of the sequence. An NSM that follows an isolate initiator or
/// PDI becomes ON instead.
pub fn resolve_combining_marks(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    let mut prior = seq.sos;
    for &idx in &seq.indices {
        let c = &mut chars[idx];
        if c.direction == BidiClass::NonspacingMark {
            c.direction = prior;
        } else if c.direction.is_isolate_formatter() {
            prior = BidiClass::OtherNeutral;
        } else {
            prior = c.direction;
        }
    }
}

/// This is the method for Rule W2.
///
/// Search backward from each EN to the first strong type (R, L, AL,
/// or sos). If an AL is found, change the EN to AN.
pub fn resolve_european_numbers(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    let mut last_strong = seq.sos;
    for &idx in &seq.indices {
        let c = &mut chars[idx];
        match c.direction {
            BidiClass::LeftToRight | BidiClass::RightToLeft | BidiClass::ArabicLetter => {
                last_strong = c.direction;
            }
            BidiClass::EuropeanNumber if last_strong == BidiClass::ArabicLetter => {
                c.direction = BidiClass::ArabicNumber;
            }
            _ => {}
        }
    }
}

/// This is the method for Rule W3.
///
/// Change all ALs to R.
pub fn resolve_arabic_letters(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    for &idx in &seq.indices {
        if chars[idx].direction == BidiClass::ArabicLetter {
            chars[idx].direction = BidiClass::RightToLeft;
        }
    }
}

/// This is the method for Rule W4.
///
/// A single ES between two ENs changes to EN.
/// A single CS between two numbers of the same type changes to that type.
pub fn resolve_separators(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    let indices = &seq.indices;
    for pos in 1..indices.len().saturating_sub(1) {
        let before = chars[indices[pos - 1]].direction;
        let after = chars[indices[pos + 1]].direction;
        let c = &mut chars[indices[pos]];
        match (before, c.direction, after) {
            (
                BidiClass::EuropeanNumber,
                BidiClass::EuropeanSeparator | BidiClass::CommonSeparator,
                BidiClass::EuropeanNumber,
            ) => c.direction = BidiClass::EuropeanNumber,
            (BidiClass::ArabicNumber, BidiClass::CommonSeparator, BidiClass::ArabicNumber) => {
                c.direction = BidiClass::ArabicNumber
            }
            _ => {}
        }
    }
}

/// This is the method for Rule W5.
///
/// A sequence of ETs adjacent to an EN changes to all ENs.
pub fn resolve_terminators(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    let indices = &seq.indices;
    let mut pos = 0;
    while pos < indices.len() {
        if chars[indices[pos]].direction != BidiClass::EuropeanTerminator {
            pos += 1;
            continue;
        }
        let start = pos;
        while pos < indices.len() && chars[indices[pos]].direction == BidiClass::EuropeanTerminator
        {
            pos += 1;
        }
        let en_before = start > 0 && chars[indices[start - 1]].direction == BidiClass::EuropeanNumber;
        let en_after =
            pos < indices.len() && chars[indices[pos]].direction == BidiClass::EuropeanNumber;
        if en_before || en_after {
            for &idx in &indices[start..pos] {
                chars[idx].direction = BidiClass::EuropeanNumber;
            }
        }
    }
}

/// This is the method for Rule W6.
///
/// Otherwise, separators and terminators change to ON.
pub fn resolve_es_cs_et(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    for &idx in &seq.indices {
        let c = &mut chars[idx];
        if matches!(
            c.direction,
            BidiClass::EuropeanSeparator
                | BidiClass::CommonSeparator
                | BidiClass::EuropeanTerminator
        ) {
            c.direction = BidiClass::OtherNeutral;
        }
    }
}

/// This is the method for Rule W7.
///
/// Search backward from each EN to the first strong type (R, L, or sos).
/// If an L is found, change the EN to L.
pub fn resolve_en(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    let mut last_strong = seq.sos;
    for &idx in &seq.indices {
        let c = &mut chars[idx];
        match c.direction {
            BidiClass::LeftToRight | BidiClass::RightToLeft => last_strong = c.direction,
            BidiClass::EuropeanNumber if last_strong == BidiClass::LeftToRight => {
                c.direction = BidiClass::LeftToRight;
            }
            _ => {}
        }
    }
}
