//! Resolving implicit levels (I1, I2).
use crate::bidi_class::BidiClass;
use crate::char_info::BidiChar;
use crate::sequence::IsolatedRunSequence;

/// Rules I1 and I2.
///
/// On an even level R goes up one level and AN or EN up two.
/// On an odd level L, EN and AN go up one level.
pub fn resolve_implicit_levels(chars: &mut [BidiChar], seq: &IsolatedRunSequence) {
    for &idx in &seq.indices {
        let c = &mut chars[idx];
        let raise = match (c.embedding_level.is_rtl(), c.direction) {
            (false, BidiClass::RightToLeft) => 1,
            (false, BidiClass::ArabicNumber | BidiClass::EuropeanNumber) => 2,
            (true, BidiClass::LeftToRight | BidiClass::ArabicNumber | BidiClass::EuropeanNumber) => 1,
            _ => 0,
        };
        if raise > 0 {
            c.embedding_level = c.embedding_level.raise(raise);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use k9::assert_equal as assert_eq;
    use BidiClass::*;

    #[test]
    fn raise() {
        let classes = [LeftToRight, RightToLeft, ArabicNumber, EuropeanNumber];
        let mut chars: Vec<BidiChar> = [0, 1]
            .iter()
            .flat_map(|&level| {
                classes.iter().map(move |&bc| {
                    let mut c = BidiChar::with_class(0, bc);
                    c.embedding_level = Level(level);
                    c
                })
            })
            .collect();
        let seq = IsolatedRunSequence {
            runs: vec![0..chars.len()],
            level: Level(0),
            sos: LeftToRight,
            eos: LeftToRight,
            indices: (0..chars.len()).collect(),
        };
        resolve_implicit_levels(&mut chars, &seq);
        let levels: Vec<i8> = chars.iter().map(|c| c.embedding_level.0).collect();
        assert_eq!(levels, vec![0, 1, 2, 2, 2, 1, 2, 2]);
    }
}
