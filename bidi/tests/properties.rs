//! Property-based tests for invariants that hold for any input.
use bidi_engine::explicit::{explicit_levels, paragraph_level, remove_explicit_formatting};
use bidi_engine::line::{level_bounds, reverse_levels};
use bidi_engine::sequence::{isolated_run_sequences, level_runs};
use bidi_engine::*;
use proptest::prelude::*;

const ALL_CLASSES: [BidiClass; 23] = [
    BidiClass::ArabicLetter,
    BidiClass::ArabicNumber,
    BidiClass::BoundaryNeutral,
    BidiClass::CommonSeparator,
    BidiClass::EuropeanNumber,
    BidiClass::EuropeanSeparator,
    BidiClass::EuropeanTerminator,
    BidiClass::FirstStrongIsolate,
    BidiClass::LeftToRight,
    BidiClass::LeftToRightEmbedding,
    BidiClass::LeftToRightIsolate,
    BidiClass::LeftToRightOverride,
    BidiClass::NonspacingMark,
    BidiClass::OtherNeutral,
    BidiClass::ParagraphSeparator,
    BidiClass::PopDirectionalFormat,
    BidiClass::PopDirectionalIsolate,
    BidiClass::RightToLeft,
    BidiClass::RightToLeftEmbedding,
    BidiClass::RightToLeftIsolate,
    BidiClass::RightToLeftOverride,
    BidiClass::SegmentSeparator,
    BidiClass::WhiteSpace,
];

/// Class sequences that form a single paragraph.
fn paragraph() -> impl Strategy<Value = Vec<BidiClass>> {
    let classes: Vec<BidiClass> = ALL_CLASSES
        .iter()
        .copied()
        .filter(|&bc| bc != BidiClass::ParagraphSeparator)
        .collect();
    prop::collection::vec(prop::sample::select(classes), 0..80)
}

/// Class sequences that may hold any number of paragraphs.
fn text() -> impl Strategy<Value = Vec<BidiClass>> {
    prop::collection::vec(prop::sample::select(ALL_CLASSES.to_vec()), 0..120)
}

fn hint() -> impl Strategy<Value = ParagraphDirectionHint> {
    prop::sample::select(vec![
        ParagraphDirectionHint::LeftToRight,
        ParagraphDirectionHint::RightToLeft,
        ParagraphDirectionHint::AutoLeftToRight,
        ParagraphDirectionHint::AutoRightToLeft,
    ])
}

fn records(classes: &[BidiClass]) -> Vec<BidiChar> {
    classes
        .iter()
        .enumerate()
        .map(|(index, &bc)| BidiChar::with_class(index, bc))
        .collect()
}

proptest! {
    /// After I1 and I2 every level lies between the paragraph level and
    /// one above the maximum explicit depth.
    #[test]
    fn levels_are_bounded(classes in paragraph(), hint in hint()) {
        let mut chars = records(&classes);
        let context = BidiContext::new(hint);
        let (len, level) = resolve_paragraph(&mut chars, &context, &Ucd);
        for c in &chars[..len] {
            prop_assert!(c.embedding_level >= level, "{:?} below {:?}", c, level);
            prop_assert!(c.embedding_level.0 as usize <= MAX_DEPTH + 1, "{:?}", c);
        }
    }

    /// I1 and I2 leave L, EN and AN on even levels and R on odd ones, and
    /// no other class survives the weak and neutral passes.
    #[test]
    fn level_parity_matches_direction(classes in paragraph(), hint in hint()) {
        let mut chars = records(&classes);
        let (len, _) = resolve_paragraph(&mut chars, &BidiContext::new(hint), &Ucd);
        for c in &chars[..len] {
            match c.direction {
                BidiClass::LeftToRight | BidiClass::EuropeanNumber | BidiClass::ArabicNumber => {
                    prop_assert!(!c.embedding_level.is_rtl(), "{:?}", c);
                }
                BidiClass::RightToLeft => prop_assert!(c.embedding_level.is_rtl(), "{:?}", c),
                _ => prop_assert!(false, "unresolved {:?}", c),
            }
        }
    }

    /// L2 is a series of reversals of whole runs: every run at or above
    /// a reversed level stays contiguous, and two neighbours of the same
    /// level end up adjacent, swapped once per reversal that covered them.
    #[test]
    fn l2_reverses_whole_runs(line_levels in prop::collection::vec(0i8..6, 0..60)) {
        let mut line: Vec<BidiChar> = line_levels
            .iter()
            .enumerate()
            .map(|(index, &level)| {
                let mut c = BidiChar::with_class(index, BidiClass::LeftToRight);
                c.embedding_level = Level(level);
                c
            })
            .collect();
        let bounds = level_bounds(&line);
        reverse_levels(&mut line);

        let mut visual_pos = vec![0usize; line.len()];
        for (pos, c) in line.iter().enumerate() {
            visual_pos[c.index] = pos;
        }

        let Some((lowest_odd, highest)) = bounds else {
            prop_assert!(line.is_empty());
            return Ok(());
        };

        for threshold in lowest_odd.0..=highest.0 {
            let mut idx = 0;
            while idx < line_levels.len() {
                if line_levels[idx] < threshold {
                    idx += 1;
                    continue;
                }
                let start = idx;
                while idx < line_levels.len() && line_levels[idx] >= threshold {
                    idx += 1;
                }
                let positions = &visual_pos[start..idx];
                let (Some(min), Some(max)) = (positions.iter().min(), positions.iter().max()) else {
                    continue;
                };
                prop_assert_eq!(max - min + 1, idx - start, "run {}..{} at {}", start, idx, threshold);
            }
        }

        for idx in 1..line_levels.len() {
            let level = line_levels[idx];
            if level != line_levels[idx - 1] {
                continue;
            }
            let reversals = (level - lowest_odd.0 + 1).max(0);
            let (prior, this) = (visual_pos[idx - 1], visual_pos[idx]);
            if reversals % 2 == 0 {
                prop_assert_eq!(this, prior + 1);
            } else {
                prop_assert_eq!(prior, this + 1);
            }
        }
    }

    /// X9 leaves none of the explicit formatting classes behind and keeps
    /// both groups in their original order.
    #[test]
    fn x9_removes_formatting(classes in paragraph(), hint in hint()) {
        let mut chars = records(&classes);
        let level = paragraph_level(&chars, hint);
        explicit_levels(&mut chars, level, hint);
        let len = remove_explicit_formatting(&mut chars);

        prop_assert!(chars[..len].iter().all(|c| !c.bidi_class.is_removed_by_x9()));
        prop_assert!(chars[len..].iter().all(|c| c.bidi_class.is_removed_by_x9()));
        prop_assert!(chars[..len].windows(2).all(|w| w[0].index < w[1].index));
        prop_assert!(chars[len..].windows(2).all(|w| w[0].index < w[1].index));
    }

    /// Every isolated run sequence has a single embedding level and every
    /// character belongs to exactly one sequence.
    #[test]
    fn sequences_share_one_level(classes in paragraph(), hint in hint()) {
        let mut chars = records(&classes);
        let level = paragraph_level(&chars, hint);
        explicit_levels(&mut chars, level, hint);
        let len = remove_explicit_formatting(&mut chars);
        let chars = &chars[..len];

        let sequences = isolated_run_sequences(chars, level_runs(chars), level);
        let mut seen = vec![0usize; len];
        for seq in &sequences {
            prop_assert!(matches!(seq.sos, BidiClass::LeftToRight | BidiClass::RightToLeft));
            prop_assert!(matches!(seq.eos, BidiClass::LeftToRight | BidiClass::RightToLeft));
            for &idx in &seq.indices {
                prop_assert_eq!(chars[idx].embedding_level, seq.level);
                seen[idx] += 1;
            }
        }
        prop_assert!(seen.iter().all(|&count| count == 1));
    }

    /// The output is a permutation of the input.
    #[test]
    fn reordering_is_a_permutation(classes in text(), hint in hint()) {
        let mut chars = records(&classes);
        let (len, _) = resolve(&mut chars, &BidiContext::new(hint), &Ucd);
        prop_assert!(len <= chars.len());

        let mut indices: Vec<usize> = chars.iter().map(|c| c.index).collect();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..classes.len()).collect::<Vec<_>>());
    }

    /// Running again on the reset output in logical order gives the same
    /// result, and so does running on an identical copy.
    #[test]
    fn resolution_is_repeatable(classes in text(), hint in hint()) {
        let context = BidiContext::new(hint);
        let mut first = records(&classes);
        let mut copy = first.clone();
        let (len, directions) = resolve(&mut first, &context, &Ucd);

        let (copy_len, copy_directions) = resolve(&mut copy, &context, &Ucd);
        prop_assert_eq!(copy_len, len);
        prop_assert_eq!(&copy_directions, &directions);
        prop_assert_eq!(&copy, &first);

        let mut again = first.clone();
        again.sort_by_key(|c| c.index);
        for c in &mut again {
            c.reset();
        }
        let (again_len, again_directions) = resolve(&mut again, &context, &Ucd);
        prop_assert_eq!(again_len, len);
        prop_assert_eq!(&again_directions, &directions);
        prop_assert_eq!(&again, &first);
    }
}
