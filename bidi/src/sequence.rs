//! Level runs (BD7) and isolated run sequences (BD13, X10).
use crate::bidi_class::BidiClass;
use crate::char_info::BidiChar;
use crate::level::Level;
use log::trace;
use std::ops::Range;

/// A maximal substring of characters with the same embedding level,
/// as a range of indices into the paragraph after X9.
pub type LevelRun = Range<usize>;

fn starts_with_pdi(chars: &[BidiChar], run: &LevelRun) -> bool {
    chars[run.start].bidi_class == BidiClass::PopDirectionalIsolate
}

fn ends_with_iso_init(chars: &[BidiChar], run: &LevelRun) -> bool {
    chars[run.end - 1].bidi_class.is_iso_init()
}

/// BD7: split the paragraph into level runs.
pub fn level_runs(chars: &[BidiChar]) -> Vec<LevelRun> {
    let mut runs = vec![];
    let mut start = 0;
    for idx in 1..=chars.len() {
        if idx == chars.len() || chars[idx].embedding_level != chars[start].embedding_level {
            if start < idx {
                runs.push(start..idx);
            }
            start = idx;
        }
    }
    runs
}

/// A chain of level runs connected by isolate initiators and their
/// matching PDIs. The W, N and I rules operate on these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsolatedRunSequence {
    pub runs: Vec<LevelRun>,
    pub level: Level,
    /// Start-of-sequence type, L or R
    pub sos: BidiClass,
    /// End-of-sequence type, L or R
    pub eos: BidiClass,
    /// The indices of the characters of `runs`, in order.
    pub indices: Vec<usize>,
}

impl IsolatedRunSequence {
    /// The embedding direction: L or R depending on the parity of `level`.
    pub fn embedding_direction(&self) -> BidiClass {
        self.level.as_bidi_class()
    }
}

/// BD13 and X10.
///
/// Chains the level runs into isolated run sequences and computes the
/// sos and eos of each from the levels as they are right now, so this
/// must be called before any of the W, N or I rules run.
pub fn isolated_run_sequences(
    chars: &[BidiChar],
    runs: Vec<LevelRun>,
    paragraph_level: Level,
) -> Vec<IsolatedRunSequence> {
    let mut pool: Vec<Option<LevelRun>> = runs.into_iter().map(Some).collect();
    let mut sequences = vec![];

    for seed in 0..pool.len() {
        let Some(run) = pool[seed].take() else {
            continue;
        };
        let mut seq_runs = vec![run];
        let mut search_from = seed + 1;

        while let Some(last) = seq_runs.last() {
            if !ends_with_iso_init(chars, last) {
                break;
            }
            // Find the run that starts with the matching PDI
            let mut isolation_level = 1usize;
            let mut found = None;
            for (idx, candidate) in pool.iter().enumerate().skip(search_from) {
                let Some(candidate) = candidate else {
                    continue;
                };
                if starts_with_pdi(chars, candidate) {
                    isolation_level -= 1;
                    if isolation_level == 0 {
                        found = Some(idx);
                        break;
                    }
                }
                if ends_with_iso_init(chars, candidate) {
                    isolation_level += 1;
                }
            }
            match found.and_then(|idx| pool[idx].take().map(|run| (idx, run))) {
                Some((idx, run)) => {
                    seq_runs.push(run);
                    search_from = idx + 1;
                }
                None => break,
            }
        }

        sequences.push(make_sequence(chars, seq_runs, paragraph_level));
    }

    trace!("isolated run sequences: {:#?}", sequences);
    sequences
}

fn make_sequence(chars: &[BidiChar], runs: Vec<LevelRun>, paragraph_level: Level) -> IsolatedRunSequence {
    let first = runs[0].start;
    let last_run = &runs[runs.len() - 1];
    let last = last_run.end;
    let level = chars[first].embedding_level;

    let before = if first > 0 {
        chars[first - 1].embedding_level
    } else {
        paragraph_level
    };
    let after = if last < chars.len() && !ends_with_iso_init(chars, last_run) {
        chars[last].embedding_level
    } else {
        paragraph_level
    };

    let indices = runs.iter().flat_map(|run| run.clone()).collect();
    IsolatedRunSequence {
        level,
        sos: level.max(before).as_bidi_class(),
        eos: level.max(after).as_bidi_class(),
        runs,
        indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParagraphDirectionHint;
    use crate::explicit::explicit_levels;
    use k9::assert_equal as assert_eq;
    use BidiClass::*;

    fn resolved(classes: &[BidiClass], paragraph_level: Level) -> Vec<BidiChar> {
        let mut chars: Vec<BidiChar> = classes
            .iter()
            .enumerate()
            .map(|(idx, &bc)| BidiChar::with_class(idx, bc))
            .collect();
        explicit_levels(&mut chars, paragraph_level, ParagraphDirectionHint::LeftToRight);
        chars
    }

    #[test]
    fn runs() {
        let chars = resolved(
            &[LeftToRight, RightToLeftIsolate, RightToLeft, PopDirectionalIsolate, LeftToRight],
            Level(0),
        );
        assert_eq!(level_runs(&chars), vec![0..2, 2..3, 3..5]);
        assert_eq!(level_runs(&[]), Vec::<LevelRun>::new());
    }

    #[test]
    fn sequences() {
        let chars = resolved(
            &[LeftToRight, RightToLeftIsolate, RightToLeft, PopDirectionalIsolate, LeftToRight],
            Level(0),
        );
        let seqs = isolated_run_sequences(&chars, level_runs(&chars), Level(0));
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0].runs, vec![0..2, 3..5]);
        assert_eq!(seqs[0].indices, vec![0, 1, 3, 4]);
        assert_eq!(seqs[0].sos, LeftToRight);
        assert_eq!(seqs[0].eos, LeftToRight);
        assert_eq!(seqs[1].runs, vec![2..3]);
        assert_eq!(seqs[1].level, Level(1));
        assert_eq!(seqs[1].sos, RightToLeft);
        assert_eq!(seqs[1].eos, RightToLeft);
    }

    #[test]
    fn nested_isolates() {
        // L RLI R LRI L PDI R PDI L
        let chars = resolved(
            &[
                LeftToRight,
                RightToLeftIsolate,
                RightToLeft,
                LeftToRightIsolate,
                LeftToRight,
                PopDirectionalIsolate,
                RightToLeft,
                PopDirectionalIsolate,
                LeftToRight,
            ],
            Level(0),
        );
        let seqs = isolated_run_sequences(&chars, level_runs(&chars), Level(0));
        let runs: Vec<Vec<LevelRun>> = seqs.iter().map(|s| s.runs.clone()).collect();
        assert_eq!(runs, vec![vec![0..2, 7..9], vec![2..4, 5..7], vec![4..5]]);
    }

    #[test]
    fn unmatched_isolate() {
        let chars = resolved(&[RightToLeft, LeftToRightIsolate, LeftToRight], Level(1));
        let seqs = isolated_run_sequences(&chars, level_runs(&chars), Level(1));
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0].runs, vec![0..2]);
        // eos is computed against the paragraph level
        assert_eq!(seqs[0].eos, RightToLeft);
        assert_eq!(seqs[1].level, Level(2));
        assert_eq!(seqs[1].sos, LeftToRight);
        assert_eq!(seqs[1].eos, LeftToRight);
    }
}
