//! Reordering resolved levels within a line (L1-L4).
use crate::bidi_class::BidiClass;
use crate::char_info::BidiChar;
use crate::context::BidiContext;
use crate::direction::Direction;
use crate::level::Level;
use std::ops::Range;

/// Applies L1 through L4 to one line of a resolved paragraph.
/// On return `line` is in visual order.
pub fn reorder_line(line: &mut [BidiChar], paragraph_level: Level, context: &BidiContext) {
    reset_whitespace_levels(line, paragraph_level);
    reverse_levels(line);
    mirror_glyphs(line);
    if context.move_lf_and_ps_to_end_of_line {
        move_separator_to_end(line);
    }
}

/// This is the method for Rule L1.
///
/// Segment and paragraph separators are reset to the paragraph level,
/// as is any sequence of whitespace and isolate formatting characters
/// that precedes one of them or the end of the line.
/// The original bidi class is used, not the resolved direction.
pub fn reset_whitespace_levels(line: &mut [BidiChar], paragraph_level: Level) {
    let mut trailing = true;
    for c in line.iter_mut().rev() {
        match c.bidi_class {
            BidiClass::SegmentSeparator | BidiClass::ParagraphSeparator => {
                c.embedding_level = paragraph_level;
                trailing = true;
            }
            bc if trailing && (bc == BidiClass::WhiteSpace || bc.is_isolate_formatter()) => {
                c.embedding_level = paragraph_level;
            }
            _ => trailing = false,
        }
    }
}

/// Returns the lowest odd level and the highest level of the line,
/// the bounds over which L2 reverses. None for an empty line.
pub fn level_bounds(line: &[BidiChar]) -> Option<(Level, Level)> {
    let highest = line.iter().map(|c| c.embedding_level).max()?;
    let lowest = line.iter().map(|c| c.embedding_level).min()?;
    Some((lowest.round_up_to_odd(), highest))
}

/// This function runs Rule L2.
///
/// Find the highest level among the resolved levels.
/// Then from that highest level down to the lowest odd
/// level, reverse any contiguous runs at that level or higher.
pub fn reverse_levels(line: &mut [BidiChar]) {
    let Some((lowest_odd, highest)) = level_bounds(line) else {
        return;
    };

    let mut level = highest;
    while level >= lowest_odd {
        let mut idx = 0;
        while idx < line.len() {
            if line[idx].embedding_level < level {
                idx += 1;
                continue;
            }
            let start = idx;
            while idx < line.len() && line[idx].embedding_level >= level {
                idx += 1;
            }
            line[start..idx].reverse();
        }
        level = Level(level.0 - 1);
    }
}

/// Rule L3.
///
/// Glyph mirroring is left to the caller, which has the mirror glyph in
/// each record's description.
fn mirror_glyphs(_line: &mut [BidiChar]) {}

/// Rule L4 for line and paragraph separators.
///
/// Moves the first Zl or Zp character of the line to the end of the
/// line and makes it left-to-right.
pub fn move_separator_to_end(line: &mut [BidiChar]) {
    if let Some(pos) = line
        .iter()
        .position(|c| c.description.is_line_or_paragraph_separator())
    {
        line[pos].direction = BidiClass::LeftToRight;
        line[pos..].rotate_left(1);
    }
}

/// A `VisualRun` is a contiguous span of a line, in visual order, whose
/// characters all have the same embedding level and so the same direction.
/// This is the unit that should be handed to a shaper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualRun {
    /// The direction for this run.  Derived from the level.
    pub direction: Direction,
    /// Embedding level of this run.
    pub level: Level,
    /// The range of the run in the reordered buffer.
    pub range: Range<usize>,
}

/// Groups reordered characters into runs of equal embedding level.
pub fn visual_runs(chars: &[BidiChar]) -> Vec<VisualRun> {
    let mut runs: Vec<VisualRun> = vec![];
    for (idx, c) in chars.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.level == c.embedding_level => run.range.end = idx + 1,
            _ => runs.push(VisualRun {
                direction: c.embedding_level.direction(),
                level: c.embedding_level,
                range: idx..idx + 1,
            }),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ucd::Ucd;
    use k9::assert_equal as assert_eq;

    fn with_levels(text: &str, levels: &[i8]) -> Vec<BidiChar> {
        BidiChar::from_text(text, &Ucd)
            .into_iter()
            .zip(levels)
            .map(|(mut c, &level)| {
                c.embedding_level = Level(level);
                c
            })
            .collect()
    }

    fn order(line: &[BidiChar]) -> Vec<usize> {
        line.iter().map(|c| c.index).collect()
    }

    #[test]
    fn l1() {
        let mut line = with_levels("ab \tcd  ", &[1, 1, 1, 1, 1, 1, 1, 1]);
        reset_whitespace_levels(&mut line, Level(0));
        let levels: Vec<i8> = line.iter().map(|c| c.embedding_level.0).collect();
        assert_eq!(levels, vec![1, 1, 0, 0, 1, 1, 0, 0]);
    }

    #[test]
    fn l2() {
        let mut line = with_levels("abcdef", &[0, 1, 1, 2, 2, 1]);
        reverse_levels(&mut line);
        assert_eq!(order(&line), vec![0, 5, 3, 4, 2, 1]);

        let mut line = with_levels("abc", &[2, 2, 2]);
        reverse_levels(&mut line);
        assert_eq!(order(&line), vec![0, 1, 2]);

        let mut line = with_levels("abc", &[1, 1, 1]);
        reverse_levels(&mut line);
        assert_eq!(order(&line), vec![2, 1, 0]);
    }

    #[test]
    fn l4() {
        let mut line = with_levels("a\u{2028}b", &[1, 1, 1]);
        line[1].direction = BidiClass::RightToLeft;
        move_separator_to_end(&mut line);
        assert_eq!(order(&line), vec![0, 2, 1]);
        assert_eq!(line[2].direction, BidiClass::LeftToRight);
    }

    #[test]
    fn runs() {
        let line = with_levels("abcde", &[0, 0, 1, 1, 2]);
        k9::snapshot!(
            visual_runs(&line),
            "
[
    VisualRun {
        direction: LeftToRight,
        level: Level(
            0,
        ),
        range: 0..2,
    },
    VisualRun {
        direction: RightToLeft,
        level: Level(
            1,
        ),
        range: 2..4,
    },
    VisualRun {
        direction: LeftToRight,
        level: Level(
            2,
        ),
        range: 4..5,
    },
]
"
        );
    }
}
