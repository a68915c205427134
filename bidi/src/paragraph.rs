//! The paragraph driver (P1) and the per-paragraph pipeline.
use crate::bidi_class::BidiClass;
use crate::brackets::resolve_paired_brackets;
use crate::char_info::BidiChar;
use crate::context::BidiContext;
use crate::direction::Direction;
use crate::explicit::{
    explicit_levels, paragraph_level, remove_explicit_formatting, stable_partition,
};
use crate::implicit::resolve_implicit_levels;
use crate::level::Level;
use crate::line::reorder_line;
use crate::neutral::{resolve_neutrals_by_context, resolve_neutrals_by_level};
use crate::sequence::{isolated_run_sequences, level_runs};
use crate::ucd::{GeneralCategory, UnicodeData};
use crate::weak;
use log::trace;

fn dump_state(label: &str, chars: &[BidiChar]) {
    if !log::log_enabled!(log::Level::Trace) {
        return;
    }
    trace!("State: {}", label);
    trace!(
        "BidiClass: {:?}",
        chars.iter().map(|c| c.direction).collect::<Vec<_>>()
    );
    trace!(
        "Levels: {:?}",
        chars.iter().map(|c| c.embedding_level.0).collect::<Vec<_>>()
    );
    trace!("");
}

/// Resolves the embedding levels of a single paragraph: P2, P3, X1-X10,
/// W1-W7, N0-N2 and I1-I2.
///
/// `chars` must hold exactly one paragraph; only its last character may
/// be a paragraph separator. The characters removed by X9 are moved to
/// the end. Returns the number of remaining characters and the
/// paragraph embedding level.
pub fn resolve_paragraph<D: UnicodeData + ?Sized>(
    chars: &mut [BidiChar],
    context: &BidiContext,
    data: &D,
) -> (usize, Level) {
    let paragraph_level = paragraph_level(chars, context.direction);
    trace!("paragraph level {:?}", paragraph_level);

    dump_state("before X1-X8", chars);
    explicit_levels(chars, paragraph_level, context.direction);
    dump_state("before X9", chars);
    let len = remove_explicit_formatting(chars);
    let chars = &mut chars[..len];
    dump_state("after X9", chars);

    // sos and eos are fixed here, before the levels change
    let sequences = isolated_run_sequences(chars, level_runs(chars), paragraph_level);

    for seq in &sequences {
        weak::resolve_weak_types(chars, seq);
    }
    dump_state("after W1-W7", chars);

    if context.enable_mirrored_brackets {
        for seq in &sequences {
            resolve_paired_brackets(chars, seq, data);
        }
        dump_state("after N0", chars);
    }

    for seq in &sequences {
        resolve_neutrals_by_context(chars, seq);
        resolve_neutrals_by_level(chars, seq);
    }
    dump_state("after N1, N2", chars);

    for seq in &sequences {
        resolve_implicit_levels(chars, seq);
    }
    dump_state("after I1, I2", chars);

    (len, paragraph_level)
}

/// Splits a resolved paragraph into lines and reorders each of them.
///
/// With `enable_line_separator` each U+2028 LINE SEPARATOR ends a line
/// (and belongs to it); otherwise the paragraph is a single line.
pub fn reorder_lines(chars: &mut [BidiChar], paragraph_level: Level, context: &BidiContext) {
    let mut line_start = 0;
    if context.enable_line_separator {
        for idx in 0..chars.len() {
            if chars[idx].description.general_category == GeneralCategory::LineSeparator {
                reorder_line(&mut chars[line_start..=idx], paragraph_level, context);
                line_start = idx + 1;
            }
        }
    }
    if line_start < chars.len() {
        reorder_line(&mut chars[line_start..], paragraph_level, context);
    }
    dump_state("after L1-L4", chars);
}

/// Rule P1: runs the algorithm over text holding any number of paragraphs.
///
/// Each paragraph ends after a character of class B (or at the end of the
/// text). Every paragraph is resolved and its lines put into visual order.
/// The characters removed by X9 end up after all of the others, and both
/// groups keep their relative order across paragraphs.
///
/// Returns the number of characters that remain, in visual order at the
/// front of `chars`, and the direction of each paragraph.
pub fn resolve<D: UnicodeData + ?Sized>(
    chars: &mut [BidiChar],
    context: &BidiContext,
    data: &D,
) -> (usize, Vec<Direction>) {
    let mut directions = vec![];
    let mut total_kept = 0;
    let mut start = 0;

    while start < chars.len() {
        let paragraph_end = chars[start..]
            .iter()
            .position(|c| c.direction == BidiClass::ParagraphSeparator)
            .map(|pos| start + pos + 1)
            .unwrap_or(chars.len());

        let paragraph = &mut chars[start..paragraph_end];
        let (kept, level) = resolve_paragraph(paragraph, context, data);
        reorder_lines(&mut paragraph[..kept], level, context);
        directions.push(level.direction());

        total_kept += kept;
        start = paragraph_end;
    }

    // Each paragraph holds its visual order followed by its removed
    // characters; gather the removed ones of all paragraphs at the end.
    let len = stable_partition(chars, |c| !c.direction.is_removed_by_x9());
    debug_assert_eq!(len, total_kept);

    (len, directions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ParagraphDirectionHint;
    use crate::ucd::Ucd;
    use k9::assert_equal as assert_eq;

    fn init() {
        let _ = env_logger::Builder::new()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    }

    #[test]
    fn paragraph() {
        init();
        let mut chars = BidiChar::from_text("abc \u{05d0}\u{05d1}\u{05d2}", &Ucd);
        let (len, level) = resolve_paragraph(&mut chars, &BidiContext::default(), &Ucd);
        assert_eq!(len, 7);
        assert_eq!(level, Level(0));
        let levels: Vec<i8> = chars.iter().map(|c| c.embedding_level.0).collect();
        assert_eq!(levels, vec![0, 0, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn paragraphs_keep_removed_order() {
        init();
        // RLE a PDF B LRE b PDF
        let mut chars = BidiChar::from_text("\u{202b}a\u{202c}\u{2029}\u{202a}b\u{202c}", &Ucd);
        let (len, directions) = resolve(&mut chars, &BidiContext::default(), &Ucd);
        assert_eq!(len, 3);
        assert_eq!(
            directions,
            vec![Direction::LeftToRight, Direction::LeftToRight]
        );
        let order: Vec<usize> = chars.iter().map(|c| c.index).collect();
        assert_eq!(order, vec![1, 3, 5, 0, 2, 4, 6]);
    }

    #[test]
    fn many_paragraphs_keep_both_orders() {
        // "a" RLE "b" PDF B, repeated
        let text = "a\u{202b}b\u{202c}\u{2029}".repeat(200);
        let mut chars = BidiChar::from_text(&text, &Ucd);
        let (len, directions) = resolve(&mut chars, &BidiContext::default(), &Ucd);
        assert_eq!(len, 600);
        assert_eq!(directions.len(), 200);

        let expected_kept: Vec<usize> = (0..1000).filter(|i| matches!(i % 5, 0 | 2 | 4)).collect();
        let expected_removed: Vec<usize> = (0..1000).filter(|i| matches!(i % 5, 1 | 3)).collect();
        let order: Vec<usize> = chars.iter().map(|c| c.index).collect();
        assert_eq!(order[..len].to_vec(), expected_kept);
        assert_eq!(order[len..].to_vec(), expected_removed);
    }

    #[test]
    fn no_mirrored_brackets() {
        init();
        // Without N0 the closing bracket is resolved by N2 to the
        // embedding direction instead of following its partner.
        let text = "\u{05d0}(\u{05d1})a";
        let context = BidiContext::new(ParagraphDirectionHint::LeftToRight);

        let mut chars = BidiChar::from_text(text, &Ucd);
        resolve(&mut chars, &context, &Ucd);
        let with_n0: Vec<usize> = chars.iter().map(|c| c.index).collect();

        let mut chars = BidiChar::from_text(text, &Ucd);
        resolve(&mut chars, &context.with_mirrored_brackets(false), &Ucd);
        let without_n0: Vec<usize> = chars.iter().map(|c| c.index).collect();

        assert_eq!(with_n0, vec![3, 2, 1, 0, 4]);
        assert_eq!(without_n0, vec![2, 1, 0, 3, 4]);
    }

    #[test]
    fn empty() {
        let mut chars: Vec<BidiChar> = vec![];
        let (len, directions) = resolve(&mut chars, &BidiContext::default(), &Ucd);
        assert_eq!(len, 0);
        assert!(directions.is_empty());
    }
}
