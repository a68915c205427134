//! End to end runs over literal text.
use bidi_engine::*;
use k9::assert_equal as assert_eq;

struct Resolved {
    directions: Vec<Direction>,
    /// Embedding levels in input order; None for characters removed by X9
    levels: Vec<Option<i8>>,
    /// Input indices in visual order
    order: Vec<usize>,
    chars: Vec<BidiChar>,
}

fn run(text: &str, context: BidiContext) -> Resolved {
    let _ = env_logger::Builder::new().is_test(true).try_init();
    let mut chars = BidiChar::from_text(text, &Ucd);
    let (len, directions) = resolve(&mut chars, &context, &Ucd);

    let mut levels = vec![None; chars.len()];
    for c in &chars[..len] {
        levels[c.index] = Some(c.embedding_level.0);
    }
    let order = chars[..len].iter().map(|c| c.index).collect();
    chars.truncate(len);

    Resolved {
        directions,
        levels,
        order,
        chars,
    }
}

fn levels(values: &[i8]) -> Vec<Option<i8>> {
    values.iter().copied().map(Some).collect()
}

#[test]
fn pure_ltr() {
    let r = run("hello", BidiContext::default());
    assert_eq!(r.directions, vec![Direction::LeftToRight]);
    assert_eq!(r.levels, levels(&[0, 0, 0, 0, 0]));
    assert_eq!(r.order, vec![0, 1, 2, 3, 4]);
}

#[test]
fn pure_rtl() {
    let r = run("\u{05d0}\u{05d1}\u{05d2}", BidiContext::default());
    assert_eq!(r.directions, vec![Direction::RightToLeft]);
    assert_eq!(r.levels, levels(&[1, 1, 1]));
    assert_eq!(r.order, vec![2, 1, 0]);
}

#[test]
fn rtl_with_trailing_digit() {
    let r = run("\u{05d0}\u{05d1}1", BidiContext::default());
    assert_eq!(r.directions, vec![Direction::RightToLeft]);
    assert_eq!(r.levels, levels(&[1, 1, 2]));
    assert_eq!(r.order, vec![2, 1, 0]);
}

#[test]
fn arabic_within_english() {
    let r = run("Hi \u{0627}\u{0644} CD", BidiContext::default());
    assert_eq!(r.directions, vec![Direction::LeftToRight]);
    assert_eq!(r.levels, levels(&[0, 0, 0, 1, 1, 0, 0, 0]));
    assert_eq!(r.order, vec![0, 1, 2, 4, 3, 5, 6, 7]);
}

#[test]
fn bracketed_embedding() {
    let r = run(
        "A(\u{05d0}\u{05d1})B",
        BidiContext::default().with_mirrored_brackets(true),
    );
    assert_eq!(r.directions, vec![Direction::LeftToRight]);
    assert_eq!(r.levels, levels(&[0, 0, 1, 1, 0, 0]));
    assert_eq!(r.order, vec![0, 1, 3, 2, 4, 5]);

    let brackets: Vec<BidiClass> = r
        .chars
        .iter()
        .filter(|c| c.description.bracket_type != BracketType::None)
        .map(|c| c.direction)
        .collect();
    assert_eq!(brackets, vec![BidiClass::LeftToRight, BidiClass::LeftToRight]);
}

#[test]
fn line_separator_moves_to_end() {
    let context = BidiContext::default()
        .with_line_separator(true)
        .with_move_lf_and_ps_to_end_of_line(true);
    let r = run("\u{05d0}\u{05d1}\u{2028}", context);
    assert_eq!(r.directions, vec![Direction::RightToLeft]);
    assert_eq!(r.order, vec![1, 0, 2]);
    assert_eq!(r.chars[2].code_point, '\u{2028}');
    assert_eq!(r.chars[2].direction, BidiClass::LeftToRight);

    // Without the move the separator stays where L2 put it
    let r = run(
        "\u{05d0}\u{05d1}\u{2028}",
        context.with_move_lf_and_ps_to_end_of_line(false),
    );
    assert_eq!(r.order, vec![2, 1, 0]);
}

#[test]
fn line_separator_splits_lines() {
    let context = BidiContext::default()
        .with_line_separator(true)
        .with_move_lf_and_ps_to_end_of_line(true);
    let r = run("\u{05d0}\u{05d1}\u{2028}c", context);
    assert_eq!(r.order, vec![1, 0, 2, 3]);
    assert_eq!(r.levels, levels(&[1, 1, 1, 2]));

    // As a single line the L text is reordered with the rest
    let r = run(
        "\u{05d0}\u{05d1}\u{2028}c",
        context
            .with_line_separator(false)
            .with_move_lf_and_ps_to_end_of_line(false),
    );
    assert_eq!(r.order, vec![3, 2, 1, 0]);
}

#[test]
fn each_line_separator_ends_its_line() {
    let context = BidiContext::default()
        .with_line_separator(true)
        .with_move_lf_and_ps_to_end_of_line(true);
    let r = run("\u{05d0}\u{05d1}\u{2028}\u{05d2}\u{2028}d", context);
    assert_eq!(r.directions, vec![Direction::RightToLeft]);
    assert_eq!(r.levels, levels(&[1, 1, 1, 1, 1, 2]));
    // Lines are [0, 1, 2], [3, 4] and [5], each reordered on its own
    assert_eq!(r.order, vec![1, 0, 2, 3, 4, 5]);
    for pos in [2, 4] {
        assert_eq!(r.chars[pos].code_point, '\u{2028}');
        assert_eq!(r.chars[pos].direction, BidiClass::LeftToRight);
    }
}

#[test]
fn first_strong_isolate_without_strong_follows_auto_hint() {
    let text = "\u{05d0}\u{2068}1\u{2069}";
    let r = run(text, BidiContext::new(ParagraphDirectionHint::AutoRightToLeft));
    assert_eq!(r.directions, vec![Direction::RightToLeft]);
    assert_eq!(r.levels, levels(&[1, 1, 4, 1]));

    let r = run(text, BidiContext::new(ParagraphDirectionHint::AutoLeftToRight));
    assert_eq!(r.levels, levels(&[1, 1, 2, 1]));
}

#[test]
fn first_strong_isolate() {
    let r = run("a\u{2068}\u{05d0}b\u{2069}c", BidiContext::default());
    assert_eq!(r.directions, vec![Direction::LeftToRight]);
    assert_eq!(r.levels, levels(&[0, 0, 1, 2, 0, 0]));
    assert_eq!(r.order, vec![0, 1, 3, 2, 4, 5]);
}

#[test]
fn embedding_overflow() {
    let mut text: String = std::iter::repeat('\u{202b}').take(130).collect();
    text.push('\u{05d0}');
    let r = run(&text, BidiContext::default());
    assert_eq!(r.order, vec![130]);
    assert_eq!(r.levels[130], Some(MAX_DEPTH as i8));
    assert!(r.levels[..130].iter().all(Option::is_none));
}

#[test]
fn multiple_paragraphs() {
    let r = run("\u{05d0}\u{2029}a", BidiContext::default());
    assert_eq!(
        r.directions,
        vec![Direction::RightToLeft, Direction::LeftToRight]
    );
    assert_eq!(r.levels, levels(&[1, 1, 0]));
    assert_eq!(r.order, vec![1, 0, 2]);
}

#[test]
fn explicit_direction_overrides_detection() {
    let r = run(
        "abc",
        BidiContext::new(ParagraphDirectionHint::RightToLeft),
    );
    assert_eq!(r.directions, vec![Direction::RightToLeft]);
    assert_eq!(r.levels, levels(&[2, 2, 2]));
    assert_eq!(r.order, vec![0, 1, 2]);
}

#[test]
fn shaper_runs() {
    let r = run("abc \u{05d0}\u{05d1}", BidiContext::default());
    let runs = visual_runs(&r.chars);
    assert_eq!(
        runs,
        vec![
            VisualRun {
                direction: Direction::LeftToRight,
                level: Level(0),
                range: 0..4,
            },
            VisualRun {
                direction: Direction::RightToLeft,
                level: Level(1),
                range: 4..6,
            },
        ]
    );
}
