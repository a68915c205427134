//! Front-ends that run the algorithm over arbitrary caller items.
//!
//! The caller's items are anything that can be keyed by a code point,
//! for example graphemes keyed by their first code point. They are
//! permuted in place, in the same way as the `BidiChar` records.
use crate::bidi_brackets::BracketType;
use crate::bidi_class::BidiClass;
use crate::char_info::BidiChar;
use crate::context::BidiContext;
use crate::direction::Direction;
use crate::explicit::{paragraph_level, stable_partition};
use crate::paragraph::resolve;
use crate::ucd::UnicodeData;
use log::trace;

/// Puts `items` into visual order.
///
/// Every paragraph of `items` is resolved and its lines reordered. The
/// items that X9 removes are moved after all of the others, in their
/// original relative order. Each remaining item is then told its
/// direction, derived from its embedding level, and the paired brackets
/// with a resolved direction of R are given their mirror glyph.
///
/// Returns the number of remaining items and the direction of each
/// paragraph.
pub fn reorder<T, D: UnicodeData + ?Sized>(
    items: &mut [T],
    get_code_point: impl Fn(&T) -> char,
    mut set_code_point: impl FnMut(&mut T, char),
    mut set_direction: impl FnMut(&mut T, Direction),
    context: &BidiContext,
    data: &D,
) -> (usize, Vec<Direction>) {
    let mut chars: Vec<BidiChar> = items
        .iter()
        .enumerate()
        .map(|(index, item)| BidiChar::new(index, get_code_point(item), data))
        .collect();

    let (len, directions) = resolve(&mut chars, context, data);
    trace!("reorder: {} of {} items remain", len, items.len());

    apply_order(items, chars.iter().map(|c| c.index));

    for (item, c) in items.iter_mut().zip(&chars[..len]) {
        set_direction(item, c.embedding_level.direction());
        if c.direction == BidiClass::RightToLeft
            && c.description.bracket_type != BracketType::None
        {
            set_code_point(item, c.description.mirroring_glyph);
        }
    }

    (len, directions)
}

/// Permutes `items` so that position `k` holds the item that was at
/// `order[k]`. `order` must be a permutation of `0..items.len()`.
fn apply_order<T>(items: &mut [T], order: impl Iterator<Item = usize>) {
    // slot_of[i] is where the item originally at i is now;
    // occupant[k] is the original position of the item now at k.
    let mut slot_of: Vec<usize> = (0..items.len()).collect();
    let mut occupant: Vec<usize> = (0..items.len()).collect();

    for (slot, wanted) in order.enumerate() {
        let from = slot_of[wanted];
        if from == slot {
            continue;
        }
        items.swap(slot, from);
        let displaced = occupant[slot];
        occupant[from] = displaced;
        slot_of[displaced] = from;
        occupant[slot] = wanted;
        slot_of[wanted] = slot;
    }
}

/// Returns the direction of the first paragraph of `items`, using only
/// rules P2 and P3.
pub fn paragraph_direction<T, D: UnicodeData + ?Sized>(
    items: &[T],
    get_code_point: impl Fn(&T) -> char,
    context: &BidiContext,
    data: &D,
) -> Direction {
    let mut chars = vec![];
    for (index, item) in items.iter().enumerate() {
        let c = BidiChar::new(index, get_code_point(item), data);
        let end_of_paragraph = c.description.bidi_class == BidiClass::ParagraphSeparator;
        chars.push(c);
        if end_of_paragraph {
            break;
        }
    }
    paragraph_level(&chars, context.direction).direction()
}

/// Moves the items whose code point has one of the classes removed by X9
/// (RLE, LRE, RLO, LRO, PDF and BN) to the end of `items`, keeping the
/// relative order of the others.
/// Returns the number of remaining items.
pub fn control_filter<T, D: UnicodeData + ?Sized>(
    items: &mut [T],
    get_code_point: impl Fn(&T) -> char,
    data: &D,
) -> usize {
    stable_partition(items, |item| {
        !data.bidi_class(get_code_point(item)).is_removed_by_x9()
    })
}
