//! Paragraph level (P2, P3) and explicit embeddings (X1-X9).
use crate::bidi_class::BidiClass;
use crate::char_info::BidiChar;
use crate::context::ParagraphDirectionHint;
use crate::level::Level;
use crate::level_stack::{LevelStack, Override};
use log::trace;

/// This is the method for Rule P2.
///
/// Find the first character of type L, AL or R, skipping over any
/// characters between an isolate initiator and its matching PDI.
/// When `rule_x5c` is set the scan is for an FSI and ends at the PDI
/// that closes it.
/// Returns `fallback` if no strong character was found.
pub fn first_strong_class(chars: &[BidiChar], rule_x5c: bool, fallback: BidiClass) -> BidiClass {
    let mut isolate_level = 0usize;
    for c in chars {
        match c.direction {
            bc if bc.is_strong() && isolate_level == 0 => return bc,
            BidiClass::LeftToRightIsolate
            | BidiClass::RightToLeftIsolate
            | BidiClass::FirstStrongIsolate => isolate_level += 1,
            BidiClass::PopDirectionalIsolate => {
                if isolate_level > 0 {
                    isolate_level -= 1;
                } else if rule_x5c {
                    break;
                }
            }
            _ => {}
        }
    }
    fallback
}

/// The class that determines the paragraph level: the explicit direction
/// of the hint, or the P2 result with the hint's direction as fallback.
pub fn paragraph_class(chars: &[BidiChar], hint: ParagraphDirectionHint) -> BidiClass {
    match hint {
        ParagraphDirectionHint::LeftToRight => BidiClass::LeftToRight,
        ParagraphDirectionHint::RightToLeft => BidiClass::RightToLeft,
        ParagraphDirectionHint::AutoLeftToRight | ParagraphDirectionHint::AutoRightToLeft => {
            first_strong_class(chars, false, hint.default_class())
        }
    }
}

/// Rule P3
pub fn paragraph_level_for_class(bc: BidiClass) -> Level {
    match bc {
        BidiClass::RightToLeft | BidiClass::ArabicLetter => Level(1),
        _ => Level(0),
    }
}

pub fn paragraph_level(chars: &[BidiChar], hint: ParagraphDirectionHint) -> Level {
    paragraph_level_for_class(paragraph_class(chars, hint))
}

/// Rules X1 through X8.
///
/// Assigns an explicit embedding level to every character of the
/// paragraph and applies directional overrides to `direction`.
/// Characters that X9 will remove keep level 0.
/// An FSI with no strong character before its PDI uses the default
/// direction of an auto `hint`, and acts as LRI otherwise.
pub fn explicit_levels(
    chars: &mut [BidiChar],
    paragraph_level: Level,
    hint: ParagraphDirectionHint,
) {
    let isolate_fallback = match hint {
        ParagraphDirectionHint::AutoLeftToRight | ParagraphDirectionHint::AutoRightToLeft => {
            hint.default_class()
        }
        ParagraphDirectionHint::LeftToRight | ParagraphDirectionHint::RightToLeft => {
            BidiClass::LeftToRight
        }
    };

    // X1: initialize stack and other variables
    let mut stack = LevelStack::new(paragraph_level);
    let mut overflow_isolate = 0usize;
    let mut overflow_embedding = 0usize;
    let mut valid_isolate = 0usize;

    // X2..X8: process each character, setting embedding levels
    // and override status
    for idx in 0..chars.len() {
        let bc = chars[idx].direction;
        trace!("X1-X8 idx={} {:?} depth={}", idx, bc, stack.depth());

        let (next_level, override_status) = match bc {
            // X2
            BidiClass::RightToLeftEmbedding => {
                (stack.embedding_level().least_greater_odd(), Override::Neutral)
            }
            // X3
            BidiClass::LeftToRightEmbedding => {
                (stack.embedding_level().least_greater_even(), Override::Neutral)
            }
            // X4
            BidiClass::RightToLeftOverride => {
                (stack.embedding_level().least_greater_odd(), Override::RTL)
            }
            // X5
            BidiClass::LeftToRightOverride => {
                (stack.embedding_level().least_greater_even(), Override::LTR)
            }
            // X5a, X5b, X5c
            BidiClass::RightToLeftIsolate
            | BidiClass::LeftToRightIsolate
            | BidiClass::FirstStrongIsolate => {
                let rtl = match bc {
                    BidiClass::RightToLeftIsolate => true,
                    BidiClass::LeftToRightIsolate => false,
                    _ => {
                        // X5c: the text up to the matching PDI decides
                        let class =
                            first_strong_class(&chars[idx + 1..], true, isolate_fallback);
                        paragraph_level_for_class(class).is_rtl()
                    }
                };

                chars[idx].embedding_level = stack.embedding_level();
                stack.apply_override(&mut chars[idx].direction);

                let level = if rtl {
                    stack.embedding_level().least_greater_odd()
                } else {
                    stack.embedding_level().least_greater_even()
                };
                match level {
                    Some(level) if overflow_isolate == 0 && overflow_embedding == 0 => {
                        valid_isolate += 1;
                        stack.push(level, Override::Neutral, true);
                    }
                    _ => overflow_isolate += 1,
                }
                continue;
            }
            // X6a
            BidiClass::PopDirectionalIsolate => {
                if overflow_isolate > 0 {
                    overflow_isolate -= 1;
                } else if valid_isolate == 0 {
                    // Unmatched; nothing to pop
                } else {
                    overflow_embedding = 0;
                    stack.pop_isolate();
                    valid_isolate -= 1;
                }
                chars[idx].embedding_level = stack.embedding_level();
                stack.apply_override(&mut chars[idx].direction);
                continue;
            }
            // X7
            BidiClass::PopDirectionalFormat => {
                if overflow_isolate > 0 {
                    // Within an overflowing isolate; the PDI will clean up
                } else if overflow_embedding > 0 {
                    overflow_embedding -= 1;
                } else if !stack.isolate_status() && stack.depth() >= 2 {
                    stack.pop();
                }
                continue;
            }
            // X8
            BidiClass::ParagraphSeparator => {
                // Terminates all embedding contexts.
                // Only ever the last character of a paragraph.
                chars[idx].embedding_level = paragraph_level;
                break;
            }
            BidiClass::BoundaryNeutral => continue,
            // X6
            _ => {
                chars[idx].embedding_level = stack.embedding_level();
                stack.apply_override(&mut chars[idx].direction);
                continue;
            }
        };

        // X2..X5 share the push and overflow handling
        match next_level {
            Some(level) if overflow_isolate == 0 && overflow_embedding == 0 => {
                stack.push(level, override_status, false);
            }
            _ => {
                if overflow_isolate == 0 {
                    overflow_embedding += 1;
                }
            }
        }
    }
}

/// Rule X9.
///
/// Moves the characters removed by X9 (RLE, LRE, RLO, LRO, PDF and BN)
/// to the end of `chars`, preserving the relative order of both the kept
/// and the removed characters.
/// Returns the number of kept characters.
pub fn remove_explicit_formatting(chars: &mut [BidiChar]) -> usize {
    stable_partition(chars, |c| !c.direction.is_removed_by_x9())
}

/// Moves the items for which `keep` is false to the end of `items`
/// without changing the relative order within either group.
/// Returns the number of kept items.
pub(crate) fn stable_partition<T>(items: &mut [T], keep: impl Fn(&T) -> bool) -> usize {
    let kept_flags: Vec<bool> = items.iter().map(|item| keep(item)).collect();
    let kept = kept_flags.iter().filter(|&&k| k).count();

    // target[i] is the final position of the item now at i
    let mut next_kept = 0;
    let mut next_removed = kept;
    let mut target: Vec<usize> = kept_flags
        .iter()
        .map(|&k| {
            let slot = if k { &mut next_kept } else { &mut next_removed };
            *slot += 1;
            *slot - 1
        })
        .collect();

    // Each swap puts one item into its final position
    for idx in 0..items.len() {
        while target[idx] != idx {
            let dest = target[idx];
            items.swap(idx, dest);
            target.swap(idx, dest);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;
    use BidiClass::*;

    fn chars(classes: &[BidiClass]) -> Vec<BidiChar> {
        classes
            .iter()
            .enumerate()
            .map(|(idx, &bc)| BidiChar::with_class(idx, bc))
            .collect()
    }

    fn levels(chars: &[BidiChar]) -> Vec<i8> {
        chars.iter().map(|c| c.embedding_level.0).collect()
    }

    #[test]
    fn p2() {
        let text = chars(&[OtherNeutral, RightToLeftIsolate, LeftToRight, PopDirectionalIsolate, ArabicLetter]);
        assert_eq!(first_strong_class(&text, false, LeftToRight), ArabicLetter);
        assert_eq!(
            paragraph_level(&text, ParagraphDirectionHint::AutoLeftToRight),
            Level(1)
        );
        assert_eq!(
            paragraph_level(&text, ParagraphDirectionHint::LeftToRight),
            Level(0)
        );

        let neutral = chars(&[WhiteSpace, EuropeanNumber]);
        assert_eq!(
            paragraph_level(&neutral, ParagraphDirectionHint::AutoRightToLeft),
            Level(1)
        );
        assert_eq!(
            paragraph_level(&neutral, ParagraphDirectionHint::AutoLeftToRight),
            Level(0)
        );
    }

    #[test]
    fn p2_x5c_stops_at_pdi() {
        let text = chars(&[OtherNeutral, PopDirectionalIsolate, RightToLeft]);
        assert_eq!(first_strong_class(&text, true, LeftToRight), LeftToRight);
        assert_eq!(first_strong_class(&text, false, LeftToRight), RightToLeft);
    }

    #[test]
    fn embeddings() {
        let mut text = chars(&[
            LeftToRight,
            RightToLeftEmbedding,
            LeftToRight,
            LeftToRightOverride,
            RightToLeft,
            PopDirectionalFormat,
            PopDirectionalFormat,
            LeftToRight,
        ]);
        explicit_levels(&mut text, Level(0), ParagraphDirectionHint::LeftToRight);
        assert_eq!(levels(&text)[..5].to_vec(), vec![0, 0, 1, 0, 2]);
        assert_eq!(text[4].direction, LeftToRight);
        assert_eq!(text[7].embedding_level, Level(0));
    }

    #[test]
    fn isolates() {
        let mut text = chars(&[
            RightToLeftOverride,
            RightToLeftIsolate,
            LeftToRight,
            PopDirectionalIsolate,
            LeftToRight,
            PopDirectionalFormat,
        ]);
        explicit_levels(&mut text, Level(0), ParagraphDirectionHint::LeftToRight);
        assert_eq!(levels(&text)[1..5].to_vec(), vec![1, 3, 1, 1]);
        // The initiator and PDI take the override of the enclosing level
        assert_eq!(text[1].direction, RightToLeft);
        assert_eq!(text[2].direction, LeftToRight);
        assert_eq!(text[3].direction, RightToLeft);
        assert_eq!(text[4].direction, RightToLeft);
    }

    #[test]
    fn fsi() {
        let mut text = chars(&[FirstStrongIsolate, ArabicLetter, PopDirectionalIsolate]);
        explicit_levels(&mut text, Level(0), ParagraphDirectionHint::LeftToRight);
        assert_eq!(levels(&text), vec![0, 1, 0]);

        // No strong before the PDI: treated as LRI
        let mut text = chars(&[FirstStrongIsolate, OtherNeutral, PopDirectionalIsolate, RightToLeft]);
        explicit_levels(&mut text, Level(1), ParagraphDirectionHint::RightToLeft);
        assert_eq!(levels(&text), vec![1, 2, 1, 1]);
    }

    #[test]
    fn fsi_without_strong_follows_auto_hint() {
        let classes = [FirstStrongIsolate, EuropeanNumber, PopDirectionalIsolate];

        let mut text = chars(&classes);
        explicit_levels(&mut text, Level(1), ParagraphDirectionHint::AutoRightToLeft);
        assert_eq!(levels(&text), vec![1, 3, 1]);

        let mut text = chars(&classes);
        explicit_levels(&mut text, Level(1), ParagraphDirectionHint::AutoLeftToRight);
        assert_eq!(levels(&text), vec![1, 2, 1]);

        // An explicit paragraph direction leaves the FSI to act as LRI
        let mut text = chars(&classes);
        explicit_levels(&mut text, Level(1), ParagraphDirectionHint::RightToLeft);
        assert_eq!(levels(&text), vec![1, 2, 1]);
    }

    #[test]
    fn overflow() {
        let mut classes = vec![RightToLeftEmbedding; 130];
        classes.push(LeftToRight);
        let mut text = chars(&classes);
        explicit_levels(&mut text, Level(0), ParagraphDirectionHint::LeftToRight);
        assert_eq!(text[130].embedding_level, Level(125));

        let mut classes = vec![LeftToRightIsolate; 70];
        classes.push(RightToLeft);
        let mut text = chars(&classes);
        explicit_levels(&mut text, Level(0), ParagraphDirectionHint::LeftToRight);
        assert_eq!(text[62].embedding_level, Level(124));
        assert_eq!(text[63].embedding_level, Level(124));
        assert_eq!(text[70].embedding_level, Level(124));
    }

    #[test]
    fn x9() {
        let mut text = chars(&[
            LeftToRight,
            BoundaryNeutral,
            RightToLeftEmbedding,
            RightToLeft,
            PopDirectionalFormat,
            EuropeanNumber,
        ]);
        let kept = remove_explicit_formatting(&mut text);
        assert_eq!(kept, 3);
        let order: Vec<usize> = text.iter().map(|c| c.index).collect();
        assert_eq!(order, vec![0, 3, 5, 1, 2, 4]);
    }

    #[test]
    fn partition_is_stable() {
        let mut items: Vec<usize> = (0..1000).collect();
        let kept = stable_partition(&mut items, |&n| n % 3 != 0);
        assert_eq!(kept, 666);
        assert!(items[..kept].windows(2).all(|w| w[0] < w[1]));
        assert!(items[kept..].windows(2).all(|w| w[0] < w[1]));
        assert!(items[..kept].iter().all(|&n| n % 3 != 0));
        assert!(items[kept..].iter().all(|&n| n % 3 == 0));
    }
}
