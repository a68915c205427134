use crate::bidi_class::BidiClass;
use crate::direction::Direction;
use wezterm_dynamic::{FromDynamic, ToDynamic};

/// How the paragraph embedding level is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromDynamic, ToDynamic)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParagraphDirectionHint {
    LeftToRight,
    RightToLeft,
    /// Attempt to auto-detect but fall back to LTR
    AutoLeftToRight,
    /// Attempt to auto-detect but fall back to RTL
    AutoRightToLeft,
}

impl Default for ParagraphDirectionHint {
    fn default() -> Self {
        Self::AutoLeftToRight
    }
}

impl ParagraphDirectionHint {
    /// Returns just the direction portion of the hint, independent
    /// of the auto-detection state.
    pub fn direction(self) -> Direction {
        match self {
            ParagraphDirectionHint::AutoLeftToRight | ParagraphDirectionHint::LeftToRight => {
                Direction::LeftToRight
            }
            ParagraphDirectionHint::AutoRightToLeft | ParagraphDirectionHint::RightToLeft => {
                Direction::RightToLeft
            }
        }
    }

    /// The class P2 reports when it finds no strong character.
    pub(crate) fn default_class(self) -> BidiClass {
        self.direction().as_bidi_class()
    }
}

fn default_true() -> bool {
    true
}

/// Options that control how paragraphs are resolved and lines reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromDynamic, ToDynamic)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BidiContext {
    #[dynamic(default)]
    #[cfg_attr(feature = "use_serde", serde(default))]
    pub direction: ParagraphDirectionHint,

    /// Apply rule N0 to paired brackets.
    #[dynamic(default = "default_true")]
    #[cfg_attr(feature = "use_serde", serde(default = "default_true"))]
    pub enable_mirrored_brackets: bool,

    /// Treat U+2028 LINE SEPARATOR as the end of a line for the L rules.
    #[dynamic(default = "default_true")]
    #[cfg_attr(feature = "use_serde", serde(default = "default_true"))]
    pub enable_line_separator: bool,

    /// After reordering, move the Zl or Zp character of each line to
    /// the end of that line.
    #[dynamic(default)]
    #[cfg_attr(feature = "use_serde", serde(default))]
    pub move_lf_and_ps_to_end_of_line: bool,
}

impl Default for BidiContext {
    fn default() -> Self {
        Self::new(ParagraphDirectionHint::default())
    }
}

impl From<Direction> for BidiContext {
    fn from(direction: Direction) -> Self {
        Self::new(match direction {
            Direction::LeftToRight => ParagraphDirectionHint::AutoLeftToRight,
            Direction::RightToLeft => ParagraphDirectionHint::AutoRightToLeft,
        })
    }
}

impl BidiContext {
    pub fn new(direction: ParagraphDirectionHint) -> Self {
        Self {
            direction,
            enable_mirrored_brackets: true,
            enable_line_separator: true,
            move_lf_and_ps_to_end_of_line: false,
        }
    }

    pub fn with_direction(mut self, direction: ParagraphDirectionHint) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_mirrored_brackets(mut self, enable: bool) -> Self {
        self.enable_mirrored_brackets = enable;
        self
    }

    pub fn with_line_separator(mut self, enable: bool) -> Self {
        self.enable_line_separator = enable;
        self
    }

    pub fn with_move_lf_and_ps_to_end_of_line(mut self, enable: bool) -> Self {
        self.move_lf_and_ps_to_end_of_line = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;
    use maplit::btreemap;
    use wezterm_dynamic::{Object, Value};

    #[test]
    fn defaults() {
        let context = BidiContext::default();
        assert_eq!(context.direction, ParagraphDirectionHint::AutoLeftToRight);
        assert!(context.enable_mirrored_brackets);
        assert!(context.enable_line_separator);
        assert!(!context.move_lf_and_ps_to_end_of_line);

        assert_eq!(
            BidiContext::from(Direction::RightToLeft).direction,
            ParagraphDirectionHint::AutoRightToLeft
        );
    }

    #[test]
    fn from_dynamic() {
        let context =
            BidiContext::from_dynamic(&Value::Object(Object::default()), Default::default())
                .unwrap();
        assert_eq!(context, BidiContext::default());

        let context = BidiContext::from_dynamic(
            &Value::Object(
                btreemap!(
                    "direction".to_dynamic() => Value::String("RightToLeft".to_string()),
                    "enable_line_separator".to_dynamic() => Value::Bool(false),
                    "move_lf_and_ps_to_end_of_line".to_dynamic() => Value::Bool(true),
                )
                .into(),
            ),
            Default::default(),
        )
        .unwrap();
        assert_eq!(
            context,
            BidiContext::new(ParagraphDirectionHint::RightToLeft)
                .with_line_separator(false)
                .with_move_lf_and_ps_to_end_of_line(true)
        );
    }

    #[test]
    fn to_dynamic() {
        let value = BidiContext::default().to_dynamic();
        let context = BidiContext::from_dynamic(&value, Default::default()).unwrap();
        assert_eq!(context, BidiContext::default());
    }
}
