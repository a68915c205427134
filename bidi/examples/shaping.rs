use bidi_engine::{resolve, visual_runs, BidiChar, BidiContext, Direction, ParagraphDirectionHint, Ucd};

fn main() {
    env_logger::init();

    // The records remember their position in the input, so visual order
    // can always be mapped back to the logical text.
    let paragraph = "אבג abc (דה)";
    let mut chars = BidiChar::from_text(paragraph, &Ucd);

    // Leave it to the algorithm to determine the paragraph direction.
    // If you have some higher level understanding or override for the
    // direction, you can set `direction` accordingly.
    let context = BidiContext::new(ParagraphDirectionHint::AutoLeftToRight);

    // Resolve the embedding levels and put every line into visual order.
    // The formatting characters removed by X9 end up after `len`.
    let (len, directions) = resolve(&mut chars, &context, &Ucd);
    println!("paragraph directions: {:?}", directions);

    /// In order to layout the text, we need to feed information to a shaper.
    /// For the purposes of example, we're sketching out a stub shaper interface
    /// here, which is essentially compatible with eg: Harfbuzz's buffer data type.
    struct ShaperBuffer {
        text: String,
        direction: Direction,
    }
    impl ShaperBuffer {
        pub fn add_codepoint(&mut self, codepoint: char) {
            // could call hb_buffer_add_codepoints() here
            self.text.push(codepoint);
        }
        pub fn set_direction(&mut self, direction: Direction) {
            // could call hb_buffer_set_direction() here
            self.direction = direction;
        }
        pub fn reset(&mut self) {
            self.text.clear();
        }
        pub fn shape(&mut self) {
            println!("{:?} {:?}", self.direction, self.text);
        }
    }

    let mut buffer = ShaperBuffer {
        text: String::new(),
        direction: Direction::LeftToRight,
    };
    for run in visual_runs(&chars[..len]) {
        buffer.reset();
        buffer.set_direction(run.direction);
        // Runs are in visual order; a right-to-left shaper wants its
        // input in logical order, so undo the reversal for those.
        let mut run_chars: Vec<&BidiChar> = chars[run.range].iter().collect();
        if run.direction == Direction::RightToLeft {
            run_chars.reverse();
        }
        for c in run_chars {
            buffer.add_codepoint(c.code_point);
        }

        buffer.shape();
    }
}
