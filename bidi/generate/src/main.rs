use anyhow::Context;
use std::io::Write;

fn parse_codepoint(s: &str) -> anyhow::Result<u32> {
    u32::from_str_radix(s.trim(), 16).with_context(|| s.to_string())
}

/// Splits a UCD data line into its `;` separated fields, with the
/// trailing `# comment` removed from the last field.
/// Returns None for blank and comment-only lines.
fn data_fields(line: &str) -> Option<(Vec<&str>, &str)> {
    let line = line.trim();
    if line.starts_with('#') || line.is_empty() {
        return None;
    }
    let (data, comment) = match line.split_once('#') {
        Some((data, comment)) => (data, comment.trim()),
        None => (line, ""),
    };
    Some((data.split(';').map(str::trim).collect(), comment))
}

fn class_variant(name: &str) -> anyhow::Result<&'static str> {
    Ok(match name {
        "AL" | "Arabic_Letter" => "ArabicLetter",
        "AN" | "Arabic_Number" => "ArabicNumber",
        "BN" | "Boundary_Neutral" => "BoundaryNeutral",
        "CS" | "Common_Separator" => "CommonSeparator",
        "EN" | "European_Number" => "EuropeanNumber",
        "ES" | "European_Separator" => "EuropeanSeparator",
        "ET" | "European_Terminator" => "EuropeanTerminator",
        "FSI" | "First_Strong_Isolate" => "FirstStrongIsolate",
        "L" | "Left_To_Right" => "LeftToRight",
        "LRO" | "Left_To_Right_Override" => "LeftToRightOverride",
        "LRE" | "Left_To_Right_Embedding" => "LeftToRightEmbedding",
        "LRI" | "Left_To_Right_Isolate" => "LeftToRightIsolate",
        "NSM" | "Nonspacing_Mark" => "NonspacingMark",
        "ON" | "Other_Neutral" => "OtherNeutral",
        "B" | "Paragraph_Separator" => "ParagraphSeparator",
        "PDF" | "Pop_Directional_Format" => "PopDirectionalFormat",
        "PDI" | "Pop_Directional_Isolate" => "PopDirectionalIsolate",
        "R" | "Right_To_Left" => "RightToLeft",
        "RLE" | "Right_To_Left_Embedding" => "RightToLeftEmbedding",
        "RLI" | "Right_To_Left_Isolate" => "RightToLeftIsolate",
        "RLO" | "Right_To_Left_Override" => "RightToLeftOverride",
        "S" | "Segment_Separator" => "SegmentSeparator",
        "WS" | "White_Space" => "WhiteSpace",
        bad => anyhow::bail!("invalid BidiClass {}", bad),
    })
}

const CODE_POINTS: usize = 0x110000;

/// Parses `XXXX` or `XXXX..YYYY` into an inclusive range.
fn parse_range(s: &str) -> anyhow::Result<(usize, usize)> {
    let (start, end) = match s.split_once("..") {
        Some((start, end)) => (parse_codepoint(start)?, parse_codepoint(end)?),
        None => {
            let cp = parse_codepoint(s)?;
            (cp, cp)
        }
    };
    anyhow::ensure!(
        start <= end && (end as usize) < CODE_POINTS,
        "invalid range {}",
        s
    );
    Ok((start as usize, end as usize))
}

/// Returns the class variant of every code point described by the
/// contents of DerivedBidiClass.txt.
fn class_table(data: &str) -> anyhow::Result<Vec<&'static str>> {
    // The class of every code point. The `# @missing:` lines give the
    // defaults for unlisted code points, later ones taking precedence;
    // the data lines then override them.
    let mut classes = vec!["LeftToRight"; CODE_POINTS];

    for line in data.lines() {
        let Some(missing) = line.trim().strip_prefix("# @missing:") else {
            continue;
        };
        let fields: Vec<&str> = missing.split(';').map(str::trim).collect();
        anyhow::ensure!(fields.len() >= 2, "malformed @missing line: {}", line);
        let (start, end) = parse_range(fields[0])?;
        let variant = class_variant(fields[1])?;
        log::debug!("default {:04x}..{:04x} {}", start, end, variant);
        classes[start..=end].fill(variant);
    }

    for line in data.lines() {
        let Some((fields, _comment)) = data_fields(line) else {
            continue;
        };
        let (start, end) = parse_range(fields[0])?;
        classes[start..=end].fill(class_variant(fields[1])?);
    }

    Ok(classes)
}

fn gen_class() -> anyhow::Result<()> {
    let data = std::fs::read_to_string("bidi/data/DerivedBidiClass.txt")
        .context("bidi/data/DerivedBidiClass.txt")?;
    let classes = class_table(&data)?;

    // Coalesce adjacent code points of the same class; the source file
    // splits ranges by general category, which we don't care about here.
    struct Entry {
        start: u32,
        end: u32,
        variant: &'static str,
    }

    let mut merged: Vec<Entry> = vec![];
    for (cp, &variant) in (0u32..).zip(classes.iter()) {
        match merged.last_mut() {
            Some(prior) if prior.variant == variant => prior.end = cp,
            _ => merged.push(Entry {
                start: cp,
                end: cp,
                variant,
            }),
        }
    }
    log::info!("{} bidi class ranges after coalescing", merged.len());

    let mut f =
        std::fs::File::create("bidi/src/bidi_class.rs").context("bidi/src/bidi_class.rs")?;
    writeln!(
        f,
        "//! Generated from bidi/data/DerivedBidiClass.txt by bidi/generate/src/main.rs"
    )?;
    writeln!(
        f,
        "//! Adjacent ranges sharing a class are coalesced and Left_To_Right ranges"
    )?;
    writeln!(f, "//! are omitted: any code point not listed here is L.")?;
    writeln!(
        f,
        r#"
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BidiClass {{
    ArabicLetter,
    ArabicNumber,
    BoundaryNeutral,
    CommonSeparator,
    EuropeanNumber,
    EuropeanSeparator,
    EuropeanTerminator,
    FirstStrongIsolate,
    LeftToRight,
    LeftToRightEmbedding,
    LeftToRightIsolate,
    LeftToRightOverride,
    NonspacingMark,
    OtherNeutral,
    ParagraphSeparator,
    PopDirectionalFormat,
    PopDirectionalIsolate,
    RightToLeft,
    RightToLeftEmbedding,
    RightToLeftIsolate,
    RightToLeftOverride,
    SegmentSeparator,
    WhiteSpace,
}}
"#
    )?;
    writeln!(
        f,
        "pub const BIDI_CLASS_RANGES: &[(u32, u32, BidiClass)] = &["
    )?;
    for entry in merged.into_iter().filter(|e| e.variant != "LeftToRight") {
        writeln!(
            f,
            "    (0x{:04x}, 0x{:04x}, BidiClass::{}),",
            entry.start, entry.end, entry.variant
        )?;
    }
    writeln!(f, "];")?;

    Ok(())
}

fn gen_brackets() -> anyhow::Result<()> {
    let data = std::fs::read_to_string("bidi/data/BidiBrackets.txt")
        .context("bidi/data/BidiBrackets.txt")?;

    struct Entry {
        code_point: u32,
        paired_bracket: u32,
        bracket_type: &'static str,
        comment: String,
    }

    let mut entries = vec![];
    for line in data.lines() {
        let Some((fields, comment)) = data_fields(line) else {
            continue;
        };
        entries.push(Entry {
            code_point: parse_codepoint(fields[0])?,
            paired_bracket: parse_codepoint(fields[1])?,
            bracket_type: match fields[2] {
                "o" => "Open",
                "c" => "Close",
                bad => anyhow::bail!("invalid bracket type {}", bad),
            },
            comment: comment.to_string(),
        });
    }

    entries.sort_by_key(|e| e.code_point);

    let mut f =
        std::fs::File::create("bidi/src/bidi_brackets.rs").context("bidi/src/bidi_brackets.rs")?;
    writeln!(
        f,
        "//! Generated from bidi/data/BidiBrackets.txt by bidi/generate/src/main.rs"
    )?;
    writeln!(
        f,
        r#"
/// Bidi_Paired_Bracket_Type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BracketType {{
    None,
    Open,
    Close,
}}

/// (code point, Bidi_Paired_Bracket, Bidi_Paired_Bracket_Type), sorted by code point"#
    )?;
    writeln!(
        f,
        "pub const BIDI_BRACKETS: &[(u32, u32, BracketType)] = &["
    )?;
    for entry in entries {
        writeln!(
            f,
            "    (0x{:04x}, 0x{:04x}, BracketType::{}), // {}",
            entry.code_point, entry.paired_bracket, entry.bracket_type, entry.comment
        )?;
    }
    writeln!(f, "];")?;
    Ok(())
}

fn gen_mirroring() -> anyhow::Result<()> {
    let data = std::fs::read_to_string("bidi/data/BidiMirroring.txt")
        .context("bidi/data/BidiMirroring.txt")?;

    let mut entries = vec![];
    for line in data.lines() {
        let Some((fields, _comment)) = data_fields(line) else {
            continue;
        };
        entries.push((parse_codepoint(fields[0])?, parse_codepoint(fields[1])?));
    }
    entries.sort();
    entries.dedup_by_key(|(cp, _)| *cp);

    let mut f = std::fs::File::create("bidi/src/bidi_mirroring.rs")
        .context("bidi/src/bidi_mirroring.rs")?;
    writeln!(
        f,
        "//! Generated from bidi/data/BidiMirroring.txt by bidi/generate/src/main.rs"
    )?;
    writeln!(f)?;
    writeln!(f, "/// (code point, Bidi_Mirroring_Glyph), sorted by code point")?;
    writeln!(f, "pub const BIDI_MIRRORING: &[(u32, u32)] = &[")?;
    for (code_point, mirror) in entries {
        writeln!(f, "    (0x{:04x}, 0x{:04x}),", code_point, mirror)?;
    }
    writeln!(f, "];")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    gen_brackets().context("gen_brackets")?;
    gen_mirroring().context("gen_mirroring")?;
    gen_class().context("gen_class")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# @missing: 0000..10FFFF; Left_To_Right
# @missing: 0590..05FF; Right_To_Left
# @missing: 0600..07BF; AL

0009          ; S # Cc       <control-0009>
05D0..05EA    ; R # Lo  [27] HEBREW LETTER ALEF..HEBREW LETTER TAV
0600..0605    ; AN # Cf   [6] ARABIC NUMBER SIGN..ARABIC NUMBER MARK ABOVE
";

    #[test]
    fn missing_ranges_are_defaults() {
        let classes = class_table(SAMPLE).unwrap();
        assert_eq!(classes[0x0041], "LeftToRight");
        assert_eq!(classes[0x0009], "SegmentSeparator");
        // Unlisted code points in the Hebrew and Arabic blocks
        assert_eq!(classes[0x05ff], "RightToLeft");
        assert_eq!(classes[0x07bf], "ArabicLetter");
        // Listed ones keep their own class
        assert_eq!(classes[0x05d0], "RightToLeft");
        assert_eq!(classes[0x0600], "ArabicNumber");
        assert_eq!(classes[0x07c0], "LeftToRight");
    }

    #[test]
    fn bad_ranges() {
        assert!(parse_range("0600..0590").is_err());
        assert!(parse_range("110000").is_err());
        assert_eq!(parse_range("0590..05FF").unwrap(), (0x590, 0x5ff));
    }
}
