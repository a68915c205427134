//! Generated from bidi/data/BidiBrackets.txt by bidi/generate/src/main.rs

/// Bidi_Paired_Bracket_Type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BracketType {
    None,
    Open,
    Close,
}

/// (code point, Bidi_Paired_Bracket, Bidi_Paired_Bracket_Type), sorted by code point
pub const BIDI_BRACKETS: &[(u32, u32, BracketType)] = &[
    (0x0028, 0x0029, BracketType::Open), // LEFT PARENTHESIS
    (0x0029, 0x0028, BracketType::Close), // RIGHT PARENTHESIS
    (0x005b, 0x005d, BracketType::Open), // LEFT SQUARE BRACKET
    (0x005d, 0x005b, BracketType::Close), // RIGHT SQUARE BRACKET
    (0x007b, 0x007d, BracketType::Open), // LEFT CURLY BRACKET
    (0x007d, 0x007b, BracketType::Close), // RIGHT CURLY BRACKET
    (0x0f3a, 0x0f3b, BracketType::Open), // TIBETAN MARK GUG RTAGS GYON
    (0x0f3b, 0x0f3a, BracketType::Close), // TIBETAN MARK GUG RTAGS GYAS
    (0x0f3c, 0x0f3d, BracketType::Open), // TIBETAN MARK ANG KHANG GYON
    (0x0f3d, 0x0f3c, BracketType::Close), // TIBETAN MARK ANG KHANG GYAS
    (0x169b, 0x169c, BracketType::Open), // OGHAM FEATHER MARK
    (0x169c, 0x169b, BracketType::Close), // OGHAM REVERSED FEATHER MARK
    (0x2045, 0x2046, BracketType::Open), // LEFT SQUARE BRACKET WITH QUILL
    (0x2046, 0x2045, BracketType::Close), // RIGHT SQUARE BRACKET WITH QUILL
    (0x207d, 0x207e, BracketType::Open), // SUPERSCRIPT LEFT PARENTHESIS
    (0x207e, 0x207d, BracketType::Close), // SUPERSCRIPT RIGHT PARENTHESIS
    (0x208d, 0x208e, BracketType::Open), // SUBSCRIPT LEFT PARENTHESIS
    (0x208e, 0x208d, BracketType::Close), // SUBSCRIPT RIGHT PARENTHESIS
    (0x2308, 0x2309, BracketType::Open), // LEFT CEILING
    (0x2309, 0x2308, BracketType::Close), // RIGHT CEILING
    (0x230a, 0x230b, BracketType::Open), // LEFT FLOOR
    (0x230b, 0x230a, BracketType::Close), // RIGHT FLOOR
    (0x2329, 0x232a, BracketType::Open), // LEFT-POINTING ANGLE BRACKET
    (0x232a, 0x2329, BracketType::Close), // RIGHT-POINTING ANGLE BRACKET
    (0x2768, 0x2769, BracketType::Open), // MEDIUM LEFT PARENTHESIS ORNAMENT
    (0x2769, 0x2768, BracketType::Close), // MEDIUM RIGHT PARENTHESIS ORNAMENT
    (0x276a, 0x276b, BracketType::Open), // MEDIUM FLATTENED LEFT PARENTHESIS ORNAMENT
    (0x276b, 0x276a, BracketType::Close), // MEDIUM FLATTENED RIGHT PARENTHESIS ORNAMENT
    (0x276c, 0x276d, BracketType::Open), // MEDIUM LEFT-POINTING ANGLE BRACKET ORNAMENT
    (0x276d, 0x276c, BracketType::Close), // MEDIUM RIGHT-POINTING ANGLE BRACKET ORNAMENT
    (0x276e, 0x276f, BracketType::Open), // HEAVY LEFT-POINTING ANGLE QUOTATION MARK ORNAMENT
    (0x276f, 0x276e, BracketType::Close), // HEAVY RIGHT-POINTING ANGLE QUOTATION MARK ORNAMENT
    (0x2770, 0x2771, BracketType::Open), // HEAVY LEFT-POINTING ANGLE BRACKET ORNAMENT
    (0x2771, 0x2770, BracketType::Close), // HEAVY RIGHT-POINTING ANGLE BRACKET ORNAMENT
    (0x2772, 0x2773, BracketType::Open), // LIGHT LEFT TORTOISE SHELL BRACKET ORNAMENT
    (0x2773, 0x2772, BracketType::Close), // LIGHT RIGHT TORTOISE SHELL BRACKET ORNAMENT
    (0x2774, 0x2775, BracketType::Open), // MEDIUM LEFT CURLY BRACKET ORNAMENT
    (0x2775, 0x2774, BracketType::Close), // MEDIUM RIGHT CURLY BRACKET ORNAMENT
    (0x27c5, 0x27c6, BracketType::Open), // LEFT S-SHAPED BAG DELIMITER
    (0x27c6, 0x27c5, BracketType::Close), // RIGHT S-SHAPED BAG DELIMITER
    (0x27e6, 0x27e7, BracketType::Open), // MATHEMATICAL LEFT WHITE SQUARE BRACKET
    (0x27e7, 0x27e6, BracketType::Close), // MATHEMATICAL RIGHT WHITE SQUARE BRACKET
    (0x27e8, 0x27e9, BracketType::Open), // MATHEMATICAL LEFT ANGLE BRACKET
    (0x27e9, 0x27e8, BracketType::Close), // MATHEMATICAL RIGHT ANGLE BRACKET
    (0x27ea, 0x27eb, BracketType::Open), // MATHEMATICAL LEFT DOUBLE ANGLE BRACKET
    (0x27eb, 0x27ea, BracketType::Close), // MATHEMATICAL RIGHT DOUBLE ANGLE BRACKET
    (0x27ec, 0x27ed, BracketType::Open), // MATHEMATICAL LEFT WHITE TORTOISE SHELL BRACKET
    (0x27ed, 0x27ec, BracketType::Close), // MATHEMATICAL RIGHT WHITE TORTOISE SHELL BRACKET
    (0x27ee, 0x27ef, BracketType::Open), // MATHEMATICAL LEFT FLATTENED PARENTHESIS
    (0x27ef, 0x27ee, BracketType::Close), // MATHEMATICAL RIGHT FLATTENED PARENTHESIS
    (0x2983, 0x2984, BracketType::Open), // LEFT WHITE CURLY BRACKET
    (0x2984, 0x2983, BracketType::Close), // RIGHT WHITE CURLY BRACKET
    (0x2985, 0x2986, BracketType::Open), // LEFT WHITE PARENTHESIS
    (0x2986, 0x2985, BracketType::Close), // RIGHT WHITE PARENTHESIS
    (0x2987, 0x2988, BracketType::Open), // Z NOTATION LEFT IMAGE BRACKET
    (0x2988, 0x2987, BracketType::Close), // Z NOTATION RIGHT IMAGE BRACKET
    (0x2989, 0x298a, BracketType::Open), // Z NOTATION LEFT BINDING BRACKET
    (0x298a, 0x2989, BracketType::Close), // Z NOTATION RIGHT BINDING BRACKET
    (0x298b, 0x298c, BracketType::Open), // LEFT SQUARE BRACKET WITH UNDERBAR
    (0x298c, 0x298b, BracketType::Close), // RIGHT SQUARE BRACKET WITH UNDERBAR
    (0x298d, 0x2990, BracketType::Open), // LEFT SQUARE BRACKET WITH TICK IN TOP CORNER
    (0x298e, 0x298f, BracketType::Close), // RIGHT SQUARE BRACKET WITH TICK IN BOTTOM CORNER
    (0x298f, 0x298e, BracketType::Open), // LEFT SQUARE BRACKET WITH TICK IN BOTTOM CORNER
    (0x2990, 0x298d, BracketType::Close), // RIGHT SQUARE BRACKET WITH TICK IN TOP CORNER
    (0x2991, 0x2992, BracketType::Open), // LEFT ANGLE BRACKET WITH DOT
    (0x2992, 0x2991, BracketType::Close), // RIGHT ANGLE BRACKET WITH DOT
    (0x2993, 0x2994, BracketType::Open), // LEFT ARC LESS-THAN BRACKET
    (0x2994, 0x2993, BracketType::Close), // RIGHT ARC GREATER-THAN BRACKET
    (0x2995, 0x2996, BracketType::Open), // DOUBLE LEFT ARC GREATER-THAN BRACKET
    (0x2996, 0x2995, BracketType::Close), // DOUBLE RIGHT ARC LESS-THAN BRACKET
    (0x2997, 0x2998, BracketType::Open), // LEFT BLACK TORTOISE SHELL BRACKET
    (0x2998, 0x2997, BracketType::Close), // RIGHT BLACK TORTOISE SHELL BRACKET
    (0x29d8, 0x29d9, BracketType::Open), // LEFT WIGGLY FENCE
    (0x29d9, 0x29d8, BracketType::Close), // RIGHT WIGGLY FENCE
    (0x29da, 0x29db, BracketType::Open), // LEFT DOUBLE WIGGLY FENCE
    (0x29db, 0x29da, BracketType::Close), // RIGHT DOUBLE WIGGLY FENCE
    (0x29fc, 0x29fd, BracketType::Open), // LEFT-POINTING CURVED ANGLE BRACKET
    (0x29fd, 0x29fc, BracketType::Close), // RIGHT-POINTING CURVED ANGLE BRACKET
    (0x2e22, 0x2e23, BracketType::Open), // TOP LEFT HALF BRACKET
    (0x2e23, 0x2e22, BracketType::Close), // TOP RIGHT HALF BRACKET
    (0x2e24, 0x2e25, BracketType::Open), // BOTTOM LEFT HALF BRACKET
    (0x2e25, 0x2e24, BracketType::Close), // BOTTOM RIGHT HALF BRACKET
    (0x2e26, 0x2e27, BracketType::Open), // LEFT SIDEWAYS U BRACKET
    (0x2e27, 0x2e26, BracketType::Close), // RIGHT SIDEWAYS U BRACKET
    (0x2e28, 0x2e29, BracketType::Open), // LEFT DOUBLE PARENTHESIS
    (0x2e29, 0x2e28, BracketType::Close), // RIGHT DOUBLE PARENTHESIS
    (0x2e55, 0x2e56, BracketType::Open), // LEFT SQUARE BRACKET WITH STROKE
    (0x2e56, 0x2e55, BracketType::Close), // RIGHT SQUARE BRACKET WITH STROKE
    (0x2e57, 0x2e58, BracketType::Open), // LEFT SQUARE BRACKET WITH DOUBLE STROKE
    (0x2e58, 0x2e57, BracketType::Close), // RIGHT SQUARE BRACKET WITH DOUBLE STROKE
    (0x2e59, 0x2e5a, BracketType::Open), // TOP HALF LEFT PARENTHESIS
    (0x2e5a, 0x2e59, BracketType::Close), // TOP HALF RIGHT PARENTHESIS
    (0x2e5b, 0x2e5c, BracketType::Open), // BOTTOM HALF LEFT PARENTHESIS
    (0x2e5c, 0x2e5b, BracketType::Close), // BOTTOM HALF RIGHT PARENTHESIS
    (0x3008, 0x3009, BracketType::Open), // LEFT ANGLE BRACKET
    (0x3009, 0x3008, BracketType::Close), // RIGHT ANGLE BRACKET
    (0x300a, 0x300b, BracketType::Open), // LEFT DOUBLE ANGLE BRACKET
    (0x300b, 0x300a, BracketType::Close), // RIGHT DOUBLE ANGLE BRACKET
    (0x300c, 0x300d, BracketType::Open), // LEFT CORNER BRACKET
    (0x300d, 0x300c, BracketType::Close), // RIGHT CORNER BRACKET
    (0x300e, 0x300f, BracketType::Open), // LEFT WHITE CORNER BRACKET
    (0x300f, 0x300e, BracketType::Close), // RIGHT WHITE CORNER BRACKET
    (0x3010, 0x3011, BracketType::Open), // LEFT BLACK LENTICULAR BRACKET
    (0x3011, 0x3010, BracketType::Close), // RIGHT BLACK LENTICULAR BRACKET
    (0x3014, 0x3015, BracketType::Open), // LEFT TORTOISE SHELL BRACKET
    (0x3015, 0x3014, BracketType::Close), // RIGHT TORTOISE SHELL BRACKET
    (0x3016, 0x3017, BracketType::Open), // LEFT WHITE LENTICULAR BRACKET
    (0x3017, 0x3016, BracketType::Close), // RIGHT WHITE LENTICULAR BRACKET
    (0x3018, 0x3019, BracketType::Open), // LEFT WHITE TORTOISE SHELL BRACKET
    (0x3019, 0x3018, BracketType::Close), // RIGHT WHITE TORTOISE SHELL BRACKET
    (0x301a, 0x301b, BracketType::Open), // LEFT WHITE SQUARE BRACKET
    (0x301b, 0x301a, BracketType::Close), // RIGHT WHITE SQUARE BRACKET
    (0xfe59, 0xfe5a, BracketType::Open), // SMALL LEFT PARENTHESIS
    (0xfe5a, 0xfe59, BracketType::Close), // SMALL RIGHT PARENTHESIS
    (0xfe5b, 0xfe5c, BracketType::Open), // SMALL LEFT CURLY BRACKET
    (0xfe5c, 0xfe5b, BracketType::Close), // SMALL RIGHT CURLY BRACKET
    (0xfe5d, 0xfe5e, BracketType::Open), // SMALL LEFT TORTOISE SHELL BRACKET
    (0xfe5e, 0xfe5d, BracketType::Close), // SMALL RIGHT TORTOISE SHELL BRACKET
    (0xff08, 0xff09, BracketType::Open), // FULLWIDTH LEFT PARENTHESIS
    (0xff09, 0xff08, BracketType::Close), // FULLWIDTH RIGHT PARENTHESIS
    (0xff3b, 0xff3d, BracketType::Open), // FULLWIDTH LEFT SQUARE BRACKET
    (0xff3d, 0xff3b, BracketType::Close), // FULLWIDTH RIGHT SQUARE BRACKET
    (0xff5b, 0xff5d, BracketType::Open), // FULLWIDTH LEFT CURLY BRACKET
    (0xff5d, 0xff5b, BracketType::Close), // FULLWIDTH RIGHT CURLY BRACKET
    (0xff5f, 0xff60, BracketType::Open), // FULLWIDTH LEFT WHITE PARENTHESIS
    (0xff60, 0xff5f, BracketType::Close), // FULLWIDTH RIGHT WHITE PARENTHESIS
    (0xff62, 0xff63, BracketType::Open), // HALFWIDTH LEFT CORNER BRACKET
    (0xff63, 0xff62, BracketType::Close), // HALFWIDTH RIGHT CORNER BRACKET
];
