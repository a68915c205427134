//! Generated from bidi/data/DerivedBidiClass.txt by bidi/generate/src/main.rs
//! Adjacent ranges sharing a class are coalesced and Left_To_Right ranges
//! are omitted: any code point not listed here is L.

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BidiClass {
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
}

pub const BIDI_CLASS_RANGES: &[(u32, u32, BidiClass)] = &[
    (0x0000, 0x0008, BidiClass::BoundaryNeutral),
    (0x0009, 0x0009, BidiClass::SegmentSeparator),
    (0x000a, 0x000a, BidiClass::ParagraphSeparator),
    (0x000b, 0x000b, BidiClass::SegmentSeparator),
    (0x000c, 0x000c, BidiClass::WhiteSpace),
    (0x000d, 0x000d, BidiClass::ParagraphSeparator),
    (0x000e, 0x001b, BidiClass::BoundaryNeutral),
    (0x001c, 0x001e, BidiClass::ParagraphSeparator),
    (0x001f, 0x001f, BidiClass::SegmentSeparator),
    (0x0020, 0x0020, BidiClass::WhiteSpace),
    (0x0021, 0x0022, BidiClass::OtherNeutral),
    (0x0023, 0x0025, BidiClass::EuropeanTerminator),
    (0x0026, 0x002a, BidiClass::OtherNeutral),
    (0x002b, 0x002b, BidiClass::EuropeanSeparator),
    (0x002c, 0x002c, BidiClass::CommonSeparator),
    (0x002d, 0x002d, BidiClass::EuropeanSeparator),
    (0x002e, 0x002f, BidiClass::CommonSeparator),
    (0x0030, 0x0039, BidiClass::EuropeanNumber),
    (0x003a, 0x003a, BidiClass::CommonSeparator),
    (0x003b, 0x0040, BidiClass::OtherNeutral),
    (0x005b, 0x0060, BidiClass::OtherNeutral),
    (0x007b, 0x007e, BidiClass::OtherNeutral),
    (0x007f, 0x0084, BidiClass::BoundaryNeutral),
    (0x0085, 0x0085, BidiClass::ParagraphSeparator),
    (0x0086, 0x009f, BidiClass::BoundaryNeutral),
    (0x00a0, 0x00a0, BidiClass::CommonSeparator),
    (0x00a1, 0x00a1, BidiClass::OtherNeutral),
    (0x00a2, 0x00a5, BidiClass::EuropeanTerminator),
    (0x00a6, 0x00a9, BidiClass::OtherNeutral),
    (0x00ab, 0x00ac, BidiClass::OtherNeutral),
    (0x00ad, 0x00ad, BidiClass::BoundaryNeutral),
    (0x00ae, 0x00af, BidiClass::OtherNeutral),
    (0x00b0, 0x00b1, BidiClass::EuropeanTerminator),
    (0x00b2, 0x00b3, BidiClass::EuropeanNumber),
    (0x00b4, 0x00b4, BidiClass::OtherNeutral),
    (0x00b6, 0x00b8, BidiClass::OtherNeutral),
    (0x00b9, 0x00b9, BidiClass::EuropeanNumber),
    (0x00bb, 0x00bf, BidiClass::OtherNeutral),
    (0x00d7, 0x00d7, BidiClass::OtherNeutral),
    (0x00f7, 0x00f7, BidiClass::OtherNeutral),
    (0x02b9, 0x02ba, BidiClass::OtherNeutral),
    (0x02c2, 0x02cf, BidiClass::OtherNeutral),
    (0x02d2, 0x02df, BidiClass::OtherNeutral),
    (0x02e5, 0x02ed, BidiClass::OtherNeutral),
    (0x02ef, 0x02ff, BidiClass::OtherNeutral),
    (0x0300, 0x036f, BidiClass::NonspacingMark),
    (0x0374, 0x0375, BidiClass::OtherNeutral),
    (0x037e, 0x037e, BidiClass::OtherNeutral),
    (0x0384, 0x0385, BidiClass::OtherNeutral),
    (0x0387, 0x0387, BidiClass::OtherNeutral),
    (0x03f6, 0x03f6, BidiClass::OtherNeutral),
    (0x0483, 0x0489, BidiClass::NonspacingMark),
    (0x058a, 0x058a, BidiClass::OtherNeutral),
    (0x058d, 0x058e, BidiClass::OtherNeutral),
    (0x058f, 0x058f, BidiClass::EuropeanTerminator),
    (0x0590, 0x0590, BidiClass::RightToLeft),
    (0x0591, 0x05bd, BidiClass::NonspacingMark),
    (0x05be, 0x05be, BidiClass::RightToLeft),
    (0x05bf, 0x05bf, BidiClass::NonspacingMark),
    (0x05c0, 0x05c0, BidiClass::RightToLeft),
    (0x05c1, 0x05c2, BidiClass::NonspacingMark),
    (0x05c3, 0x05c3, BidiClass::RightToLeft),
    (0x05c4, 0x05c5, BidiClass::NonspacingMark),
    (0x05c6, 0x05c6, BidiClass::RightToLeft),
    (0x05c7, 0x05c7, BidiClass::NonspacingMark),
    (0x05c8, 0x05ff, BidiClass::RightToLeft),
    (0x0600, 0x0605, BidiClass::ArabicNumber),
    (0x0606, 0x0607, BidiClass::OtherNeutral),
    (0x0608, 0x0608, BidiClass::ArabicLetter),
    (0x0609, 0x060a, BidiClass::EuropeanTerminator),
    (0x060b, 0x060b, BidiClass::ArabicLetter),
    (0x060c, 0x060c, BidiClass::CommonSeparator),
    (0x060d, 0x060d, BidiClass::ArabicLetter),
    (0x060e, 0x060f, BidiClass::OtherNeutral),
    (0x0610, 0x061a, BidiClass::NonspacingMark),
    (0x061b, 0x064a, BidiClass::ArabicLetter),
    (0x064b, 0x065f, BidiClass::NonspacingMark),
    (0x0660, 0x0669, BidiClass::ArabicNumber),
    (0x066a, 0x066a, BidiClass::EuropeanTerminator),
    (0x066b, 0x066c, BidiClass::ArabicNumber),
    (0x066d, 0x066f, BidiClass::ArabicLetter),
    (0x0670, 0x0670, BidiClass::NonspacingMark),
    (0x0671, 0x06d5, BidiClass::ArabicLetter),
    (0x06d6, 0x06dc, BidiClass::NonspacingMark),
    (0x06dd, 0x06dd, BidiClass::ArabicNumber),
    (0x06de, 0x06de, BidiClass::OtherNeutral),
    (0x06df, 0x06e4, BidiClass::NonspacingMark),
    (0x06e5, 0x06e6, BidiClass::ArabicLetter),
    (0x06e7, 0x06e8, BidiClass::NonspacingMark),
    (0x06e9, 0x06e9, BidiClass::OtherNeutral),
    (0x06ea, 0x06ed, BidiClass::NonspacingMark),
    (0x06ee, 0x06ef, BidiClass::ArabicLetter),
    (0x06f0, 0x06f9, BidiClass::EuropeanNumber),
    (0x06fa, 0x0710, BidiClass::ArabicLetter),
    (0x0711, 0x0711, BidiClass::NonspacingMark),
    (0x0712, 0x072f, BidiClass::ArabicLetter),
    (0x0730, 0x074a, BidiClass::NonspacingMark),
    (0x074b, 0x07a5, BidiClass::ArabicLetter),
    (0x07a6, 0x07b0, BidiClass::NonspacingMark),
    (0x07b1, 0x07bf, BidiClass::ArabicLetter),
    (0x07c0, 0x07ea, BidiClass::RightToLeft),
    (0x07eb, 0x07f3, BidiClass::NonspacingMark),
    (0x07f4, 0x07f5, BidiClass::RightToLeft),
    (0x07f6, 0x07f9, BidiClass::OtherNeutral),
    (0x07fa, 0x07fc, BidiClass::RightToLeft),
    (0x07fd, 0x07fd, BidiClass::NonspacingMark),
    (0x07fe, 0x0815, BidiClass::RightToLeft),
    (0x0816, 0x0819, BidiClass::NonspacingMark),
    (0x081a, 0x081a, BidiClass::RightToLeft),
    (0x081b, 0x0823, BidiClass::NonspacingMark),
    (0x0824, 0x0824, BidiClass::RightToLeft),
    (0x0825, 0x0827, BidiClass::NonspacingMark),
    (0x0828, 0x0828, BidiClass::RightToLeft),
    (0x0829, 0x082d, BidiClass::NonspacingMark),
    (0x082e, 0x0858, BidiClass::RightToLeft),
    (0x0859, 0x085b, BidiClass::NonspacingMark),
    (0x085c, 0x085f, BidiClass::RightToLeft),
    (0x0860, 0x088f, BidiClass::ArabicLetter),
    (0x0890, 0x0891, BidiClass::ArabicNumber),
    (0x0892, 0x0897, BidiClass::ArabicLetter),
    (0x0898, 0x089f, BidiClass::NonspacingMark),
    (0x08a0, 0x08c9, BidiClass::ArabicLetter),
    (0x08ca, 0x08e1, BidiClass::NonspacingMark),
    (0x08e2, 0x08e2, BidiClass::ArabicNumber),
    (0x08e3, 0x0902, BidiClass::NonspacingMark),
    (0x093a, 0x093a, BidiClass::NonspacingMark),
    (0x093c, 0x093c, BidiClass::NonspacingMark),
    (0x0941, 0x0948, BidiClass::NonspacingMark),
    (0x094d, 0x094d, BidiClass::NonspacingMark),
    (0x0951, 0x0957, BidiClass::NonspacingMark),
    (0x0962, 0x0963, BidiClass::NonspacingMark),
    (0x0981, 0x0981, BidiClass::NonspacingMark),
    (0x09bc, 0x09bc, BidiClass::NonspacingMark),
    (0x09c1, 0x09c4, BidiClass::NonspacingMark),
    (0x09cd, 0x09cd, BidiClass::NonspacingMark),
    (0x09e2, 0x09e3, BidiClass::NonspacingMark),
    (0x09f2, 0x09f3, BidiClass::EuropeanTerminator),
    (0x09fb, 0x09fb, BidiClass::EuropeanTerminator),
    (0x09fe, 0x09fe, BidiClass::NonspacingMark),
    (0x0a01, 0x0a02, BidiClass::NonspacingMark),
    (0x0a3c, 0x0a3c, BidiClass::NonspacingMark),
    (0x0a41, 0x0a42, BidiClass::NonspacingMark),
    (0x0a47, 0x0a48, BidiClass::NonspacingMark),
    (0x0a4b, 0x0a4d, BidiClass::NonspacingMark),
    (0x0a51, 0x0a51, BidiClass::NonspacingMark),
    (0x0a70, 0x0a71, BidiClass::NonspacingMark),
    (0x0a75, 0x0a75, BidiClass::NonspacingMark),
    (0x0a81, 0x0a82, BidiClass::NonspacingMark),
    (0x0abc, 0x0abc, BidiClass::NonspacingMark),
    (0x0ac1, 0x0ac5, BidiClass::NonspacingMark),
    (0x0ac7, 0x0ac8, BidiClass::NonspacingMark),
    (0x0acd, 0x0acd, BidiClass::NonspacingMark),
    (0x0ae2, 0x0ae3, BidiClass::NonspacingMark),
    (0x0af1, 0x0af1, BidiClass::EuropeanTerminator),
    (0x0afa, 0x0aff, BidiClass::NonspacingMark),
    (0x0b01, 0x0b01, BidiClass::NonspacingMark),
    (0x0b3c, 0x0b3c, BidiClass::NonspacingMark),
    (0x0b3f, 0x0b3f, BidiClass::NonspacingMark),
    (0x0b41, 0x0b44, BidiClass::NonspacingMark),
    (0x0b4d, 0x0b4d, BidiClass::NonspacingMark),
    (0x0b55, 0x0b56, BidiClass::NonspacingMark),
    (0x0b62, 0x0b63, BidiClass::NonspacingMark),
    (0x0b82, 0x0b82, BidiClass::NonspacingMark),
    (0x0bc0, 0x0bc0, BidiClass::NonspacingMark),
    (0x0bcd, 0x0bcd, BidiClass::NonspacingMark),
    (0x0bf3, 0x0bf8, BidiClass::OtherNeutral),
    (0x0bf9, 0x0bf9, BidiClass::EuropeanTerminator),
    (0x0bfa, 0x0bfa, BidiClass::OtherNeutral),
    (0x0c00, 0x0c00, BidiClass::NonspacingMark),
    (0x0c04, 0x0c04, BidiClass::NonspacingMark),
    (0x0c3c, 0x0c3c, BidiClass::NonspacingMark),
    (0x0c3e, 0x0c40, BidiClass::NonspacingMark),
    (0x0c46, 0x0c48, BidiClass::NonspacingMark),
    (0x0c4a, 0x0c4d, BidiClass::NonspacingMark),
    (0x0c55, 0x0c56, BidiClass::NonspacingMark),
    (0x0c62, 0x0c63, BidiClass::NonspacingMark),
    (0x0c78, 0x0c7e, BidiClass::OtherNeutral),
    (0x0c81, 0x0c81, BidiClass::NonspacingMark),
    (0x0cbc, 0x0cbc, BidiClass::NonspacingMark),
    (0x0ccc, 0x0ccd, BidiClass::NonspacingMark),
    (0x0ce2, 0x0ce3, BidiClass::NonspacingMark),
    (0x0d00, 0x0d01, BidiClass::NonspacingMark),
    (0x0d3b, 0x0d3c, BidiClass::NonspacingMark),
    (0x0d41, 0x0d44, BidiClass::NonspacingMark),
    (0x0d4d, 0x0d4d, BidiClass::NonspacingMark),
    (0x0d62, 0x0d63, BidiClass::NonspacingMark),
    (0x0d81, 0x0d81, BidiClass::NonspacingMark),
    (0x0dca, 0x0dca, BidiClass::NonspacingMark),
    (0x0dd2, 0x0dd4, BidiClass::NonspacingMark),
    (0x0dd6, 0x0dd6, BidiClass::NonspacingMark),
    (0x0e31, 0x0e31, BidiClass::NonspacingMark),
    (0x0e34, 0x0e3a, BidiClass::NonspacingMark),
    (0x0e3f, 0x0e3f, BidiClass::EuropeanTerminator),
    (0x0e47, 0x0e4e, BidiClass::NonspacingMark),
    (0x0eb1, 0x0eb1, BidiClass::NonspacingMark),
    (0x0eb4, 0x0ebc, BidiClass::NonspacingMark),
    (0x0ec8, 0x0ecd, BidiClass::NonspacingMark),
    (0x0f18, 0x0f19, BidiClass::NonspacingMark),
    (0x0f35, 0x0f35, BidiClass::NonspacingMark),
    (0x0f37, 0x0f37, BidiClass::NonspacingMark),
    (0x0f39, 0x0f39, BidiClass::NonspacingMark),
    (0x0f3a, 0x0f3d, BidiClass::OtherNeutral),
    (0x0f71, 0x0f7e, BidiClass::NonspacingMark),
    (0x0f80, 0x0f84, BidiClass::NonspacingMark),
    (0x0f86, 0x0f87, BidiClass::NonspacingMark),
    (0x0f8d, 0x0f97, BidiClass::NonspacingMark),
    (0x0f99, 0x0fbc, BidiClass::NonspacingMark),
    (0x0fc6, 0x0fc6, BidiClass::NonspacingMark),
    (0x102d, 0x1030, BidiClass::NonspacingMark),
    (0x1032, 0x1037, BidiClass::NonspacingMark),
    (0x1039, 0x103a, BidiClass::NonspacingMark),
    (0x103d, 0x103e, BidiClass::NonspacingMark),
    (0x1058, 0x1059, BidiClass::NonspacingMark),
    (0x105e, 0x1060, BidiClass::NonspacingMark),
    (0x1071, 0x1074, BidiClass::NonspacingMark),
    (0x1082, 0x1082, BidiClass::NonspacingMark),
    (0x1085, 0x1086, BidiClass::NonspacingMark),
    (0x108d, 0x108d, BidiClass::NonspacingMark),
    (0x109d, 0x109d, BidiClass::NonspacingMark),
    (0x135d, 0x135f, BidiClass::NonspacingMark),
    (0x1390, 0x1399, BidiClass::OtherNeutral),
    (0x1400, 0x1400, BidiClass::OtherNeutral),
    (0x1680, 0x1680, BidiClass::WhiteSpace),
    (0x169b, 0x169c, BidiClass::OtherNeutral),
    (0x1712, 0x1714, BidiClass::NonspacingMark),
    (0x1732, 0x1733, BidiClass::NonspacingMark),
    (0x1752, 0x1753, BidiClass::NonspacingMark),
    (0x1772, 0x1773, BidiClass::NonspacingMark),
    (0x17b4, 0x17b5, BidiClass::NonspacingMark),
    (0x17b7, 0x17bd, BidiClass::NonspacingMark),
    (0x17c6, 0x17c6, BidiClass::NonspacingMark),
    (0x17c9, 0x17d3, BidiClass::NonspacingMark),
    (0x17db, 0x17db, BidiClass::EuropeanTerminator),
    (0x17dd, 0x17dd, BidiClass::NonspacingMark),
    (0x17f0, 0x17f9, BidiClass::OtherNeutral),
    (0x1800, 0x180a, BidiClass::OtherNeutral),
    (0x180b, 0x180d, BidiClass::NonspacingMark),
    (0x180e, 0x180e, BidiClass::BoundaryNeutral),
    (0x180f, 0x180f, BidiClass::NonspacingMark),
    (0x1885, 0x1886, BidiClass::NonspacingMark),
    (0x18a9, 0x18a9, BidiClass::NonspacingMark),
    (0x1920, 0x1922, BidiClass::NonspacingMark),
    (0x1927, 0x1928, BidiClass::NonspacingMark),
    (0x1932, 0x1932, BidiClass::NonspacingMark),
    (0x1939, 0x193b, BidiClass::NonspacingMark),
    (0x1940, 0x1940, BidiClass::OtherNeutral),
    (0x1944, 0x1945, BidiClass::OtherNeutral),
    (0x19de, 0x19ff, BidiClass::OtherNeutral),
    (0x1a17, 0x1a18, BidiClass::NonspacingMark),
    (0x1a1b, 0x1a1b, BidiClass::NonspacingMark),
    (0x1a56, 0x1a56, BidiClass::NonspacingMark),
    (0x1a58, 0x1a5e, BidiClass::NonspacingMark),
    (0x1a60, 0x1a60, BidiClass::NonspacingMark),
    (0x1a62, 0x1a62, BidiClass::NonspacingMark),
    (0x1a65, 0x1a6c, BidiClass::NonspacingMark),
    (0x1a73, 0x1a7c, BidiClass::NonspacingMark),
    (0x1a7f, 0x1a7f, BidiClass::NonspacingMark),
    (0x1ab0, 0x1ace, BidiClass::NonspacingMark),
    (0x1b00, 0x1b03, BidiClass::NonspacingMark),
    (0x1b34, 0x1b34, BidiClass::NonspacingMark),
    (0x1b36, 0x1b3a, BidiClass::NonspacingMark),
    (0x1b3c, 0x1b3c, BidiClass::NonspacingMark),
    (0x1b42, 0x1b42, BidiClass::NonspacingMark),
    (0x1b6b, 0x1b73, BidiClass::NonspacingMark),
    (0x1b80, 0x1b81, BidiClass::NonspacingMark),
    (0x1ba2, 0x1ba5, BidiClass::NonspacingMark),
    (0x1ba8, 0x1ba9, BidiClass::NonspacingMark),
    (0x1bab, 0x1bad, BidiClass::NonspacingMark),
    (0x1be6, 0x1be6, BidiClass::NonspacingMark),
    (0x1be8, 0x1be9, BidiClass::NonspacingMark),
    (0x1bed, 0x1bed, BidiClass::NonspacingMark),
    (0x1bef, 0x1bf1, BidiClass::NonspacingMark),
    (0x1c2c, 0x1c33, BidiClass::NonspacingMark),
    (0x1c36, 0x1c37, BidiClass::NonspacingMark),
    (0x1cd0, 0x1cd2, BidiClass::NonspacingMark),
    (0x1cd4, 0x1ce0, BidiClass::NonspacingMark),
    (0x1ce2, 0x1ce8, BidiClass::NonspacingMark),
    (0x1ced, 0x1ced, BidiClass::NonspacingMark),
    (0x1cf4, 0x1cf4, BidiClass::NonspacingMark),
    (0x1cf8, 0x1cf9, BidiClass::NonspacingMark),
    (0x1dc0, 0x1dff, BidiClass::NonspacingMark),
    (0x1fbd, 0x1fbd, BidiClass::OtherNeutral),
    (0x1fbf, 0x1fc1, BidiClass::OtherNeutral),
    (0x1fcd, 0x1fcf, BidiClass::OtherNeutral),
    (0x1fdd, 0x1fdf, BidiClass::OtherNeutral),
    (0x1fed, 0x1fef, BidiClass::OtherNeutral),
    (0x1ffd, 0x1ffe, BidiClass::OtherNeutral),
    (0x2000, 0x200a, BidiClass::WhiteSpace),
    (0x200b, 0x200d, BidiClass::BoundaryNeutral),
    (0x200f, 0x200f, BidiClass::RightToLeft),
    (0x2010, 0x2027, BidiClass::OtherNeutral),
    (0x2028, 0x2028, BidiClass::WhiteSpace),
    (0x2029, 0x2029, BidiClass::ParagraphSeparator),
    (0x202a, 0x202a, BidiClass::LeftToRightEmbedding),
    (0x202b, 0x202b, BidiClass::RightToLeftEmbedding),
    (0x202c, 0x202c, BidiClass::PopDirectionalFormat),
    (0x202d, 0x202d, BidiClass::LeftToRightOverride),
    (0x202e, 0x202e, BidiClass::RightToLeftOverride),
    (0x202f, 0x202f, BidiClass::CommonSeparator),
    (0x2030, 0x2034, BidiClass::EuropeanTerminator),
    (0x2035, 0x2043, BidiClass::OtherNeutral),
    (0x2044, 0x2044, BidiClass::CommonSeparator),
    (0x2045, 0x205e, BidiClass::OtherNeutral),
    (0x205f, 0x205f, BidiClass::WhiteSpace),
    (0x2060, 0x2065, BidiClass::BoundaryNeutral),
    (0x2066, 0x2066, BidiClass::LeftToRightIsolate),
    (0x2067, 0x2067, BidiClass::RightToLeftIsolate),
    (0x2068, 0x2068, BidiClass::FirstStrongIsolate),
    (0x2069, 0x2069, BidiClass::PopDirectionalIsolate),
    (0x206a, 0x206f, BidiClass::BoundaryNeutral),
    (0x2070, 0x2070, BidiClass::EuropeanNumber),
    (0x2074, 0x2079, BidiClass::EuropeanNumber),
    (0x207a, 0x207b, BidiClass::EuropeanSeparator),
    (0x207c, 0x207e, BidiClass::OtherNeutral),
    (0x2080, 0x2089, BidiClass::EuropeanNumber),
    (0x208a, 0x208b, BidiClass::EuropeanSeparator),
    (0x208c, 0x208e, BidiClass::OtherNeutral),
    (0x20a0, 0x20cf, BidiClass::EuropeanTerminator),
    (0x20d0, 0x20f0, BidiClass::NonspacingMark),
    (0x2100, 0x2101, BidiClass::OtherNeutral),
    (0x2103, 0x2106, BidiClass::OtherNeutral),
    (0x2108, 0x2109, BidiClass::OtherNeutral),
    (0x2114, 0x2114, BidiClass::OtherNeutral),
    (0x2116, 0x2118, BidiClass::OtherNeutral),
    (0x211e, 0x2123, BidiClass::OtherNeutral),
    (0x2125, 0x2125, BidiClass::OtherNeutral),
    (0x2127, 0x2127, BidiClass::OtherNeutral),
    (0x2129, 0x2129, BidiClass::OtherNeutral),
    (0x212e, 0x212e, BidiClass::EuropeanTerminator),
    (0x213a, 0x213b, BidiClass::OtherNeutral),
    (0x2140, 0x2144, BidiClass::OtherNeutral),
    (0x214a, 0x214d, BidiClass::OtherNeutral),
    (0x2150, 0x215f, BidiClass::OtherNeutral),
    (0x2189, 0x218b, BidiClass::OtherNeutral),
    (0x2190, 0x2211, BidiClass::OtherNeutral),
    (0x2212, 0x2212, BidiClass::EuropeanSeparator),
    (0x2213, 0x2213, BidiClass::EuropeanTerminator),
    (0x2214, 0x2335, BidiClass::OtherNeutral),
    (0x237b, 0x2394, BidiClass::OtherNeutral),
    (0x2396, 0x2426, BidiClass::OtherNeutral),
    (0x2440, 0x244a, BidiClass::OtherNeutral),
    (0x2460, 0x2487, BidiClass::OtherNeutral),
    (0x2488, 0x249b, BidiClass::EuropeanNumber),
    (0x24ea, 0x26ab, BidiClass::OtherNeutral),
    (0x26ad, 0x27ff, BidiClass::OtherNeutral),
    (0x2900, 0x2b73, BidiClass::OtherNeutral),
    (0x2b76, 0x2b95, BidiClass::OtherNeutral),
    (0x2b97, 0x2bff, BidiClass::OtherNeutral),
    (0x2ce5, 0x2cea, BidiClass::OtherNeutral),
    (0x2cef, 0x2cf1, BidiClass::NonspacingMark),
    (0x2cf9, 0x2cff, BidiClass::OtherNeutral),
    (0x2d7f, 0x2d7f, BidiClass::NonspacingMark),
    (0x2de0, 0x2dff, BidiClass::NonspacingMark),
    (0x2e00, 0x2e5d, BidiClass::OtherNeutral),
    (0x2e80, 0x2e99, BidiClass::OtherNeutral),
    (0x2e9b, 0x2ef3, BidiClass::OtherNeutral),
    (0x2f00, 0x2fd5, BidiClass::OtherNeutral),
    (0x2ff0, 0x2ffb, BidiClass::OtherNeutral),
    (0x3000, 0x3000, BidiClass::WhiteSpace),
    (0x3001, 0x3004, BidiClass::OtherNeutral),
    (0x3008, 0x3020, BidiClass::OtherNeutral),
    (0x302a, 0x302d, BidiClass::NonspacingMark),
    (0x3030, 0x3030, BidiClass::OtherNeutral),
    (0x3036, 0x3037, BidiClass::OtherNeutral),
    (0x303d, 0x303f, BidiClass::OtherNeutral),
    (0x3099, 0x309a, BidiClass::NonspacingMark),
    (0x309b, 0x309c, BidiClass::OtherNeutral),
    (0x30a0, 0x30a0, BidiClass::OtherNeutral),
    (0x30fb, 0x30fb, BidiClass::OtherNeutral),
    (0x31c0, 0x31e3, BidiClass::OtherNeutral),
    (0x321d, 0x321e, BidiClass::OtherNeutral),
    (0x3250, 0x325f, BidiClass::OtherNeutral),
    (0x327c, 0x327e, BidiClass::OtherNeutral),
    (0x32b1, 0x32bf, BidiClass::OtherNeutral),
    (0x32cc, 0x32cf, BidiClass::OtherNeutral),
    (0x3377, 0x337a, BidiClass::OtherNeutral),
    (0x33de, 0x33df, BidiClass::OtherNeutral),
    (0x33ff, 0x33ff, BidiClass::OtherNeutral),
    (0x4dc0, 0x4dff, BidiClass::OtherNeutral),
    (0xa490, 0xa4c6, BidiClass::OtherNeutral),
    (0xa60d, 0xa60f, BidiClass::OtherNeutral),
    (0xa66f, 0xa672, BidiClass::NonspacingMark),
    (0xa673, 0xa673, BidiClass::OtherNeutral),
    (0xa674, 0xa67d, BidiClass::NonspacingMark),
    (0xa67e, 0xa67f, BidiClass::OtherNeutral),
    (0xa69e, 0xa69f, BidiClass::NonspacingMark),
    (0xa6f0, 0xa6f1, BidiClass::NonspacingMark),
    (0xa700, 0xa721, BidiClass::OtherNeutral),
    (0xa788, 0xa788, BidiClass::OtherNeutral),
    (0xa802, 0xa802, BidiClass::NonspacingMark),
    (0xa806, 0xa806, BidiClass::NonspacingMark),
    (0xa80b, 0xa80b, BidiClass::NonspacingMark),
    (0xa825, 0xa826, BidiClass::NonspacingMark),
    (0xa828, 0xa82b, BidiClass::OtherNeutral),
    (0xa82c, 0xa82c, BidiClass::NonspacingMark),
    (0xa838, 0xa839, BidiClass::EuropeanTerminator),
    (0xa874, 0xa877, BidiClass::OtherNeutral),
    (0xa8c4, 0xa8c5, BidiClass::NonspacingMark),
    (0xa8e0, 0xa8f1, BidiClass::NonspacingMark),
    (0xa8ff, 0xa8ff, BidiClass::NonspacingMark),
    (0xa926, 0xa92d, BidiClass::NonspacingMark),
    (0xa947, 0xa951, BidiClass::NonspacingMark),
    (0xa980, 0xa982, BidiClass::NonspacingMark),
    (0xa9b3, 0xa9b3, BidiClass::NonspacingMark),
    (0xa9b6, 0xa9b9, BidiClass::NonspacingMark),
    (0xa9bc, 0xa9bd, BidiClass::NonspacingMark),
    (0xa9e5, 0xa9e5, BidiClass::NonspacingMark),
    (0xaa29, 0xaa2e, BidiClass::NonspacingMark),
    (0xaa31, 0xaa32, BidiClass::NonspacingMark),
    (0xaa35, 0xaa36, BidiClass::NonspacingMark),
    (0xaa43, 0xaa43, BidiClass::NonspacingMark),
    (0xaa4c, 0xaa4c, BidiClass::NonspacingMark),
    (0xaa7c, 0xaa7c, BidiClass::NonspacingMark),
    (0xaab0, 0xaab0, BidiClass::NonspacingMark),
    (0xaab2, 0xaab4, BidiClass::NonspacingMark),
    (0xaab7, 0xaab8, BidiClass::NonspacingMark),
    (0xaabe, 0xaabf, BidiClass::NonspacingMark),
    (0xaac1, 0xaac1, BidiClass::NonspacingMark),
    (0xaaec, 0xaaed, BidiClass::NonspacingMark),
    (0xaaf6, 0xaaf6, BidiClass::NonspacingMark),
    (0xab6a, 0xab6b, BidiClass::OtherNeutral),
    (0xabe5, 0xabe5, BidiClass::NonspacingMark),
    (0xabe8, 0xabe8, BidiClass::NonspacingMark),
    (0xabed, 0xabed, BidiClass::NonspacingMark),
    (0xfb1d, 0xfb1d, BidiClass::RightToLeft),
    (0xfb1e, 0xfb1e, BidiClass::NonspacingMark),
    (0xfb1f, 0xfb28, BidiClass::RightToLeft),
    (0xfb29, 0xfb29, BidiClass::EuropeanSeparator),
    (0xfb2a, 0xfb4f, BidiClass::RightToLeft),
    (0xfb50, 0xfd3d, BidiClass::ArabicLetter),
    (0xfd3e, 0xfd4f, BidiClass::OtherNeutral),
    (0xfd50, 0xfdce, BidiClass::ArabicLetter),
    (0xfdcf, 0xfdcf, BidiClass::OtherNeutral),
    (0xfdd0, 0xfdef, BidiClass::BoundaryNeutral),
    (0xfdf0, 0xfdfc, BidiClass::ArabicLetter),
    (0xfdfd, 0xfdff, BidiClass::OtherNeutral),
    (0xfe00, 0xfe0f, BidiClass::NonspacingMark),
    (0xfe10, 0xfe19, BidiClass::OtherNeutral),
    (0xfe20, 0xfe2f, BidiClass::NonspacingMark),
    (0xfe30, 0xfe4f, BidiClass::OtherNeutral),
    (0xfe50, 0xfe50, BidiClass::CommonSeparator),
    (0xfe51, 0xfe51, BidiClass::OtherNeutral),
    (0xfe52, 0xfe52, BidiClass::CommonSeparator),
    (0xfe54, 0xfe54, BidiClass::OtherNeutral),
    (0xfe55, 0xfe55, BidiClass::CommonSeparator),
    (0xfe56, 0xfe5e, BidiClass::OtherNeutral),
    (0xfe5f, 0xfe5f, BidiClass::EuropeanTerminator),
    (0xfe60, 0xfe61, BidiClass::OtherNeutral),
    (0xfe62, 0xfe63, BidiClass::EuropeanSeparator),
    (0xfe64, 0xfe66, BidiClass::OtherNeutral),
    (0xfe68, 0xfe68, BidiClass::OtherNeutral),
    (0xfe69, 0xfe6a, BidiClass::EuropeanTerminator),
    (0xfe6b, 0xfe6b, BidiClass::OtherNeutral),
    (0xfe70, 0xfefe, BidiClass::ArabicLetter),
    (0xfeff, 0xfeff, BidiClass::BoundaryNeutral),
    (0xff01, 0xff02, BidiClass::OtherNeutral),
    (0xff03, 0xff05, BidiClass::EuropeanTerminator),
    (0xff06, 0xff0a, BidiClass::OtherNeutral),
    (0xff0b, 0xff0b, BidiClass::EuropeanSeparator),
    (0xff0c, 0xff0c, BidiClass::CommonSeparator),
    (0xff0d, 0xff0d, BidiClass::EuropeanSeparator),
    (0xff0e, 0xff0f, BidiClass::CommonSeparator),
    (0xff10, 0xff19, BidiClass::EuropeanNumber),
    (0xff1a, 0xff1a, BidiClass::CommonSeparator),
    (0xff1b, 0xff20, BidiClass::OtherNeutral),
    (0xff3b, 0xff40, BidiClass::OtherNeutral),
    (0xff5b, 0xff65, BidiClass::OtherNeutral),
    (0xffe0, 0xffe1, BidiClass::EuropeanTerminator),
    (0xffe2, 0xffe4, BidiClass::OtherNeutral),
    (0xffe5, 0xffe6, BidiClass::EuropeanTerminator),
    (0xffe8, 0xffee, BidiClass::OtherNeutral),
    (0xfff0, 0xfff8, BidiClass::BoundaryNeutral),
    (0xfff9, 0xfffd, BidiClass::OtherNeutral),
    (0xfffe, 0xffff, BidiClass::BoundaryNeutral),
    (0x10101, 0x10101, BidiClass::OtherNeutral),
    (0x10140, 0x1018c, BidiClass::OtherNeutral),
    (0x10190, 0x1019c, BidiClass::OtherNeutral),
    (0x101a0, 0x101a0, BidiClass::OtherNeutral),
    (0x101fd, 0x101fd, BidiClass::NonspacingMark),
    (0x102e0, 0x102e0, BidiClass::NonspacingMark),
    (0x102e1, 0x102fb, BidiClass::EuropeanNumber),
    (0x10376, 0x1037a, BidiClass::NonspacingMark),
    (0x10800, 0x1091e, BidiClass::RightToLeft),
    (0x1091f, 0x1091f, BidiClass::OtherNeutral),
    (0x10920, 0x10a00, BidiClass::RightToLeft),
    (0x10a01, 0x10a03, BidiClass::NonspacingMark),
    (0x10a04, 0x10a04, BidiClass::RightToLeft),
    (0x10a05, 0x10a06, BidiClass::NonspacingMark),
    (0x10a07, 0x10a0b, BidiClass::RightToLeft),
    (0x10a0c, 0x10a0f, BidiClass::NonspacingMark),
    (0x10a10, 0x10a37, BidiClass::RightToLeft),
    (0x10a38, 0x10a3a, BidiClass::NonspacingMark),
    (0x10a3b, 0x10a3e, BidiClass::RightToLeft),
    (0x10a3f, 0x10a3f, BidiClass::NonspacingMark),
    (0x10a40, 0x10ae4, BidiClass::RightToLeft),
    (0x10ae5, 0x10ae6, BidiClass::NonspacingMark),
    (0x10ae7, 0x10b38, BidiClass::RightToLeft),
    (0x10b39, 0x10b3f, BidiClass::OtherNeutral),
    (0x10b40, 0x10cff, BidiClass::RightToLeft),
    (0x10d00, 0x10d23, BidiClass::ArabicLetter),
    (0x10d24, 0x10d27, BidiClass::NonspacingMark),
    (0x10d28, 0x10d2f, BidiClass::ArabicLetter),
    (0x10d30, 0x10d39, BidiClass::ArabicNumber),
    (0x10d3a, 0x10d3f, BidiClass::ArabicLetter),
    (0x10d40, 0x10e5f, BidiClass::RightToLeft),
    (0x10e60, 0x10e7e, BidiClass::ArabicNumber),
    (0x10e7f, 0x10eaa, BidiClass::RightToLeft),
    (0x10eab, 0x10eac, BidiClass::NonspacingMark),
    (0x10ead, 0x10f2f, BidiClass::RightToLeft),
    (0x10f30, 0x10f45, BidiClass::ArabicLetter),
    (0x10f46, 0x10f50, BidiClass::NonspacingMark),
    (0x10f51, 0x10f6f, BidiClass::ArabicLetter),
    (0x10f70, 0x10f81, BidiClass::RightToLeft),
    (0x10f82, 0x10f85, BidiClass::NonspacingMark),
    (0x10f86, 0x10fff, BidiClass::RightToLeft),
    (0x11001, 0x11001, BidiClass::NonspacingMark),
    (0x11038, 0x11046, BidiClass::NonspacingMark),
    (0x11052, 0x11065, BidiClass::OtherNeutral),
    (0x11070, 0x11070, BidiClass::NonspacingMark),
    (0x11073, 0x11074, BidiClass::NonspacingMark),
    (0x1107f, 0x11081, BidiClass::NonspacingMark),
    (0x110b3, 0x110b6, BidiClass::NonspacingMark),
    (0x110b9, 0x110ba, BidiClass::NonspacingMark),
    (0x110c2, 0x110c2, BidiClass::NonspacingMark),
    (0x11100, 0x11102, BidiClass::NonspacingMark),
    (0x11127, 0x1112b, BidiClass::NonspacingMark),
    (0x1112d, 0x11134, BidiClass::NonspacingMark),
    (0x11173, 0x11173, BidiClass::NonspacingMark),
    (0x11180, 0x11181, BidiClass::NonspacingMark),
    (0x111b6, 0x111be, BidiClass::NonspacingMark),
    (0x111c9, 0x111cc, BidiClass::NonspacingMark),
    (0x111cf, 0x111cf, BidiClass::NonspacingMark),
    (0x1122f, 0x11231, BidiClass::NonspacingMark),
    (0x11234, 0x11234, BidiClass::NonspacingMark),
    (0x11236, 0x11237, BidiClass::NonspacingMark),
    (0x1123e, 0x1123e, BidiClass::NonspacingMark),
    (0x112df, 0x112df, BidiClass::NonspacingMark),
    (0x112e3, 0x112ea, BidiClass::NonspacingMark),
    (0x11300, 0x11301, BidiClass::NonspacingMark),
    (0x1133b, 0x1133c, BidiClass::NonspacingMark),
    (0x11340, 0x11340, BidiClass::NonspacingMark),
    (0x11366, 0x1136c, BidiClass::NonspacingMark),
    (0x11370, 0x11374, BidiClass::NonspacingMark),
    (0x11438, 0x1143f, BidiClass::NonspacingMark),
    (0x11442, 0x11444, BidiClass::NonspacingMark),
    (0x11446, 0x11446, BidiClass::NonspacingMark),
    (0x1145e, 0x1145e, BidiClass::NonspacingMark),
    (0x114b3, 0x114b8, BidiClass::NonspacingMark),
    (0x114ba, 0x114ba, BidiClass::NonspacingMark),
    (0x114bf, 0x114c0, BidiClass::NonspacingMark),
    (0x114c2, 0x114c3, BidiClass::NonspacingMark),
    (0x115b2, 0x115b5, BidiClass::NonspacingMark),
    (0x115bc, 0x115bd, BidiClass::NonspacingMark),
    (0x115bf, 0x115c0, BidiClass::NonspacingMark),
    (0x115dc, 0x115dd, BidiClass::NonspacingMark),
    (0x11633, 0x1163a, BidiClass::NonspacingMark),
    (0x1163d, 0x1163d, BidiClass::NonspacingMark),
    (0x1163f, 0x11640, BidiClass::NonspacingMark),
    (0x11660, 0x1166c, BidiClass::OtherNeutral),
    (0x116ab, 0x116ab, BidiClass::NonspacingMark),
    (0x116ad, 0x116ad, BidiClass::NonspacingMark),
    (0x116b0, 0x116b5, BidiClass::NonspacingMark),
    (0x116b7, 0x116b7, BidiClass::NonspacingMark),
    (0x1171d, 0x1171f, BidiClass::NonspacingMark),
    (0x11722, 0x11725, BidiClass::NonspacingMark),
    (0x11727, 0x1172b, BidiClass::NonspacingMark),
    (0x1182f, 0x11837, BidiClass::NonspacingMark),
    (0x11839, 0x1183a, BidiClass::NonspacingMark),
    (0x1193b, 0x1193c, BidiClass::NonspacingMark),
    (0x1193e, 0x1193e, BidiClass::NonspacingMark),
    (0x11943, 0x11943, BidiClass::NonspacingMark),
    (0x119d4, 0x119d7, BidiClass::NonspacingMark),
    (0x119da, 0x119db, BidiClass::NonspacingMark),
    (0x119e0, 0x119e0, BidiClass::NonspacingMark),
    (0x11a01, 0x11a06, BidiClass::NonspacingMark),
    (0x11a09, 0x11a0a, BidiClass::NonspacingMark),
    (0x11a33, 0x11a38, BidiClass::NonspacingMark),
    (0x11a3b, 0x11a3e, BidiClass::NonspacingMark),
    (0x11a47, 0x11a47, BidiClass::NonspacingMark),
    (0x11a51, 0x11a56, BidiClass::NonspacingMark),
    (0x11a59, 0x11a5b, BidiClass::NonspacingMark),
    (0x11a8a, 0x11a96, BidiClass::NonspacingMark),
    (0x11a98, 0x11a99, BidiClass::NonspacingMark),
    (0x11c30, 0x11c36, BidiClass::NonspacingMark),
    (0x11c38, 0x11c3d, BidiClass::NonspacingMark),
    (0x11c92, 0x11ca7, BidiClass::NonspacingMark),
    (0x11caa, 0x11cb0, BidiClass::NonspacingMark),
    (0x11cb2, 0x11cb3, BidiClass::NonspacingMark),
    (0x11cb5, 0x11cb6, BidiClass::NonspacingMark),
    (0x11d31, 0x11d36, BidiClass::NonspacingMark),
    (0x11d3a, 0x11d3a, BidiClass::NonspacingMark),
    (0x11d3c, 0x11d3d, BidiClass::NonspacingMark),
    (0x11d3f, 0x11d45, BidiClass::NonspacingMark),
    (0x11d47, 0x11d47, BidiClass::NonspacingMark),
    (0x11d90, 0x11d91, BidiClass::NonspacingMark),
    (0x11d95, 0x11d95, BidiClass::NonspacingMark),
    (0x11d97, 0x11d97, BidiClass::NonspacingMark),
    (0x11ef3, 0x11ef4, BidiClass::NonspacingMark),
    (0x11fd5, 0x11fdc, BidiClass::OtherNeutral),
    (0x11fdd, 0x11fe0, BidiClass::EuropeanTerminator),
    (0x11fe1, 0x11ff1, BidiClass::OtherNeutral),
    (0x16af0, 0x16af4, BidiClass::NonspacingMark),
    (0x16b30, 0x16b36, BidiClass::NonspacingMark),
    (0x16f4f, 0x16f4f, BidiClass::NonspacingMark),
    (0x16f8f, 0x16f92, BidiClass::NonspacingMark),
    (0x16fe2, 0x16fe2, BidiClass::OtherNeutral),
    (0x16fe4, 0x16fe4, BidiClass::NonspacingMark),
    (0x1bc9d, 0x1bc9e, BidiClass::NonspacingMark),
    (0x1bca0, 0x1bca3, BidiClass::BoundaryNeutral),
    (0x1cf00, 0x1cf2d, BidiClass::NonspacingMark),
    (0x1cf30, 0x1cf46, BidiClass::NonspacingMark),
    (0x1d167, 0x1d169, BidiClass::NonspacingMark),
    (0x1d173, 0x1d17a, BidiClass::BoundaryNeutral),
    (0x1d17b, 0x1d182, BidiClass::NonspacingMark),
    (0x1d185, 0x1d18b, BidiClass::NonspacingMark),
    (0x1d1aa, 0x1d1ad, BidiClass::NonspacingMark),
    (0x1d1e9, 0x1d1ea, BidiClass::OtherNeutral),
    (0x1d200, 0x1d241, BidiClass::OtherNeutral),
    (0x1d242, 0x1d244, BidiClass::NonspacingMark),
    (0x1d245, 0x1d245, BidiClass::OtherNeutral),
    (0x1d300, 0x1d356, BidiClass::OtherNeutral),
    (0x1d6db, 0x1d6db, BidiClass::OtherNeutral),
    (0x1d715, 0x1d715, BidiClass::OtherNeutral),
    (0x1d74f, 0x1d74f, BidiClass::OtherNeutral),
    (0x1d789, 0x1d789, BidiClass::OtherNeutral),
    (0x1d7c3, 0x1d7c3, BidiClass::OtherNeutral),
    (0x1d7ce, 0x1d7ff, BidiClass::EuropeanNumber),
    (0x1da00, 0x1da36, BidiClass::NonspacingMark),
    (0x1da3b, 0x1da6c, BidiClass::NonspacingMark),
    (0x1da75, 0x1da75, BidiClass::NonspacingMark),
    (0x1da84, 0x1da84, BidiClass::NonspacingMark),
    (0x1da9b, 0x1da9f, BidiClass::NonspacingMark),
    (0x1daa1, 0x1daaf, BidiClass::NonspacingMark),
    (0x1e000, 0x1e006, BidiClass::NonspacingMark),
    (0x1e008, 0x1e018, BidiClass::NonspacingMark),
    (0x1e01b, 0x1e021, BidiClass::NonspacingMark),
    (0x1e023, 0x1e024, BidiClass::NonspacingMark),
    (0x1e026, 0x1e02a, BidiClass::NonspacingMark),
    (0x1e130, 0x1e136, BidiClass::NonspacingMark),
    (0x1e2ae, 0x1e2ae, BidiClass::NonspacingMark),
    (0x1e2ec, 0x1e2ef, BidiClass::NonspacingMark),
    (0x1e2ff, 0x1e2ff, BidiClass::EuropeanTerminator),
    (0x1e800, 0x1e8cf, BidiClass::RightToLeft),
    (0x1e8d0, 0x1e8d6, BidiClass::NonspacingMark),
    (0x1e8d7, 0x1e943, BidiClass::RightToLeft),
    (0x1e944, 0x1e94a, BidiClass::NonspacingMark),
    (0x1e94b, 0x1ec6f, BidiClass::RightToLeft),
    (0x1ec70, 0x1ecbf, BidiClass::ArabicLetter),
    (0x1ecc0, 0x1ecff, BidiClass::RightToLeft),
    (0x1ed00, 0x1ed4f, BidiClass::ArabicLetter),
    (0x1ed50, 0x1edff, BidiClass::RightToLeft),
    (0x1ee00, 0x1eeef, BidiClass::ArabicLetter),
    (0x1eef0, 0x1eef1, BidiClass::OtherNeutral),
    (0x1eef2, 0x1eeff, BidiClass::ArabicLetter),
    (0x1ef00, 0x1efff, BidiClass::RightToLeft),
    (0x1f000, 0x1f02b, BidiClass::OtherNeutral),
    (0x1f030, 0x1f093, BidiClass::OtherNeutral),
    (0x1f0a0, 0x1f0ae, BidiClass::OtherNeutral),
    (0x1f0b1, 0x1f0bf, BidiClass::OtherNeutral),
    (0x1f0c1, 0x1f0cf, BidiClass::OtherNeutral),
    (0x1f0d1, 0x1f0f5, BidiClass::OtherNeutral),
    (0x1f100, 0x1f10a, BidiClass::EuropeanNumber),
    (0x1f10b, 0x1f10f, BidiClass::OtherNeutral),
    (0x1f12f, 0x1f12f, BidiClass::OtherNeutral),
    (0x1f16a, 0x1f16f, BidiClass::OtherNeutral),
    (0x1f1ad, 0x1f1ad, BidiClass::OtherNeutral),
    (0x1f260, 0x1f265, BidiClass::OtherNeutral),
    (0x1f300, 0x1f6d7, BidiClass::OtherNeutral),
    (0x1f6dd, 0x1f6ec, BidiClass::OtherNeutral),
    (0x1f6f0, 0x1f6fc, BidiClass::OtherNeutral),
    (0x1f700, 0x1f773, BidiClass::OtherNeutral),
    (0x1f780, 0x1f7d8, BidiClass::OtherNeutral),
    (0x1f7e0, 0x1f7eb, BidiClass::OtherNeutral),
    (0x1f7f0, 0x1f7f0, BidiClass::OtherNeutral),
    (0x1f800, 0x1f80b, BidiClass::OtherNeutral),
    (0x1f810, 0x1f847, BidiClass::OtherNeutral),
    (0x1f850, 0x1f859, BidiClass::OtherNeutral),
    (0x1f860, 0x1f887, BidiClass::OtherNeutral),
    (0x1f890, 0x1f8ad, BidiClass::OtherNeutral),
    (0x1f8b0, 0x1f8b1, BidiClass::OtherNeutral),
    (0x1f900, 0x1fa53, BidiClass::OtherNeutral),
    (0x1fa60, 0x1fa6d, BidiClass::OtherNeutral),
    (0x1fa70, 0x1fa74, BidiClass::OtherNeutral),
    (0x1fa78, 0x1fa7c, BidiClass::OtherNeutral),
    (0x1fa80, 0x1fa86, BidiClass::OtherNeutral),
    (0x1fa90, 0x1faac, BidiClass::OtherNeutral),
    (0x1fab0, 0x1faba, BidiClass::OtherNeutral),
    (0x1fac0, 0x1fac5, BidiClass::OtherNeutral),
    (0x1fad0, 0x1fad9, BidiClass::OtherNeutral),
    (0x1fae0, 0x1fae7, BidiClass::OtherNeutral),
    (0x1faf0, 0x1faf6, BidiClass::OtherNeutral),
    (0x1fb00, 0x1fb92, BidiClass::OtherNeutral),
    (0x1fb94, 0x1fbca, BidiClass::OtherNeutral),
    (0x1fbf0, 0x1fbf9, BidiClass::EuropeanNumber),
    (0x1fffe, 0x1ffff, BidiClass::BoundaryNeutral),
    (0x2fffe, 0x2ffff, BidiClass::BoundaryNeutral),
    (0x3fffe, 0x3ffff, BidiClass::BoundaryNeutral),
    (0x4fffe, 0x4ffff, BidiClass::BoundaryNeutral),
    (0x5fffe, 0x5ffff, BidiClass::BoundaryNeutral),
    (0x6fffe, 0x6ffff, BidiClass::BoundaryNeutral),
    (0x7fffe, 0x7ffff, BidiClass::BoundaryNeutral),
    (0x8fffe, 0x8ffff, BidiClass::BoundaryNeutral),
    (0x9fffe, 0x9ffff, BidiClass::BoundaryNeutral),
    (0xafffe, 0xaffff, BidiClass::BoundaryNeutral),
    (0xbfffe, 0xbffff, BidiClass::BoundaryNeutral),
    (0xcfffe, 0xcffff, BidiClass::BoundaryNeutral),
    (0xdfffe, 0xe00ff, BidiClass::BoundaryNeutral),
    (0xe0100, 0xe01ef, BidiClass::NonspacingMark),
    (0xe01f0, 0xe0fff, BidiClass::BoundaryNeutral),
    (0xefffe, 0xeffff, BidiClass::BoundaryNeutral),
    (0xffffe, 0xfffff, BidiClass::BoundaryNeutral),
    (0x10fffe, 0x10ffff, BidiClass::BoundaryNeutral),
];
