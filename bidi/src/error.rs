use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("0x{0:x} is not a valid unicode scalar value")]
    InvalidCodePoint(u32),

    #[error("{0:?} is not a bidi class name")]
    UnknownBidiClass(String),
}
