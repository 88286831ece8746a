use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The message to build from contained no accepted characters, so there
    /// is nothing to assign codes to.
    #[error("message contains no accepted characters")]
    EmptyAlphabet,

    /// The tree is a single leaf (one distinct symbol in the source text);
    /// its only code is empty, so traversal cannot consume bits.
    #[error("cannot decode against a single-leaf tree")]
    DegenerateTraversal,

    /// Strict decoding only: the coded message held something other than
    /// '0' or '1'.
    #[error("invalid code character {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },
}
