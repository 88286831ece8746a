//! Prefix-free variable-length coding of text.
//!
//! A [`HuffmanCoder`] is built once from a source message: accepted
//! characters are counted, the weighted symbols are merged bottom-up into a
//! prefix tree, and a walk of that tree yields each symbol's bit-string
//! code. Encoding maps characters through the table; decoding walks the
//! tree. The coded form is a textual sequence of '0'/'1' characters, not a
//! packed byte stream.

pub mod alphabet;
pub mod coder;
pub mod error;
pub mod tree;

pub use alphabet::{Alphabet, WeightedSymbol};
pub use coder::{DecodeMode, HuffmanCoder};
pub use error::CodecError;
pub use tree::{CodeEntry, Tree};
