use std::collections::HashMap;

use crate::alphabet::Alphabet;
use crate::error::CodecError;
use crate::tree::{CodeEntry, Node, Tree};

/// How `decode` treats characters in the coded message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// '1' steps right, anything else steps left; no validation.
    #[default]
    Lenient,
    /// Characters other than '0' and '1' fail the whole decode.
    Strict,
}

/// A prefix-free coder built once from a source text and immutable after.
///
/// The tree drives decoding; the table derived from it drives encoding.
/// Both borrow nothing and mutate nothing, so a built coder can be shared
/// across threads freely.
#[derive(Debug, Clone)]
pub struct HuffmanCoder {
    tree: Tree,
    table: Vec<CodeEntry>,
    codes: HashMap<char, String>,
    mode: DecodeMode,
}

impl HuffmanCoder {
    /// Builds a coder from `message` over the standard alphabet.
    ///
    /// Fails with [`CodecError::EmptyAlphabet`] when the message contains no
    /// accepted characters.
    pub fn new(message: &str) -> Result<Self, CodecError> {
        Self::with_alphabet(message, Alphabet::standard())
    }

    /// Builds a coder from `message` over an explicit alphabet.
    pub fn with_alphabet(message: &str, alphabet: Alphabet) -> Result<Self, CodecError> {
        let symbols = alphabet.frequencies(message);
        let tree = Tree::build(&symbols)?;
        let table = tree.code_table();
        let codes = table
            .iter()
            .map(|entry| (entry.symbol, entry.code.clone()))
            .collect();

        Ok(HuffmanCoder {
            tree,
            table,
            codes,
            mode: DecodeMode::Lenient,
        })
    }

    /// Switches decoding to strict bit validation.
    pub fn strict(mut self) -> Self {
        self.mode = DecodeMode::Strict;
        self
    }

    pub fn decode_mode(&self) -> DecodeMode {
        self.mode
    }

    /// The full symbol-to-code table, in left-to-right leaf order.
    pub fn code_table(&self) -> &[CodeEntry] {
        &self.table
    }

    pub fn code_for(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Concatenates each input character's code into one bit-string.
    ///
    /// Characters without a table entry — outside the alphabet, or absent
    /// from the text the coder was built from — contribute nothing. This
    /// best-effort drop is deliberate; it is not an error.
    pub fn encode(&self, message: &str) -> String {
        let mut encoded = String::new();
        for symbol in message.chars() {
            if let Some(code) = self.codes.get(&symbol) {
                encoded += code;
            }
        }
        encoded
    }

    /// Walks the tree per coded character, emitting a symbol at each leaf
    /// and resetting to the root.
    ///
    /// A path left unfinished when the input runs out is discarded without
    /// error. An empty input decodes to an empty string.
    pub fn decode(&self, coded: &str) -> Result<String, CodecError> {
        let mut decoded = String::new();
        if coded.is_empty() {
            return Ok(decoded);
        }
        if self.tree.is_leaf() {
            // A lone leaf has no children to descend into.
            return Err(CodecError::DegenerateTraversal);
        }

        let root = self.tree.root();
        let mut current = root;

        for (position, bit) in coded.chars().enumerate() {
            if self.mode == DecodeMode::Strict && bit != '0' && bit != '1' {
                return Err(CodecError::InvalidBit {
                    position,
                    found: bit,
                });
            }

            current = match *self.tree.node(current) {
                Node::Internal { left, right, .. } => {
                    if bit == '1' {
                        right
                    } else {
                        left
                    }
                }
                Node::Leaf { .. } => unreachable!("walk resets to the root at every leaf"),
            };

            if let Node::Leaf { symbol, .. } = *self.tree.node(current) {
                decoded.push(symbol);
                current = root;
            }
        }

        Ok(decoded)
    }
}
