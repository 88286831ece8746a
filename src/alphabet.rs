use std::collections::{HashMap, HashSet};

/// A character that occurred in the source text, with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedSymbol {
    pub symbol: char,
    pub weight: u64,
}

/// The set of characters a coder will accept, in declaration order.
///
/// Anything outside the set is invisible to the coder: never counted, never
/// encoded, silently dropped.
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
    members: HashSet<char>,
}

impl Alphabet {
    /// Builds an alphabet from the given characters, keeping the first
    /// occurrence of each and its position.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut accepted = Vec::new();
        let mut members = HashSet::new();
        for ch in chars {
            if members.insert(ch) {
                accepted.push(ch);
            }
        }
        Alphabet {
            chars: accepted,
            members,
        }
    }

    /// Letters, digits, space, tab, newline, and `!` `.` `?`.
    pub fn standard() -> Self {
        let mut chars: Vec<char> = ('a'..='z').collect();
        chars.extend('A'..='Z');
        chars.extend('0'..='9');
        chars.extend([' ', '\t', '\n', '!', '.', '?']);
        Alphabet::new(chars)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.members.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Counts how often each accepted character occurs in `message`.
    ///
    /// Characters with zero occurrences are omitted; the result follows the
    /// alphabet's declaration order, not occurrence order.
    pub fn frequencies(&self, message: &str) -> Vec<WeightedSymbol> {
        let mut counts: HashMap<char, u64> = HashMap::new();
        for symbol in message.chars() {
            if self.members.contains(&symbol) {
                *counts.entry(symbol).or_default() += 1;
            }
        }

        self.chars
            .iter()
            .filter_map(|&symbol| {
                counts
                    .get(&symbol)
                    .map(|&weight| WeightedSymbol { symbol, weight })
            })
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_membership() {
        let alphabet = Alphabet::standard();
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 6);
        for ch in ['a', 'Z', '7', ' ', '\t', '\n', '!', '.', '?'] {
            assert!(alphabet.contains(ch), "expected {ch:?} to be accepted");
        }
        for ch in ['#', ',', 'é', '\r'] {
            assert!(!alphabet.contains(ch), "expected {ch:?} to be rejected");
        }
    }

    #[test]
    fn new_keeps_first_occurrence_order() {
        let alphabet = Alphabet::new("banana".chars());
        let chars: Vec<char> = alphabet.iter().collect();
        assert_eq!(chars, vec!['b', 'a', 'n']);
    }

    #[test]
    fn frequencies_follow_declaration_order() {
        let alphabet = Alphabet::standard();
        let freqs = alphabet.frequencies("cbacbc");
        assert_eq!(
            freqs,
            vec![
                WeightedSymbol { symbol: 'a', weight: 1 },
                WeightedSymbol { symbol: 'b', weight: 2 },
                WeightedSymbol { symbol: 'c', weight: 3 },
            ]
        );
    }

    #[test]
    fn frequencies_skip_unaccepted_characters() {
        let alphabet = Alphabet::standard();
        let freqs = alphabet.frequencies("a#a,a");
        assert_eq!(freqs, vec![WeightedSymbol { symbol: 'a', weight: 3 }]);
    }

    #[test]
    fn frequencies_of_empty_or_foreign_text_are_empty() {
        let alphabet = Alphabet::standard();
        assert!(alphabet.frequencies("").is_empty());
        assert!(alphabet.frequencies("#,;:~").is_empty());
    }
}
