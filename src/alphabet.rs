//! The base-32 geohash alphabet.
//!
//! Digits 0-9 followed by the lowercase letters with a, i, l and o removed
//! to avoid visually ambiguous symbols. The table is process-wide, immutable
//! and initialized once.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// The 32 geohash symbols in index order.
pub(crate) const CHARACTERS: [char; 32] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'k',
    'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Number of bits one geohash character encodes (2^5 = 32).
pub(crate) const BITS_PER_CHARACTER: usize = 5;

static INDEX_FOR_CHARACTER: Lazy<FxHashMap<char, u8>> = Lazy::new(|| {
    CHARACTERS
        .iter()
        .enumerate()
        .map(|(index, &character)| (character, index as u8))
        .collect()
});

/// The 0..31 position of `character` in the alphabet, if it belongs to it.
pub(crate) fn index_of(character: char) -> Option<u8> {
    INDEX_FOR_CHARACTER.get(&character).copied()
}

/// The character at the given 0..31 position.
pub(crate) fn character_for(index: u8) -> char {
    CHARACTERS[index as usize]
}

/// True if every character of `code` belongs to the alphabet.
pub(crate) fn is_valid(code: &str) -> bool {
    code.chars().all(|character| index_of(character).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_per_character() {
        assert_eq!(1 << BITS_PER_CHARACTER, CHARACTERS.len());
    }

    #[test]
    fn test_index_round_trip() {
        for (index, &character) in CHARACTERS.iter().enumerate() {
            assert_eq!(index_of(character), Some(index as u8));
            assert_eq!(character_for(index as u8), character);
        }
    }

    #[test]
    fn test_excluded_characters() {
        for character in ['a', 'i', 'l', 'o'] {
            assert_eq!(index_of(character), None);
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(""));
        assert!(is_valid("best"));
        assert!(is_valid("0123456789bcdefghjkmnpqrstuvwxyz"));
        assert!(!is_valid("a"));
        assert!(!is_valid("BEST"));
        assert!(!is_valid("be st"));
    }
}
