//! An immutable ordered bit sequence with an append-only builder.
//!
//! This is the interleaving buffer between geographic coordinates and
//! geohash characters; it has no domain meaning of its own.

use std::fmt;

/// An immutable ordered sequence of bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BitArray {
    bits: Vec<bool>,
}

impl BitArray {
    /// Start building a bit array.
    pub(crate) fn builder() -> BitArrayBuilder {
        BitArrayBuilder::new()
    }

    /// The bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `0..len()`, like slice indexing.
    pub(crate) fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// The number of bits in the sequence.
    pub(crate) fn len(&self) -> usize {
        self.bits.len()
    }

    /// Iterate over the bits in order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// The bits as a contiguous slice.
    pub(crate) fn as_slice(&self) -> &[bool] {
        &self.bits
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Append-only builder for [`BitArray`].
#[derive(Debug, Default)]
pub(crate) struct BitArrayBuilder {
    bits: Vec<bool>,
}

impl BitArrayBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append one bit to the end of the sequence.
    pub(crate) fn append(mut self, bit: bool) -> Self {
        self.bits.push(bit);
        self
    }

    /// Fix the sequence.
    pub(crate) fn build(self) -> BitArray {
        BitArray { bits: self.bits }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_preserves_order() {
        let bits = BitArray::builder()
            .append(true)
            .append(false)
            .append(true)
            .build();
        assert_eq!(bits.len(), 3);
        assert!(bits.get(0));
        assert!(!bits.get(1));
        assert!(bits.get(2));
    }

    #[test]
    fn test_empty() {
        let bits = BitArray::builder().build();
        assert_eq!(bits.len(), 0);
        assert_eq!(bits.to_string(), "");
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds() {
        let bits = BitArray::builder().append(true).build();
        bits.get(1);
    }

    #[test]
    fn test_display() {
        let bits = BitArray::builder()
            .append(false)
            .append(true)
            .append(true)
            .append(false)
            .build();
        assert_eq!(bits.to_string(), "0110");
    }

    #[test]
    fn test_iter_matches_slice() {
        let bits = BitArray::builder().append(true).append(false).build();
        let collected: Vec<bool> = bits.iter().collect();
        assert_eq!(collected, bits.as_slice());
    }
}
