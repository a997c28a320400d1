//! Bit sets of transition edges.
//!
//! Transition edges of an expansion are numbered densely (see
//! [`TransitionEdges`][crate::cayley::TransitionEdges]), so the set of
//! transition edges crossed by a path is a bit set over those indices. This is
//! the set component of a [`Signature`][crate::signature::Signature]: it must
//! compare and hash as a *set*, independently of insertion order and of how
//! much storage was reserved.

use std::hash::{Hash, Hasher};

/// A set of transition-edge indices backed by a vector of u64 words.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    /// Storage: each u64 holds 64 bits
    words: Vec<u64>,
    /// Number of set bits (cached for O(1) len())
    count: usize,
}

impl EdgeSet {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Creates a new empty set able to hold indices `0..capacity` without growing.
    pub fn new(capacity: usize) -> Self {
        let num_words = capacity.div_ceil(Self::BITS_PER_WORD);
        Self {
            words: vec![0; num_words],
            count: 0,
        }
    }

    /// Creates an empty set with no pre-allocated capacity.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of edges in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn word_and_bit(index: usize) -> (usize, usize) {
        (index / Self::BITS_PER_WORD, index % Self::BITS_PER_WORD)
    }

    /// Returns true if the edge with the given index is in the set.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);
        match self.words.get(word_idx) {
            Some(word) => (word >> bit_idx) & 1 != 0,
            None => false,
        }
    }

    /// Adds an edge index. Returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        let (word_idx, bit_idx) = Self::word_and_bit(index);

        // Grow if necessary
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }

        let mask = 1u64 << bit_idx;
        let was_clear = (self.words[word_idx] & mask) == 0;
        if was_clear {
            self.words[word_idx] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Returns true if every edge of `self` is also in `other`.
    pub fn is_subset(&self, other: &EdgeSet) -> bool {
        self.words.iter().enumerate().all(|(i, &w)| {
            let o = other.words.get(i).copied().unwrap_or(0);
            w & !o == 0
        })
    }

    /// Returns an iterator over the edge indices, in increasing order.
    pub fn iter(&self) -> EdgeSetIter<'_> {
        EdgeSetIter {
            set: self,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Storage words with trailing zero words removed.
    fn significant_words(&self) -> &[u64] {
        let end = self
            .words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |i| i + 1);
        &self.words[..end]
    }
}

impl PartialEq for EdgeSet {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.significant_words() == other.significant_words()
    }
}

impl Eq for EdgeSet {}

impl Hash for EdgeSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

impl FromIterator<usize> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = EdgeSet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for EdgeSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

/// Iterator over the indices in an [`EdgeSet`].
pub struct EdgeSetIter<'a> {
    set: &'a EdgeSet,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for EdgeSetIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let bit_idx = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // Clear lowest set bit
                return Some(self.word_idx * EdgeSet::BITS_PER_WORD + bit_idx);
            }

            self.word_idx += 1;
            if self.word_idx >= self.set.words.len() {
                return None;
            }
            self.current_word = self.set.words[self.word_idx];
        }
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = usize;
    type IntoIter = EdgeSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn hash_of(set: &EdgeSet) -> u64 {
        let mut hasher = DefaultHasher::new();
        set.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_empty() {
        let set = EdgeSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert!(!set.contains(0));
        assert!(!set.contains(100));
    }

    #[test]
    fn test_insert_contains() {
        let mut set = EdgeSet::new(100);
        assert!(!set.contains(42));
        assert!(set.insert(42));
        assert!(set.contains(42));
        assert!(!set.insert(42)); // Already present
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iter() {
        let set: EdgeSet = [10, 3, 64, 5, 65].into_iter().collect();
        let indices: Vec<_> = set.iter().collect();
        assert_eq!(indices, vec![3, 5, 10, 64, 65]);
    }

    #[test]
    fn test_set_semantics() {
        // Same elements, different insertion order and reserved capacity.
        let a: EdgeSet = [1, 70, 5].into_iter().collect();
        let mut b = EdgeSet::new(500);
        b.extend([5, 1, 70, 1]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        assert_eq!(EdgeSet::empty(), EdgeSet::new(200));
        assert_eq!(hash_of(&EdgeSet::empty()), hash_of(&EdgeSet::new(200)));

        let c: EdgeSet = [1, 5].into_iter().collect();
        assert_ne!(a, c);
    }

    #[test]
    fn test_subset() {
        let small: EdgeSet = [1, 5].into_iter().collect();
        let big: EdgeSet = [1, 5, 130].into_iter().collect();
        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert!(EdgeSet::empty().is_subset(&small));
    }
}
