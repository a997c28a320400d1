use std::fmt;

use crate::monoid::FiniteMonoid;

/// An element of a [`TruncatedFreeMonoid`].
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Truncated {
    /// A word of length at most the bound, as letter indices.
    Word(Vec<u32>),
    /// The absorbing element standing in for every longer word.
    Zero,
}

/// The free monoid on `letters` generators with all words longer than
/// `max_len` identified with an absorbing zero.
///
/// Away from the zero, its Cayley graph is a tree.
#[derive(Debug, Copy, Clone)]
pub struct TruncatedFreeMonoid {
    letters: u32,
    max_len: usize,
}

impl TruncatedFreeMonoid {
    /// # Panics
    ///
    /// Panics if `letters == 0`.
    pub fn new(letters: u32, max_len: usize) -> Self {
        assert_ne!(letters, 0, "Number of letters should be positive");
        Self { letters, max_len }
    }

    /// Number of elements: all words of length `0..=max_len`, plus zero.
    pub fn size(&self) -> usize {
        let k = self.letters as usize;
        (0..=self.max_len).map(|i| k.pow(i as u32)).sum::<usize>() + 1
    }
}

impl fmt::Display for TruncatedFreeMonoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Free monoid on {} letters truncated at length {}",
            self.letters, self.max_len
        )
    }
}

impl FiniteMonoid for TruncatedFreeMonoid {
    type Element = Truncated;

    fn one(&self) -> Truncated {
        Truncated::Word(Vec::new())
    }

    fn product(&self, a: &Truncated, b: &Truncated) -> Truncated {
        match (a, b) {
            (Truncated::Word(u), Truncated::Word(v)) if u.len() + v.len() <= self.max_len => {
                let mut w = u.clone();
                w.extend_from_slice(v);
                Truncated::Word(w)
            }
            _ => Truncated::Zero,
        }
    }

    fn semigroup_generators(&self) -> Vec<Truncated> {
        (0..self.letters).map(|i| Truncated::Word(vec![i])).collect()
    }
}
