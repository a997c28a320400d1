use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::edgeset::EdgeSet;
use crate::signature::Signature;
use crate::types::Word;

/// An element of a Karnofsky–Rhodes expansion.
///
/// Wraps a word together with its signature. Two elements are equal iff they
/// come from the same expansion and have the same signature, regardless of
/// their words.
///
/// Not `Ord`; use [`Element::cmp_by_word`] to sort deterministically.
#[derive(Debug, Clone)]
pub struct Element<E> {
    owner: u64,
    word: Word,
    signature: Signature<E>,
}

impl<E> Element<E> {
    pub(crate) fn new(owner: u64, word: Word, signature: Signature<E>) -> Self {
        Self {
            owner,
            word,
            signature,
        }
    }

    /// Id of the expansion that produced this element.
    pub(crate) fn owner(&self) -> u64 {
        self.owner
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn signature(&self) -> &Signature<E> {
        &self.signature
    }

    /// The underlying monoid value.
    pub fn value(&self) -> &E {
        &self.signature.value
    }

    /// Indices of the transition edges crossed by the word.
    pub fn transition_edges(&self) -> &EdgeSet {
        &self.signature.edges
    }

    /// Compares the underlying words lexicographically.
    pub fn cmp_by_word(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

impl<E: PartialEq> PartialEq for Element<E> {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.signature == other.signature
    }
}

impl<E: Eq> Eq for Element<E> {}

impl<E: Hash> Hash for Element<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owner.hash(state);
        self.signature.hash(state);
    }
}

impl<E> fmt::Display for Element<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
