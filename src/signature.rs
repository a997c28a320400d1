use crate::edgeset::EdgeSet;

/// The canonical signature of a word: the value it evaluates to, and the set
/// of transition edges crossed on the way there.
///
/// Two words are equal in the expansion iff their signatures are equal.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Signature<E> {
    pub value: E,
    pub edges: EdgeSet,
}

impl<E> Signature<E> {
    pub fn new(value: E, edges: EdgeSet) -> Self {
        Self { value, edges }
    }

    /// The signature of the empty word: the identity, with no edges crossed.
    pub fn identity(one: E) -> Self {
        Self::new(one, EdgeSet::empty())
    }
}
