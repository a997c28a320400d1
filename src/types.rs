//! Generator labels, words over them, and the side on which words are extended.
//!
//! Labels are plain indices into the ordered generator list of an expansion,
//! so a [`Word`] is meaningful only together with that list.
use std::fmt;

/// A generator label (0-indexed position in the generator list).
///
/// Labels are displayed as `a`, `b`, `c`, ... for the first 26 generators,
/// and as `g26`, `g27`, ... beyond that.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Label(u32);

impl Label {
    /// Creates a new label with the given index.
    pub const fn new(index: u32) -> Self {
        Label(index)
    }

    /// Returns the raw label index as a `usize`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 26 {
            write!(f, "{}", (b'a' + self.0 as u8) as char)
        } else {
            write!(f, "g{}", self.0)
        }
    }
}

impl From<Label> for u32 {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl From<u32> for Label {
    fn from(index: u32) -> Self {
        Label(index)
    }
}

/// A finite word over generator labels.
///
/// The empty word is the identity. Words are ordered lexicographically.
#[derive(Debug, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Word(Vec<Label>);

impl Word {
    /// The empty word.
    pub const fn empty() -> Self {
        Word(Vec::new())
    }

    /// The one-letter word.
    pub fn letter(label: Label) -> Self {
        Word(vec![label])
    }

    pub fn labels(&self) -> &[Label] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `self · label`.
    pub fn appended(&self, label: Label) -> Self {
        let mut labels = Vec::with_capacity(self.0.len() + 1);
        labels.extend_from_slice(&self.0);
        labels.push(label);
        Word(labels)
    }

    /// Returns `label · self`.
    pub fn prepended(&self, label: Label) -> Self {
        let mut labels = Vec::with_capacity(self.0.len() + 1);
        labels.push(label);
        labels.extend_from_slice(&self.0);
        Word(labels)
    }

    /// Returns the concatenation `self · other`.
    pub fn concat(&self, other: &Word) -> Self {
        let mut labels = Vec::with_capacity(self.0.len() + other.0.len());
        labels.extend_from_slice(&self.0);
        labels.extend_from_slice(&other.0);
        Word(labels)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "ε");
        }
        for label in &self.0 {
            write!(f, "{}", label)?;
        }
        Ok(())
    }
}

impl From<Vec<Label>> for Word {
    fn from(labels: Vec<Label>) -> Self {
        Word(labels)
    }
}

impl<const N: usize> From<[u32; N]> for Word {
    fn from(indices: [u32; N]) -> Self {
        Word(indices.into_iter().map(Label::new).collect())
    }
}

impl FromIterator<Label> for Word {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Word(iter.into_iter().collect())
    }
}

/// The side on which the closure extends known words by generators.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum Side {
    /// `x -> x · g`
    #[default]
    Right,
    /// `x -> g · x`
    Left,
    /// Both of the above, right candidates first.
    TwoSided,
}

impl Side {
    pub fn extends_right(self) -> bool {
        matches!(self, Side::Right | Side::TwoSided)
    }

    pub fn extends_left(self) -> bool {
        matches!(self, Side::Left | Side::TwoSided)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Right => write!(f, "right"),
            Side::Left => write!(f, "left"),
            Side::TwoSided => write!(f, "twosided"),
        }
    }
}
