use std::fmt;

use crate::monoid::FiniteMonoid;

/// The free left regular band generated by an alphabet.
///
/// Elements are the words without repeated letters. The product of `x` and
/// `y` is `x` followed by the letters of `y` that do not occur in `x`, in
/// order. Every element is idempotent and `x·y·x = x·y`.
///
/// The monoid has `sum_{k=0}^{n} n!/(n-k)!` elements for an alphabet of size `n`.
#[derive(Debug, Clone)]
pub struct FreeLeftRegularBand {
    alphabet: Vec<char>,
}

impl FreeLeftRegularBand {
    /// The free left regular band on the first `n` letters `a, b, c, ...`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not in `1..=26`.
    pub fn new(n: usize) -> Self {
        assert!(
            (1..=26).contains(&n),
            "Alphabet size should be in the range 1..=26"
        );
        Self::with_alphabet((b'a'..).take(n).map(char::from))
    }

    /// The free left regular band on the given letters.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet is empty or has repeated letters.
    pub fn with_alphabet(alphabet: impl IntoIterator<Item = char>) -> Self {
        let alphabet: Vec<char> = alphabet.into_iter().collect();
        assert!(!alphabet.is_empty(), "Alphabet should not be empty");
        for (i, c) in alphabet.iter().enumerate() {
            assert!(
                !alphabet[..i].contains(c),
                "Alphabet should not contain repeated letters"
            );
        }
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }
}

impl Default for FreeLeftRegularBand {
    fn default() -> Self {
        FreeLeftRegularBand::with_alphabet(['a', 'b', 'c', 'd'])
    }
}

impl fmt::Display for FreeLeftRegularBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Free left regular band generated by (")?;
        for (i, c) in self.alphabet.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", c)?;
        }
        write!(f, ")")
    }
}

impl FiniteMonoid for FreeLeftRegularBand {
    type Element = String;

    fn one(&self) -> String {
        String::new()
    }

    fn product(&self, a: &String, b: &String) -> String {
        let mut result = a.clone();
        for c in b.chars() {
            if !result.contains(c) {
                result.push(c);
            }
        }
        result
    }

    fn semigroup_generators(&self) -> Vec<String> {
        self.alphabet.iter().map(|c| c.to_string()).collect()
    }
}
