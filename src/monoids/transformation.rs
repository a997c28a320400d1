use std::fmt;

use crate::monoid::FiniteMonoid;

/// A monoid of self-maps of `{0, ..., degree-1}` generated by a list of maps.
///
/// A map is stored as its image list: `f[x]` is the image of `x`. Maps act on
/// the right, so `f · g` is "apply `f`, then `g`".
#[derive(Debug, Clone)]
pub struct TransformationMonoid {
    degree: usize,
    generators: Vec<Vec<usize>>,
}

impl TransformationMonoid {
    /// # Panics
    ///
    /// Panics if there are no generators, or a generator is not a map of
    /// `{0, ..., degree-1}` into itself.
    pub fn new(degree: usize, generators: Vec<Vec<usize>>) -> Self {
        assert!(!generators.is_empty(), "Generators should not be empty");
        for g in &generators {
            assert_eq!(g.len(), degree, "Generator should have {} images", degree);
            assert!(
                g.iter().all(|&y| y < degree),
                "Generator images should be less than {}",
                degree
            );
        }
        Self { degree, generators }
    }

    /// The full transformation monoid of degree 2, generated by the swap and
    /// the constant map to `0`.
    pub fn full_t2() -> Self {
        Self::new(2, vec![vec![1, 0], vec![0, 0]])
    }

    pub fn degree(&self) -> usize {
        self.degree
    }
}

impl fmt::Display for TransformationMonoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transformation monoid of degree {} with {} generators",
            self.degree,
            self.generators.len()
        )
    }
}

impl FiniteMonoid for TransformationMonoid {
    type Element = Vec<usize>;

    fn one(&self) -> Vec<usize> {
        (0..self.degree).collect()
    }

    fn product(&self, a: &Vec<usize>, b: &Vec<usize>) -> Vec<usize> {
        a.iter().map(|&x| b[x]).collect()
    }

    fn semigroup_generators(&self) -> Vec<Vec<usize>> {
        self.generators.clone()
    }
}
