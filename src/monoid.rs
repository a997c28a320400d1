//! The interface an underlying monoid must provide to be expanded.
//!
//! The expansion only ever needs the identity, the product, and a generating
//! list; the elements themselves are discovered by multiplying generators from
//! the identity. New monoids are supported by implementing [`FiniteMonoid`]
//! directly on their own types.
//!
//! # Preconditions
//!
//! - The monoid is **finite**. An infinite monoid makes Cayley graph
//!   construction run forever; this is not detected.
//! - The product is associative and [`FiniteMonoid::one`] is its identity.
//! - The default generators are non-empty.

use std::fmt::Debug;
use std::hash::Hash;

pub trait FiniteMonoid {
    /// Elements of the monoid.
    type Element: Clone + Eq + Hash + Debug;

    /// The identity element.
    fn one(&self) -> Self::Element;

    /// The product `a · b`.
    fn product(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// The default ordered list of semigroup generators.
    fn semigroup_generators(&self) -> Vec<Self::Element>;

    /// Evaluates a sequence of elements left to right, starting from the identity.
    fn prod<'a, I>(&self, elements: I) -> Self::Element
    where
        I: IntoIterator<Item = &'a Self::Element>,
        Self::Element: 'a,
    {
        elements
            .into_iter()
            .fold(self.one(), |acc, x| self.product(&acc, x))
    }
}

impl<M: FiniteMonoid + ?Sized> FiniteMonoid for &M {
    type Element = M::Element;

    fn one(&self) -> Self::Element {
        (**self).one()
    }

    fn product(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        (**self).product(a, b)
    }

    fn semigroup_generators(&self) -> Vec<Self::Element> {
        (**self).semigroup_generators()
    }
}
