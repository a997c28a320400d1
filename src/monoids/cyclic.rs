use std::fmt;

use crate::monoid::FiniteMonoid;

/// The cyclic group `Z/nZ`, written additively, generated by `1`.
#[derive(Debug, Copy, Clone)]
pub struct CyclicGroup {
    order: u32,
}

impl CyclicGroup {
    /// # Panics
    ///
    /// Panics if `order == 0`.
    pub fn new(order: u32) -> Self {
        assert_ne!(order, 0, "Group order should be positive");
        Self { order }
    }

    pub fn order(&self) -> u32 {
        self.order
    }
}

impl fmt::Display for CyclicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cyclic group of order {}", self.order)
    }
}

impl FiniteMonoid for CyclicGroup {
    type Element = u32;

    fn one(&self) -> u32 {
        0
    }

    fn product(&self, a: &u32, b: &u32) -> u32 {
        (a + b) % self.order
    }

    fn semigroup_generators(&self) -> Vec<u32> {
        vec![1 % self.order]
    }
}
