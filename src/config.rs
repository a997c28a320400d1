use crate::monoid::FiniteMonoid;
use crate::types::Side;

/// Construction options for an [`Expansion`][crate::expansion::Expansion].
///
/// Every field has a default; an explicitly set value always wins:
///
/// - `generators`: `None` means the monoid's
///   [`semigroup_generators`][FiniteMonoid::semigroup_generators].
/// - `side`: the side on which the closure extends words (default [`Side::Right`]).
///
/// # Examples
///
/// ```
/// use kr_expansion::config::ExpansionConfig;
/// use kr_expansion::types::Side;
///
/// let config = ExpansionConfig::<u32>::default().with_side(Side::TwoSided);
/// assert_eq!(config.side, Side::TwoSided);
/// assert!(config.generators.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ExpansionConfig<E> {
    pub generators: Option<Vec<E>>,
    pub side: Side,
}

impl<E> Default for ExpansionConfig<E> {
    fn default() -> Self {
        Self {
            generators: None,
            side: Side::default(),
        }
    }
}

impl<E> ExpansionConfig<E> {
    pub fn with_generators(mut self, generators: Vec<E>) -> Self {
        self.generators = Some(generators);
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// The generators to use for `monoid`: the configured ones if any,
    /// otherwise the monoid's defaults.
    pub fn resolve_generators<M>(&self, monoid: &M) -> Vec<E>
    where
        M: FiniteMonoid<Element = E>,
        E: Clone,
    {
        match &self.generators {
            Some(generators) => generators.clone(),
            None => monoid.semigroup_generators(),
        }
    }
}
