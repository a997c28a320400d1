//! The Karnofsky–Rhodes expansion of a finite monoid.
//!
//! # Construction
//!
//! Given a finite monoid `M` with ordered generators `g_0, ..., g_{k-1}`, words
//! over the labels `0..k` are evaluated in `M`. Replaying a word from the
//! identity walks the right Cayley graph of `M`; the walk crosses some edges
//! between different strongly connected components (*transition edges*).
//!
//! The *signature* of a word is the pair (value in `M`, set of transition
//! edges crossed). Words with equal signatures are equal in the expansion,
//! and the expansion is a monoid under concatenation of words.
//!
//! # Lifecycle
//!
//! The Cayley graph, its components and its transition edges are computed on
//! first access and cached in [`OnceCell`]s. All elements are enumerated
//! eagerly by [`Expansion::new`], by breadth-first closure from the empty
//! word, extending words on the configured [`Side`]. The first word reaching a
//! signature becomes its representative.
//!
//! # Example
//!
//! ```
//! use kr_expansion::expansion::Expansion;
//! use kr_expansion::monoids::FreeLeftRegularBand;
//!
//! let lrb = FreeLeftRegularBand::new(2);
//! let k = Expansion::new(lrb).unwrap();
//! assert_eq!(k.to_string(), "Karnofsky-Rhodes expansion of Free left regular band generated by ('a', 'b')");
//!
//! let gens = k.semigroup_generators().unwrap();
//! let (a, b) = (&gens[0], &gens[1]);
//! let ab = k.product(a, b).unwrap();
//! let ba = k.product(b, a).unwrap();
//! assert!(!k.are_equivalent(&ab, &ba).unwrap());
//!
//! // Every generator is idempotent.
//! assert_eq!(k.product(a, a).unwrap(), *a);
//! ```

use std::cell::{OnceCell, Ref, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use num_bigint::BigUint;

use crate::cayley::{CayleyGraph, Edge};
use crate::config::ExpansionConfig;
use crate::edgeset::EdgeSet;
use crate::element::Element;
use crate::error::{ExpansionError, Result};
use crate::monoid::FiniteMonoid;
use crate::scc::Components;
use crate::signature::Signature;
use crate::store::RepresentativeStore;
use crate::transition::TransitionEdges;
use crate::types::{Label, Side, Word};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub struct Expansion<M: FiniteMonoid> {
    id: u64,
    monoid: M,
    generators: Vec<M::Element>,
    side: Side,
    graph: OnceCell<CayleyGraph<M::Element>>,
    components: OnceCell<Components>,
    transitions: OnceCell<TransitionEdges>,
    store: RefCell<RepresentativeStore<M::Element>>,
    one: OnceCell<Element<M::Element>>,
    elements: Vec<Element<M::Element>>,
}

impl<M: FiniteMonoid> Expansion<M> {
    /// Expands `monoid` with respect to its default generators, closing on the right.
    pub fn new(monoid: M) -> Result<Self> {
        Self::with_config(monoid, ExpansionConfig::default())
    }

    /// Expands `monoid` with the given configuration.
    ///
    /// All elements are enumerated before this returns.
    pub fn with_config(monoid: M, config: ExpansionConfig<M::Element>) -> Result<Self> {
        let generators = config.resolve_generators(&monoid);
        if generators.is_empty() {
            return Err(ExpansionError::EmptyGenerators);
        }

        let mut store = RepresentativeStore::new();
        store.lookup_or_register(Word::empty(), Signature::identity(monoid.one()));

        let mut expansion = Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            monoid,
            generators,
            side: config.side,
            graph: OnceCell::new(),
            components: OnceCell::new(),
            transitions: OnceCell::new(),
            store: RefCell::new(store),
            one: OnceCell::new(),
            elements: Vec::new(),
        };
        expansion.elements = expansion.enumerate()?;
        Ok(expansion)
    }

    pub fn monoid(&self) -> &M {
        &self.monoid
    }

    /// The generators of the underlying monoid; label `i` stands for `generators()[i]`.
    pub fn generators(&self) -> &[M::Element] {
        &self.generators
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn cayley_graph(&self) -> &CayleyGraph<M::Element> {
        self.graph
            .get_or_init(|| CayleyGraph::build(&self.monoid, &self.generators))
    }

    pub fn components(&self) -> &Components {
        self.components
            .get_or_init(|| Components::compute(self.cayley_graph()))
    }

    pub fn transition_edges(&self) -> &TransitionEdges {
        self.transitions
            .get_or_init(|| TransitionEdges::extract(self.cayley_graph(), self.components()))
    }

    pub fn store(&self) -> Ref<'_, RepresentativeStore<M::Element>> {
        self.store.borrow()
    }

    /// Replays `word` from the identity and returns the final vertex and the edges traversed.
    fn walk(&self, word: &Word) -> Result<(usize, Vec<Edge>)> {
        let graph = self.cayley_graph();
        let mut v = CayleyGraph::<M::Element>::IDENTITY;
        let mut path = Vec::with_capacity(word.len());
        for &label in word.labels() {
            let w = graph
                .successor(v, label)
                .ok_or(ExpansionError::MissingTransition { vertex: v, label })?;
            path.push(Edge::new(v, w, label));
            v = w;
        }
        Ok((v, path))
    }

    /// The edges of the Cayley graph traversed by `word`, in order.
    pub fn read_path(&self, word: &Word) -> Result<Vec<Edge>> {
        self.walk(word).map(|(_, path)| path)
    }

    /// The value of `word` in the underlying monoid.
    pub fn projection(&self, word: &Word) -> Result<M::Element> {
        let (v, _) = self.walk(word)?;
        Ok(self.cayley_graph().vertex(v).clone())
    }

    /// The transition edges crossed by `word`.
    pub fn path_transition_edges(&self, word: &Word) -> Result<EdgeSet> {
        let path = self.read_path(word)?;
        Ok(self.transition_edges().filter_path(&path))
    }

    /// The canonical signature of `word`.
    pub fn signature(&self, word: &Word) -> Result<Signature<M::Element>> {
        let (v, path) = self.walk(word)?;
        let value = self.cayley_graph().vertex(v).clone();
        let edges = self.transition_edges().filter_path(&path);
        Ok(Signature::new(value, edges))
    }

    /// Wraps `word` as an element of this expansion.
    pub fn element(&self, word: Word) -> Result<Element<M::Element>> {
        let signature = self.signature(&word)?;
        Ok(Element::new(self.id, word, signature))
    }

    /// The representative of `word`'s equivalence class.
    pub fn representative(&self, word: &Word) -> Result<Element<M::Element>> {
        let signature = self.signature(word)?;
        let representative = self
            .store
            .borrow()
            .representative_of(word, &signature)?
            .clone();
        Ok(Element::new(self.id, representative, signature))
    }

    /// The identity element.
    pub fn one(&self) -> Element<M::Element> {
        self.one
            .get_or_init(|| {
                Element::new(
                    self.id,
                    Word::empty(),
                    Signature::identity(self.monoid.one()),
                )
            })
            .clone()
    }

    pub fn an_element(&self) -> Element<M::Element> {
        self.one()
    }

    /// The representatives of the one-letter words, in generator order.
    pub fn semigroup_generators(&self) -> Result<Vec<Element<M::Element>>> {
        (0..self.generators.len())
            .map(|i| self.representative(&Word::letter(Label::new(i as u32))))
            .collect()
    }

    /// The product `x · y`: the representative of the concatenated words.
    pub fn product(
        &self,
        x: &Element<M::Element>,
        y: &Element<M::Element>,
    ) -> Result<Element<M::Element>> {
        self.representative(&x.word().concat(y.word()))
    }

    /// Checks whether `u` and `v` are the same element of this expansion.
    ///
    /// Fails with [`ExpansionError::NotAMember`] if either element was not
    /// produced by this expansion.
    pub fn are_equivalent(
        &self,
        u: &Element<M::Element>,
        v: &Element<M::Element>,
    ) -> Result<bool> {
        self.check_member(u)?;
        self.check_member(v)?;
        Ok(u.signature() == v.signature())
    }

    fn check_member(&self, x: &Element<M::Element>) -> Result<()> {
        if x.owner() != self.id || !self.store.borrow().contains(x.signature()) {
            return Err(ExpansionError::NotAMember {
                word: x.word().clone(),
            });
        }
        Ok(())
    }

    /// Number of elements of the expansion.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: the identity is an element.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All elements, in enumeration order.
    pub fn elements(&self) -> &[Element<M::Element>] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element<M::Element>> {
        self.elements.iter()
    }

    /// Upper bound on the number of elements: `|M| · 2^|transition edges|`.
    pub fn size_bound(&self) -> BigUint {
        BigUint::from(self.cayley_graph().num_vertices()) << self.transition_edges().len()
    }

    /// Candidate successors of `x` on the configured side, in generator order.
    fn successor_candidates(&self, x: &Word) -> Vec<Word> {
        let k = self.generators.len() as u32;
        let mut candidates = Vec::new();
        if self.side.extends_right() {
            candidates.extend((0..k).map(|i| x.appended(Label::new(i))));
        }
        if self.side.extends_left() {
            candidates.extend((0..k).map(|i| x.prepended(Label::new(i))));
        }
        candidates
    }

    /// Breadth-first closure from the empty word.
    fn enumerate(&self) -> Result<Vec<Element<M::Element>>> {
        let one = self.one();
        let mut emitted = HashSet::from([one.signature().clone()]);
        let mut frontier = vec![one.word().clone()];
        let mut elements = vec![one];

        let mut depth = 0;
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for x in &frontier {
                for candidate in self.successor_candidates(x) {
                    let signature = self.signature(&candidate)?;
                    let (_, registration) = self
                        .store
                        .borrow_mut()
                        .lookup_or_register(candidate.clone(), signature.clone());
                    if !registration.is_discoverable() {
                        continue;
                    }
                    if emitted.insert(signature.clone()) {
                        elements.push(Element::new(self.id, candidate.clone(), signature));
                        next.push(candidate);
                    }
                }
            }
            depth += 1;
            debug!(
                "closure depth {}: {} new, {} total",
                depth,
                next.len(),
                elements.len()
            );
            frontier = next;
        }

        debug!(
            "enumerated {} elements on the {} side ({})",
            elements.len(),
            self.side,
            self.store.borrow().len()
        );
        Ok(elements)
    }
}

impl<'a, M: FiniteMonoid> IntoIterator for &'a Expansion<M> {
    type Item = &'a Element<M::Element>;
    type IntoIter = std::slice::Iter<'a, Element<M::Element>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<M> fmt::Display for Expansion<M>
where
    M: FiniteMonoid + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Karnofsky-Rhodes expansion of {}", self.monoid)
    }
}

impl<M: FiniteMonoid> fmt::Debug for Expansion<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expansion")
            .field("generators", &self.generators.len())
            .field("side", &self.side)
            .field("elements", &self.elements.len())
            .field("store", &*self.store.borrow())
            .finish()
    }
}
