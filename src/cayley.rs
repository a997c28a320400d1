//! Right Cayley graphs of finite monoids.
//!
//! The graph has one vertex per monoid element reachable from the identity
//! and one edge `(x, x·g, g)` per vertex `x` and generator label `g`. It is
//! built by breadth-first search from the identity, so vertex `0` is always
//! the identity and vertices are numbered in discovery order.
//!
//! Outgoing edges are stored in a flat table indexed by `(vertex, label)`,
//! which doubles as the transition dictionary used to replay words.
//!
//! # Termination
//!
//! Construction enumerates the monoid. For an infinite monoid it never
//! returns.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use log::debug;

use crate::monoid::FiniteMonoid;
use crate::types::Label;

/// A labeled edge `source --label--> target` of a Cayley graph, by vertex index.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub label: Label,
}

impl Edge {
    pub const fn new(source: usize, target: usize, label: Label) -> Self {
        Self {
            source,
            target,
            label,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}-> {}", self.source, self.label, self.target)
    }
}

pub struct CayleyGraph<E> {
    vertices: Vec<E>,
    index: HashMap<E, usize>,
    /// `successors[v * num_labels + l]` is the target of the edge leaving `v` by label `l`.
    successors: Vec<usize>,
    num_labels: usize,
}

impl<E> CayleyGraph<E>
where
    E: Clone + Eq + std::hash::Hash,
{
    /// Builds the right Cayley graph of `monoid` with respect to `generators`.
    ///
    /// Label `i` stands for `generators[i]`.
    pub fn build<M>(monoid: &M, generators: &[E]) -> Self
    where
        M: FiniteMonoid<Element = E>,
    {
        let num_labels = generators.len();
        let mut vertices = Vec::new();
        let mut index = HashMap::new();
        let mut successors = Vec::new();

        let one = monoid.one();
        index.insert(one.clone(), 0);
        vertices.push(one);

        let mut queue = VecDeque::from([0usize]);
        while let Some(v) = queue.pop_front() {
            // Successors of `v` occupy a contiguous block, so vertices must be
            // dequeued in index order.
            debug_assert_eq!(successors.len(), v * num_labels);
            for g in generators {
                let w = monoid.product(&vertices[v], g);
                let target = match index.get(&w) {
                    Some(&i) => i,
                    None => {
                        let i = vertices.len();
                        index.insert(w.clone(), i);
                        vertices.push(w);
                        queue.push_back(i);
                        i
                    }
                };
                successors.push(target);
            }
        }

        debug!(
            "built Cayley graph: {} vertices, {} labels, {} edges",
            vertices.len(),
            num_labels,
            successors.len()
        );

        Self {
            vertices,
            index,
            successors,
            num_labels,
        }
    }

    /// Returns the index of the vertex holding `element`, if any.
    pub fn index_of(&self, element: &E) -> Option<usize> {
        self.index.get(element).copied()
    }
}

impl<E> CayleyGraph<E> {
    /// The identity vertex.
    pub const IDENTITY: usize = 0;

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    pub fn num_edges(&self) -> usize {
        self.successors.len()
    }

    /// The monoid element at vertex `v`.
    pub fn vertex(&self, v: usize) -> &E {
        &self.vertices[v]
    }

    pub fn vertices(&self) -> &[E] {
        &self.vertices
    }

    /// The target of the edge leaving `v` by `label`, or `None` if either is out of range.
    pub fn successor(&self, v: usize, label: Label) -> Option<usize> {
        if v >= self.vertices.len() || label.index() >= self.num_labels {
            return None;
        }
        Some(self.successors[v * self.num_labels + label.index()])
    }

    /// All targets of edges leaving `v`, in label order.
    pub fn successors(&self, v: usize) -> &[usize] {
        let start = v * self.num_labels;
        &self.successors[start..start + self.num_labels]
    }

    /// Iterates over all edges, grouped by source vertex and ordered by label.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.vertices.len()).flat_map(move |v| {
            self.successors(v)
                .iter()
                .enumerate()
                .map(move |(l, &w)| Edge::new(v, w, Label::new(l as u32)))
        })
    }
}

impl<E> fmt::Debug for CayleyGraph<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CayleyGraph")
            .field("vertices", &self.num_vertices())
            .field("labels", &self.num_labels)
            .field("edges", &self.num_edges())
            .finish()
    }
}
