//! Transition edges: Cayley-graph edges between different strongly connected components.
//!
//! Once a path crosses a transition edge it can never return to the component
//! it left, because the components and transition edges form a DAG. The set of
//! transition edges crossed is therefore a record of a word's irreversible
//! history.

use std::collections::HashMap;

use log::debug;

use crate::cayley::{CayleyGraph, Edge};
use crate::edgeset::EdgeSet;
use crate::scc::Components;

/// The transition edges of a Cayley graph, numbered densely from 0.
#[derive(Debug, Clone)]
pub struct TransitionEdges {
    edges: Vec<Edge>,
    index: HashMap<Edge, usize>,
}

impl TransitionEdges {
    pub fn extract<E>(graph: &CayleyGraph<E>, components: &Components) -> Self {
        let edges: Vec<Edge> = graph
            .edges()
            .filter(|e| !components.same_component(e.source, e.target))
            .collect();
        let index = edges.iter().enumerate().map(|(i, &e)| (e, i)).collect();

        debug!(
            "extracted {} transition edges out of {}",
            edges.len(),
            graph.num_edges()
        );

        Self { edges, index }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the index of `edge` if it is a transition edge.
    pub fn index_of(&self, edge: &Edge) -> Option<usize> {
        self.index.get(edge).copied()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.index.contains_key(edge)
    }

    /// The transition edge with the given index.
    pub fn edge(&self, index: usize) -> Edge {
        self.edges[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Keeps the transition edges of `path`, as a set.
    pub fn filter_path(&self, path: &[Edge]) -> EdgeSet {
        let mut set = EdgeSet::new(self.edges.len());
        set.extend(path.iter().filter_map(|e| self.index_of(e)));
        set
    }

    /// Resolves an edge set back to the edges it contains, in index order.
    pub fn resolve(&self, set: &EdgeSet) -> Vec<Edge> {
        set.iter().map(|i| self.edges[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monoid::FiniteMonoid;
    use crate::monoids::{CyclicGroup, TransformationMonoid};
    use crate::types::Label;

    #[test]
    fn test_group_has_no_transitions() {
        let z5 = CyclicGroup::new(5);
        let graph = CayleyGraph::build(&z5, &z5.semigroup_generators());
        let components = Components::compute(&graph);
        let transitions = TransitionEdges::extract(&graph, &components);
        assert!(transitions.is_empty());
    }

    #[test]
    fn test_t2_transitions() {
        let m = TransformationMonoid::full_t2();
        let graph = CayleyGraph::build(&m, &m.semigroup_generators());
        let components = Components::compute(&graph);
        let transitions = TransitionEdges::extract(&graph, &components);

        // Only the constant-map generator leaves the group {id, swap}.
        let id = graph.index_of(&vec![0, 1]).unwrap();
        let swap = graph.index_of(&vec![1, 0]).unwrap();
        let c0 = graph.index_of(&vec![0, 0]).unwrap();
        let c1 = graph.index_of(&vec![1, 1]).unwrap();
        let zero = Label::new(1);
        assert_eq!(graph.successor(c0, Label::new(0)), Some(c1));

        assert_eq!(transitions.len(), 2);
        assert!(transitions.contains(&Edge::new(id, c0, zero)));
        assert!(transitions.contains(&Edge::new(swap, c0, zero)));
        assert!(!transitions.contains(&Edge::new(c0, c1, Label::new(0))));
        for e in transitions.iter() {
            assert!(!components.same_component(e.source, e.target));
        }
    }

    #[test]
    fn test_filter_path() {
        let m = TransformationMonoid::full_t2();
        let graph = CayleyGraph::build(&m, &m.semigroup_generators());
        let components = Components::compute(&graph);
        let transitions = TransitionEdges::extract(&graph, &components);

        let id = graph.index_of(&vec![0, 1]).unwrap();
        let swap = graph.index_of(&vec![1, 0]).unwrap();
        let c0 = graph.index_of(&vec![0, 0]).unwrap();
        let path = [
            Edge::new(id, swap, Label::new(0)),
            Edge::new(swap, c0, Label::new(1)),
        ];
        let set = transitions.filter_path(&path);
        assert_eq!(set.len(), 1);
        assert_eq!(transitions.resolve(&set), vec![Edge::new(swap, c0, Label::new(1))]);
    }
}
