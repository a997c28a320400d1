//! Strongly connected components of a Cayley graph.
//!
//! Uses Tarjan's algorithm with an explicit call stack, so deep graphs do not
//! overflow the native stack. Components are numbered in the order Tarjan
//! completes them, which is a reverse topological order of the condensation:
//! every edge between two different components goes from a higher id to a
//! lower one.

use std::cmp::min;

use log::debug;

use crate::cayley::CayleyGraph;

const UNVISITED: usize = usize::MAX;

#[derive(Debug, Clone)]
pub struct Components {
    component: Vec<usize>,
    count: usize,
}

impl Components {
    /// Partitions the vertices of `graph` into strongly connected components.
    pub fn compute<E>(graph: &CayleyGraph<E>) -> Self {
        let n = graph.num_vertices();
        let k = graph.num_labels();

        let mut index = vec![UNVISITED; n];
        let mut lowlink = vec![0; n];
        let mut on_stack = vec![false; n];
        let mut stack = Vec::new();
        let mut component = vec![UNVISITED; n];
        let mut count = 0;
        let mut counter = 0;

        // Frames: (vertex, next label to explore)
        let mut call: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if index[root] != UNVISITED {
                continue;
            }

            index[root] = counter;
            lowlink[root] = counter;
            counter += 1;
            stack.push(root);
            on_stack[root] = true;
            call.push((root, 0));

            while let Some(&(v, i)) = call.last() {
                if i < k {
                    let top = call.len() - 1;
                    call[top].1 += 1;

                    let w = graph.successors(v)[i];
                    if index[w] == UNVISITED {
                        index[w] = counter;
                        lowlink[w] = counter;
                        counter += 1;
                        stack.push(w);
                        on_stack[w] = true;
                        call.push((w, 0));
                    } else if on_stack[w] {
                        lowlink[v] = min(lowlink[v], index[w]);
                    }
                    continue;
                }

                call.pop();
                if let Some(&(u, _)) = call.last() {
                    lowlink[u] = min(lowlink[u], lowlink[v]);
                }

                if lowlink[v] == index[v] {
                    while let Some(w) = stack.pop() {
                        on_stack[w] = false;
                        component[w] = count;
                        if w == v {
                            break;
                        }
                    }
                    count += 1;
                }
            }
        }

        debug!("found {} strongly connected components over {} vertices", count, n);

        Self { component, count }
    }

    /// The component id of vertex `v`.
    pub fn component_of(&self, v: usize) -> usize {
        self.component[v]
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns true if `u` and `v` lie in the same component.
    pub fn same_component(&self, u: usize, v: usize) -> bool {
        self.component[u] == self.component[v]
    }

    /// Checks that every edge of `graph` leaving a component goes to a
    /// component with a smaller id, i.e. that the condensation is acyclic.
    pub fn condensation_is_acyclic<E>(&self, graph: &CayleyGraph<E>) -> bool {
        graph.edges().all(|e| {
            let (a, b) = (self.component[e.source], self.component[e.target]);
            a >= b
        })
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::monoid::FiniteMonoid;
    use crate::monoids::{CyclicGroup, FreeLeftRegularBand, TruncatedFreeMonoid};

    #[test]
    fn test_group_single_component() {
        let z6 = CyclicGroup::new(6);
        let graph = CayleyGraph::build(&z6, &z6.semigroup_generators());
        let components = Components::compute(&graph);
        assert_eq!(components.count(), 1);
        assert!((0..6).all(|v| components.component_of(v) == 0));
    }

    #[test]
    fn test_lrb_components() {
        // In a left regular band, x·g lies in the same component as x only if x·g == x.
        let lrb = FreeLeftRegularBand::new(3);
        let graph = CayleyGraph::build(&lrb, &lrb.semigroup_generators());
        let components = Components::compute(&graph);
        assert_eq!(components.count(), graph.num_vertices());
        assert!(components.condensation_is_acyclic(&graph));
    }

    #[test]
    fn test_tree_components() {
        let m = TruncatedFreeMonoid::new(2, 3);
        let graph = CayleyGraph::build(&m, &m.semigroup_generators());
        let components = Components::compute(&graph);
        assert_eq!(graph.num_vertices(), m.size());
        assert_eq!(components.count(), m.size());
        assert!(components.condensation_is_acyclic(&graph));
    }

    #[test]
    fn test_mixed_components() {
        // T2 generated by the swap and a constant map: {id, swap} is a group,
        // and the two constant maps form a second component below it.
        let m = crate::monoids::TransformationMonoid::full_t2();
        let graph = CayleyGraph::build(&m, &m.semigroup_generators());
        let components = Components::compute(&graph);

        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(components.count(), 2);

        let id = graph.index_of(&vec![0, 1]).unwrap();
        let swap = graph.index_of(&vec![1, 0]).unwrap();
        let c0 = graph.index_of(&vec![0, 0]).unwrap();
        let c1 = graph.index_of(&vec![1, 1]).unwrap();
        assert!(components.same_component(id, swap));
        assert!(components.same_component(c0, c1));
        assert!(!components.same_component(id, c0));
        assert!(components.condensation_is_acyclic(&graph));
    }
}
