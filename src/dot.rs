//! Cayley graph to DOT (Graphviz) conversion.
//!
//! This module renders the right Cayley graph underlying an
//! [`Expansion`] in DOT format, which can be visualized using Graphviz tools
//! like `dot`, or online viewers.
//!
//! # DOT Format
//!
//! The generated DOT output follows these conventions:
//! - **Vertices** are labeled with the `Debug` form of the monoid element
//! - **Strongly connected components** with more than one vertex are drawn as clusters
//! - **Edges** are labeled with their generator label:
//!   - Solid lines for edges inside a component
//!   - Bold dashed lines for transition edges
//! - **The identity** is drawn with a distinct shape
//!
//! # Examples
//!
//! ```
//! use kr_expansion::expansion::Expansion;
//! use kr_expansion::monoids::FreeLeftRegularBand;
//!
//! let k = Expansion::new(FreeLeftRegularBand::new(2)).unwrap();
//! let dot = k.to_dot().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("digraph {"));
//! ```

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::expansion::Expansion;
use crate::monoid::FiniteMonoid;

/// Configuration options for DOT output generation.
///
/// # Examples
///
/// ```
/// use kr_expansion::dot::DotConfig;
///
/// let config = DotConfig {
///     cluster_components: false,
///     ..DotConfig::default()
/// };
/// assert_eq!(config.transition_edge_style, "\"dashed,bold\"");
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for vertices (default: "ellipse")
    pub vertex_shape: &'static str,
    /// Shape for the identity vertex (default: "doublecircle")
    pub identity_shape: &'static str,
    /// Style for edges inside a component (default: "solid")
    pub edge_style: &'static str,
    /// Style for transition edges (default: "dashed,bold", quoted)
    pub transition_edge_style: &'static str,
    /// Whether to draw non-trivial components as clusters (default: true)
    pub cluster_components: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            vertex_shape: "ellipse",
            identity_shape: "doublecircle",
            edge_style: "solid",
            transition_edge_style: "\"dashed,bold\"",
            cluster_components: true,
        }
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

impl<M: FiniteMonoid> Expansion<M> {
    /// Converts the underlying Cayley graph to DOT format.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the underlying Cayley graph to DOT format with custom configuration.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let graph = self.cayley_graph();
        let components = self.components();
        let transitions = self.transition_edges();

        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "node [shape={}];", config.vertex_shape)?;

        let mut groups = BTreeMap::<usize, Vec<usize>>::new();
        for v in 0..graph.num_vertices() {
            groups.entry(components.component_of(v)).or_default().push(v);
        }

        for (c, vertices) in &groups {
            let cluster = config.cluster_components && vertices.len() > 1;
            if cluster {
                writeln!(dot, "subgraph cluster_{} {{", c)?;
                writeln!(dot, "label=\"C{}\";", c)?;
            }
            for &v in vertices {
                let label = escape(&format!("{:?}", graph.vertex(v)));
                if v == 0 {
                    writeln!(
                        dot,
                        "{} [shape={}, label=\"{}\"];",
                        v, config.identity_shape, label
                    )?;
                } else {
                    writeln!(dot, "{} [label=\"{}\"];", v, label)?;
                }
            }
            if cluster {
                writeln!(dot, "}}")?;
            }
        }

        for e in graph.edges() {
            let style = if transitions.contains(&e) {
                config.transition_edge_style
            } else {
                config.edge_style
            };
            writeln!(
                dot,
                "{} -> {} [label=\"{}\", style={}];",
                e.source, e.target, e.label, style
            )?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
