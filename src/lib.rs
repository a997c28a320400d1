//! # kr-expansion: Karnofsky–Rhodes expansions of finite monoids
//!
//! **`kr-expansion`** computes the Karnofsky–Rhodes expansion of a finitely generated finite monoid.
//!
//! ## What is the Karnofsky–Rhodes expansion?
//!
//! Evaluating a word over the generators of a monoid `M` walks the right Cayley graph of `M`
//! from the identity. Some edges of that graph connect two different strongly connected
//! components; once such a *transition edge* is crossed, the walk can never come back.
//!
//! The expansion identifies two words iff they reach the **same value** by crossing the
//! **same set of transition edges**. It is again a finite monoid (under concatenation of
//! words), mapping onto `M`, and it separates elements that `M` conflates but whose
//! generation history differs.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: All operations go through the [`Expansion`][crate::expansion::Expansion] manager,
//!   which owns the Cayley graph, its components and the representative store.
//! - **Lazy & Cached**: Derived structures are computed once, on first access.
//! - **Canonical Representatives**: Each equivalence class has exactly one representative word,
//!   the first one found by breadth-first closure.
//! - **Bring Your Own Monoid**: Implement [`FiniteMonoid`][crate::monoid::FiniteMonoid] for your type.
//!
//! ## Basic Usage
//!
//! ```rust
//! use kr_expansion::expansion::Expansion;
//! use kr_expansion::monoids::FreeLeftRegularBand;
//!
//! // 1. Pick an underlying monoid
//! let lrb = FreeLeftRegularBand::new(2);
//!
//! // 2. Expand it (all elements are enumerated here)
//! let k = Expansion::new(lrb).unwrap();
//!
//! // 3. Multiply elements
//! let gens = k.semigroup_generators().unwrap();
//! let ab = k.product(&gens[0], &gens[1]).unwrap();
//! assert_eq!(ab.word().to_string(), "ab");
//!
//! // 4. Inspect
//! assert_eq!(k.len(), 5);
//! assert!(k.iter().any(|x| *x == ab));
//! ```
//!
//! ## Core Components
//!
//! - **[`expansion`]**: The [`Expansion`][crate::expansion::Expansion] manager: path replay, signatures, closure, product.
//! - **[`cayley`]**, **[`scc`]**, **[`transition`]**: The graph side of the construction.
//! - **[`store`]**: The representative store.
//! - **[`monoids`]**: Ready-made finite monoids.
//! - **[`dot`]**: Visualizing Cayley graphs using Graphviz.

pub mod cayley;
pub mod config;
pub mod dot;
pub mod edgeset;
pub mod element;
pub mod error;
pub mod expansion;
pub mod monoid;
pub mod monoids;
pub mod scc;
pub mod signature;
pub mod store;
pub mod transition;
pub mod types;
