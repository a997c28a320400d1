//! Concrete finite monoids implementing [`FiniteMonoid`][crate::monoid::FiniteMonoid].
//!
//! - [`FreeLeftRegularBand`]: idempotent, `xyx = xy`; the standard example.
//! - [`CyclicGroup`]: a group, so its Cayley graph is strongly connected.
//! - [`TransformationMonoid`]: generated by self-maps of `{0, ..., n-1}`.
//! - [`TruncatedFreeMonoid`]: words up to a fixed length, longer words collapse to zero.

pub mod cyclic;
pub mod lrb;
pub mod transformation;
pub mod truncated;

pub use cyclic::CyclicGroup;
pub use lrb::FreeLeftRegularBand;
pub use transformation::TransformationMonoid;
pub use truncated::{Truncated, TruncatedFreeMonoid};
