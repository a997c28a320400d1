use thiserror::Error;

use crate::types::{Label, Word};

/// Errors reported by an [`Expansion`][crate::expansion::Expansion].
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ExpansionError {
    /// The word's signature was never registered by the closure.
    #[error("no representative registered for word {word}")]
    NotFound { word: Word },

    /// The element was not produced by this expansion.
    #[error("element {word} is not a member of this expansion")]
    NotAMember { word: Word },

    /// The Cayley graph has no edge labeled `label` leaving `vertex`.
    #[error("no transition from vertex {vertex} by label {label}")]
    MissingTransition { vertex: usize, label: Label },

    /// The generator list is empty.
    #[error("an expansion needs at least one generator")]
    EmptyGenerators,
}

pub type Result<T, E = ExpansionError> = std::result::Result<T, E>;
