//! The representative store: one canonical word per signature.
//!
//! The first word registered for a signature becomes its representative and is
//! never replaced. The store only grows.

use std::cell::Cell;
use std::collections::HashMap;
use std::hash::Hash;

use log::trace;

use crate::error::{ExpansionError, Result};
use crate::signature::Signature;
use crate::types::Word;

/// Outcome of [`RepresentativeStore::lookup_or_register`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Registration {
    /// First sight of the signature; the candidate became its representative.
    New,
    /// The signature was known and its representative is the candidate word
    /// itself. Still reported as discoverable to the closure.
    Rediscovered,
    /// The signature was known under a different word.
    Known,
}

impl Registration {
    /// Whether the closure should consider the candidate discovered.
    pub fn is_discoverable(self) -> bool {
        matches!(self, Registration::New | Registration::Rediscovered)
    }
}

pub struct RepresentativeStore<E> {
    representatives: HashMap<Signature<E>, Word>,
    lookups: Cell<usize>,
    hits: Cell<usize>,
}

impl<E> RepresentativeStore<E>
where
    E: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            representatives: HashMap::new(),
            lookups: Cell::new(0),
            hits: Cell::new(0),
        }
    }

    /// Returns the representative for `signature`, registering `word` as the
    /// representative if the signature has not been seen before.
    pub fn lookup_or_register(
        &mut self,
        word: Word,
        signature: Signature<E>,
    ) -> (Word, Registration) {
        self.lookups.set(self.lookups.get() + 1);
        match self.representatives.get(&signature) {
            Some(existing) => {
                self.hits.set(self.hits.get() + 1);
                let registration = if *existing == word {
                    Registration::Rediscovered
                } else {
                    Registration::Known
                };
                trace!("{} -> {} ({:?})", word, existing, registration);
                (existing.clone(), registration)
            }
            None => {
                trace!("{} registered", word);
                self.representatives.insert(signature, word.clone());
                (word, Registration::New)
            }
        }
    }

    /// Returns the representative registered for `signature`.
    ///
    /// `word` is only used to report a [`ExpansionError::NotFound`].
    pub fn representative_of(&self, word: &Word, signature: &Signature<E>) -> Result<&Word> {
        self.lookups.set(self.lookups.get() + 1);
        match self.representatives.get(signature) {
            Some(representative) => {
                self.hits.set(self.hits.get() + 1);
                Ok(representative)
            }
            None => Err(ExpansionError::NotFound { word: word.clone() }),
        }
    }

    pub fn contains(&self, signature: &Signature<E>) -> bool {
        self.representatives.contains_key(signature)
    }

    /// Number of registered signatures.
    pub fn len(&self) -> usize {
        self.representatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// Number of lookups performed so far.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    /// Number of lookups that found an existing signature.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }
}

impl<E> Default for RepresentativeStore<E>
where
    E: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for RepresentativeStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepresentativeStore")
            .field("size", &self.representatives.len())
            .field("lookups", &self.lookups.get())
            .field("hits", &self.hits.get())
            .finish()
    }
}
