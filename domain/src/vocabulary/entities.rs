//! Vocabulary entity

use super::discovery::Discovery;
use crate::core::concept::Concept;

/// Seed concepts every game starts with, in display order
pub const SEED_CONCEPTS: [&str; 4] = ["water", "earth", "air", "fire"];

/// Ordered collection of discovered concepts (Entity)
///
/// Insertion order is display order. The store itself does not reject
/// duplicates on [`append`](Self::append); uniqueness is kept by going
/// through [`discover`](Self::discover), which is what the game loop does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    concepts: Vec<Concept>,
}

impl Vocabulary {
    /// Vocabulary holding only [`SEED_CONCEPTS`]
    pub fn seeded() -> Self {
        Self {
            concepts: SEED_CONCEPTS.iter().map(|s| Concept::from_static(s)).collect(),
        }
    }

    /// Vocabulary with arbitrary starting contents (fixtures, tests)
    pub fn from_concepts(concepts: Vec<Concept>) -> Self {
        Self { concepts }
    }

    /// Exact-text membership check
    pub fn contains(&self, concept: &Concept) -> bool {
        self.concepts.iter().any(|c| c == concept)
    }

    /// Push a concept to the end without checking membership
    pub fn append(&mut self, concept: Concept) {
        self.concepts.push(concept);
    }

    /// Check membership and append only when absent
    pub fn discover(&mut self, concept: Concept) -> Discovery {
        if self.contains(&concept) {
            Discovery::Known(concept)
        } else {
            self.append(concept.clone());
            Discovery::New(concept)
        }
    }

    pub fn get(&self, index: usize) -> Option<&Concept> {
        self.concepts.get(index)
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.concepts.iter()
    }

    pub fn as_slice(&self) -> &[Concept] {
        &self.concepts
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::seeded()
    }
}
