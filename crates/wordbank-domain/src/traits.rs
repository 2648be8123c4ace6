//! Trait definitions for storage interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{Difficulty, RelationshipKind, Word, WordId, WordRelationship};

/// Trait for storing and retrieving words
///
/// Implemented by the infrastructure layer (wordbank-store)
pub trait WordStore {
    /// Error type for store operations
    type Error;

    /// Insert a new word; fails if its folded term already exists
    fn insert_word(&mut self, word: Word) -> Result<WordId, Self::Error>;

    /// Replace the stored fields of an existing word
    fn update_word(&mut self, word: &Word) -> Result<(), Self::Error>;

    /// Get a word by ID
    fn get_word(&self, id: WordId) -> Result<Option<Word>, Self::Error>;

    /// Case-insensitive exact match on the term
    fn find_by_term(&self, term: &str) -> Result<Option<Word>, Self::Error>;

    /// Every stored word, ordered by term
    fn all_words(&self) -> Result<Vec<Word>, Self::Error>;

    /// Query words matching criteria, ordered by term
    fn query_words(&self, query: &WordQuery) -> Result<Vec<Word>, Self::Error>;

    /// Number of stored words
    fn count_words(&self) -> Result<usize, Self::Error>;
}

/// Query criteria for retrieving words
#[derive(Debug, Clone, Default)]
pub struct WordQuery {
    /// Case-insensitive substring over term and meanings
    pub text: Option<String>,

    /// Filter by difficulty level
    pub difficulty: Option<Difficulty>,

    /// Filter by word list name
    pub word_list: Option<String>,

    /// Maximum results to return
    pub limit: Option<usize>,
}

/// Trait for storing and retrieving word relationships
///
/// Implemented by the infrastructure layer (wordbank-store)
pub trait RelationshipStore {
    /// Error type for store operations
    type Error;

    /// Insert the canonical edge for `(a, b, kind)` if absent
    ///
    /// Returns `true` when a new edge was stored and `false` when it already
    /// existed. Fails with a validation error when `a == b`.
    fn upsert_relationship(
        &mut self,
        a: WordId,
        b: WordId,
        kind: RelationshipKind,
    ) -> Result<bool, Self::Error>;

    /// Whether an edge with the same pair and kind is stored
    fn has_relationship(&self, relationship: &WordRelationship) -> Result<bool, Self::Error>;

    /// The other endpoint of every `kind` edge touching `id`, in no particular order
    fn find_edges(&self, id: WordId, kind: RelationshipKind) -> Result<Vec<WordId>, Self::Error>;

    /// All stored edges, optionally of one kind, newest first
    fn relationships(
        &self,
        kind: Option<RelationshipKind>,
    ) -> Result<Vec<WordRelationship>, Self::Error>;
}
