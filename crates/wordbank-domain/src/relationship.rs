//! Relationship module - undirected synonym/antonym edges between words

use crate::WordId;
use std::fmt;
use thiserror::Error;

/// Kind of relationship between two words
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RelationshipKind {
    /// The words mean the same thing
    Synonym,

    /// The words mean opposite things
    Antonym,
}

impl RelationshipKind {
    /// Both kinds, in linking order
    pub const ALL: [RelationshipKind; 2] = [RelationshipKind::Synonym, RelationshipKind::Antonym];

    /// Get the kind name as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::Synonym => "synonym",
            RelationshipKind::Antonym => "antonym",
        }
    }

    /// Parse a kind name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "synonym" => Some(RelationshipKind::Synonym),
            "antonym" => Some(RelationshipKind::Antonym),
            _ => None,
        }
    }
}

impl std::str::FromStr for RelationshipKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relationship kind: {}", s))
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when constructing a relationship
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationshipError {
    /// Both endpoints are the same word
    #[error("A word cannot be related to itself: {0}")]
    Reflexive(WordId),
}

/// An undirected relationship between two distinct words
///
/// The pair is always held in canonical orientation, `first < second`, so
/// `(a, b)` and `(b, a)` construct the same value. Uniqueness in a store is
/// on `(first, second, kind)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordRelationship {
    first: WordId,
    second: WordId,
    kind: RelationshipKind,
    created_at: u64,
}

impl WordRelationship {
    /// Create a relationship, canonicalizing the pair
    ///
    /// # Errors
    ///
    /// Returns [`RelationshipError::Reflexive`] if `a == b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbank_domain::{RelationshipKind, WordId, WordRelationship};
    ///
    /// let a = WordId::from_value(1);
    /// let b = WordId::from_value(2);
    /// let forward = WordRelationship::new(a, b, RelationshipKind::Synonym, 0).unwrap();
    /// let backward = WordRelationship::new(b, a, RelationshipKind::Synonym, 0).unwrap();
    /// assert_eq!(forward, backward);
    /// assert!(WordRelationship::new(a, a, RelationshipKind::Synonym, 0).is_err());
    /// ```
    pub fn new(
        a: WordId,
        b: WordId,
        kind: RelationshipKind,
        created_at: u64,
    ) -> Result<Self, RelationshipError> {
        if a == b {
            return Err(RelationshipError::Reflexive(a));
        }
        let (first, second) = if a < b { (a, b) } else { (b, a) };
        Ok(Self {
            first,
            second,
            kind,
            created_at,
        })
    }

    /// Lower endpoint of the canonical pair
    pub fn first(&self) -> WordId {
        self.first
    }

    /// Higher endpoint of the canonical pair
    pub fn second(&self) -> WordId {
        self.second
    }

    /// Relationship kind
    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    /// When this relationship was established (Unix seconds)
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    /// Whether `id` is one of the endpoints
    pub fn involves(&self, id: WordId) -> bool {
        self.first == id || self.second == id
    }

    /// The endpoint opposite `id`, or `None` if `id` is not an endpoint
    pub fn other(&self, id: WordId) -> Option<WordId> {
        if self.first == id {
            Some(self.second)
        } else if self.second == id {
            Some(self.first)
        } else {
            None
        }
    }

    /// Identity of the edge, ignoring creation time
    pub fn key(&self) -> (WordId, WordId, RelationshipKind) {
        (self.first, self.second, self.kind)
    }
}
