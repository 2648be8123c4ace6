//! Word module - the vocabulary entry and its identity

use crate::RelationshipKind;
use std::fmt;

/// Unique identifier for a word based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability (roughly insertion order)
/// - 128-bit uniqueness without coordination
/// - A total order used to canonicalize relationship pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(u128);

impl WordId {
    /// Generate a new UUIDv7-based WordId
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbank_domain::WordId;
    ///
    /// let id = WordId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a WordId from a raw u128 value
    ///
    /// This is primarily for storage layer deserialization.
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a WordId from its hyphenated UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use wordbank_domain::WordId;
    ///
    /// let id = WordId::new();
    /// let parsed = WordId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid word id '{}': {}", s, e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for WordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// Difficulty level of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Everyday vocabulary
    Beginner,
    /// Common exam vocabulary
    Intermediate,
    /// Less frequent, literary vocabulary
    Advanced,
    /// Rare or specialist vocabulary
    Expert,
}

impl Difficulty {
    /// All difficulty levels, easiest first
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    /// Get the difficulty name as stored
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        }
    }

    /// Parse a difficulty level, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid difficulty: {}", s))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fold a term for case-insensitive identity and lookup.
///
/// Surrounding whitespace is not significant; inner whitespace is kept.
pub fn fold_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Split a comma-separated related-words field into trimmed, non-empty tokens.
///
/// Casing is preserved; callers fold tokens themselves when looking them up.
///
/// # Examples
///
/// ```
/// use wordbank_domain::split_related;
///
/// assert_eq!(split_related(" cautious, careful ,, "), vec!["cautious", "careful"]);
/// assert!(split_related("").is_empty());
/// ```
pub fn split_related(field: &str) -> Vec<&str> {
    field
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// A vocabulary entry
///
/// The `synonyms` and `antonyms` fields are legacy free text kept as input for
/// the linker; the relationship store is the source of truth for links.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    /// Unique identifier
    pub id: WordId,

    /// The term itself, stored with its original casing
    pub term: String,

    /// Part of speech tag (e.g. "adjective")
    pub word_type: String,

    /// Difficulty level, if classified
    pub difficulty: Option<Difficulty>,

    /// English meaning
    pub meaning_english: String,

    /// Urdu meaning
    pub meaning_urdu: String,

    /// Example sentence
    pub example_sentence: String,

    /// Comma-separated synonyms (free text)
    pub synonyms: String,

    /// Comma-separated antonyms (free text)
    pub antonyms: String,

    /// Pronunciation guide, e.g. "/ˈweri/"
    pub pronunciation: String,

    /// Etymology notes
    pub etymology: String,

    /// Word frequency ranking
    pub frequency_rank: Option<u32>,

    /// Names of the word lists this word belongs to
    pub word_lists: Vec<String>,

    /// When this word was created (Unix seconds)
    pub created_at: u64,

    /// When this word was last edited (Unix seconds)
    pub updated_at: u64,
}

impl Word {
    /// Create a new word with empty descriptive fields
    pub fn new(term: impl Into<String>, word_type: impl Into<String>, created_at: u64) -> Self {
        Self {
            id: WordId::new(),
            term: term.into(),
            word_type: word_type.into(),
            difficulty: None,
            meaning_english: String::new(),
            meaning_urdu: String::new(),
            example_sentence: String::new(),
            synonyms: String::new(),
            antonyms: String::new(),
            pronunciation: String::new(),
            etymology: String::new(),
            frequency_rank: None,
            word_lists: Vec::new(),
            created_at,
            updated_at: created_at,
        }
    }

    /// Set the free-text synonyms
    pub fn with_synonyms(mut self, synonyms: impl Into<String>) -> Self {
        self.synonyms = synonyms.into();
        self
    }

    /// Set the free-text antonyms
    pub fn with_antonyms(mut self, antonyms: impl Into<String>) -> Self {
        self.antonyms = antonyms.into();
        self
    }

    /// Set the difficulty level
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// The folded term used for case-insensitive identity
    pub fn folded_term(&self) -> String {
        fold_term(&self.term)
    }

    /// Synonym tokens from the free-text field
    pub fn synonyms_list(&self) -> Vec<&str> {
        split_related(&self.synonyms)
    }

    /// Antonym tokens from the free-text field
    pub fn antonyms_list(&self) -> Vec<&str> {
        split_related(&self.antonyms)
    }

    /// Tokens from the free-text field feeding relationships of `kind`
    pub fn related_tokens(&self, kind: RelationshipKind) -> Vec<&str> {
        match kind {
            RelationshipKind::Synonym => self.synonyms_list(),
            RelationshipKind::Antonym => self.antonyms_list(),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: WordId ordering matches u128 ordering
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            let id_a = WordId::from_value(a);
            let id_b = WordId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
        }

        /// Property: split tokens are never empty and never padded
        #[test]
        fn test_split_related_tokens_are_trimmed(field in "[a-z ,]{0,40}") {
            for token in split_related(&field) {
                prop_assert!(!token.is_empty());
                prop_assert_eq!(token, token.trim());
                prop_assert!(!token.contains(','));
            }
        }
    }
}
