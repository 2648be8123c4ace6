//! Read path: words connected to a word by a relationship kind

use crate::LinkerError;
use std::fmt::Display;
use tracing::warn;
use wordbank_domain::traits::{RelationshipStore, WordStore};
use wordbank_domain::{RelationshipKind, Word, WordId};

/// Words joined to `id` by an edge of `kind`, whichever end `id` is stored on
///
/// Recomputed from the store on every call. Results are ordered by folded
/// term for stable display.
pub fn related_words<S>(store: &S, id: WordId, kind: RelationshipKind) -> Result<Vec<Word>, LinkerError>
where
    S: WordStore + RelationshipStore,
    <S as WordStore>::Error: Display,
    <S as RelationshipStore>::Error: Display,
{
    let ids = store
        .find_edges(id, kind)
        .map_err(|e| LinkerError::Store(e.to_string()))?;

    let mut words = Vec::with_capacity(ids.len());
    for other in ids {
        match store.get_word(other).map_err(|e| LinkerError::Store(e.to_string()))? {
            Some(word) => words.push(word),
            None => warn!("Relationship from {} points at missing word {}", id, other),
        }
    }

    words.sort_by_key(|w| w.folded_term());
    Ok(words)
}

/// Synonyms of the word `id`
pub fn synonyms_of<S>(store: &S, id: WordId) -> Result<Vec<Word>, LinkerError>
where
    S: WordStore + RelationshipStore,
    <S as WordStore>::Error: Display,
    <S as RelationshipStore>::Error: Display,
{
    related_words(store, id, RelationshipKind::Synonym)
}

/// Antonyms of the word `id`
pub fn antonyms_of<S>(store: &S, id: WordId) -> Result<Vec<Word>, LinkerError>
where
    S: WordStore + RelationshipStore,
    <S as WordStore>::Error: Display,
    <S as RelationshipStore>::Error: Display,
{
    related_words(store, id, RelationshipKind::Antonym)
}
