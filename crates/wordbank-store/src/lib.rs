//! Wordbank Storage Layer
//!
//! Implements the `WordStore` and `RelationshipStore` traits on SQLite.
//!
//! # Architecture
//!
//! - `words` holds the word records; `term_key` (the folded term) is unique,
//!   which makes case-insensitive lookup unambiguous
//! - `word_list_members` maps words to named word lists
//! - `word_relationships` holds canonical edges; the primary key is
//!   `(first_word_id, second_word_id, kind)` and a CHECK constraint enforces
//!   `first_word_id < second_word_id`
//!
//! # Examples
//!
//! ```no_run
//! use wordbank_store::SqliteStore;
//!
//! let store = SqliteStore::new(":memory:").unwrap();
//! // Store is now ready for word operations
//! ```

#![warn(missing_docs)]

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::debug;
use wordbank_domain::traits::{RelationshipStore, WordQuery, WordStore};
use wordbank_domain::{
    fold_term, Difficulty, RelationshipKind, Word, WordId, WordRelationship,
};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Word not found
    #[error("Word not found: {0}")]
    NotFound(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A word with the same folded term already exists
    #[error("Duplicate word: {0}")]
    Duplicate(String),

    /// Rejected by a domain invariant
    #[error("Validation error: {0}")]
    Validation(String),
}

const WORD_COLUMNS: &str = "id, term, word_type, difficulty, meaning_english, meaning_urdu, \
     example_sentence, synonyms, antonyms, pronunciation, etymology, frequency_rank, \
     created_at, updated_at";

/// SQLite-based implementation of the word and relationship stores
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own SqliteStore instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Create a new SqliteStore with the given database path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use wordbank_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("wordbank.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        Ok(())
    }

    /// Convert WordId to bytes for storage
    fn word_id_to_bytes(id: WordId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to WordId
    fn bytes_to_word_id(bytes: &[u8]) -> Result<WordId, StoreError> {
        if bytes.len() != 16 {
            return Err(StoreError::InvalidData(format!(
                "Expected 16 bytes for WordId, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(WordId::from_value(u128::from_be_bytes(arr)))
    }

    /// Read a WordId column, reporting conversion failures as rusqlite errors
    fn column_word_id(row: &Row<'_>, idx: usize) -> rusqlite::Result<WordId> {
        let bytes: Vec<u8> = row.get(idx)?;
        Self::bytes_to_word_id(&bytes).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Blob, Box::new(e))
        })
    }

    /// Map a row selected with `WORD_COLUMNS` to a Word (without word lists)
    fn row_to_word(row: &Row<'_>) -> rusqlite::Result<Word> {
        let difficulty: Option<String> = row.get(3)?;
        let difficulty = match difficulty {
            Some(s) => Some(Difficulty::parse(&s).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    3,
                    rusqlite::types::Type::Text,
                    Box::new(StoreError::InvalidData(format!("Unknown difficulty: {}", s))),
                )
            })?),
            None => None,
        };

        Ok(Word {
            id: Self::column_word_id(row, 0)?,
            term: row.get(1)?,
            word_type: row.get(2)?,
            difficulty,
            meaning_english: row.get(4)?,
            meaning_urdu: row.get(5)?,
            example_sentence: row.get(6)?,
            synonyms: row.get(7)?,
            antonyms: row.get(8)?,
            pronunciation: row.get(9)?,
            etymology: row.get(10)?,
            frequency_rank: row.get(11)?,
            word_lists: Vec::new(),
            created_at: row.get::<_, i64>(12)? as u64,
            updated_at: row.get::<_, i64>(13)? as u64,
        })
    }

    /// Word lists a word belongs to, by name
    fn load_word_lists(&self, id: WordId) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT list_name FROM word_list_members WHERE word_id = ?1 ORDER BY list_name",
        )?;
        let lists = stmt
            .query_map(params![Self::word_id_to_bytes(id)], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(lists)
    }

    /// Attach word lists to words loaded without them
    fn with_word_lists(&self, mut words: Vec<Word>) -> Result<Vec<Word>, StoreError> {
        for word in &mut words {
            word.word_lists = self.load_word_lists(word.id)?;
        }
        Ok(words)
    }

    /// ID of the word holding `term_key`, if any
    fn id_for_key(&self, term_key: &str) -> Result<Option<WordId>, StoreError> {
        let id = self
            .conn
            .query_row(
                "SELECT id FROM words WHERE term_key = ?1",
                params![term_key],
                |row| Self::column_word_id(row, 0),
            )
            .optional()?;
        Ok(id)
    }

    /// Convert RelationshipKind to string for storage
    fn kind_to_str(kind: RelationshipKind) -> &'static str {
        kind.as_str()
    }

    /// Convert string to RelationshipKind
    fn str_to_kind(s: &str) -> Result<RelationshipKind, StoreError> {
        RelationshipKind::parse(s)
            .ok_or_else(|| StoreError::InvalidData(format!("Unknown relationship kind: {}", s)))
    }

    /// Number of stored relationships, optionally of one kind
    pub fn count_relationships(&self, kind: Option<RelationshipKind>) -> Result<usize, StoreError> {
        let count: i64 = match kind {
            Some(kind) => self.conn.query_row(
                "SELECT COUNT(*) FROM word_relationships WHERE kind = ?1",
                params![Self::kind_to_str(kind)],
                |row| row.get(0),
            )?,
            None => self
                .conn
                .query_row("SELECT COUNT(*) FROM word_relationships", [], |row| row.get(0))?,
        };
        Ok(count as usize)
    }
}

/// Current timestamp in seconds since Unix epoch
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Escape a user string for use inside a `LIKE ... ESCAPE '\'` pattern
fn like_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl WordStore for SqliteStore {
    type Error = StoreError;

    fn insert_word(&mut self, word: Word) -> Result<WordId, Self::Error> {
        let term_key = word.folded_term();
        if term_key.is_empty() {
            return Err(StoreError::Validation("Word term cannot be empty".to_string()));
        }
        if self.id_for_key(&term_key)?.is_some() {
            return Err(StoreError::Duplicate(word.term));
        }

        let id_bytes = Self::word_id_to_bytes(word.id);
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO words (id, term, term_key, word_type, difficulty, meaning_english, meaning_urdu,
                                example_sentence, synonyms, antonyms, pronunciation, etymology,
                                frequency_rank, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                &id_bytes,
                &word.term,
                &term_key,
                &word.word_type,
                word.difficulty.map(|d| d.as_str()),
                &word.meaning_english,
                &word.meaning_urdu,
                &word.example_sentence,
                &word.synonyms,
                &word.antonyms,
                &word.pronunciation,
                &word.etymology,
                word.frequency_rank,
                word.created_at as i64,
                word.updated_at as i64,
            ],
        )?;
        for list in &word.word_lists {
            tx.execute(
                "INSERT OR IGNORE INTO word_list_members (word_id, list_name) VALUES (?1, ?2)",
                params![&id_bytes, list],
            )?;
        }
        tx.commit()?;

        debug!("Inserted word '{}' ({})", word.term, word.id);
        Ok(word.id)
    }

    fn update_word(&mut self, word: &Word) -> Result<(), Self::Error> {
        let term_key = word.folded_term();
        if term_key.is_empty() {
            return Err(StoreError::Validation("Word term cannot be empty".to_string()));
        }
        if let Some(existing) = self.id_for_key(&term_key)? {
            if existing != word.id {
                return Err(StoreError::Duplicate(word.term.clone()));
            }
        }

        let id_bytes = Self::word_id_to_bytes(word.id);
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE words SET term = ?2, term_key = ?3, word_type = ?4, difficulty = ?5,
                              meaning_english = ?6, meaning_urdu = ?7, example_sentence = ?8,
                              synonyms = ?9, antonyms = ?10, pronunciation = ?11, etymology = ?12,
                              frequency_rank = ?13, updated_at = ?14
             WHERE id = ?1",
            params![
                &id_bytes,
                &word.term,
                &term_key,
                &word.word_type,
                word.difficulty.map(|d| d.as_str()),
                &word.meaning_english,
                &word.meaning_urdu,
                &word.example_sentence,
                &word.synonyms,
                &word.antonyms,
                &word.pronunciation,
                &word.etymology,
                word.frequency_rank,
                word.updated_at as i64,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(word.id.to_string()));
        }

        tx.execute(
            "DELETE FROM word_list_members WHERE word_id = ?1",
            params![&id_bytes],
        )?;
        for list in &word.word_lists {
            tx.execute(
                "INSERT OR IGNORE INTO word_list_members (word_id, list_name) VALUES (?1, ?2)",
                params![&id_bytes, list],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn get_word(&self, id: WordId) -> Result<Option<Word>, Self::Error> {
        let word = self
            .conn
            .query_row(
                &format!("SELECT {} FROM words WHERE id = ?1", WORD_COLUMNS),
                params![Self::word_id_to_bytes(id)],
                Self::row_to_word,
            )
            .optional()?;

        match word {
            Some(mut word) => {
                word.word_lists = self.load_word_lists(word.id)?;
                Ok(Some(word))
            }
            None => Ok(None),
        }
    }

    fn find_by_term(&self, term: &str) -> Result<Option<Word>, Self::Error> {
        let word = self
            .conn
            .query_row(
                &format!("SELECT {} FROM words WHERE term_key = ?1", WORD_COLUMNS),
                params![fold_term(term)],
                Self::row_to_word,
            )
            .optional()?;

        match word {
            Some(mut word) => {
                word.word_lists = self.load_word_lists(word.id)?;
                Ok(Some(word))
            }
            None => Ok(None),
        }
    }

    fn all_words(&self) -> Result<Vec<Word>, Self::Error> {
        self.query_words(&WordQuery::default())
    }

    fn query_words(&self, query: &WordQuery) -> Result<Vec<Word>, Self::Error> {
        let mut sql = format!("SELECT {} FROM words WHERE 1=1", WORD_COLUMNS);
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(text) = query.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            sql.push_str(
                " AND (term_key LIKE ? ESCAPE '\\' OR meaning_english LIKE ? ESCAPE '\\'
                       OR meaning_urdu LIKE ? ESCAPE '\\')",
            );
            params.push(Box::new(like_pattern(&fold_term(text))));
            params.push(Box::new(like_pattern(text)));
            params.push(Box::new(like_pattern(text)));
        }

        if let Some(difficulty) = query.difficulty {
            sql.push_str(" AND difficulty = ?");
            params.push(Box::new(difficulty.as_str()));
        }

        if let Some(list) = &query.word_list {
            sql.push_str(
                " AND id IN (SELECT word_id FROM word_list_members WHERE list_name = ?)",
            );
            params.push(Box::new(list.clone()));
        }

        sql.push_str(" ORDER BY term_key");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            params.push(Box::new(limit));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let words = stmt
            .query_map(&param_refs[..], Self::row_to_word)?
            .collect::<Result<Vec<_>, _>>()?;

        self.with_word_lists(words)
    }

    fn count_words(&self) -> Result<usize, Self::Error> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

impl RelationshipStore for SqliteStore {
    type Error = StoreError;

    fn upsert_relationship(
        &mut self,
        a: WordId,
        b: WordId,
        kind: RelationshipKind,
    ) -> Result<bool, Self::Error> {
        let relationship = WordRelationship::new(a, b, kind, current_timestamp())
            .map_err(|e| StoreError::Validation(e.to_string()))?;

        let inserted = self.conn.execute(
            "INSERT INTO word_relationships (first_word_id, second_word_id, kind, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(first_word_id, second_word_id, kind) DO NOTHING",
            params![
                Self::word_id_to_bytes(relationship.first()),
                Self::word_id_to_bytes(relationship.second()),
                Self::kind_to_str(kind),
                relationship.created_at() as i64,
            ],
        )?;

        Ok(inserted == 1)
    }

    fn has_relationship(&self, relationship: &WordRelationship) -> Result<bool, Self::Error> {
        let exists = self
            .conn
            .query_row(
                "SELECT 1 FROM word_relationships
                 WHERE first_word_id = ?1 AND second_word_id = ?2 AND kind = ?3",
                params![
                    Self::word_id_to_bytes(relationship.first()),
                    Self::word_id_to_bytes(relationship.second()),
                    Self::kind_to_str(relationship.kind()),
                ],
                |_| Ok(true),
            )
            .optional()?
            .unwrap_or(false);
        Ok(exists)
    }

    fn find_edges(&self, id: WordId, kind: RelationshipKind) -> Result<Vec<WordId>, Self::Error> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT CASE WHEN first_word_id = ?1 THEN second_word_id ELSE first_word_id END
             FROM word_relationships
             WHERE kind = ?2 AND (first_word_id = ?1 OR second_word_id = ?1)",
        )?;

        let ids = stmt
            .query_map(
                params![Self::word_id_to_bytes(id), Self::kind_to_str(kind)],
                |row| Self::column_word_id(row, 0),
            )?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ids)
    }

    fn relationships(
        &self,
        kind: Option<RelationshipKind>,
    ) -> Result<Vec<WordRelationship>, Self::Error> {
        let mut sql = String::from(
            "SELECT first_word_id, second_word_id, kind, created_at FROM word_relationships",
        );
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(kind) = kind {
            sql.push_str(" WHERE kind = ?");
            params.push(Box::new(Self::kind_to_str(kind)));
        }
        sql.push_str(" ORDER BY created_at DESC, rowid DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt
            .query_map(&param_refs[..], |row| {
                let first = Self::column_word_id(row, 0)?;
                let second = Self::column_word_id(row, 1)?;
                let kind: String = row.get(2)?;
                let created_at: i64 = row.get(3)?;
                Ok((first, second, kind, created_at as u64))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(first, second, kind, created_at)| {
                let kind = Self::str_to_kind(&kind)?;
                WordRelationship::new(first, second, kind, created_at)
                    .map_err(|e| StoreError::InvalidData(e.to_string()))
            })
            .collect()
    }
}
