//! Import command implementation.

use super::now;
use crate::cli::ImportArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use serde::Deserialize;
use std::fs;
use std::io::{self, Read};
use tracing::{debug, info};
use wordbank_domain::traits::WordStore;
use wordbank_domain::{Difficulty, Word};
use wordbank_store::SqliteStore;

/// Execute the import command.
pub fn execute_import(args: ImportArgs, store: &mut SqliteStore, formatter: &Formatter) -> Result<()> {
    // Read definitions from file or stdin
    let json_data = if args.stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else if let Some(file_path) = args.file {
        fs::read_to_string(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let definitions: Vec<WordDefinition> = serde_json::from_str(&json_data)?;
    let (created, skipped) = import_words(definitions, args.list.as_deref(), store)?;

    println!("{}", formatter.import_result(created, skipped));
    Ok(())
}

/// Word definition as found in seed files.
#[derive(Debug, Deserialize)]
pub struct WordDefinition {
    term: String,
    #[serde(default)]
    word_type: String,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default, alias = "meaning")]
    meaning_english: String,
    #[serde(default)]
    meaning_urdu: String,
    #[serde(default, alias = "example")]
    example_sentence: String,
    #[serde(default)]
    synonyms: String,
    #[serde(default)]
    antonyms: String,
    #[serde(default)]
    pronunciation: String,
    #[serde(default)]
    etymology: String,
    #[serde(default)]
    frequency_rank: Option<u32>,
    #[serde(default)]
    word_lists: Vec<String>,
}

impl WordDefinition {
    fn into_word(self, extra_list: Option<&str>, created_at: u64) -> Result<Word> {
        let term = self.term.trim();
        if term.is_empty() {
            return Err(CliError::InvalidInput("Word term cannot be empty".to_string()));
        }

        let difficulty = match self.difficulty.as_deref() {
            None | Some("") => None,
            Some(level) => Some(
                level
                    .parse::<Difficulty>()
                    .map_err(|e| CliError::InvalidInput(format!("{} (word '{}')", e, term)))?,
            ),
        };

        let mut word = Word::new(term, self.word_type, created_at)
            .with_synonyms(self.synonyms)
            .with_antonyms(self.antonyms);
        word.difficulty = difficulty;
        word.meaning_english = self.meaning_english;
        word.meaning_urdu = self.meaning_urdu;
        word.example_sentence = self.example_sentence;
        word.pronunciation = self.pronunciation;
        word.etymology = self.etymology;
        word.frequency_rank = self.frequency_rank;
        word.word_lists = self.word_lists;
        if let Some(list) = extra_list {
            if !word.word_lists.iter().any(|l| l == list) {
                word.word_lists.push(list.to_string());
            }
        }

        Ok(word)
    }
}

/// Insert each definition whose term is not stored yet.
///
/// Existing terms (compared case-insensitively) are skipped, never updated.
/// Returns `(created, skipped)`.
pub fn import_words(
    definitions: Vec<WordDefinition>,
    extra_list: Option<&str>,
    store: &mut SqliteStore,
) -> Result<(usize, usize)> {
    let created_at = now();
    let mut created = 0;
    let mut skipped = 0;

    for definition in definitions {
        let word = definition.into_word(extra_list, created_at)?;
        if store.find_by_term(&word.term)?.is_some() {
            debug!("Skipping existing word '{}'", word.term);
            skipped += 1;
            continue;
        }
        store.insert_word(word)?;
        created += 1;
    }

    info!("Import complete: {} created, {} skipped", created, skipped);
    Ok((created, skipped))
}
