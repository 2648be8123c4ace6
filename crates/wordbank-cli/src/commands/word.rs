//! Word administration: add, edit, show and search.

use super::now;
use crate::cli::{AddArgs, EditArgs, SearchArgs, WordFields};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use wordbank_domain::traits::{WordQuery, WordStore};
use wordbank_domain::Word;
use wordbank_linker::{antonyms_of, synonyms_of};
use wordbank_store::SqliteStore;

/// Execute the add command.
pub fn execute_add(args: AddArgs, store: &mut SqliteStore, formatter: &Formatter) -> Result<Word> {
    let term = args.term.trim();
    if term.is_empty() {
        return Err(CliError::InvalidInput("Word term cannot be empty".to_string()));
    }

    let mut word = Word::new(term, "", now());
    apply_fields(&mut word, args.fields);
    store.insert_word(word.clone())?;

    println!("{}", formatter.success(&format!("Added word '{}'", word.term)));
    Ok(word)
}

/// Execute the edit command.
///
/// Only the given fields change. Editing the free-text synonyms or antonyms
/// does not touch stored relationships; run `link` to pick up new mentions.
pub fn execute_edit(args: EditArgs, store: &mut SqliteStore, formatter: &Formatter) -> Result<Word> {
    let mut word = find_word(store, &args.term)?;

    if let Some(new_term) = args.rename {
        let new_term = new_term.trim();
        if new_term.is_empty() {
            return Err(CliError::InvalidInput("Word term cannot be empty".to_string()));
        }
        word.term = new_term.to_string();
    }
    apply_fields(&mut word, args.fields);
    word.updated_at = now();
    store.update_word(&word)?;

    println!("{}", formatter.success(&format!("Updated word '{}'", word.term)));
    Ok(word)
}

/// Execute the show command.
pub fn execute_show(term: &str, store: &SqliteStore, formatter: &Formatter) -> Result<()> {
    let word = find_word(store, term)?;
    let synonyms = synonyms_of(store, word.id)?;
    let antonyms = antonyms_of(store, word.id)?;

    println!("{}", formatter.format_word_detail(&word, &synonyms, &antonyms)?);
    Ok(())
}

/// Execute the search command.
pub fn execute_search(args: SearchArgs, store: &SqliteStore, formatter: &Formatter) -> Result<Vec<Word>> {
    if args.limit == Some(0) {
        return Err(CliError::InvalidInput("Limit must be greater than 0".to_string()));
    }

    let query = WordQuery {
        text: args.query.filter(|q| !q.trim().is_empty()),
        difficulty: args.difficulty.map(Into::into),
        word_list: args.list,
        limit: args.limit,
    };

    let words = store.query_words(&query)?;
    println!("{}", formatter.format_words(&words)?);
    Ok(words)
}

/// Look up a word by term, case-insensitively.
pub(crate) fn find_word(store: &SqliteStore, term: &str) -> Result<Word> {
    store
        .find_by_term(term)?
        .ok_or_else(|| CliError::NotFound(term.to_string()))
}

fn apply_fields(word: &mut Word, fields: WordFields) {
    if let Some(word_type) = fields.word_type {
        word.word_type = word_type;
    }
    if let Some(difficulty) = fields.difficulty {
        word.difficulty = Some(difficulty.into());
    }
    if let Some(meaning) = fields.meaning {
        word.meaning_english = meaning;
    }
    if let Some(urdu) = fields.urdu {
        word.meaning_urdu = urdu;
    }
    if let Some(example) = fields.example {
        word.example_sentence = example;
    }
    if let Some(synonyms) = fields.synonyms {
        word.synonyms = synonyms;
    }
    if let Some(antonyms) = fields.antonyms {
        word.antonyms = antonyms;
    }
    if let Some(pronunciation) = fields.pronunciation {
        word.pronunciation = pronunciation;
    }
    if let Some(etymology) = fields.etymology {
        word.etymology = etymology;
    }
    if let Some(rank) = fields.rank {
        word.frequency_rank = Some(rank);
    }
    if !fields.lists.is_empty() {
        word.word_lists = fields.lists;
    }
}
