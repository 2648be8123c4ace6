//! Core Linker implementation: free-text fields to relationship edges

use crate::{LinkReport, LinkerConfig, LinkerError};
use std::collections::HashSet;
use std::fmt::Display;
use tracing::{debug, info};
use wordbank_domain::traits::{RelationshipStore, WordStore};
use wordbank_domain::{RelationshipKind, Word, WordId, WordRelationship};

/// Canonical identity of an edge within one run
type EdgeKey = (WordId, WordId, RelationshipKind);

/// Relationship extractor
///
/// Reads every word's synonym and antonym free text, resolves each token to a
/// stored word by case-insensitive exact match, and inserts the canonical
/// edge if it is absent. Runs are idempotent: a second run over an unchanged
/// store creates nothing. The word store is never modified.
///
/// # Examples
///
/// ```no_run
/// use wordbank_linker::{Linker, LinkerConfig};
/// use wordbank_store::SqliteStore;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut store = SqliteStore::new("wordbank.db")?;
/// let linker = Linker::new(LinkerConfig::default());
///
/// let report = linker.run(&mut store)?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub struct Linker {
    config: LinkerConfig,
}

impl Linker {
    /// Create a new Linker with the given configuration
    pub fn new(config: LinkerConfig) -> Self {
        Self { config }
    }

    /// Create a Linker with default configuration
    pub fn default_config() -> Self {
        Self::new(LinkerConfig::default())
    }

    /// Get the active configuration
    pub fn config(&self) -> &LinkerConfig {
        &self.config
    }

    /// Run one linking pass over the whole word store
    ///
    /// In dry-run mode nothing is written; an edge is reported only if it is
    /// neither stored already nor planned earlier in the same run, so the
    /// report matches what a real run would insert.
    ///
    /// # Errors
    ///
    /// Any store failure aborts the run. Edges inserted before the failure
    /// remain valid and a rerun picks up where it left off.
    pub fn run<S>(&self, store: &mut S) -> Result<LinkReport, LinkerError>
    where
        S: WordStore + RelationshipStore,
        <S as WordStore>::Error: Display,
        <S as RelationshipStore>::Error: Display,
    {
        self.config.validate()?;

        let words = store.all_words().map_err(store_error)?;
        let total = words.len();
        let mut report = LinkReport::new(self.config.dry_run);
        let mut planned: HashSet<EdgeKey> = HashSet::new();

        if self.config.dry_run {
            info!("DRY RUN: linking {} words, no relationships will be written", total);
        } else {
            info!("Linking {} words", total);
        }

        for (i, word) in words.iter().enumerate() {
            for kind in RelationshipKind::ALL {
                for token in word.related_tokens(kind) {
                    let token = token.to_lowercase();
                    self.link_token(store, word, &token, kind, &mut planned, &mut report)?;
                }
            }

            report.words_processed += 1;
            if (i + 1) % self.config.progress_interval == 0 {
                info!("Processed {}/{} words", i + 1, total);
            }
        }

        info!(
            "Linking complete: {} synonyms, {} antonyms, {} unresolved",
            report.synonyms_created(),
            report.antonyms_created(),
            report.unresolved_count()
        );

        Ok(report)
    }

    /// Resolve one token and record the outcome
    fn link_token<S>(
        &self,
        store: &mut S,
        word: &Word,
        token: &str,
        kind: RelationshipKind,
        planned: &mut HashSet<EdgeKey>,
        report: &mut LinkReport,
    ) -> Result<(), LinkerError>
    where
        S: WordStore + RelationshipStore,
        <S as WordStore>::Error: Display,
        <S as RelationshipStore>::Error: Display,
    {
        let Some(target) = store.find_by_term(token).map_err(store_error)? else {
            debug!("{} '{}' on '{}' did not resolve", kind, token, word.term);
            report.record_unresolved(kind, &word.term, token);
            return Ok(());
        };

        let edge = match WordRelationship::new(word.id, target.id, kind, 0) {
            Ok(edge) => edge,
            Err(_) => {
                debug!("'{}' lists itself as its own {}", word.term, kind);
                report.record_self_reference();
                return Ok(());
            }
        };

        let created = if self.config.dry_run {
            !planned.contains(&edge.key())
                && !store.has_relationship(&edge).map_err(store_error)?
        } else {
            store
                .upsert_relationship(word.id, target.id, kind)
                .map_err(store_error)?
        };

        if created {
            planned.insert(edge.key());
            debug!("{}: {} ↔ {}", kind, word.term, target.term);
            report.record_link(kind, &word.term, &target.term);
        } else {
            report.record_existing();
        }

        Ok(())
    }
}

fn store_error<E: Display>(e: E) -> LinkerError {
    LinkerError::Store(e.to_string())
}
