//! Direct relationship administration.

use super::word::find_word;
use crate::cli::{KindArg, RelateArgs};
use crate::error::Result;
use crate::output::{Formatter, RelationshipRow};
use tracing::warn;
use wordbank_domain::traits::{RelationshipStore, WordStore};
use wordbank_domain::{RelationshipKind, WordId};
use wordbank_store::SqliteStore;

/// Execute the relate command.
///
/// Returns whether a new relationship was stored.
pub fn execute_relate(args: RelateArgs, store: &mut SqliteStore, formatter: &Formatter) -> Result<bool> {
    let a = find_word(store, &args.a)?;
    let b = find_word(store, &args.b)?;
    let kind: RelationshipKind = args.kind.into();

    let created = store.upsert_relationship(a.id, b.id, kind)?;
    if created {
        println!(
            "{}",
            formatter.success(&format!("Related {} ↔ {} ({})", a.term, b.term, kind))
        );
    } else {
        println!(
            "{}",
            formatter.info(&format!("{} ↔ {} are already related ({})", a.term, b.term, kind))
        );
    }

    Ok(created)
}

/// Execute the relationships command.
pub fn execute_relationships(
    kind: Option<KindArg>,
    store: &SqliteStore,
    formatter: &Formatter,
) -> Result<Vec<RelationshipRow>> {
    let edges = store.relationships(kind.map(Into::into))?;

    let mut rows = Vec::with_capacity(edges.len());
    for edge in edges {
        rows.push(RelationshipRow {
            first: term_for(store, edge.first())?,
            second: term_for(store, edge.second())?,
            kind: edge.kind(),
        });
    }

    println!("{}", formatter.format_relationships(&rows)?);
    Ok(rows)
}

fn term_for(store: &SqliteStore, id: WordId) -> Result<String> {
    match store.get_word(id)? {
        Some(word) => Ok(word.term),
        None => {
            warn!("Relationship points at missing word {}", id);
            Ok(id.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use wordbank_domain::Word;
    use wordbank_store::StoreError;

    fn formatter() -> Formatter {
        Formatter::new(OutputFormat::Quiet, false)
    }

    fn store_with(terms: &[&str]) -> SqliteStore {
        let mut store = SqliteStore::new(":memory:").unwrap();
        for term in terms {
            store.insert_word(Word::new(*term, "adjective", 0)).unwrap();
        }
        store
    }

    fn relate(a: &str, b: &str, kind: KindArg) -> RelateArgs {
        RelateArgs {
            a: a.to_string(),
            b: b.to_string(),
            kind,
        }
    }

    #[test]
    fn test_relate_is_idempotent_in_either_order() {
        let mut store = store_with(&["hot", "cold"]);

        assert!(execute_relate(relate("hot", "cold", KindArg::Antonym), &mut store, &formatter()).unwrap());
        assert!(!execute_relate(relate("Cold", "HOT", KindArg::Antonym), &mut store, &formatter()).unwrap());
        assert_eq!(store.count_relationships(None).unwrap(), 1);
    }

    #[test]
    fn test_relate_both_kinds_kept_apart() {
        let mut store = store_with(&["fast", "quick"]);

        execute_relate(relate("fast", "quick", KindArg::Synonym), &mut store, &formatter()).unwrap();
        execute_relate(relate("fast", "quick", KindArg::Antonym), &mut store, &formatter()).unwrap();

        let rows = execute_relationships(Some(KindArg::Synonym), &store, &formatter()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, RelationshipKind::Synonym);
        assert_eq!(store.count_relationships(None).unwrap(), 2);
    }

    #[test]
    fn test_relate_missing_word() {
        let mut store = store_with(&["hot"]);

        let result = execute_relate(relate("hot", "tepid", KindArg::Antonym), &mut store, &formatter());
        assert!(matches!(result, Err(CliError::NotFound(term)) if term == "tepid"));
    }

    #[test]
    fn test_relate_to_self_rejected() {
        let mut store = store_with(&["hot"]);

        let result = execute_relate(relate("hot", "Hot", KindArg::Synonym), &mut store, &formatter());
        assert!(matches!(result, Err(CliError::Store(StoreError::Validation(_)))));
        assert_eq!(store.count_relationships(None).unwrap(), 0);
    }

    #[test]
    fn test_relationships_resolve_terms() {
        let mut store = store_with(&["wary", "careful"]);
        execute_relate(relate("wary", "careful", KindArg::Synonym), &mut store, &formatter()).unwrap();

        let rows = execute_relationships(None, &store, &formatter()).unwrap();
        assert_eq!(rows.len(), 1);

        let mut terms = vec![rows[0].first.clone(), rows[0].second.clone()];
        terms.sort();
        assert_eq!(terms, vec!["careful", "wary"]);
    }
}
