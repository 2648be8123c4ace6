//! End-to-end linking tests against the SQLite store

use proptest::prelude::*;
use std::collections::HashSet;
use wordbank_domain::traits::{RelationshipStore, WordStore};
use wordbank_domain::{RelationshipKind, Word, WordId};
use wordbank_linker::{antonyms_of, related_words, synonyms_of, Linker, LinkerConfig};
use wordbank_store::SqliteStore;

fn store_with(words: &[(&str, &str, &str)]) -> SqliteStore {
    let mut store = SqliteStore::new(":memory:").unwrap();
    for (term, synonyms, antonyms) in words {
        let word = Word::new(*term, "adjective", 0)
            .with_synonyms(*synonyms)
            .with_antonyms(*antonyms);
        store.insert_word(word).unwrap();
    }
    store
}

fn id_of(store: &SqliteStore, term: &str) -> WordId {
    store.find_by_term(term).unwrap().unwrap().id
}

fn edge_set(store: &SqliteStore) -> HashSet<(WordId, WordId, RelationshipKind)> {
    store.relationships(None).unwrap().iter().map(|r| r.key()).collect()
}

#[test]
fn test_wary_without_careful_creates_nothing() {
    let mut store = store_with(&[("wary", "cautious, careful", "")]);

    let report = Linker::default_config().run(&mut store).unwrap();

    assert_eq!(report.total_created(), 0);
    assert_eq!(report.unresolved_count(), 2);
    assert_eq!(store.count_relationships(None).unwrap(), 0);
}

#[test]
fn test_wary_with_careful_creates_one_synonym() {
    let mut store = store_with(&[("wary", "cautious, careful", ""), ("careful", "", "")]);

    let report = Linker::default_config().run(&mut store).unwrap();

    assert_eq!(report.synonyms_created(), 1);
    assert_eq!(report.antonyms_created(), 0);
    assert_eq!(report.unresolved_count(), 1);
    assert_eq!(report.unresolved[0].token, "cautious");

    let wary = id_of(&store, "wary");
    let careful = id_of(&store, "careful");
    assert_eq!(store.find_edges(wary, RelationshipKind::Synonym).unwrap(), vec![careful]);
    assert_eq!(store.find_edges(careful, RelationshipKind::Synonym).unwrap(), vec![wary]);

    let terms: Vec<String> = synonyms_of(&store, careful).unwrap().into_iter().map(|w| w.term).collect();
    assert_eq!(terms, vec!["wary"]);
}

#[test]
fn test_second_run_creates_nothing() {
    let mut store = store_with(&[
        ("diligent", "hardworking, careful", "lazy, careless"),
        ("careful", "", "careless"),
        ("careless", "", ""),
        ("lazy", "", "diligent"),
    ]);

    let first = Linker::default_config().run(&mut store).unwrap();
    let edges_after_first = edge_set(&store);
    let second = Linker::default_config().run(&mut store).unwrap();

    assert_eq!(first.synonyms_created(), 1);
    assert_eq!(first.antonyms_created(), 3);
    assert_eq!(second.total_created(), 0);
    assert_eq!(second.already_linked, first.total_created() + first.already_linked);
    assert_eq!(edge_set(&store), edges_after_first);
}

#[test]
fn test_dry_run_matches_real_run() {
    let mut store = store_with(&[
        ("frugal", "thrifty, economical", "wasteful, extravagant"),
        ("thrifty", "frugal", ""),
        ("wasteful", "", "frugal, thrifty"),
        ("economical", "", ""),
    ]);

    let preview = Linker::new(LinkerConfig::dry_run()).run(&mut store).unwrap();
    assert_eq!(store.count_relationships(None).unwrap(), 0, "Dry run must not write");

    let real = Linker::default_config().run(&mut store).unwrap();
    assert_eq!(preview.links, real.links);
    assert_eq!(preview.unresolved, real.unresolved);
    assert_eq!(preview.already_linked, real.already_linked);
}

#[test]
fn test_dry_run_skips_existing_edges() {
    let mut store = store_with(&[("serene", "tranquil", ""), ("tranquil", "", "")]);
    Linker::default_config().run(&mut store).unwrap();

    let preview = Linker::new(LinkerConfig::dry_run()).run(&mut store).unwrap();
    assert_eq!(preview.total_created(), 0);
    assert_eq!(preview.already_linked, 1);
}

#[test]
fn test_word_store_untouched() {
    let mut store = store_with(&[("jovial", "cheerful, jolly", "gloomy"), ("gloomy", "", "jovial")]);
    let before = store.all_words().unwrap();

    Linker::default_config().run(&mut store).unwrap();

    assert_eq!(store.all_words().unwrap(), before);
}

#[test]
fn test_accessors_by_kind() {
    let mut store = store_with(&[
        ("taciturn", "quiet, reserved", "talkative"),
        ("quiet", "", ""),
        ("reserved", "", ""),
        ("talkative", "", ""),
    ]);
    Linker::default_config().run(&mut store).unwrap();

    let taciturn = id_of(&store, "taciturn");
    let synonyms: Vec<String> = synonyms_of(&store, taciturn).unwrap().into_iter().map(|w| w.term).collect();
    let antonyms: Vec<String> = antonyms_of(&store, taciturn).unwrap().into_iter().map(|w| w.term).collect();

    assert_eq!(synonyms, vec!["quiet", "reserved"]);
    assert_eq!(antonyms, vec!["talkative"]);

    let talkative = id_of(&store, "talkative");
    let back = related_words(&store, talkative, RelationshipKind::Antonym).unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].id, taciturn);
}

#[test]
fn test_edges_are_additive() {
    let mut store = store_with(&[("lucid", "clear", ""), ("clear", "", "")]);
    Linker::default_config().run(&mut store).unwrap();

    let mut lucid = store.find_by_term("lucid").unwrap().unwrap();
    lucid.synonyms = String::new();
    store.update_word(&lucid).unwrap();

    let report = Linker::default_config().run(&mut store).unwrap();
    assert_eq!(report.total_created(), 0);
    assert_eq!(store.count_relationships(None).unwrap(), 1, "Edges are not removed");
}

const VOCAB: [&str; 6] = ["alpha", "beta", "gamma", "delta", "epsilon", "zeta"];

fn field_strategy() -> impl Strategy<Value = String> {
    // Mentions of known words (in any casing) plus unknown tokens
    prop::collection::vec(
        prop_oneof![
            (0..VOCAB.len()).prop_map(|i| VOCAB[i].to_string()),
            (0..VOCAB.len()).prop_map(|i| VOCAB[i].to_uppercase()),
            "[a-z]{3,6}",
        ],
        0..4,
    )
    .prop_map(|tokens| tokens.join(", "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: linking is idempotent, symmetric, reflexive-free, and the
    /// dry run predicts exactly what the real run inserts
    #[test]
    fn test_linker_invariants(
        fields in prop::collection::vec((field_strategy(), field_strategy()), VOCAB.len())
    ) {
        let mut store = SqliteStore::new(":memory:").unwrap();
        for (term, (synonyms, antonyms)) in VOCAB.iter().zip(&fields) {
            let word = Word::new(*term, "noun", 0)
                .with_synonyms(synonyms.clone())
                .with_antonyms(antonyms.clone());
            store.insert_word(word).unwrap();
        }

        let preview = Linker::new(LinkerConfig::dry_run()).run(&mut store).unwrap();
        prop_assert_eq!(store.count_relationships(None).unwrap(), 0);

        let first = Linker::default_config().run(&mut store).unwrap();
        prop_assert_eq!(&preview.links, &first.links);
        let once = edge_set(&store);
        prop_assert_eq!(once.len(), first.total_created());

        let second = Linker::default_config().run(&mut store).unwrap();
        prop_assert_eq!(second.total_created(), 0);
        prop_assert_eq!(edge_set(&store), once);

        for word in store.all_words().unwrap() {
            for kind in RelationshipKind::ALL {
                let edges = store.find_edges(word.id, kind).unwrap();
                prop_assert!(!edges.contains(&word.id));
                for other in edges {
                    prop_assert!(store.find_edges(other, kind).unwrap().contains(&word.id));
                }
            }
        }
    }
}
