//! Link command implementation.

use crate::cli::LinkArgs;
use crate::error::Result;
use crate::output::Formatter;
use wordbank_linker::{LinkReport, Linker, LinkerConfig};
use wordbank_store::SqliteStore;

/// Execute the link command.
///
/// `--dry-run` forces a preview even when the configured linker writes.
pub fn execute_link(
    args: LinkArgs,
    config: &LinkerConfig,
    store: &mut SqliteStore,
    formatter: &Formatter,
) -> Result<LinkReport> {
    let mut config = config.clone();
    if args.dry_run {
        config.dry_run = true;
    }

    let report = Linker::new(config).run(store)?;
    println!("{}", formatter.format_link_report(&report)?);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use wordbank_domain::traits::WordStore;
    use wordbank_domain::Word;

    fn seeded_store() -> SqliteStore {
        let mut store = SqliteStore::new(":memory:").unwrap();
        store
            .insert_word(Word::new("wary", "adjective", 0).with_synonyms("cautious, careful"))
            .unwrap();
        store.insert_word(Word::new("careful", "adjective", 0)).unwrap();
        store
    }

    #[test]
    fn test_dry_run_flag_overrides_config() {
        let mut store = seeded_store();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let report = execute_link(
            LinkArgs { dry_run: true },
            &LinkerConfig::default(),
            &mut store,
            &formatter,
        )
        .unwrap();

        assert!(report.dry_run);
        assert_eq!(report.synonyms_created(), 1);
        assert_eq!(store.count_relationships(None).unwrap(), 0);
    }

    #[test]
    fn test_configured_dry_run_is_respected() {
        let mut store = seeded_store();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let report = execute_link(
            LinkArgs { dry_run: false },
            &LinkerConfig::dry_run(),
            &mut store,
            &formatter,
        )
        .unwrap();

        assert!(report.dry_run);
        assert_eq!(store.count_relationships(None).unwrap(), 0);
    }

    #[test]
    fn test_real_run_writes_edges() {
        let mut store = seeded_store();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let report = execute_link(
            LinkArgs { dry_run: false },
            &LinkerConfig::default(),
            &mut store,
            &formatter,
        )
        .unwrap();

        assert_eq!(report.unresolved_count(), 1);
        assert_eq!(store.count_relationships(None).unwrap(), 1);
    }
}
