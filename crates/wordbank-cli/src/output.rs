//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use wordbank_domain::{RelationshipKind, Word};
use wordbank_linker::LinkReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// A stored relationship with both endpoints resolved to terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRow {
    /// Term of the canonical first word
    pub first: String,
    /// Term of the canonical second word
    pub second: String,
    /// Relationship kind
    pub kind: RelationshipKind,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of words.
    pub fn format_words(&self, words: &[Word]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = words.iter().map(word_json).collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => Ok(self.format_words_table(words)),
            OutputFormat::Quiet => Ok(terms(words).join("\n")),
        }
    }

    fn format_words_table(&self, words: &[Word]) -> String {
        if words.is_empty() {
            return self.colorize("No words found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Term", "Type", "Difficulty", "Meaning", "Lists"]);

        for word in words {
            builder.push_record([
                word.term.clone(),
                word.word_type.clone(),
                word.difficulty.map(|d| d.to_string()).unwrap_or_default(),
                word.meaning_english.clone(),
                word.word_lists.join(", "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format one word together with its linked synonyms and antonyms.
    pub fn format_word_detail(&self, word: &Word, synonyms: &[Word], antonyms: &[Word]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let mut json = word_json(word);
                json["linked_synonyms"] = serde_json::json!(terms(synonyms));
                json["linked_antonyms"] = serde_json::json!(terms(antonyms));
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(word.term.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);

                let rows = [
                    ("Term", word.term.clone()),
                    ("Type", word.word_type.clone()),
                    ("Difficulty", word.difficulty.map(|d| d.to_string()).unwrap_or_default()),
                    ("Meaning", word.meaning_english.clone()),
                    ("Urdu", word.meaning_urdu.clone()),
                    ("Example", word.example_sentence.clone()),
                    ("Pronunciation", word.pronunciation.clone()),
                    ("Etymology", word.etymology.clone()),
                    ("Frequency rank", word.frequency_rank.map(|r| r.to_string()).unwrap_or_default()),
                    ("Lists", word.word_lists.join(", ")),
                    ("Synonyms (text)", word.synonyms.clone()),
                    ("Antonyms (text)", word.antonyms.clone()),
                    ("Linked synonyms", terms(synonyms).join(", ")),
                    ("Linked antonyms", terms(antonyms).join(", ")),
                ];
                for (field, value) in rows {
                    if !value.is_empty() {
                        builder.push_record([field.to_string(), value]);
                    }
                }

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format stored relationships.
    pub fn format_relationships(&self, rows: &[RelationshipRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = rows
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "first": r.first,
                            "second": r.second,
                            "kind": r.kind.as_str(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|r| format!("{} ↔ {} ({})", r.first, r.second, r.kind))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize("No relationships found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Word", "Related", "Kind"]);
                for row in rows {
                    builder.push_record([row.first.clone(), row.second.clone(), row.kind.to_string()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the outcome of a linker run.
    ///
    /// Dry runs list every prospective edge and unresolved token ahead of the
    /// summary; real runs list only the unresolved tokens.
    pub fn format_link_report(&self, report: &LinkReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "dry_run": report.dry_run,
                    "words_processed": report.words_processed,
                    "synonyms_created": report.synonyms_created(),
                    "antonyms_created": report.antonyms_created(),
                    "unresolved_count": report.unresolved_count(),
                    "already_linked": report.already_linked,
                    "self_references": report.self_references,
                    "links": report.links.iter().map(|l| serde_json::json!({
                        "kind": l.kind.as_str(),
                        "word": l.word,
                        "related": l.related,
                    })).collect::<Vec<_>>(),
                    "unresolved": report.unresolved.iter().map(|u| serde_json::json!({
                        "kind": u.kind.as_str(),
                        "word": u.word,
                        "token": u.token,
                    })).collect::<Vec<_>>(),
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(format!(
                "{} {} {}",
                report.synonyms_created(),
                report.antonyms_created(),
                report.unresolved_count()
            )),
            OutputFormat::Table => {
                let mut lines = Vec::new();
                let skip = if report.dry_run { 0 } else { report.total_created() };
                for line in report.detail_lines().into_iter().skip(skip) {
                    let color = if line.contains(" not found: ") { "yellow" } else { "cyan" };
                    lines.push(self.colorize(&line, color));
                }
                if !lines.is_empty() {
                    lines.push(String::new());
                }
                lines.push(report.summary());
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format import counts.
    pub fn import_result(&self, created: usize, skipped: usize) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({ "created": created, "skipped": skipped }).to_string(),
            OutputFormat::Quiet => format!("{} {}", created, skipped),
            OutputFormat::Table => self.success(&format!(
                "Imported {} word(s), skipped {} existing",
                created, skipped
            )),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn terms(words: &[Word]) -> Vec<String> {
    words.iter().map(|w| w.term.clone()).collect()
}

fn word_json(word: &Word) -> serde_json::Value {
    serde_json::json!({
        "id": word.id.to_string(),
        "term": word.term,
        "word_type": word.word_type,
        "difficulty": word.difficulty.map(|d| d.as_str()),
        "meaning_english": word.meaning_english,
        "meaning_urdu": word.meaning_urdu,
        "example_sentence": word.example_sentence,
        "synonyms": word.synonyms,
        "antonyms": word.antonyms,
        "pronunciation": word.pronunciation,
        "etymology": word.etymology,
        "frequency_rank": word.frequency_rank,
        "word_lists": word.word_lists,
        "created_at": word.created_at,
        "updated_at": word.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_word() -> Word {
        let mut word = Word::new("wary", "adjective", 1_700_000_000).with_synonyms("cautious, careful");
        word.meaning_english = "feeling or showing caution".to_string();
        word
    }

    fn sample_report(dry_run: bool) -> LinkReport {
        let mut report = LinkReport::new(dry_run);
        report.words_processed = 2;
        report.record_link(RelationshipKind::Synonym, "wary", "careful");
        report.record_unresolved(RelationshipKind::Synonym, "wary", "cautious");
        report
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_words(&[create_test_word()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["term"], "wary");
        assert_eq!(parsed[0]["synonyms"], "cautious, careful");
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_words(&[create_test_word()]).unwrap();
        assert_eq!(output, "wary");
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_words(&[create_test_word()]).unwrap();
        assert!(output.contains("Term"));
        assert!(output.contains("feeling or showing caution"));
    }

    #[test]
    fn test_empty_words() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_words(&[]).unwrap();
        assert!(output.contains("No words found"));
    }

    #[test]
    fn test_word_detail_lists_linked_words() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let careful = Word::new("careful", "adjective", 0);
        let output = formatter
            .format_word_detail(&create_test_word(), &[careful], &[])
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["linked_synonyms"][0], "careful");
        assert!(parsed["linked_antonyms"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_relationships_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let rows = vec![RelationshipRow {
            first: "wary".to_string(),
            second: "careful".to_string(),
            kind: RelationshipKind::Synonym,
        }];
        let output = formatter.format_relationships(&rows).unwrap();
        assert_eq!(output, "wary ↔ careful (synonym)");
    }

    #[test]
    fn test_dry_run_report_lists_details() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_link_report(&sample_report(true)).unwrap();
        assert!(output.contains("Would create synonym: wary ↔ careful"));
        assert!(output.contains("Synonym not found: \"cautious\" for word \"wary\""));
        assert!(output.contains("Link Summary (dry run)"));
    }

    #[test]
    fn test_real_run_report_lists_only_unresolved() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_link_report(&sample_report(false)).unwrap();
        assert!(!output.contains("Created synonym"));
        assert!(output.contains("Synonym not found"));
        assert!(output.contains("Synonym relationships created: 1"));
    }

    #[test]
    fn test_report_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_link_report(&sample_report(true)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["dry_run"], true);
        assert_eq!(parsed["synonyms_created"], 1);
        assert_eq!(parsed["unresolved"][0]["token"], "cautious");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
