//! Report produced by a Linker run

use wordbank_domain::RelationshipKind;

/// A relationship created (or, in a dry run, that would be created)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedPair {
    /// Kind of the relationship
    pub kind: RelationshipKind,

    /// Term of the word whose free text mentioned the other
    pub word: String,

    /// Term of the resolved word
    pub related: String,
}

/// A free-text token that matched no stored word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedToken {
    /// Field the token came from
    pub kind: RelationshipKind,

    /// Term of the word carrying the token
    pub word: String,

    /// The lower-cased token
    pub token: String,
}

/// Counts and details collected during one Linker run
///
/// In a dry run `links` holds the edges that would be inserted; otherwise it
/// holds the edges that were inserted. Either way the created counts equal
/// the number of entries of each kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkReport {
    /// Whether this run wrote nothing
    pub dry_run: bool,

    /// Number of words whose fields were scanned
    pub words_processed: usize,

    /// Edges created (or planned), in discovery order
    pub links: Vec<LinkedPair>,

    /// Tokens that did not resolve, in discovery order
    pub unresolved: Vec<UnresolvedToken>,

    /// Resolved mentions whose edge already existed
    pub already_linked: usize,

    /// Tokens naming the word they appear on
    pub self_references: usize,
}

impl LinkReport {
    /// Create an empty report
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Self::default()
        }
    }

    /// Record a created (or planned) edge
    pub fn record_link(&mut self, kind: RelationshipKind, word: &str, related: &str) {
        self.links.push(LinkedPair {
            kind,
            word: word.to_string(),
            related: related.to_string(),
        });
    }

    /// Record a token that matched no word
    pub fn record_unresolved(&mut self, kind: RelationshipKind, word: &str, token: &str) {
        self.unresolved.push(UnresolvedToken {
            kind,
            word: word.to_string(),
            token: token.to_string(),
        });
    }

    /// Record a resolved mention whose edge was already present
    pub fn record_existing(&mut self) {
        self.already_linked += 1;
    }

    /// Record a token that named its own word
    pub fn record_self_reference(&mut self) {
        self.self_references += 1;
    }

    /// Edges of `kind` created (or planned)
    pub fn created(&self, kind: RelationshipKind) -> usize {
        self.links.iter().filter(|link| link.kind == kind).count()
    }

    /// Synonym edges created (or planned)
    pub fn synonyms_created(&self) -> usize {
        self.created(RelationshipKind::Synonym)
    }

    /// Antonym edges created (or planned)
    pub fn antonyms_created(&self) -> usize {
        self.created(RelationshipKind::Antonym)
    }

    /// Edges created (or planned) of both kinds
    pub fn total_created(&self) -> usize {
        self.links.len()
    }

    /// Tokens that did not resolve
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }

    /// One line per planned edge and per unresolved token
    pub fn detail_lines(&self) -> Vec<String> {
        let verb = if self.dry_run { "Would create" } else { "Created" };
        let mut lines: Vec<String> = self
            .links
            .iter()
            .map(|link| format!("{} {}: {} ↔ {}", verb, link.kind, link.word, link.related))
            .collect();

        lines.extend(self.unresolved.iter().map(|miss| {
            format!(
                "{} not found: \"{}\" for word \"{}\"",
                capitalize(miss.kind.as_str()),
                miss.token,
                miss.word
            )
        }));

        lines
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let suffix = if self.dry_run { " (dry run)" } else { "" };
        let lines = vec![
            format!("Link Summary{}", suffix),
            "============".to_string(),
            format!("Words processed: {}", self.words_processed),
            format!("Synonym relationships created: {}", self.synonyms_created()),
            format!("Antonym relationships created: {}", self.antonyms_created()),
            format!("Words not found (skipped): {}", self.unresolved_count()),
            format!("Already linked: {}", self.already_linked),
            format!("Self-references skipped: {}", self.self_references),
            format!("Total relationships: {}", self.total_created()),
        ];
        lines.join("\n")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
