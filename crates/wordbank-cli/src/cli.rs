//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordbank_domain::{Difficulty, RelationshipKind};

/// Wordbank CLI - Manage a vocabulary word bank and its synonym/antonym graph.
#[derive(Debug, Parser)]
#[command(name = "wordbank")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Database path, overriding the profile
    #[arg(long, env = "WORDBANK_DB", global = true)]
    pub database: Option<PathBuf>,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (terms only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Derive synonym/antonym relationships from the free-text fields
    Link(LinkArgs),

    /// Import words from a JSON file (existing terms are skipped)
    Import(ImportArgs),

    /// Add a single word
    Add(AddArgs),

    /// Edit fields of an existing word
    Edit(EditArgs),

    /// Show a word with its linked synonyms and antonyms
    Show {
        /// Term to show (case-insensitive)
        term: String,
    },

    /// Search words by text, difficulty or word list
    Search(SearchArgs),

    /// Relate two words directly
    Relate(RelateArgs),

    /// List stored relationships
    Relationships {
        /// Only relationships of this kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Manage configuration profiles
    Profile(ProfileArgs),
}

/// Arguments for the link command.
#[derive(Debug, Parser)]
pub struct LinkArgs {
    /// Report what would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the import command.
#[derive(Debug, Parser)]
pub struct ImportArgs {
    /// JSON file containing an array of word definitions
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Read the JSON array from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Word list to add every imported word to
    #[arg(short, long)]
    pub list: Option<String>,
}

/// Descriptive fields shared by add and edit.
#[derive(Debug, Default, clap::Args)]
pub struct WordFields {
    /// Part of speech
    #[arg(short = 't', long = "type")]
    pub word_type: Option<String>,

    /// Difficulty level
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Meaning in English
    #[arg(short, long)]
    pub meaning: Option<String>,

    /// Meaning in Urdu
    #[arg(long)]
    pub urdu: Option<String>,

    /// Example sentence
    #[arg(short, long)]
    pub example: Option<String>,

    /// Comma-separated synonyms
    #[arg(short, long)]
    pub synonyms: Option<String>,

    /// Comma-separated antonyms
    #[arg(short, long)]
    pub antonyms: Option<String>,

    /// Pronunciation guide
    #[arg(long)]
    pub pronunciation: Option<String>,

    /// Etymology
    #[arg(long)]
    pub etymology: Option<String>,

    /// Frequency rank (1 = most common)
    #[arg(long)]
    pub rank: Option<u32>,

    /// Word lists (repeatable; replaces existing lists on edit)
    #[arg(short, long = "list")]
    pub lists: Vec<String>,
}

/// Arguments for the add command.
#[derive(Debug, Parser)]
pub struct AddArgs {
    /// The word
    pub term: String,

    #[command(flatten)]
    pub fields: WordFields,
}

/// Arguments for the edit command.
#[derive(Debug, Parser)]
pub struct EditArgs {
    /// Word to edit (case-insensitive)
    pub term: String,

    /// Rename the word
    #[arg(long)]
    pub rename: Option<String>,

    #[command(flatten)]
    pub fields: WordFields,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Text to look for in terms and meanings
    pub query: Option<String>,

    /// Filter by difficulty
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Filter by word list
    #[arg(short = 'L', long)]
    pub list: Option<String>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the relate command.
#[derive(Debug, Parser)]
pub struct RelateArgs {
    /// First word
    pub a: String,

    /// Second word
    pub b: String,

    /// Relationship kind
    #[arg(short, long, value_enum)]
    pub kind: KindArg,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set {
        /// Profile name
        name: String,
        /// SQLite database path
        #[arg(value_name = "DATABASE")]
        db_path: PathBuf,
    },

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

/// Relationship kind argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// Words with the same meaning
    Synonym,
    /// Words with opposite meanings
    Antonym,
}

/// Difficulty argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DifficultyArg {
    /// Everyday vocabulary
    Beginner,
    /// Common exam vocabulary
    Intermediate,
    /// Less frequent, literary vocabulary
    Advanced,
    /// Rare or specialist vocabulary
    Expert,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<KindArg> for RelationshipKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Synonym => RelationshipKind::Synonym,
            KindArg::Antonym => RelationshipKind::Antonym,
        }
    }
}

impl From<DifficultyArg> for Difficulty {
    fn from(difficulty: DifficultyArg) -> Self {
        match difficulty {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Advanced => Difficulty::Advanced,
            DifficultyArg::Expert => Difficulty::Expert,
        }
    }
}
