//! Wordbank Linker
//!
//! Derives the normalized relationship graph from the legacy free-text
//! synonym/antonym fields on each word.
//!
//! # Overview
//!
//! The Linker is a single offline pass over the whole word store:
//! - **Tokenize**: split each field on commas, trim, drop empties, lower-case
//! - **Resolve**: case-insensitive exact match against stored terms
//! - **Canonicalize**: order the pair by word id so `(a, b)` and `(b, a)` collapse
//! - **Insert if absent**: idempotent, so reruns are always safe
//!
//! Unresolved tokens and self-references are reported, never fatal. The
//! linker is additive: it does not remove edges whose source text changed.
//!
//! # Usage
//!
//! ```no_run
//! use wordbank_linker::{Linker, LinkerConfig};
//! use wordbank_store::SqliteStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = SqliteStore::new("wordbank.db")?;
//!
//! // Preview first
//! let preview = Linker::new(LinkerConfig::dry_run()).run(&mut store)?;
//! for line in preview.detail_lines() {
//!     println!("{}", line);
//! }
//!
//! // Then commit
//! let report = Linker::default_config().run(&mut store)?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [linker]
//! dry_run = false
//! progress_interval = 100
//! ```

#![warn(missing_docs)]

pub mod accessors;
mod config;
mod error;
mod linker;
mod report;

pub use accessors::{antonyms_of, related_words, synonyms_of};
pub use config::LinkerConfig;
pub use error::LinkerError;
pub use linker::Linker;
pub use report::{LinkReport, LinkedPair, UnresolvedToken};
