//! Wordbank Domain Layer
//!
//! This crate contains the core domain model for Wordbank, a vocabulary word
//! bank. It depends only on `uuid` and defines the value objects and trait
//! interfaces that the storage, linker and CLI layers build on.
//!
//! ## Key Concepts
//!
//! - **Word**: a vocabulary entry with a unique term and descriptive metadata
//! - **WordId**: time-ordered UUIDv7 identity with a total order
//! - **Related fields**: legacy comma-separated synonym/antonym free text
//! - **WordRelationship**: a typed, undirected edge between two words,
//!   stored in canonical orientation (`first < second`)
//!
//! ## Architecture
//!
//! - Pure domain logic only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all storage interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod relationship;
pub mod traits;
pub mod word;

// Re-exports for convenience
pub use relationship::{RelationshipError, RelationshipKind, WordRelationship};
pub use word::{fold_term, split_related, Difficulty, Word, WordId};
