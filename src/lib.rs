//! # thema
//!
//! Shallow semantic role extraction for Rust.
//!
//! Assigns per-sentence role records (`agent`, `lemma`, `theme`, `goal`,
//! `beneficiary`, `entities_related_to_lemma`) from two independent
//! sources:
//!
//! - **Corpus path**: gold-annotated argument-structure instances
//!   (PropBank-style predicates with argument spans over a parse tree's
//!   leaves), streamed through a sentence aggregator.
//! - **Dependency path**: dependency-parsed sentences analyzed with
//!   subject-of-verb heuristics, one role set per predicate.
//!
//! ## Quick Start — Dependency Path
//!
//! ```rust
//! use thema::{extract_parse, DepParse, DepRel, Pos, Role, Token};
//!
//! // "She eats apples" — normally produced by an external parser
//! // behind the `DependencyParser` trait.
//! let parse = DepParse::new(vec![
//!     Token::new("She", "she", Pos::Pronoun, DepRel::NominalSubject, Some(1)),
//!     Token::new("eats", "eat", Pos::Verb, DepRel::Other("root".into()), None),
//!     Token::new("apples", "apple", Pos::Noun, DepRel::DirectObject, Some(1)),
//! ]).unwrap();
//!
//! let sets = extract_parse(&parse);
//! assert_eq!(sets.len(), 1);
//! assert_eq!(sets[0].get(Role::Agent), ["she"]);
//! assert_eq!(sets[0].get(Role::Lemma), ["eat"]);
//! assert_eq!(sets[0].get(Role::Theme), ["apple"]);
//! ```
//!
//! ## Quick Start — Corpus Path
//!
//! ```rust
//! use thema::{run_corpus, Argument, ArgumentLoc, CorpusInstance, RoleRecord};
//!
//! let instance = CorpusInstance {
//!     leaves: vec!["The".into(), "dog".into(), "barked".into()],
//!     roleset: "bark.01".into(),
//!     arguments: vec![Argument::new("ARG0", ArgumentLoc::Span { start: 0, end: 2 })],
//! };
//!
//! let mut records: Vec<RoleRecord> = Vec::new();
//! let stats = run_corpus([Ok(instance)], &mut records).unwrap();
//! assert_eq!(stats.records, 1);
//! assert_eq!(records[0].sentence, "The dog barked");
//! ```
//!
//! ## Role Vocabulary
//!
//! | Role | Canonical tag | Corpus tags filed here |
//! |------|---------------|------------------------|
//! | `agent` | `ARG0` | `ARG0` |
//! | `lemma` | `V` | (roleset identifier) |
//! | `theme` | `ARG1` | `ARG1` |
//! | `goal` | `ARG2` | `ARG3`, `ARG4`, `ARGM-GOL` |
//! | `beneficiary` | `ARG3` | `ARG2` |
//! | `entities_related_to_lemma` | `ARGM` | everything else |
//!
//! The canonical tag column is a static cross-schema lookup
//! ([`Role::canonical_tag`]); the dispatch column is what extraction
//! actually uses ([`Role::for_arg_tag`]).
//!
//! ## Design Notes
//!
//! - **Best-effort streaming**: per-instance faults are logged, counted,
//!   and dropped; one malformed instance never aborts the stream.
//! - **Fresh state per call**: every extraction builds its own
//!   [`RoleSet`]; the aggregator is the only stateful component and is
//!   sequential over one ordered stream.
//! - **Collaborator seams**: parsing ([`DependencyParser`]) and
//!   persistence ([`RecordSink`]) stay outside the core.

#![warn(missing_docs)]

pub mod batch;
pub mod corpus;
pub mod dep;
mod error;
mod roles;
mod sink;
mod stopwords;

pub use corpus::aggregate::SentenceAggregator;
pub use corpus::{
    extract_instance, lemma_from_roleset, run_corpus, Argument, ArgumentLoc, CorpusInstance,
    RunStats,
};
pub use dep::extractor::{extract_parse, extract_text};
pub use dep::{DepParse, DepRel, DependencyParser, Pos, Token};
pub use error::{Error, Result};
pub use roles::{Role, RoleRecord, RoleSet};
pub use sink::{JsonlSink, RecordSink};
pub use stopwords::is_stop_word;

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use thema::prelude::*;
    //!
    //! let mut roles = RoleSet::new();
    //! roles.insert(Role::Agent, "the dog");
    //! assert_eq!(roles.get(Role::Agent), ["the dog"]);
    //! ```

    pub use crate::corpus::aggregate::SentenceAggregator;
    pub use crate::corpus::{run_corpus, Argument, ArgumentLoc, CorpusInstance};
    pub use crate::dep::extractor::{extract_parse, extract_text};
    pub use crate::dep::{DepParse, DepRel, DependencyParser, Pos, Token};
    pub use crate::error::{Error, Result};
    pub use crate::roles::{Role, RoleRecord, RoleSet};
    pub use crate::sink::RecordSink;
}
