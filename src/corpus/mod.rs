//! Corpus-side extraction: argument resolution and tag dispatch.
//!
//! The corpus source yields one [`CorpusInstance`] per annotated
//! predicate, not per sentence. [`extract_instance`] maps one instance
//! to a [`RoleSet`]; [`run_corpus`] drives a whole instance stream
//! through the [`SentenceAggregator`](aggregate::SentenceAggregator)
//! into a [`RecordSink`].

pub mod aggregate;

use crate::roles::{Role, RoleSet};
use crate::sink::RecordSink;
use crate::Result;
use aggregate::SentenceAggregator;
use serde::{Deserialize, Serialize};

/// Location of an argument within a parse tree's leaf sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgumentLoc {
    /// Contiguous half-open leaf span `[start, end)`.
    Span {
        /// First leaf index covered.
        start: usize,
        /// One past the last leaf index covered.
        end: usize,
    },
    /// A single leaf.
    Leaf(usize),
    /// An explicit leaf-index list (discontinuous argument).
    Leaves(Vec<usize>),
}

impl ArgumentLoc {
    /// Resolve this location against a leaf sequence.
    ///
    /// Returns the space-joined surface text, or `None` when the span is
    /// empty or inverted, the list is empty, or any index is out of
    /// bounds. `None` means the argument is skipped, never that the
    /// instance failed.
    #[must_use]
    pub fn resolve(&self, leaves: &[String]) -> Option<String> {
        match self {
            ArgumentLoc::Span { start, end } => {
                if start >= end || *end > leaves.len() {
                    return None;
                }
                Some(leaves[*start..*end].join(" "))
            }
            ArgumentLoc::Leaf(index) => leaves.get(*index).cloned(),
            ArgumentLoc::Leaves(indices) => {
                if indices.is_empty() {
                    return None;
                }
                let mut parts = Vec::with_capacity(indices.len());
                for &index in indices {
                    parts.push(leaves.get(index)?.as_str());
                }
                Some(parts.join(" "))
            }
        }
    }
}

/// One argument of an annotated predicate instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Argument-type tag (`ARG0`, `ARG1`, `ARGM-GOL`, ...)
    pub tag: String,
    /// Where the argument lives in the leaf sequence
    pub loc: ArgumentLoc,
}

impl Argument {
    /// Create an argument.
    #[must_use]
    pub fn new(tag: impl Into<String>, loc: ArgumentLoc) -> Self {
        Self {
            tag: tag.into(),
            loc,
        }
    }
}

/// One annotated predicate instance from the corpus source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusInstance {
    /// Terminal tokens of the sentence's parse tree, in order
    pub leaves: Vec<String>,
    /// Roleset identifier, e.g. `eat.01`
    pub roleset: String,
    /// Arguments annotated on this predicate
    pub arguments: Vec<Argument>,
}

impl CorpusInstance {
    /// The sentence key: leaf-joined surface text.
    ///
    /// Two instances belong to the same sentence exactly when this
    /// string is identical.
    #[must_use]
    pub fn sentence(&self) -> String {
        self.leaves.join(" ")
    }

    /// The predicate lemma, from the roleset identifier.
    #[must_use]
    pub fn lemma(&self) -> &str {
        lemma_from_roleset(&self.roleset)
    }
}

/// Extract the lemma from a roleset identifier: the token before the
/// first `.` separator (`"eat.01"` → `"eat"`).
#[must_use]
pub fn lemma_from_roleset(roleset: &str) -> &str {
    roleset.split('.').next().unwrap_or(roleset)
}

/// Map one annotated instance to a role set.
///
/// Each argument is resolved to surface text and filed under the role
/// [`Role::for_arg_tag`] assigns to its tag; unresolvable arguments are
/// skipped. The predicate lemma is always recorded.
#[must_use]
pub fn extract_instance(instance: &CorpusInstance) -> RoleSet {
    let mut roles = RoleSet::new();
    roles.insert(Role::Lemma, instance.lemma());
    for argument in &instance.arguments {
        let Some(text) = argument.loc.resolve(&instance.leaves) else {
            log::debug!(
                "skipping unresolvable {} argument of {}",
                argument.tag,
                instance.roleset
            );
            continue;
        };
        roles.insert(Role::for_arg_tag(&argument.tag), &text);
    }
    roles
}

/// Counts from one corpus run, for observability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Instances extracted
    pub instances: usize,
    /// Instances dropped (missing parse data or other per-item faults)
    pub dropped: usize,
    /// Records emitted to the sink
    pub records: usize,
}

/// Drive a corpus instance stream into a record sink.
///
/// Per-item faults (an `Err` item, typically missing backing parse data)
/// are logged and counted, never propagated: the run is best-effort over
/// the stream. Sink failures are cross-cutting and abort the run.
///
/// Precondition: the source iterates sentence-contiguously — all
/// instances of one sentence are adjacent. Sources that cannot
/// guarantee this must buffer per sentence before calling in.
pub fn run_corpus<I>(instances: I, sink: &mut dyn RecordSink) -> Result<RunStats>
where
    I: IntoIterator<Item = Result<CorpusInstance>>,
{
    let mut stats = RunStats::default();
    let mut aggregator = SentenceAggregator::new();

    for item in instances {
        let instance = match item {
            Ok(instance) => instance,
            Err(err) => {
                stats.dropped += 1;
                log::warn!("dropping corpus instance: {err}");
                continue;
            }
        };
        stats.instances += 1;
        let partial = extract_instance(&instance);
        if let Some(record) = aggregator.push(instance.sentence(), partial) {
            stats.records += 1;
            sink.accept(record)?;
        }
    }

    if let Some(record) = aggregator.finish() {
        stats.records += 1;
        sink.accept(record)?;
    }

    log::info!(
        "corpus run: {} instances extracted, {} dropped, {} records emitted",
        stats.instances,
        stats.dropped,
        stats.records
    );
    Ok(stats)
}
