//! Subject-of-verb heuristics mapping a dependency parse to role sets.
//!
//! The trigger is a token whose relation is `nsubj` and whose head is a
//! verb. Each trigger yields one independent [`RoleSet`] built from the
//! verb's immediate children:
//!
//! | Child relation | Role |
//! |----------------|------|
//! | `dobj` | theme |
//! | `dative` | beneficiary |
//! | `prep` → its `pobj` | goal |
//! | anything else (non-punctuation, non-stop-word) | entities_related_to_lemma |
//!
//! This is a heuristic pass, not a trained labeler: it reads one tree
//! level below the verb and nothing else.

use crate::roles::{Role, RoleSet};
use crate::stopwords::is_stop_word;
use crate::{DepParse, DepRel, DependencyParser, Pos, Result};

/// Extract role sets from a dependency parse, one per verbal predicate.
///
/// A parse with no subject-of-verb trigger yields an empty vector, never
/// a vector containing an empty set. Triggers are independent; their
/// role sets are not merged.
#[must_use]
pub fn extract_parse(parse: &DepParse) -> Vec<RoleSet> {
    let mut out = Vec::new();

    for subject in parse.tokens() {
        if subject.rel != DepRel::NominalSubject {
            continue;
        }
        let Some(head_ix) = subject.head else {
            continue;
        };
        let head = parse.token(head_ix);
        if head.pos != Pos::Verb {
            continue;
        }

        let mut roles = RoleSet::new();
        roles.insert(Role::Agent, &subject.text);
        roles.insert(Role::Lemma, &head.lemma);

        for &child_ix in parse.children(head_ix) {
            let child = parse.token(child_ix);
            match &child.rel {
                // The subject is the agent, already recorded.
                DepRel::NominalSubject => {}
                DepRel::DirectObject => {
                    roles.insert(Role::Theme, &child.text);
                }
                DepRel::Dative => {
                    roles.insert(Role::Beneficiary, &child.text);
                }
                DepRel::Preposition => {
                    // One level down: the preposition's own object is the
                    // goal. A preposition without a resolvable object
                    // contributes nothing.
                    for &obj_ix in parse.children(child_ix) {
                        let obj = parse.token(obj_ix);
                        if obj.rel == DepRel::PrepositionalObject {
                            roles.insert(Role::Goal, &obj.text);
                        }
                    }
                }
                _ => {
                    if child.is_punct {
                        continue;
                    }
                    if is_stop_word(&child.text.to_lowercase()) {
                        continue;
                    }
                    // Verbal children contribute their lemma, everything
                    // else its surface text.
                    let value = if child.pos == Pos::Verb {
                        &child.lemma
                    } else {
                        &child.text
                    };
                    roles.insert(Role::EntitiesRelatedToLemma, value);
                }
            }
        }

        out.push(roles);
    }

    out
}

/// Parse a sentence with the given collaborator and extract role sets.
///
/// Empty or all-whitespace input is a valid zero-result sentence: the
/// parser is not invoked. Parser failures propagate; callers processing
/// a stream contain them per item.
pub fn extract_text<P>(parser: &P, text: &str) -> Result<Vec<RoleSet>>
where
    P: DependencyParser + ?Sized,
{
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parse = parser.parse(text)?;
    Ok(extract_parse(&parse))
}
