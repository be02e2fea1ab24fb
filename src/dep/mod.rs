//! Dependency-parse types: tokens, relation labels, and the parse arena.
//!
//! A [`DepParse`] stores its tokens in a flat arena; head links and child
//! lists are plain indices into that arena, so no token owns another.
//! Parses come from an external [`DependencyParser`] collaborator — this
//! crate analyzes trees, it does not produce them.

pub mod extractor;

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Dependency relation between a token and its governing head.
///
/// Labels follow the spaCy/ClearNLP convention (`nsubj`, `dobj`, ...).
/// Relations the heuristics never dispatch on are kept as
/// [`DepRel::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepRel {
    /// Nominal subject (`nsubj`)
    NominalSubject,
    /// Direct object (`dobj`)
    DirectObject,
    /// Dative / indirect object (`dative`)
    Dative,
    /// Prepositional modifier (`prep`)
    Preposition,
    /// Object of a preposition (`pobj`)
    PrepositionalObject,
    /// Any other relation label
    Other(String),
}

impl DepRel {
    /// Convert to the standard label string.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            DepRel::NominalSubject => "nsubj",
            DepRel::DirectObject => "dobj",
            DepRel::Dative => "dative",
            DepRel::Preposition => "prep",
            DepRel::PrepositionalObject => "pobj",
            DepRel::Other(s) => s.as_str(),
        }
    }

    /// Parse from a standard label string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "nsubj" => DepRel::NominalSubject,
            "dobj" => DepRel::DirectObject,
            "dative" | "iobj" => DepRel::Dative,
            "prep" => DepRel::Preposition,
            "pobj" => DepRel::PrepositionalObject,
            other => DepRel::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for DepRel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Coarse part-of-speech tag (UPOS-style).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pos {
    /// Verb (`VERB`)
    Verb,
    /// Noun (`NOUN`)
    Noun,
    /// Proper noun (`PROPN`)
    ProperNoun,
    /// Pronoun (`PRON`)
    Pronoun,
    /// Adposition (`ADP`)
    Adposition,
    /// Punctuation (`PUNCT`)
    Punct,
    /// Any other tag
    Other(String),
}

impl Pos {
    /// Convert to the standard UPOS label string.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            Pos::Verb => "VERB",
            Pos::Noun => "NOUN",
            Pos::ProperNoun => "PROPN",
            Pos::Pronoun => "PRON",
            Pos::Adposition => "ADP",
            Pos::Punct => "PUNCT",
            Pos::Other(s) => s.as_str(),
        }
    }

    /// Parse from a standard UPOS label string.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.to_uppercase().as_str() {
            "VERB" => Pos::Verb,
            "NOUN" => Pos::Noun,
            "PROPN" => Pos::ProperNoun,
            "PRON" => Pos::Pronoun,
            "ADP" => Pos::Adposition,
            "PUNCT" => Pos::Punct,
            other => Pos::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// One token of a dependency parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface text
    pub text: String,
    /// Lemma (base form)
    pub lemma: String,
    /// Part-of-speech tag
    pub pos: Pos,
    /// Relation to the governing head
    pub rel: DepRel,
    /// Arena index of the head; `None` for the root
    pub head: Option<usize>,
    /// Whether the token is pure punctuation
    pub is_punct: bool,
}

impl Token {
    /// Create a token. The punctuation flag is derived from the POS tag;
    /// override the field directly if the parser says otherwise.
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        pos: Pos,
        rel: DepRel,
        head: Option<usize>,
    ) -> Self {
        let is_punct = pos == Pos::Punct;
        Self {
            text: text.into(),
            lemma: lemma.into(),
            pos,
            rel,
            head,
            is_punct,
        }
    }
}

/// A dependency parse of one sentence.
///
/// Construction validates head indices and precomputes each token's
/// ordered child list (children appear in token order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepParse {
    tokens: Vec<Token>,
    children: Vec<Vec<usize>>,
}

impl DepParse {
    /// Build a parse from tokens, validating head links.
    ///
    /// Returns [`Error::InvalidInput`] if any head index is out of range
    /// or a token names itself as its own head.
    pub fn new(tokens: Vec<Token>) -> Result<Self> {
        for (i, token) in tokens.iter().enumerate() {
            match token.head {
                Some(h) if h >= tokens.len() => {
                    return Err(Error::invalid_input(format!(
                        "token {i} ({:?}) has head {h} out of range for {} tokens",
                        token.text,
                        tokens.len()
                    )));
                }
                Some(h) if h == i => {
                    return Err(Error::invalid_input(format!(
                        "token {i} ({:?}) is its own head",
                        token.text
                    )));
                }
                _ => {}
            }
        }
        let mut children = vec![Vec::new(); tokens.len()];
        for (i, token) in tokens.iter().enumerate() {
            if let Some(h) = token.head {
                children[h].push(i);
            }
        }
        Ok(Self { tokens, children })
    }

    /// All tokens, in sentence order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The token at an arena index.
    ///
    /// # Panics
    /// Panics if `index` is out of range. Indices obtained from
    /// [`DepParse::children`] or token heads are always valid.
    #[must_use]
    pub fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    /// Arena indices of a token's children, in sentence order.
    #[must_use]
    pub fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True if the parse has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// External dependency parser seam.
///
/// Implementations wrap whatever syntactic analyzer is available; the
/// extraction heuristics only need the resulting [`DepParse`].
pub trait DependencyParser {
    /// Parse one sentence into a dependency tree.
    fn parse(&self, text: &str) -> Result<DepParse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rel_label_roundtrip() {
        for label in ["nsubj", "dobj", "dative", "prep", "pobj"] {
            assert_eq!(DepRel::from_label(label).as_label(), label);
        }
        assert_eq!(
            DepRel::from_label("amod"),
            DepRel::Other("amod".to_string())
        );
        assert_eq!(DepRel::from_label("iobj"), DepRel::Dative);
    }

    #[test]
    fn test_pos_label_roundtrip() {
        for label in ["VERB", "NOUN", "PROPN", "PRON", "ADP", "PUNCT"] {
            assert_eq!(Pos::from_label(label).as_label(), label);
        }
        assert_eq!(Pos::from_label("verb"), Pos::Verb);
    }

    #[test]
    fn test_token_punct_flag_from_pos() {
        let comma = Token::new(",", ",", Pos::Punct, DepRel::Other("punct".into()), Some(0));
        assert!(comma.is_punct);
        let noun = Token::new("dog", "dog", Pos::Noun, DepRel::DirectObject, Some(0));
        assert!(!noun.is_punct);
    }

    #[test]
    fn test_parse_builds_ordered_children() {
        // "She ate apples quickly"
        let parse = DepParse::new(vec![
            Token::new("She", "she", Pos::Pronoun, DepRel::NominalSubject, Some(1)),
            Token::new("ate", "eat", Pos::Verb, DepRel::Other("root".into()), None),
            Token::new("apples", "apple", Pos::Noun, DepRel::DirectObject, Some(1)),
            Token::new(
                "quickly",
                "quickly",
                Pos::Other("ADV".into()),
                DepRel::Other("advmod".into()),
                Some(1),
            ),
        ])
        .unwrap();

        assert_eq!(parse.len(), 4);
        assert_eq!(parse.children(1), &[0, 2, 3]);
        assert!(parse.children(0).is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_heads() {
        let out_of_range = DepParse::new(vec![Token::new(
            "x",
            "x",
            Pos::Noun,
            DepRel::NominalSubject,
            Some(5),
        )]);
        assert!(matches!(out_of_range, Err(Error::InvalidInput(_))));

        let self_head = DepParse::new(vec![Token::new(
            "x",
            "x",
            Pos::Noun,
            DepRel::NominalSubject,
            Some(0),
        )]);
        assert!(matches!(self_head, Err(Error::InvalidInput(_))));
    }
}
