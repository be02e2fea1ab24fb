//! Role vocabulary and per-sentence role collections.

use serde::{Deserialize, Serialize};

/// Semantic role assigned to a span of surface text.
///
/// Closed vocabulary shared by both extraction paths. Serialized labels
/// use `snake_case` and match the column names downstream storage jobs
/// expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The instigating participant of the predicate.
    Agent,
    /// The predicate lemma itself.
    Lemma,
    /// The participant affected by the predicate.
    Theme,
    /// Destination, endpoint, or target of the predicate.
    Goal,
    /// The participant the action is performed for.
    Beneficiary,
    /// Anything else syntactically attached to the predicate.
    EntitiesRelatedToLemma,
}

impl Role {
    /// All roles, in serialization order.
    pub const ALL: [Role; 6] = [
        Role::Agent,
        Role::Lemma,
        Role::Theme,
        Role::Goal,
        Role::Beneficiary,
        Role::EntitiesRelatedToLemma,
    ];

    /// Convert to the label string used in serialized records.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            Role::Agent => "agent",
            Role::Lemma => "lemma",
            Role::Theme => "theme",
            Role::Goal => "goal",
            Role::Beneficiary => "beneficiary",
            Role::EntitiesRelatedToLemma => "entities_related_to_lemma",
        }
    }

    /// Parse from a label string.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "agent" => Some(Role::Agent),
            "lemma" => Some(Role::Lemma),
            "theme" => Some(Role::Theme),
            "goal" => Some(Role::Goal),
            "beneficiary" => Some(Role::Beneficiary),
            "entities_related_to_lemma" => Some(Role::EntitiesRelatedToLemma),
            _ => None,
        }
    }

    /// Canonical argument-structure tag for this role.
    ///
    /// A static cross-schema lookup for collaborators translating between
    /// this vocabulary and PropBank-style tags. It does not participate in
    /// extraction; tag-to-role dispatch is [`Role::for_arg_tag`].
    #[must_use]
    pub fn canonical_tag(&self) -> &'static str {
        match self {
            Role::Agent => "ARG0",
            Role::Lemma => "V",
            Role::Theme => "ARG1",
            Role::Goal => "ARG2",
            Role::Beneficiary => "ARG3",
            Role::EntitiesRelatedToLemma => "ARGM",
        }
    }

    /// Map a corpus argument tag to the role its text is filed under.
    ///
    /// Unrecognized tags, including all `ARGM-*` modifiers except
    /// `ARGM-GOL`, land in the [`Role::EntitiesRelatedToLemma`] bucket.
    #[must_use]
    pub fn for_arg_tag(tag: &str) -> Role {
        match tag {
            "ARG0" => Role::Agent,
            "ARG1" => Role::Theme,
            "ARG2" => Role::Beneficiary,
            "ARG3" | "ARG4" => Role::Goal,
            "ARGM-GOL" => Role::Goal,
            _ => Role::EntitiesRelatedToLemma,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Per-predicate-occurrence bundle of role to surface-text collections.
///
/// Entries are lower-cased on insertion and deduplicated
/// case-insensitively; first-seen order is preserved. Punctuation-only
/// spans are rejected. Every extraction call constructs its own fresh
/// `RoleSet` — there is no shared template to leak state between
/// sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    agent: Vec<String>,
    lemma: Vec<String>,
    theme: Vec<String>,
    goal: Vec<String>,
    beneficiary: Vec<String>,
    entities_related_to_lemma: Vec<String>,
}

impl RoleSet {
    /// Create an empty role set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert surface text under a role.
    ///
    /// The text is trimmed and lower-cased. Returns `false` without
    /// inserting when the normalized text is empty, contains no
    /// alphanumeric character, or is already present under the role.
    pub fn insert(&mut self, role: Role, text: &str) -> bool {
        let normalized = text.trim().to_lowercase();
        if !normalized.chars().any(char::is_alphanumeric) {
            return false;
        }
        let entries = self.entries_mut(role);
        if entries.iter().any(|e| *e == normalized) {
            return false;
        }
        entries.push(normalized);
        true
    }

    /// Entries recorded under a role, in first-seen order.
    #[must_use]
    pub fn get(&self, role: Role) -> &[String] {
        match role {
            Role::Agent => &self.agent,
            Role::Lemma => &self.lemma,
            Role::Theme => &self.theme,
            Role::Goal => &self.goal,
            Role::Beneficiary => &self.beneficiary,
            Role::EntitiesRelatedToLemma => &self.entities_related_to_lemma,
        }
    }

    /// Iterate over all roles and their entries.
    pub fn iter(&self) -> impl Iterator<Item = (Role, &[String])> {
        Role::ALL.iter().map(move |&role| (role, self.get(role)))
    }

    /// Merge another role set into this one (set union per role).
    ///
    /// Insertion goes through [`RoleSet::insert`], so the dedup invariant
    /// holds after any merge.
    pub fn merge(&mut self, other: RoleSet) {
        for (role, entries) in other.iter() {
            for entry in entries {
                self.insert(role, entry);
            }
        }
    }

    /// True if no role has any entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Role::ALL.iter().all(|&role| self.get(role).is_empty())
    }

    /// Total number of entries across all roles.
    #[must_use]
    pub fn len(&self) -> usize {
        Role::ALL.iter().map(|&role| self.get(role).len()).sum()
    }

    fn entries_mut(&mut self, role: Role) -> &mut Vec<String> {
        match role {
            Role::Agent => &mut self.agent,
            Role::Lemma => &mut self.lemma,
            Role::Theme => &mut self.theme,
            Role::Goal => &mut self.goal,
            Role::Beneficiary => &mut self.beneficiary,
            Role::EntitiesRelatedToLemma => &mut self.entities_related_to_lemma,
        }
    }
}

/// A finalized, sentence-scoped role set ready for persistence.
///
/// Emitted once per sentence by the aggregator (corpus path) and never
/// revisited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRecord {
    /// The sentence text (leaf-joined on the corpus path).
    pub sentence: String,
    /// Roles extracted for this sentence.
    pub roles: RoleSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_label_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_label(role.as_label()), Some(role));
        }
        assert_eq!(Role::from_label("AGENT"), Some(Role::Agent));
        assert_eq!(Role::from_label("patient"), None);
    }

    #[test]
    fn test_canonical_tags() {
        assert_eq!(Role::Agent.canonical_tag(), "ARG0");
        assert_eq!(Role::Lemma.canonical_tag(), "V");
        assert_eq!(Role::Theme.canonical_tag(), "ARG1");
        assert_eq!(Role::Goal.canonical_tag(), "ARG2");
        assert_eq!(Role::Beneficiary.canonical_tag(), "ARG3");
        assert_eq!(Role::EntitiesRelatedToLemma.canonical_tag(), "ARGM");
    }

    #[test]
    fn test_arg_tag_dispatch() {
        assert_eq!(Role::for_arg_tag("ARG0"), Role::Agent);
        assert_eq!(Role::for_arg_tag("ARG1"), Role::Theme);
        assert_eq!(Role::for_arg_tag("ARG2"), Role::Beneficiary);
        assert_eq!(Role::for_arg_tag("ARG3"), Role::Goal);
        assert_eq!(Role::for_arg_tag("ARG4"), Role::Goal);
        assert_eq!(Role::for_arg_tag("ARGM-GOL"), Role::Goal);
        // Modifiers and unknown tags land in the default bucket.
        assert_eq!(
            Role::for_arg_tag("ARGM-TMP"),
            Role::EntitiesRelatedToLemma
        );
        assert_eq!(
            Role::for_arg_tag("ARGM-LOC"),
            Role::EntitiesRelatedToLemma
        );
        assert_eq!(Role::for_arg_tag("rel"), Role::EntitiesRelatedToLemma);
    }

    #[test]
    fn test_insert_lowercases_and_dedups() {
        let mut roles = RoleSet::new();
        assert!(roles.insert(Role::Agent, "The Dog"));
        assert!(!roles.insert(Role::Agent, "the dog"));
        assert!(!roles.insert(Role::Agent, "THE DOG"));
        assert_eq!(roles.get(Role::Agent), ["the dog"]);
    }

    #[test]
    fn test_insert_rejects_punctuation_only() {
        let mut roles = RoleSet::new();
        assert!(!roles.insert(Role::Theme, ", ."));
        assert!(!roles.insert(Role::Theme, "  "));
        assert!(!roles.insert(Role::Theme, ""));
        assert!(roles.insert(Role::Theme, "apple"));
        assert_eq!(roles.len(), 1);
    }

    #[test]
    fn test_roles_are_independent() {
        let mut roles = RoleSet::new();
        roles.insert(Role::Agent, "apple");
        roles.insert(Role::Theme, "apple");
        assert_eq!(roles.get(Role::Agent), ["apple"]);
        assert_eq!(roles.get(Role::Theme), ["apple"]);
    }

    #[test]
    fn test_merge_unions_per_role() {
        let mut left = RoleSet::new();
        left.insert(Role::Agent, "she");
        left.insert(Role::Lemma, "eat");

        let mut right = RoleSet::new();
        right.insert(Role::Agent, "She");
        right.insert(Role::Theme, "apple");

        left.merge(right);
        assert_eq!(left.get(Role::Agent), ["she"]);
        assert_eq!(left.get(Role::Lemma), ["eat"]);
        assert_eq!(left.get(Role::Theme), ["apple"]);
    }

    #[test]
    fn test_serde_shape() {
        let mut roles = RoleSet::new();
        roles.insert(Role::Agent, "she");
        let record = RoleRecord {
            sentence: "She ran".to_string(),
            roles,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sentence"], "She ran");
        assert_eq!(json["roles"]["agent"][0], "she");
        assert!(json["roles"]["theme"].as_array().unwrap().is_empty());
    }
}
