//! Streaming group-by-adjacent-key over corpus extraction output.

use crate::roles::{RoleRecord, RoleSet};

/// Groups consecutive (sentence, role set) pairs into one record per
/// sentence.
///
/// The corpus source yields one item per predicate instance; a sentence
/// with several predicates produces several consecutive items. The
/// aggregator merges them and emits a finished [`RoleRecord`] when the
/// sentence key changes. Emitted records are final — a key is never
/// revisited, so the input must keep each sentence's instances adjacent.
///
/// Keys compare by exact string equality of the reconstructed sentence
/// text; no normalization is applied.
#[derive(Debug, Default)]
pub struct SentenceAggregator {
    current: Option<(String, RoleSet)>,
}

impl SentenceAggregator {
    /// Create an idle aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one (sentence, partial role set) pair.
    ///
    /// Returns the previous sentence's finished record when `sentence`
    /// differs from the in-progress key, `None` otherwise.
    pub fn push(&mut self, sentence: String, partial: RoleSet) -> Option<RoleRecord> {
        match self.current.take() {
            None => {
                self.current = Some((sentence, partial));
                None
            }
            Some((key, mut roles)) if key == sentence => {
                roles.merge(partial);
                self.current = Some((key, roles));
                None
            }
            Some((key, roles)) => {
                self.current = Some((sentence, partial));
                Some(RoleRecord {
                    sentence: key,
                    roles,
                })
            }
        }
    }

    /// Flush the in-progress record at end of input, if any.
    pub fn finish(&mut self) -> Option<RoleRecord> {
        self.current
            .take()
            .map(|(sentence, roles)| RoleRecord { sentence, roles })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::Role;

    fn partial(role: Role, text: &str) -> RoleSet {
        let mut roles = RoleSet::new();
        roles.insert(role, text);
        roles
    }

    #[test]
    fn test_adjacent_keys_merge_into_one_record() {
        let mut agg = SentenceAggregator::new();
        assert!(agg
            .push("S1".to_string(), partial(Role::Agent, "she"))
            .is_none());
        assert!(agg
            .push("S1".to_string(), partial(Role::Theme, "apple"))
            .is_none());

        let record = agg.finish().unwrap();
        assert_eq!(record.sentence, "S1");
        assert_eq!(record.roles.get(Role::Agent), ["she"]);
        assert_eq!(record.roles.get(Role::Theme), ["apple"]);
        assert!(agg.finish().is_none());
    }

    #[test]
    fn test_key_change_emits_previous_record() {
        let mut agg = SentenceAggregator::new();
        agg.push("S1".to_string(), partial(Role::Agent, "she"));
        let emitted = agg
            .push("S2".to_string(), partial(Role::Agent, "he"))
            .unwrap();
        assert_eq!(emitted.sentence, "S1");
        assert_eq!(emitted.roles.get(Role::Agent), ["she"]);

        let last = agg.finish().unwrap();
        assert_eq!(last.sentence, "S2");
    }

    #[test]
    fn test_two_sentences_five_instances() {
        // Keys [S1, S1, S2, S2, S2] with single-role partials yield
        // exactly two records, in first-appearance order.
        let stream = [
            ("S1", Role::Agent, "she"),
            ("S1", Role::Lemma, "eat"),
            ("S2", Role::Agent, "he"),
            ("S2", Role::Lemma, "run"),
            ("S2", Role::Goal, "store"),
        ];

        let mut agg = SentenceAggregator::new();
        let mut records = Vec::new();
        for (key, role, text) in stream {
            if let Some(record) = agg.push(key.to_string(), partial(role, text)) {
                records.push(record);
            }
        }
        records.extend(agg.finish());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sentence, "S1");
        assert_eq!(records[0].roles.get(Role::Agent), ["she"]);
        assert_eq!(records[0].roles.get(Role::Lemma), ["eat"]);
        assert_eq!(records[1].sentence, "S2");
        assert_eq!(records[1].roles.get(Role::Agent), ["he"]);
        assert_eq!(records[1].roles.get(Role::Lemma), ["run"]);
        assert_eq!(records[1].roles.get(Role::Goal), ["store"]);
    }

    #[test]
    fn test_keys_compare_exactly() {
        // Case differs: different sentence, two records.
        let mut agg = SentenceAggregator::new();
        agg.push("The dog ran".to_string(), partial(Role::Agent, "dog"));
        let emitted = agg.push("the dog ran".to_string(), partial(Role::Agent, "dog"));
        assert!(emitted.is_some());
    }

    #[test]
    fn test_finish_when_idle_is_none() {
        let mut agg = SentenceAggregator::new();
        assert!(agg.finish().is_none());
    }
}
