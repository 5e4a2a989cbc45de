/// Rating ledgers: word scores per category with write-through persistence.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::storage::{LedgerStore, StorageError};
use crate::schema::category::Category;

/// A word and its score, materialised for ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedPair {
    pub word: String,
    pub score: i64,
}

impl RatedPair {
    pub fn new(word: impl Into<String>, score: i64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Scores for one category. Words without an entry score 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordScores {
    scores: FxHashMap<String, i64>,
}

impl WordScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, word: &str) -> i64 {
        self.scores.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.scores.contains_key(word)
    }

    /// Ensure `word` has an entry. Returns true if one was inserted.
    pub fn touch(&mut self, word: &str) -> bool {
        if self.scores.contains_key(word) {
            return false;
        }
        self.scores.insert(word.to_string(), 0);
        true
    }

    /// Add `delta` to the score of `word` and return the new score.
    pub fn adjust(&mut self, word: &str, delta: i64) -> i64 {
        let score = self.scores.entry(word.to_string()).or_insert(0);
        *score = score.saturating_add(delta);
        *score
    }

    /// All entries as pairs, in unspecified order.
    pub fn snapshot(&self) -> Vec<RatedPair> {
        self.scores
            .iter()
            .map(|(word, score)| RatedPair::new(word.clone(), *score))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Serialise for the record named `name`.
    pub fn encode(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        ron::to_string(self)
            .map(String::into_bytes)
            .map_err(|source| StorageError::Encode {
                name: name.to_string(),
                source,
            })
    }

    /// Deserialise the record named `name`.
    pub fn decode(name: &str, bytes: &[u8]) -> Result<Self, StorageError> {
        ron::de::from_bytes(bytes).map_err(|source| StorageError::Decode {
            name: name.to_string(),
            source,
        })
    }
}

impl FromIterator<(String, i64)> for WordScores {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// The scores of every category, backed by a [`LedgerStore`].
///
/// Each mutation rewrites the affected category's record. A failed write
/// is logged and the in-memory scores stay authoritative; the next
/// mutation of that category writes the full record again.
pub struct RatingLedger {
    ledgers: FxHashMap<Category, WordScores>,
    store: Box<dyn LedgerStore>,
}

impl RatingLedger {
    /// An empty ledger that writes to `store` without reading it first.
    pub fn new(store: Box<dyn LedgerStore>) -> Self {
        Self {
            ledgers: FxHashMap::default(),
            store,
        }
    }

    /// Load every category's record from `store`. Missing records are
    /// empty ledgers; unreadable or corrupt records are logged and also
    /// treated as empty.
    pub fn open(store: Box<dyn LedgerStore>) -> Self {
        let mut ledger = Self::new(store);
        for category in Category::ALL {
            let scores = ledger.load(category).unwrap_or_else(|err| {
                warn!(error = %err, %category, "discarding unreadable ledger record");
                WordScores::default()
            });
            if !scores.is_empty() {
                info!(%category, entries = scores.len(), "loaded rating ledger");
            }
            ledger.ledgers.insert(category, scores);
        }
        ledger
    }

    fn load(&self, category: Category) -> Result<WordScores, StorageError> {
        let name = category.record_name();
        match self.store.read(name)? {
            Some(bytes) => WordScores::decode(name, &bytes),
            None => Ok(WordScores::default()),
        }
    }

    pub fn get(&self, category: Category, word: &str) -> i64 {
        self.ledgers
            .get(&category)
            .map_or(0, |scores| scores.get(word))
    }

    pub fn contains(&self, category: Category, word: &str) -> bool {
        self.ledgers
            .get(&category)
            .is_some_and(|scores| scores.contains(word))
    }

    /// Ensure `word` has an entry in `category`, persisting if it was new.
    pub fn touch(&mut self, category: Category, word: &str) {
        if self.scores_mut(category).touch(word) {
            debug!(%category, word, "first use of word");
            self.persist(category);
        }
    }

    /// Add `delta` to the score of `word` and persist the category.
    pub fn adjust(&mut self, category: Category, word: &str, delta: i64) -> i64 {
        let score = self.scores_mut(category).adjust(word, delta);
        debug!(%category, word, delta, score, "adjusted rating");
        self.persist(category);
        score
    }

    /// All entries of `category` as pairs, in unspecified order.
    pub fn snapshot(&self, category: Category) -> Vec<RatedPair> {
        self.ledgers
            .get(&category)
            .map(WordScores::snapshot)
            .unwrap_or_default()
    }

    pub fn scores(&self, category: Category) -> Option<&WordScores> {
        self.ledgers.get(&category)
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.ledgers.get(&category).map_or(true, WordScores::is_empty)
    }

    /// Write the record for `category`.
    pub fn save(&mut self, category: Category) -> Result<(), StorageError> {
        let name = category.record_name();
        let bytes = self
            .ledgers
            .get(&category)
            .map_or_else(|| WordScores::default().encode(name), |s| s.encode(name))?;
        self.store.write(name, &bytes)
    }

    /// Write the records of every rated category, stopping at the first
    /// failure.
    pub fn save_all(&mut self) -> Result<(), StorageError> {
        for category in Category::RATED {
            self.save(category)?;
        }
        Ok(())
    }

    fn persist(&mut self, category: Category) {
        if let Err(err) = self.save(category) {
            warn!(error = %err, %category, "failed to persist rating ledger");
        }
    }

    fn scores_mut(&mut self, category: Category) -> &mut WordScores {
        self.ledgers.entry(category).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    fn scores(entries: &[(&str, i64)]) -> WordScores {
        entries
            .iter()
            .map(|(word, score)| (word.to_string(), *score))
            .collect()
    }

    #[test]
    fn unknown_word_scores_zero() {
        let s = WordScores::new();
        assert_eq!(s.get("troll"), 0);
        assert!(!s.contains("troll"));
    }

    #[test]
    fn touch_is_idempotent() {
        let mut s = WordScores::new();
        assert!(s.touch("troll"));
        s.adjust("troll", 4);
        assert!(!s.touch("troll"));
        assert_eq!(s.get("troll"), 4);
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn adjust_inserts_and_accumulates() {
        let mut s = WordScores::new();
        assert_eq!(s.adjust("troll", -2), -2);
        assert_eq!(s.adjust("troll", 1), -1);
        assert_eq!(s.get("troll"), -1);
    }

    #[test]
    fn snapshot_contains_every_entry() {
        let s = scores(&[("foo", 5), ("bar", -3), ("baz", 0)]);
        let mut pairs = s.snapshot();
        pairs.sort_by(|a, b| a.word.cmp(&b.word));
        assert_eq!(
            pairs,
            vec![
                RatedPair::new("bar", -3),
                RatedPair::new("baz", 0),
                RatedPair::new("foo", 5),
            ]
        );
    }

    #[test]
    fn encode_decode_round_trip() {
        let cases = [
            scores(&[]),
            scores(&[("troll", 1)]),
            scores(&[("troll", 7), ("ogre", -12), ("giraffe", 0), ("gob lin", 3)]),
        ];
        for original in cases {
            let bytes = original.encode("nouns").unwrap();
            let decoded = WordScores::decode("nouns", &bytes).unwrap();
            assert_eq!(decoded, original);
        }
    }

    #[test]
    fn decode_garbage_fails() {
        let err = WordScores::decode("nouns", b"{\"troll\": twelve").unwrap_err();
        assert!(matches!(err, StorageError::Decode { .. }));
        assert!(err.to_string().contains("nouns"));
    }

    #[test]
    fn open_missing_records_is_empty() {
        let ledger = RatingLedger::open(Box::new(MemoryStore::new()));
        for category in Category::ALL {
            assert!(ledger.is_empty(category));
        }
    }

    #[test]
    fn adjust_writes_through() {
        let store = MemoryStore::new();
        let mut ledger = RatingLedger::open(Box::new(store.clone()));

        ledger.adjust(Category::Noun, "troll", 2);

        let bytes = store.get("nouns").unwrap();
        let persisted = WordScores::decode("nouns", &bytes).unwrap();
        assert_eq!(persisted.get("troll"), 2);
        assert!(store.get("adjectives").is_none());
    }

    #[test]
    fn touch_writes_only_new_entries() {
        let store = MemoryStore::new();
        let mut ledger = RatingLedger::open(Box::new(store.clone()));

        ledger.touch(Category::Adjective, "ugly");
        assert!(store.get("adjectives").is_some());

        // Sneak a different record in; an existing word must not rewrite it.
        store.insert("adjectives", "{}");
        ledger.touch(Category::Adjective, "ugly");
        assert_eq!(store.get("adjectives").unwrap(), b"{}");
    }

    #[test]
    fn reopen_restores_scores() {
        let store = MemoryStore::new();
        {
            let mut ledger = RatingLedger::open(Box::new(store.clone()));
            ledger.adjust(Category::Noun, "troll", 3);
            ledger.adjust(Category::Adjective, "ugly", -1);
        }
        let ledger = RatingLedger::open(Box::new(store));
        assert_eq!(ledger.get(Category::Noun, "troll"), 3);
        assert_eq!(ledger.get(Category::Adjective, "ugly"), -1);
        assert_eq!(ledger.get(Category::Adjective, "tall"), 0);
    }

    #[test]
    fn corrupt_record_is_empty_ledger() {
        let store = MemoryStore::new();
        store.insert("nouns", "not ron at all {{{");
        store.insert("adjectives", "{\"ugly\":2}");

        let ledger = RatingLedger::open(Box::new(store));
        assert!(ledger.is_empty(Category::Noun));
        assert_eq!(ledger.get(Category::Adjective, "ugly"), 2);
    }

    #[test]
    fn save_all_writes_empty_rated_records() {
        let store = MemoryStore::new();
        let mut ledger = RatingLedger::new(Box::new(store.clone()));
        ledger.save_all().unwrap();
        assert_eq!(store.len(), 2);
        let nouns = WordScores::decode("nouns", &store.get("nouns").unwrap()).unwrap();
        assert!(nouns.is_empty());
    }
}
