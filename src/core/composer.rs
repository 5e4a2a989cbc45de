/// Insult phrasing and per-scope "last used" tracking.

use rustc_hash::FxHashMap;

use crate::schema::pair::WordPair;
use crate::schema::scope::Scope;

/// True if the first character of `word` is an ASCII vowel, either case.
pub fn starts_with_vowel(word: &str) -> bool {
    matches!(
        word.chars().next().map(|c| c.to_ascii_lowercase()),
        Some('a' | 'e' | 'i' | 'o' | 'u')
    )
}

/// "an" before a vowel, "a" otherwise.
pub fn indefinite_article(word: &str) -> &'static str {
    if starts_with_vowel(word) {
        "an"
    } else {
        "a"
    }
}

/// `"{target} is a{n} {adjective} {noun} ({adjective_score},{noun_score})"`.
pub fn format_insult(target: &str, pair: &WordPair, adjective_score: i64, noun_score: i64) -> String {
    format!(
        "{} is {} {} {} ({},{})",
        target,
        indefinite_article(&pair.adjective),
        pair.adjective,
        pair.noun,
        adjective_score,
        noun_score
    )
}

/// The most recently composed pair for each scope.
#[derive(Debug, Clone, Default)]
pub struct LastUsedTable {
    slots: FxHashMap<Scope, WordPair>,
}

impl LastUsedTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, scope: Scope, pair: WordPair) {
        self.slots.insert(scope, pair);
    }

    pub fn get(&self, scope: &Scope) -> Option<&WordPair> {
        self.slots.get(scope)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
