use serde::{Deserialize, Serialize};
use std::fmt;

/// A grammatical word class. Every category has a word corpus; every
/// category can also carry a rating ledger, though only nouns and
/// adjectives are rated by composed insults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Noun,
    Adjective,
    Adverb,
    Verb,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Noun,
        Category::Adjective,
        Category::Adverb,
        Category::Verb,
    ];

    /// Categories touched and rated by composed insults.
    pub const RATED: [Category; 2] = [Category::Noun, Category::Adjective];

    /// Name of the persisted ledger record and of the word-list directory
    /// (e.g. "nouns" for `words/nouns/all.txt`).
    pub fn record_name(&self) -> &'static str {
        match self {
            Self::Noun => "nouns",
            Self::Adjective => "adjectives",
            Self::Adverb => "adverbs",
            Self::Verb => "verbs",
        }
    }

    pub fn from_record_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.record_name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.record_name())
    }
}
