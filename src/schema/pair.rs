use serde::{Deserialize, Serialize};
use std::fmt;

/// The adjective and noun of one insult.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordPair {
    pub adjective: String,
    pub noun: String,
}

impl WordPair {
    pub fn new(adjective: impl Into<String>, noun: impl Into<String>) -> Self {
        Self {
            adjective: adjective.into(),
            noun: noun.into(),
        }
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.adjective, self.noun)
    }
}
