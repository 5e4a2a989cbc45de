/// Word corpora: newline-delimited word lists loaded once at startup.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use crate::schema::category::Category;

/// File name of every word list inside its category directory.
const WORD_LIST_FILE: &str = "all.txt";

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An immutable, ordered list of words for one category.
///
/// Duplicates are kept. A word list ending in a newline contributes a
/// trailing empty word, exactly as the file splits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCorpus {
    words: Vec<String>,
}

impl WordCorpus {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Split `text` on line breaks and remove every whitespace character
    /// from each resulting token.
    pub fn from_text(text: &str) -> Self {
        let words = text.split('\n').map(strip_whitespace).collect();
        Self { words }
    }

    /// Read a word list, reporting any I/O failure to the caller. Bytes
    /// that are not valid UTF-8 become U+FFFD; the rest of the list is kept.
    pub fn try_load(path: &Path) -> Result<Self, CorpusError> {
        let bytes = std::fs::read(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = text {
            warn!(path = %path.display(), "word list is not valid UTF-8, replacing bad bytes");
        }
        Ok(Self::from_text(&text))
    }

    /// Read a word list, logging a failure and falling back to an empty
    /// corpus.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(corpus) => corpus,
            Err(err) => {
                warn!(error = %err, "word list unavailable, using an empty corpus");
                Self::default()
            }
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

fn strip_whitespace(token: &str) -> String {
    token.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Location of a category's word list under `words_dir`
/// (`<words_dir>/nouns/all.txt` and so on).
pub fn word_list_path(words_dir: &Path, category: Category) -> PathBuf {
    words_dir.join(category.record_name()).join(WORD_LIST_FILE)
}

/// The word corpora for all four categories.
#[derive(Debug, Clone, Default)]
pub struct Corpora {
    pub nouns: WordCorpus,
    pub adjectives: WordCorpus,
    pub adverbs: WordCorpus,
    pub verbs: WordCorpus,
}

impl Corpora {
    /// Load every category from its word list under `words_dir`. Missing
    /// lists become empty corpora.
    pub fn load_dir(words_dir: &Path) -> Self {
        let mut corpora = Self::default();
        for category in Category::ALL {
            *corpora.get_mut(category) = WordCorpus::load(&word_list_path(words_dir, category));
        }
        let stats = corpora.stats();
        info!(
            nouns = stats.nouns,
            adjectives = stats.adjectives,
            adverbs = stats.adverbs,
            verbs = stats.verbs,
            words_dir = %words_dir.display(),
            "loaded word corpora"
        );
        corpora
    }

    pub fn get(&self, category: Category) -> &WordCorpus {
        match category {
            Category::Noun => &self.nouns,
            Category::Adjective => &self.adjectives,
            Category::Adverb => &self.adverbs,
            Category::Verb => &self.verbs,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut WordCorpus {
        match category {
            Category::Noun => &mut self.nouns,
            Category::Adjective => &mut self.adjectives,
            Category::Adverb => &mut self.adverbs,
            Category::Verb => &mut self.verbs,
        }
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            nouns: self.nouns.len(),
            adjectives: self.adjectives.len(),
            adverbs: self.adverbs.len(),
            verbs: self.verbs.len(),
        }
    }
}

/// Corpus sizes for a status display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CorpusStats {
    pub nouns: usize,
    pub adjectives: usize,
    pub adverbs: usize,
    pub verbs: usize,
}

impl fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Nouns: {}", self.nouns)?;
        writeln!(f, "Adjectives: {}", self.adjectives)?;
        writeln!(f, "Adverbs: {}", self.adverbs)?;
        write!(f, "Verbs: {}", self.verbs)
    }
}
