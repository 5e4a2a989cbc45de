/// The insult engine: corpora, rating ledger, last-used tracking and the
/// selection strategies wired together behind `generate` and `rate`.

use parking_lot::{Mutex, MutexGuard};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::config::EngineConfig;
use crate::core::composer::{format_insult, LastUsedTable};
use crate::core::corpus::{Corpora, CorpusStats, WordCorpus};
use crate::core::ledger::{RatedPair, RatingLedger};
use crate::core::selection::{self, SelectionError};
use crate::core::storage::{FileStore, LedgerStore, MemoryStore, StorageError};
use crate::schema::category::Category;
use crate::schema::pair::WordPair;
use crate::schema::scope::{Scope, ScopeMode};
use crate::schema::strategy::{Strategy, Tier};

/// Failures surfaced to the command layer. The `Display` text of each
/// variant is the message shown to users.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No rated insults")]
    NoRatedEntries,
    #[error("No {0} insults")]
    NoMatchingTier(Tier),
    #[error("No previous insult")]
    NoPreviousInsult,
    #[error("Not enough valid words")]
    EmptyCorpus,
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<SelectionError> for EngineError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::NoRatedEntries => Self::NoRatedEntries,
            SelectionError::NoMatchingTier(tier) => Self::NoMatchingTier(tier),
            SelectionError::EmptyCorpus => Self::EmptyCorpus,
        }
    }
}

/// Generates insults and records ratings. Built via `InsultEngine::builder()`.
pub struct InsultEngine {
    corpora: Corpora,
    ledger: RatingLedger,
    last_used: LastUsedTable,
    scope_mode: ScopeMode,
    rng: StdRng,
}

/// Builder for constructing an `InsultEngine`.
pub struct InsultEngineBuilder {
    words_dir: Option<PathBuf>,
    corpora: Vec<(Category, WordCorpus)>,
    store: Option<Box<dyn LedgerStore>>,
    scope_mode: ScopeMode,
    seed: Option<u64>,
}

impl InsultEngine {
    pub fn builder() -> InsultEngineBuilder {
        InsultEngineBuilder {
            words_dir: None,
            corpora: Vec::new(),
            store: None,
            scope_mode: ScopeMode::default(),
            seed: None,
        }
    }

    /// Word lists from `config.words_dir`, ratings persisted as files in
    /// `config.state_dir`.
    pub fn from_config(config: &EngineConfig) -> InsultEngine {
        let mut builder = Self::builder()
            .words_dir(config.words_dir.clone())
            .with_store(FileStore::new(config.state_dir.clone()))
            .scope_mode(config.scope_mode);
        if let Some(seed) = config.seed {
            builder = builder.seed(seed);
        }
        builder.build()
    }

    /// Choose a pair with `strategy` and compose an insult aimed at `target`.
    pub fn generate(
        &mut self,
        strategy: Strategy,
        target: &str,
        scope: &Scope,
    ) -> Result<String, EngineError> {
        let pair = self.select(strategy, scope)?;
        debug!(%strategy, %scope, %pair, "selected words");
        Ok(self.compose(target, &pair.adjective, &pair.noun, scope))
    }

    /// Choose a pair with `strategy` without composing or recording it.
    pub fn select(&mut self, strategy: Strategy, scope: &Scope) -> Result<WordPair, EngineError> {
        let adjectives = || self.ledger.snapshot(Category::Adjective);
        let nouns = || self.ledger.snapshot(Category::Noun);

        let pair = match strategy {
            Strategy::Random => {
                selection::random_pair(&self.corpora.adjectives, &self.corpora.nouns, &mut self.rng)?
            }
            Strategy::Best => selection::best_pair(adjectives(), nouns())?,
            Strategy::Worst => selection::worst_pair(adjectives(), nouns())?,
            Strategy::Good => selection::good_pair(adjectives(), nouns(), &mut self.rng)?,
            Strategy::Bad => selection::bad_pair(adjectives(), nouns(), &mut self.rng)?,
            // A pair holding an empty word counts as no previous insult.
            Strategy::Last => self
                .last_used(scope)
                .filter(|pair| !pair.adjective.is_empty() && !pair.noun.is_empty())
                .cloned()
                .ok_or(EngineError::NoPreviousInsult)?,
        };
        Ok(pair)
    }

    /// Touch both words into their ledgers, remember the pair for `scope`
    /// and format the insult with the words' current scores.
    pub fn compose(&mut self, target: &str, adjective: &str, noun: &str, scope: &Scope) -> String {
        self.ledger.touch(Category::Adjective, adjective);
        self.ledger.touch(Category::Noun, noun);

        let pair = WordPair::new(adjective, noun);
        let insult = format_insult(
            target,
            &pair,
            self.ledger.get(Category::Adjective, adjective),
            self.ledger.get(Category::Noun, noun),
        );
        self.last_used.record(self.scope_mode.resolve(scope), pair);
        insult
    }

    /// Add `delta` to the score of the last adjective and noun used in
    /// `scope`. Leaves every ledger untouched and returns
    /// `NoPreviousInsult` if nothing has been composed there yet.
    pub fn rate(&mut self, scope: &Scope, delta: i64) -> Result<(), EngineError> {
        let pair = self
            .last_used(scope)
            .cloned()
            .ok_or(EngineError::NoPreviousInsult)?;

        self.ledger.adjust(Category::Adjective, &pair.adjective, delta);
        self.ledger.adjust(Category::Noun, &pair.noun, delta);
        debug!(%scope, %pair, delta, "rated insult");
        Ok(())
    }

    pub fn stats(&self) -> CorpusStats {
        self.corpora.stats()
    }

    /// The pair most recently composed in `scope`.
    pub fn last_used(&self, scope: &Scope) -> Option<&WordPair> {
        self.last_used.get(&self.scope_mode.resolve(scope))
    }

    pub fn ledger(&self) -> &RatingLedger {
        &self.ledger
    }

    pub fn ledger_snapshot(&self, category: Category) -> Vec<RatedPair> {
        self.ledger.snapshot(category)
    }

    pub fn corpora(&self) -> &Corpora {
        &self.corpora
    }

    pub fn scope_mode(&self) -> ScopeMode {
        self.scope_mode
    }

    /// Write every rated category's record now, reporting the first failure.
    pub fn flush(&mut self) -> Result<(), EngineError> {
        self.ledger.save_all()?;
        Ok(())
    }
}

impl InsultEngineBuilder {
    /// Load word lists from `<dir>/<category>/all.txt`.
    pub fn words_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.words_dir = Some(dir.into());
        self
    }

    /// Provide a corpus directly (for testing without files). Overrides
    /// whatever `words_dir` supplies for that category.
    pub fn with_corpus(mut self, category: Category, corpus: WordCorpus) -> Self {
        self.corpora.push((category, corpus));
        self
    }

    /// Persist ratings to `store`. Without one, ratings live in memory only.
    pub fn with_store(mut self, store: impl LedgerStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    pub fn scope_mode(mut self, mode: ScopeMode) -> Self {
        self.scope_mode = mode;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> InsultEngine {
        let mut corpora = match self.words_dir {
            Some(ref dir) => Corpora::load_dir(dir),
            None => Corpora::default(),
        };
        for (category, corpus) in self.corpora {
            *corpora.get_mut(category) = corpus;
        }

        let store = self
            .store
            .unwrap_or_else(|| Box::new(MemoryStore::new()));
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        InsultEngine {
            corpora,
            ledger: RatingLedger::open(store),
            last_used: LastUsedTable::new(),
            scope_mode: self.scope_mode,
            rng,
        }
    }
}

/// An `InsultEngine` behind a single lock, for hosts that dispatch
/// messages from several workers. Clones share the same engine.
#[derive(Clone)]
pub struct SharedInsultEngine {
    inner: Arc<Mutex<InsultEngine>>,
}

impl SharedInsultEngine {
    pub fn new(engine: InsultEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn generate(
        &self,
        strategy: Strategy,
        target: &str,
        scope: &Scope,
    ) -> Result<String, EngineError> {
        self.inner.lock().generate(strategy, target, scope)
    }

    pub fn rate(&self, scope: &Scope, delta: i64) -> Result<(), EngineError> {
        self.inner.lock().rate(scope, delta)
    }

    pub fn stats(&self) -> CorpusStats {
        self.inner.lock().stats()
    }

    /// Hold the lock for a sequence of operations.
    pub fn lock(&self) -> MutexGuard<'_, InsultEngine> {
        self.inner.lock()
    }
}
