/// Engine integration tests: word lists on disk through to rated insults.

use insult_engine::core::storage::FileStore;
use insult_engine::schema::category::Category;
use insult_engine::schema::rating::Rating;
use insult_engine::schema::scope::{Scope, ScopeMode};
use insult_engine::schema::strategy::Strategy;
use insult_engine::{EngineConfig, EngineError, InsultEngine};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const WORDS_DIR: &str = "tests/fixtures/words";

fn fixture_engine(state_dir: &Path, seed: u64) -> InsultEngine {
    InsultEngine::builder()
        .seed(seed)
        .words_dir(WORDS_DIR)
        .with_store(FileStore::new(state_dir))
        .build()
}

#[test]
fn fixture_corpora_stats() {
    let dir = tempfile::tempdir().unwrap();
    let engine = fixture_engine(dir.path(), 1);
    let stats = engine.stats();
    assert_eq!(stats.nouns, 6);
    assert_eq!(stats.adjectives, 6);
    assert_eq!(stats.adverbs, 3);
    assert_eq!(stats.verbs, 0);
}

#[test]
fn random_insults_use_corpus_words() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = fixture_engine(dir.path(), 42);
    let scope = Scope::channel("general");

    let mut seen = HashSet::new();
    for _ in 0..30 {
        let insult = engine.generate(Strategy::Random, "Bob", &scope).unwrap();
        assert!(insult.starts_with("Bob is a"), "{}", insult);
        let pair = engine.last_used(&scope).unwrap().clone();
        assert!(engine.corpora().adjectives.contains(&pair.adjective));
        assert!(engine.corpora().nouns.contains(&pair.noun));
        seen.insert(pair);
    }
    assert!(seen.len() > 1, "consecutive random insults should differ");
}

#[test]
fn article_agreement_in_generated_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = fixture_engine(dir.path(), 1);
    let scope = Scope::Global;

    let ugly = engine.compose("Bob", "ugly", "troll", &scope);
    assert!(ugly.contains("is an ugly"), "{}", ugly);
    let tall = engine.compose("Bob", "tall", "troll", &scope);
    assert!(tall.contains("is a tall"), "{}", tall);
}

#[test]
fn rating_fresh_words_sets_delta() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = fixture_engine(dir.path(), 1);
    let scope = Scope::channel("general");

    engine.compose("Bob", "smelly", "weasel", &scope);
    engine.rate(&scope, Rating::Trash.delta()).unwrap();

    assert_eq!(engine.ledger().get(Category::Adjective, "smelly"), -2);
    assert_eq!(engine.ledger().get(Category::Noun, "weasel"), -2);
}

#[test]
fn ratings_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let scope = Scope::channel("general");
    {
        let mut engine = fixture_engine(dir.path(), 1);
        engine.compose("Bob", "lumpy", "turnip", &scope);
        engine.rate(&scope, Rating::Lmao.delta()).unwrap();
        engine.compose("Bob", "odious", "goblin", &scope);
        engine.rate(&scope, Rating::Down.delta()).unwrap();
    }

    let mut engine = fixture_engine(dir.path(), 2);
    assert_eq!(engine.ledger().get(Category::Adjective, "lumpy"), 2);
    assert_eq!(engine.ledger().get(Category::Noun, "goblin"), -1);

    // Last-used is not persisted.
    let err = engine.rate(&scope, 1).unwrap_err();
    assert!(matches!(err, EngineError::NoPreviousInsult));

    let best = engine.generate(Strategy::Best, "Carol", &scope).unwrap();
    assert_eq!(best, "Carol is a lumpy turnip (2,2)");
    let worst = engine.generate(Strategy::Worst, "Carol", &scope).unwrap();
    assert_eq!(worst, "Carol is an odious goblin (-1,-1)");
}

#[test]
fn good_and_bad_respect_tiers() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = fixture_engine(dir.path(), 9);
    let scope = Scope::Global;

    engine.compose("Bob", "tall", "giraffe", &scope);
    engine.rate(&scope, 2).unwrap();
    engine.compose("Bob", "ugly", "troll", &scope);
    engine.compose("Bob", "smelly", "ogre", &scope);
    engine.rate(&scope, -1).unwrap();

    let mut good_adjectives = HashSet::new();
    let mut bad_adjectives = HashSet::new();
    for _ in 0..100 {
        engine.generate(Strategy::Good, "Bob", &scope).unwrap();
        good_adjectives.insert(engine.last_used(&scope).unwrap().adjective.clone());
        engine.generate(Strategy::Bad, "Bob", &scope).unwrap();
        bad_adjectives.insert(engine.last_used(&scope).unwrap().adjective.clone());
    }

    let expected_good: HashSet<String> = ["tall", "ugly"].iter().map(|s| s.to_string()).collect();
    let expected_bad: HashSet<String> = ["ugly", "smelly"].iter().map(|s| s.to_string()).collect();
    assert_eq!(good_adjectives, expected_good);
    assert_eq!(bad_adjectives, expected_bad);
}

#[test]
fn last_repeats_within_scope_only() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = fixture_engine(dir.path(), 1);
    let zoo = Scope::channel("zoo");
    let farm = Scope::channel("farm");

    engine.compose("Bob", "tall", "giraffe", &zoo);
    let repeat = engine.generate(Strategy::Last, "Dave", &zoo).unwrap();
    assert!(repeat.contains("tall") && repeat.contains("giraffe"), "{}", repeat);

    let err = engine.generate(Strategy::Last, "Dave", &farm).unwrap_err();
    assert_eq!(err.to_string(), "No previous insult");
}

#[test]
fn from_config_global_mode() {
    let dir = tempfile::tempdir().unwrap();
    let config = EngineConfig {
        words_dir: PathBuf::from(WORDS_DIR),
        state_dir: dir.path().join("ratings"),
        scope_mode: ScopeMode::Global,
        seed: Some(5),
    };
    let mut engine = InsultEngine::from_config(&config);
    assert_eq!(engine.scope_mode(), ScopeMode::Global);

    engine
        .generate(Strategy::Random, "Bob", &Scope::channel("a"))
        .unwrap();
    engine.rate(&Scope::channel("b"), Rating::Up.delta()).unwrap();

    assert!(dir.path().join("ratings/nouns.ron").exists());
    assert!(dir.path().join("ratings/adjectives.ron").exists());
}

#[test]
fn missing_words_dir_degrades_gracefully() {
    let dir = tempfile::tempdir().unwrap();
    let mut engine = InsultEngine::builder()
        .seed(1)
        .words_dir(dir.path().join("no_words_here"))
        .build();

    assert_eq!(engine.stats().nouns, 0);
    let err = engine
        .generate(Strategy::Random, "Bob", &Scope::Global)
        .unwrap_err();
    assert!(matches!(err, EngineError::EmptyCorpus));
    let err = engine
        .generate(Strategy::Best, "Bob", &Scope::Global)
        .unwrap_err();
    assert!(matches!(err, EngineError::NoRatedEntries));
}
