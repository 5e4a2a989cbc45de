/// Selection strategies: choosing an adjective and a noun by rating tier.
///
/// Everything here is a pure function over corpora or ledger snapshots
/// plus a caller-supplied RNG. Ranking uses a stable sort on score alone,
/// so entries with equal scores keep whatever order the snapshot had.
/// Snapshot order comes from hash-map iteration and callers must not rely
/// on it.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::core::corpus::WordCorpus;
use crate::core::ledger::RatedPair;
use crate::schema::pair::WordPair;
use crate::schema::strategy::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No rated insults")]
    NoRatedEntries,
    #[error("No {0} insults")]
    NoMatchingTier(Tier),
    #[error("Not enough valid words")]
    EmptyCorpus,
}

/// Pick a word from `corpus` by uniformly drawn index.
pub fn random_word<'a, R: Rng + ?Sized>(corpus: &'a WordCorpus, rng: &mut R) -> Option<&'a str> {
    if corpus.is_empty() {
        return None;
    }
    corpus.get(rng.gen_range(0..corpus.len()))
}

/// Uniformly random adjective and noun from the full corpora.
pub fn random_pair<R: Rng + ?Sized>(
    adjectives: &WordCorpus,
    nouns: &WordCorpus,
    rng: &mut R,
) -> Result<WordPair, SelectionError> {
    let adjective = random_word(adjectives, rng).ok_or(SelectionError::EmptyCorpus)?;
    let noun = random_word(nouns, rng).ok_or(SelectionError::EmptyCorpus)?;
    Ok(WordPair::new(adjective, noun))
}

/// Sort highest score first.
pub fn rank_descending(pairs: &mut [RatedPair]) {
    pairs.sort_by(|a, b| b.score.cmp(&a.score));
}

/// Sort lowest score first.
pub fn rank_ascending(pairs: &mut [RatedPair]) {
    pairs.sort_by(|a, b| a.score.cmp(&b.score));
}

/// Entries with a non-negative score, highest first.
pub fn good_tier(mut pairs: Vec<RatedPair>) -> Vec<RatedPair> {
    rank_descending(&mut pairs);
    let end = pairs.iter().take_while(|p| p.score >= 0).count();
    pairs.truncate(end);
    pairs
}

/// Entries with a non-positive score, lowest first.
pub fn bad_tier(mut pairs: Vec<RatedPair>) -> Vec<RatedPair> {
    rank_ascending(&mut pairs);
    let end = pairs.iter().take_while(|p| p.score <= 0).count();
    pairs.truncate(end);
    pairs
}

fn first_word(pairs: Vec<RatedPair>) -> Option<String> {
    pairs.into_iter().next().map(|p| p.word)
}

fn ensure_rated(adjectives: &[RatedPair], nouns: &[RatedPair]) -> Result<(), SelectionError> {
    if adjectives.is_empty() || nouns.is_empty() {
        return Err(SelectionError::NoRatedEntries);
    }
    Ok(())
}

/// Highest-rated adjective and noun.
pub fn best_pair(
    mut adjectives: Vec<RatedPair>,
    mut nouns: Vec<RatedPair>,
) -> Result<WordPair, SelectionError> {
    ensure_rated(&adjectives, &nouns)?;
    rank_descending(&mut adjectives);
    rank_descending(&mut nouns);
    top_pair(adjectives, nouns)
}

/// Lowest-rated adjective and noun.
pub fn worst_pair(
    mut adjectives: Vec<RatedPair>,
    mut nouns: Vec<RatedPair>,
) -> Result<WordPair, SelectionError> {
    ensure_rated(&adjectives, &nouns)?;
    rank_ascending(&mut adjectives);
    rank_ascending(&mut nouns);
    top_pair(adjectives, nouns)
}

fn top_pair(adjectives: Vec<RatedPair>, nouns: Vec<RatedPair>) -> Result<WordPair, SelectionError> {
    match (first_word(adjectives), first_word(nouns)) {
        (Some(adjective), Some(noun)) => Ok(WordPair::new(adjective, noun)),
        _ => Err(SelectionError::NoRatedEntries),
    }
}

/// Any non-negative adjective and noun, each drawn uniformly from its tier.
pub fn good_pair<R: Rng + ?Sized>(
    adjectives: Vec<RatedPair>,
    nouns: Vec<RatedPair>,
    rng: &mut R,
) -> Result<WordPair, SelectionError> {
    ensure_rated(&adjectives, &nouns)?;
    pick_from_tiers(good_tier(adjectives), good_tier(nouns), Tier::Good, rng)
}

/// Any non-positive adjective and noun, each drawn uniformly from its tier.
pub fn bad_pair<R: Rng + ?Sized>(
    adjectives: Vec<RatedPair>,
    nouns: Vec<RatedPair>,
    rng: &mut R,
) -> Result<WordPair, SelectionError> {
    ensure_rated(&adjectives, &nouns)?;
    pick_from_tiers(bad_tier(adjectives), bad_tier(nouns), Tier::Bad, rng)
}

fn pick_from_tiers<R: Rng + ?Sized>(
    adjectives: Vec<RatedPair>,
    nouns: Vec<RatedPair>,
    tier: Tier,
    rng: &mut R,
) -> Result<WordPair, SelectionError> {
    let adjective = adjectives.choose(rng);
    let noun = nouns.choose(rng);
    match (adjective, noun) {
        (Some(adjective), Some(noun)) => Ok(WordPair::new(&adjective.word, &noun.word)),
        _ => Err(SelectionError::NoMatchingTier(tier)),
    }
}
