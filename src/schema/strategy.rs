use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Selection policy for the (adjective, noun) pair of a generated insult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniform pick from the full word corpora.
    Random,
    /// Highest-rated adjective and noun.
    Best,
    /// Lowest-rated adjective and noun.
    Worst,
    /// Any non-negative adjective and noun.
    Good,
    /// Any non-positive adjective and noun.
    Bad,
    /// Repeat the previous pair in the same scope.
    Last,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Random,
        Strategy::Best,
        Strategy::Worst,
        Strategy::Good,
        Strategy::Bad,
        Strategy::Last,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Best => "best",
            Self::Worst => "worst",
            Self::Good => "good",
            Self::Bad => "bad",
            Self::Last => "last",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Random => "insult built from random words",
            Self::Best => "insult that selects the highest rated",
            Self::Worst => "insult that selects the lowest rated",
            Self::Good => "insult that selects only positive rated",
            Self::Bad => "insult that selects only negative rated",
            Self::Last => "insult that selects the last used insult",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}'")]
pub struct ParseStrategyError(pub String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" | "insult" => Ok(Self::Random),
            "best" => Ok(Self::Best),
            "worst" => Ok(Self::Worst),
            "good" => Ok(Self::Good),
            "bad" => Ok(Self::Bad),
            "last" => Ok(Self::Last),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// The filtered tiers used by `Good` and `Bad`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Good,
    Bad,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Good => f.write_str("good"),
            Self::Bad => f.write_str("bad"),
        }
    }
}
