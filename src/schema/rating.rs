use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named rating reactions and the score delta each one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    Lmao,
    Up,
    Down,
    Trash,
}

impl Rating {
    pub const ALL: [Rating; 4] = [Rating::Lmao, Rating::Up, Rating::Down, Rating::Trash];

    pub fn delta(&self) -> i64 {
        match self {
            Self::Lmao => 2,
            Self::Up => 1,
            Self::Down => -1,
            Self::Trash => -2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Lmao => "lmao",
            Self::Up => "up",
            Self::Down => "down",
            Self::Trash => "trash",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rating '{0}', use 'up', 'down', 'trash', or 'lmao'")]
pub struct ParseRatingError(pub String);

impl FromStr for Rating {
    type Err = ParseRatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lmao" => Ok(Self::Lmao),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "trash" => Ok(Self::Trash),
            _ => Err(ParseRatingError(s.to_string())),
        }
    }
}
