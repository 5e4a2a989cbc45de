use serde::{Deserialize, Serialize};
use std::fmt;

/// Isolation key for "last used" tracking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scope {
    /// The single slot used by deployments without per-channel isolation.
    #[default]
    Global,
    /// A conversation or channel, keyed by the host's identifier.
    Channel(String),
}

impl Scope {
    pub fn channel(id: impl Into<String>) -> Self {
        Self::Channel(id.into())
    }
}

impl From<&str> for Scope {
    fn from(id: &str) -> Self {
        Self::Channel(id.to_string())
    }
}

impl From<String> for Scope {
    fn from(id: String) -> Self {
        Self::Channel(id)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => f.write_str("global"),
            Self::Channel(id) => write!(f, "channel:{}", id),
        }
    }
}

/// How scope keys supplied by the host are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScopeMode {
    /// Every scope folds onto `Scope::Global`.
    Global,
    /// Each scope keeps its own last-used pair.
    #[default]
    PerChannel,
}

impl ScopeMode {
    /// Map a caller-supplied scope onto the slot it actually uses.
    pub fn resolve(&self, scope: &Scope) -> Scope {
        match self {
            Self::Global => Scope::Global,
            Self::PerChannel => scope.clone(),
        }
    }
}
