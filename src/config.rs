/// Engine configuration, loaded from RON.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schema::scope::ScopeMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Where the engine finds its word lists and keeps its ratings.
///
/// Every field is optional in the RON source:
///
/// ```ron
/// (
///     words_dir: "words",
///     state_dir: "ratings",
///     scope_mode: PerChannel,
///     seed: Some(42),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Root of the `<category>/all.txt` word lists.
    pub words_dir: PathBuf,
    /// Directory holding one `<category>.ron` ledger record per category.
    pub state_dir: PathBuf,
    pub scope_mode: ScopeMode,
    /// Fixed RNG seed. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            words_dir: PathBuf::from("words"),
            state_dir: PathBuf::from("ratings"),
            scope_mode: ScopeMode::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn load_from_ron(path: &Path) -> Result<EngineConfig, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    pub fn parse_ron(input: &str) -> Result<EngineConfig, ConfigError> {
        Ok(ron::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_are_default() {
        let config = EngineConfig::parse_ron("(seed: None)").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.words_dir, PathBuf::from("words"));
        assert_eq!(config.scope_mode, ScopeMode::PerChannel);
    }

    #[test]
    fn parse_all_fields() {
        let config = EngineConfig::parse_ron(
            r#"(
                words_dir: "tests/fixtures/words",
                state_dir: "/tmp/ratings",
                scope_mode: Global,
                seed: Some(42),
            )"#,
        )
        .unwrap();
        assert_eq!(config.words_dir, PathBuf::from("tests/fixtures/words"));
        assert_eq!(config.state_dir, PathBuf::from("/tmp/ratings"));
        assert_eq!(config.scope_mode, ScopeMode::Global);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn bad_scope_mode_fails() {
        let err = EngineConfig::parse_ron("(scope_mode: Sometimes)").unwrap_err();
        assert!(matches!(err, ConfigError::Ron(_)));
    }

    #[test]
    fn missing_file_fails() {
        let err = EngineConfig::load_from_ron(Path::new("tests/fixtures/nope.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_fixture() {
        let config = EngineConfig::load_from_ron(Path::new("tests/fixtures/engine.ron")).unwrap();
        assert_eq!(config.words_dir, PathBuf::from("tests/fixtures/words"));
        assert_eq!(config.seed, Some(7));
    }
}
