use crate::{Error, MismatchMode, Result, SimilarityMode};
use serde::{Deserialize, Serialize};

/// Configuration for a similarity engine
///
/// The two modes become the protected bottom elements of the engine's
/// mode stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub similarity: SimilarityMode,
    pub mismatch: MismatchMode,
}

impl EngineConfig {
    pub fn new(similarity: SimilarityMode, mismatch: MismatchMode) -> Self {
        Self { similarity, mismatch }
    }

    /// Parse a configuration from a JSON document
    ///
    /// Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.similarity, SimilarityMode::Cosine);
        assert_eq!(config.mismatch, MismatchMode::Bail);
    }

    #[test]
    fn test_from_json() {
        let config =
            EngineConfig::from_json(r#"{"similarity": "hamming", "mismatch": "truncate"}"#).unwrap();
        assert_eq!(config, EngineConfig::new(SimilarityMode::Hamming, MismatchMode::Truncate));
    }

    #[test]
    fn test_from_json_partial() {
        let config = EngineConfig::from_json(r#"{"mismatch": "truncate"}"#).unwrap();
        assert_eq!(config.similarity, SimilarityMode::Cosine);
        assert_eq!(config.mismatch, MismatchMode::Truncate);

        let empty = EngineConfig::from_json("{}").unwrap();
        assert_eq!(empty, EngineConfig::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_mode() {
        let result = EngineConfig::from_json(r#"{"similarity": "manhattan"}"#);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = EngineConfig::new(SimilarityMode::Ochiai, MismatchMode::Truncate);
        let json = config.to_json().unwrap();
        assert_eq!(EngineConfig::from_json(&json).unwrap(), config);
    }
}
