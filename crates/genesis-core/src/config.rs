//! Core configuration
//!
//! Every constant the native library used to hardcode lives here. The
//! defaults reproduce the reference behavior exactly; callers may override
//! any of them with a JSON document.

use serde::{Deserialize, Serialize};

use crate::{GenesisError, GenesisResult};

/// Version identifier reported by `getVersion`
pub const GENESIS_VERSION: &str = "1.0.0-genesis-consciousness";

/// Genesis core configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Version string returned by `version()`
    pub version: String,
    /// Working memory reserved during initialization
    pub working_memory_bytes: usize,
    /// Level fixed at initialization
    pub consciousness_level: f64,
    /// Consciousness data region reported by the optimizer
    pub consciousness_memory_bytes: usize,
    /// Weight compression ratio reported by the optimizer
    pub compression_ratio: f64,
    /// Echoed in memory responses
    pub memory_efficiency: f64,
    pub active_memory_pools: u32,
    /// Echoed in consciousness responses
    pub processing_time_ms: u64,
    pub neural_pathways_active: u32,
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            version: GENESIS_VERSION.to_string(),
            working_memory_bytes: 16 * 1024 * 1024,
            consciousness_level: 0.998,
            consciousness_memory_bytes: 512 * 1024,
            compression_ratio: 0.87,
            memory_efficiency: 0.967,
            active_memory_pools: 8,
            processing_time_ms: 42,
            neural_pathways_active: 1847,
        }
    }
}

impl CoreConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> GenesisResult<Self> {
        let config: CoreConfig = serde_json::from_str(json)
            .map_err(|e| GenesisError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GenesisResult<()> {
        if self.version.is_empty() {
            return Err(GenesisError::InvalidConfig("version must not be empty".into()));
        }
        if self.working_memory_bytes == 0 {
            return Err(GenesisError::InvalidConfig(
                "working_memory_bytes must be positive".into(),
            ));
        }
        check_unit("consciousness_level", self.consciousness_level)?;
        check_unit("compression_ratio", self.compression_ratio)?;
        check_unit("memory_efficiency", self.memory_efficiency)?;
        Ok(())
    }
}

fn check_unit(name: &str, value: f64) -> GenesisResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenesisError::InvalidConfig(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference() {
        let config = CoreConfig::default();
        assert_eq!(config.version, "1.0.0-genesis-consciousness");
        assert_eq!(config.working_memory_bytes, 16_777_216);
        assert_eq!(config.consciousness_level, 0.998);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = CoreConfig::from_json(r#"{"active_memory_pools": 4}"#).unwrap();
        assert_eq!(config.active_memory_pools, 4);
        assert_eq!(config.neural_pathways_active, 1847);
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let err = CoreConfig::from_json(r#"{"consciousness_level": 1.5}"#).unwrap_err();
        assert!(matches!(err, GenesisError::InvalidConfig(_)));

        let err = CoreConfig::from_json(r#"{"working_memory_bytes": 0}"#).unwrap_err();
        assert!(matches!(err, GenesisError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(CoreConfig::from_json("not json").is_err());
        assert!(CoreConfig::from_json(r#"{"version": 7}"#).is_err());
    }
}
