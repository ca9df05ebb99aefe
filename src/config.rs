//! Configuration for the growth lattice.
//!
//! Read from YAML; every section and field falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{Lattice, Limits, MAX_VITALITY, SeedKind, SeedPattern};
use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub seed: SeedConfig,
    pub limits: LimitsConfig,
    pub run: RunConfig,
    pub viewer: ViewerConfig,
}

/// Initial lattice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub kind: SeedKind,
    /// Random square spans `-half_extent..half_extent` on both axes
    pub half_extent: i32,
    /// Upper bound for random initial vitality
    pub max_vitality: u8,
    /// Fixed RNG seed for reproducible random lattices
    pub rng_seed: Option<u64>,
}

/// Growth ceilings, unbounded when absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_cells: Option<usize>,
    pub max_population: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Stop after this many ticks; run until extinction when absent
    pub max_ticks: Option<u64>,
}

/// Interactive viewer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Pixel size of one cell at zoom 1.0
    pub cell_size: f32,
    pub updates_per_second: f32,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            kind: SeedKind::Random,
            half_extent: 10,
            max_vitality: 2,
            rng_seed: None,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            cell_size: 5.0,
            updates_per_second: 1.0,
        }
    }
}

impl From<&LimitsConfig> for Limits {
    fn from(config: &LimitsConfig) -> Self {
        Limits {
            max_cells: config.max_cells,
            max_population: config.max_population,
        }
    }
}

impl SeedConfig {
    /// Build the configured pattern, optionally of another kind
    pub fn pattern(&self, kind: SeedKind) -> SeedPattern {
        kind.build(self.half_extent, self.max_vitality, self.rng_seed)
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate YAML text
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.seed.max_vitality > MAX_VITALITY {
            return Err(Error::InvalidConfig(format!(
                "seed.max_vitality must be at most {MAX_VITALITY}, got {}",
                self.seed.max_vitality
            )));
        }
        if self.seed.half_extent < 0 {
            return Err(Error::InvalidConfig(format!(
                "seed.half_extent must not be negative, got {}",
                self.seed.half_extent
            )));
        }
        if !(self.viewer.cell_size > 0.0) {
            return Err(Error::InvalidConfig("viewer.cell_size must be positive".into()));
        }
        if !(self.viewer.updates_per_second > 0.0) {
            return Err(Error::InvalidConfig(
                "viewer.updates_per_second must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn limits(&self) -> Limits {
        Limits::from(&self.limits)
    }

    /// Fresh lattice from the configured seed and limits
    pub fn build_lattice(&self) -> Lattice {
        self.seed.pattern(self.seed.kind).to_lattice(self.limits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_seed() {
        let config = Config::default();
        assert_eq!(config.seed.kind, SeedKind::Random);
        assert_eq!(config.seed.half_extent, 10);
        assert_eq!(config.seed.max_vitality, 2);
        assert_eq!(config.limits(), Limits::unbounded());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = Config::from_yaml_str(
            "seed:\n  kind: cross\nlimits:\n  max_cells: 5000\n",
        )
        .unwrap();
        assert_eq!(config.seed.kind, SeedKind::Cross);
        assert_eq!(config.seed.half_extent, 10);
        assert_eq!(config.limits.max_cells, Some(5000));
        assert_eq!(config.run.max_ticks, None);
        assert_eq!(config.viewer, ViewerConfig::default());
    }

    #[test]
    fn test_rejects_out_of_range_vitality() {
        let err = Config::from_yaml_str("seed:\n  max_vitality: 6\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        let err = Config::from_yaml_str("seed: [unclosed").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join("growth_life_config_test.yaml");
        let mut config = Config::default();
        config.seed.rng_seed = Some(99);
        config.run.max_ticks = Some(25);
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_build_lattice_is_reproducible() {
        let mut config = Config::default();
        config.seed.rng_seed = Some(5);
        assert_eq!(config.build_lattice().snapshot(), config.build_lattice().snapshot());
        assert_eq!(config.build_lattice().len(), 400);
    }
}
