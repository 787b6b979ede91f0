use amethyst_execution::{total_value, RoundConfig};
use amethyst_types::{JackpotError, Participant};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(#[from] JackpotError),
    #[error("invalid config: {0}")]
    Missing(&'static str),
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_rounds() -> u64 {
    1
}

fn default_frame_rate() -> u32 {
    60
}

/// Configuration for the [crate::Simulator], loaded from YAML.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_rounds")]
    pub rounds: u64,
    /// Synthetic display refresh rate.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    /// Seed for the winner draws; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub round: RoundConfig,
    pub participants: Vec<Participant>,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::Missing("rounds must be greater than zero"));
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::Missing("frame_rate must be greater than zero"));
        }
        if self.participants.is_empty() {
            return Err(ConfigError::Missing("at least one participant is required"));
        }
        self.round.validate()?;
        for participant in &self.participants {
            participant.validate()?;
        }
        if total_value(&self.participants) <= 0.0 {
            return Err(ConfigError::Missing("participants contribute no value"));
        }
        Ok(())
    }

    /// Milliseconds between synthetic frames.
    pub fn frame_ms(&self) -> f64 {
        1_000.0 / f64::from(self.frame_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
participants:
  - id: "1"
    name: JohnDoe
    color: "#FF5E7D"
    items:
      - { id: a1, name: Laser, value: 50.0, rarity: Godly }
"##;

    #[test]
    fn parses_with_defaults() {
        let config = Config::parse(MINIMAL).expect("config should parse");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.rounds, 1);
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.seed, None);
        assert_eq!(config.round, RoundConfig::default());
        assert_eq!(config.participants[0].contributed_value(), 50.0);
    }

    #[test]
    fn parses_round_overrides() {
        let raw = format!(
            "rounds: 3\nseed: 9\nround:\n  join_timer_ms: 5000\n  spin:\n    duration_ms: 4000\n    base_rotations: 7\n{MINIMAL}"
        );
        let config = Config::parse(&raw).unwrap();
        assert_eq!(config.rounds, 3);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.round.join_timer_ms, 5_000);
        assert_eq!(config.round.spin.duration_ms, 4_000);
        assert_eq!(config.round.spin.base_rotations, 7);
        // Unspecified fields keep their defaults.
        assert_eq!(config.round.spin.pointer_angle, 270.0);
    }

    #[test]
    fn rejects_invalid_values() {
        let err = Config::parse(&format!("frame_rate: 0\n{MINIMAL}")).unwrap_err();
        assert!(err.to_string().contains("frame_rate"), "unexpected error: {err}");

        let err = Config::parse(&format!("round:\n  spin:\n    base_rotations: 1\n{MINIMAL}"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(JackpotError::InvalidConfig(_))));

        let err = Config::parse("participants: []").unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));

        let err = Config::parse(&MINIMAL.replace("#FF5E7D", "pink")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_worthless_pot() {
        let err = Config::parse(&MINIMAL.replace("value: 50.0", "value: 0.0")).unwrap_err();
        assert!(
            matches!(err, ConfigError::Missing("participants contribute no value")),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jackpot.yaml");
        std::fs::write(&path, MINIMAL).unwrap();
        assert_eq!(Config::load(&path).unwrap().participants.len(), 1);
        assert!(matches!(
            Config::load(dir.path().join("missing.yaml")),
            Err(ConfigError::Read(_))
        ));
    }
}
