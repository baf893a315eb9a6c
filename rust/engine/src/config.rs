use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::blinds::default_blinds;
use crate::engine::{table_chips, MAX_PLAYERS};
use crate::errors::ConfigError;
use crate::player::validate_name;
use crate::Chips;

/// Table setup read by the presentation layer, typically from a TOML file:
///
/// ```toml
/// player_names = ["alice", "bob", "carol"]
/// starting_money = 1000
/// seed = 42
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    pub player_names: Vec<String>,
    pub starting_money: Chips,
    /// Deck seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Overrides the blind derived from `starting_money`
    pub big_blind: Option<Chips>,
    pub small_blind: Option<Chips>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            player_names: Vec::new(),
            starting_money: 1000,
            seed: None,
            big_blind: None,
            small_blind: None,
        }
    }
}

impl TableConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: TableConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// `(big, small)` blind amounts. A missing small blind is half the big blind.
    pub fn blinds(&self) -> (Chips, Chips) {
        let (big, small) = match self.big_blind {
            Some(big) => (big, big / 2),
            None => default_blinds(self.starting_money),
        };
        (big, self.small_blind.unwrap_or(small))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_names.len() < 2 {
            return Err(ConfigError::Invalid(format!(
                "need at least 2 players, got {}",
                self.player_names.len()
            )));
        }
        if self.player_names.len() > MAX_PLAYERS {
            return Err(ConfigError::Invalid(format!(
                "at most {MAX_PLAYERS} players, got {}",
                self.player_names.len()
            )));
        }
        table_chips(self.player_names.iter().map(|_| self.starting_money))
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let mut seen = HashSet::new();
        for name in &self.player_names {
            validate_name(name).map_err(|e| ConfigError::Invalid(e.to_string()))?;
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate player name {name:?}")));
            }
        }
        let (big, small) = self.blinds();
        if small > big {
            return Err(ConfigError::Invalid(format!(
                "small blind {small} exceeds big blind {big}"
            )));
        }
        Ok(())
    }
}
