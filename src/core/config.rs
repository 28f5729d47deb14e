//! Match configuration.
//!
//! A turn needs no configuration; the dice and point tables are fixed.
//! `GameConfig` covers what varies between matches:
//! - Number of players and their names
//! - Points needed to trigger the final round (usually 300 or 500)
//! - RNG seed

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Goal used when none is given.
pub const DEFAULT_GOAL: u32 = 500;

/// Reasons a `GameConfig` is unusable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a match needs at least one player")]
    NoPlayers,
    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),
    #[error("goal must be greater than zero")]
    ZeroGoal,
    #[error("expected {expected} player names, got {actual}")]
    NameCount { expected: usize, actual: usize },
}

/// Match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats.
    pub player_count: usize,

    /// Seat names. Empty means "Player 0", "Player 1", ...
    #[serde(default)]
    pub names: Vec<String>,

    /// Score that starts the final round.
    pub goal: u32,

    /// Seed for the match RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            names: Vec::new(),
            goal: DEFAULT_GOAL,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the number of players.
    #[must_use]
    pub fn with_players(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set explicit player names; also sets the player count.
    #[must_use]
    pub fn with_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = names.into_iter().map(Into::into).collect();
        self.player_count = self.names.len();
        self
    }

    /// Set the goal score.
    #[must_use]
    pub fn with_goal(mut self, goal: u32) -> Self {
        self.goal = goal;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.player_count > 255 {
            return Err(ConfigError::TooManyPlayers(self.player_count));
        }
        if self.goal == 0 {
            return Err(ConfigError::ZeroGoal);
        }
        if !self.names.is_empty() && self.names.len() != self.player_count {
            return Err(ConfigError::NameCount {
                expected: self.player_count,
                actual: self.names.len(),
            });
        }
        Ok(())
    }

    /// Name for each seat, generated when none were given.
    #[must_use]
    pub fn player_names(&self) -> Vec<String> {
        if self.names.is_empty() {
            (0..self.player_count).map(|i| format!("Player {}", i)).collect()
        } else {
            self.names.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_two_players_to_500() {
        let config = GameConfig::default();
        assert_eq!(config.player_count, 2);
        assert_eq!(config.goal, 500);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_builders() {
        let config = GameConfig::default()
            .with_players(4)
            .with_goal(300)
            .with_seed(123);

        assert_eq!(config.player_count, 4);
        assert_eq!(config.goal, 300);
        assert_eq!(config.seed, 123);
        assert_eq!(config.player_names()[3], "Player 3");
    }

    #[test]
    fn test_names_set_player_count() {
        let config = GameConfig::default().with_names(["Ada", "Grace", "Linus"]);
        assert_eq!(config.player_count, 3);
        assert_eq!(config.player_names(), vec!["Ada", "Grace", "Linus"]);
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        assert_eq!(
            GameConfig::default().with_players(0).validate(),
            Err(ConfigError::NoPlayers)
        );
        assert_eq!(
            GameConfig::default().with_players(300).validate(),
            Err(ConfigError::TooManyPlayers(300))
        );
        assert_eq!(
            GameConfig::default().with_goal(0).validate(),
            Err(ConfigError::ZeroGoal)
        );

        let mismatched = GameConfig::default().with_names(["Ada"]).with_players(2);
        assert_eq!(
            mismatched.validate(),
            Err(ConfigError::NameCount { expected: 2, actual: 1 })
        );
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::default().with_goal(300);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_names_default_when_missing() {
        let config: GameConfig =
            serde_json::from_str(r#"{"player_count":2,"goal":300,"seed":1}"#).unwrap();
        assert!(config.names.is_empty());
        assert!(config.validate().is_ok());
    }
}
