//! Core types: faces and dice, turn state, RNG, players, configuration.
//!
//! Everything here is plain data plus small helpers. Scoring lives in
//! `rules`, turn flow in `turn`.

pub mod face;
pub mod state;
pub mod rng;
pub mod player;
pub mod config;

pub use face::{Die, Face, FaceSet};
pub use state::{FaceTally, TurnState, DICE_PER_ROLL, WHITE_DICE};
pub use rng::{GameRng, RngCheckpoint, RandomSource, Roll};
pub use player::{Player, PlayerId, PlayerMap};
pub use config::{ConfigError, GameConfig, DEFAULT_GOAL};
