//! Presentation hooks.

use crate::core::{Player, PlayerId, PlayerMap, TurnState};
use crate::game::GameResult;
use crate::rules::ScoringRule;

use super::TurnOutcome;

/// Receives snapshots for presentation. Never affects play.
///
/// Every method has a no-op default so sinks implement only what they show.
pub trait DisplaySink {
    /// A player's turn is starting.
    fn on_turn_start(&mut self, _player: PlayerId, _name: &str) {}

    /// Dice were just rolled; `state` holds the fresh roll.
    fn on_roll(&mut self, _state: &TurnState) {}

    /// The roll was resolved; `fired` lists the rules that scored.
    fn on_scored(&mut self, _state: &TurnState, _fired: &[ScoringRule]) {}

    /// The turn finished.
    fn on_turn_end(&mut self, _outcome: &TurnOutcome) {}

    /// The match finished.
    fn on_game_end(&mut self, _result: &GameResult, _players: &PlayerMap<Player>) {}
}

/// Sink that shows nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {}
