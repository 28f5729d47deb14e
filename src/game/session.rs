//! Multi-player match built on the turn controller.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap, RandomSource};
use crate::turn::{ChoiceError, ChoiceProvider, DisplaySink, TurnController, TurnOutcome};

use super::GameResult;

/// One finished turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub outcome: TurnOutcome,
}

/// A match in progress.
///
/// Seats play in order. The first player to reach the goal starts the final
/// round: everyone else still in the match gets one more turn, then the top
/// score wins. Five sixes win on the spot; five tens disqualify.
pub struct Game<R = GameRng> {
    config: GameConfig,
    players: PlayerMap<Player>,
    dice: R,
    controller: TurnController,
    current: Option<PlayerId>,
    first_to_goal: Option<PlayerId>,
    result: Option<GameResult>,
    turns_played: u32,
}

impl Game<GameRng> {
    /// Start a match rolling with a `GameRng` seeded from the config.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_dice(config, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Start a match rolling with `dice`.
    pub fn with_dice(config: GameConfig, dice: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let players = PlayerMap::from_vec(config.player_names().into_iter().map(Player::new).collect());

        Ok(Self {
            config,
            players,
            dice,
            controller: TurnController::new(),
            current: Some(PlayerId::new(0)),
            first_to_goal: None,
            result: None,
            turns_played: 0,
        })
    }

    /// Match configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Players with their banked scores.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Seat due to play next, `None` once the match is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.current
    }

    /// Player who triggered the final round, if any.
    #[must_use]
    pub fn first_to_goal(&self) -> Option<PlayerId> {
        self.first_to_goal
    }

    /// Final result, once decided.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Check if the match has finished.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Turns completed so far.
    #[must_use]
    pub fn turns_played(&self) -> u32 {
        self.turns_played
    }

    /// Play the current seat's turn with `choices` answering for them.
    ///
    /// Returns `None` if the match is already over.
    pub fn play_turn(
        &mut self,
        choices: &mut dyn ChoiceProvider,
        display: &mut dyn DisplaySink,
    ) -> Result<Option<TurnRecord>, ChoiceError> {
        let Some(player) = self.current else {
            return Ok(None);
        };

        display.on_turn_start(player, &self.players[player].name);
        let outcome = self.controller.play_turn(&mut self.dice, choices, display)?;
        self.turns_played += 1;
        self.apply(player, outcome);

        if let Some(result) = &self.result {
            display.on_game_end(result, &self.players);
        }
        Ok(Some(TurnRecord { player, outcome }))
    }

    /// Play to the end, one choice provider per seat.
    ///
    /// # Panics
    ///
    /// If `seats` does not hold exactly one provider per player.
    pub fn play<C: ChoiceProvider>(
        &mut self,
        seats: &mut PlayerMap<C>,
        display: &mut dyn DisplaySink,
    ) -> Result<GameResult, ChoiceError> {
        assert_eq!(
            seats.player_count(),
            self.players.player_count(),
            "need one choice provider per seat"
        );

        while let Some(player) = self.current {
            self.play_turn(&mut seats[player], display)?;
        }
        Ok(self.result.clone().unwrap_or(GameResult::NoWinner))
    }

    fn apply(&mut self, player: PlayerId, outcome: TurnOutcome) {
        match outcome {
            TurnOutcome::Banked(points) => {
                let seat = &mut self.players[player];
                seat.score += points;
                if self.first_to_goal.is_none() && seat.score >= self.config.goal {
                    info!(player = %seat, score = seat.score, "goal reached, final round begins");
                    self.first_to_goal = Some(player);
                }
            }
            TurnOutcome::Bust => {}
            TurnOutcome::InstantLoss => {
                info!(player = %self.players[player], "rolled five tens and is out");
                self.players[player].alive = false;
            }
            TurnOutcome::InstantWin => {
                info!(player = %self.players[player], "rolled five sixes and wins");
                self.finish(GameResult::Winner(player));
                return;
            }
        }
        self.seat_after(player);
    }

    /// Move `current` to the next seat still in the match, or end the match.
    fn seat_after(&mut self, player: PlayerId) {
        let count = self.players.player_count();
        for offset in 1..=count {
            let seat = PlayerId::new(((player.index() + offset) % count) as u8);
            if self.first_to_goal == Some(seat) {
                let result = self.leaders();
                self.finish(result);
                return;
            }
            if self.players[seat].alive {
                self.current = Some(seat);
                return;
            }
        }
        self.finish(GameResult::NoWinner);
    }

    /// Top score among players still in the match.
    fn leaders(&self) -> GameResult {
        let best = self
            .players
            .iter()
            .filter(|(_, p)| p.alive)
            .map(|(_, p)| p.score)
            .max();

        let leaders = match best {
            Some(best) => self
                .players
                .iter()
                .filter(|(_, p)| p.alive && p.score == best)
                .map(|(id, _)| id)
                .collect(),
            None => Vec::new(),
        };
        GameResult::from_leaders(leaders)
    }

    fn finish(&mut self, result: GameResult) {
        info!(?result, turns = self.turns_played, "match over");
        self.current = None;
        self.result = Some(result);
    }
}
