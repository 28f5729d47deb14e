//! Turn controller: roll, score, then continue, bank or bust.
//!
//! ## States
//!
//! ```text
//! Start ──► Rolling ──► AwaitContinue ──► Banked
//!              ▲  │            │
//!              └──┼────────────┘ (continue)
//!                 ├──► Bust
//!                 ├──► InstantWin
//!                 ├──► InstantLoss
//!                 └──► Scoring (a choice failed; retried on the same roll)
//! ```
//!
//! A failed choice during scoring rolls the state back to the fresh roll, so
//! retrying `step` resolves that roll from the first rule.
//!
//! After each resolution pass, in priority order:
//! 1. Every die consumed: the pool refills and the player must roll again.
//! 2. A clearing face is set: the player must roll the remaining dice.
//! 3. Nothing scored: the turn busts and its points are lost.
//! 4. Otherwise the player chooses to continue or bank.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Die, FaceTally, RandomSource, TurnState};
use crate::rules::{evaluate, InstantOutcome, Interrupt};

use super::choice::{ask, ChoiceError, ChoiceProvider, Prompt};
use super::display::DisplaySink;

/// Controller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Turn not yet started.
    Start,
    /// Next step rolls the eligible dice.
    Rolling,
    /// Dice are rolled; next step scores them without rolling again.
    Scoring,
    /// Next step asks whether to keep rolling.
    AwaitContinue,
    /// Nothing scored; turn points forfeited.
    Bust,
    /// Player kept the turn's points.
    Banked,
    /// Five sixes.
    InstantWin,
    /// Five tens.
    InstantLoss,
}

impl TurnPhase {
    /// Check if the turn is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TurnPhase::Bust | TurnPhase::Banked | TurnPhase::InstantWin | TurnPhase::InstantLoss
        )
    }
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Nothing scored on a roll; the turn is worth 0.
    Bust,
    /// The player stopped and keeps these points.
    Banked(u32),
    /// Five sixes: the player wins the match.
    InstantWin,
    /// Five tens: the player is out of the match.
    InstantLoss,
}

impl TurnOutcome {
    /// Points the turn is worth.
    #[must_use]
    pub fn points(self) -> u32 {
        match self {
            TurnOutcome::Banked(points) => points,
            _ => 0,
        }
    }

    /// Terminal phase matching this outcome.
    #[must_use]
    pub fn phase(self) -> TurnPhase {
        match self {
            TurnOutcome::Bust => TurnPhase::Bust,
            TurnOutcome::Banked(_) => TurnPhase::Banked,
            TurnOutcome::InstantWin => TurnPhase::InstantWin,
            TurnOutcome::InstantLoss => TurnPhase::InstantLoss,
        }
    }

    /// Check if the outcome ends the match for this player.
    #[must_use]
    pub fn is_instant(self) -> bool {
        matches!(self, TurnOutcome::InstantWin | TurnOutcome::InstantLoss)
    }
}

impl From<InstantOutcome> for TurnOutcome {
    fn from(outcome: InstantOutcome) -> Self {
        match outcome {
            InstantOutcome::Won => TurnOutcome::InstantWin,
            InstantOutcome::Lost => TurnOutcome::InstantLoss,
        }
    }
}

impl std::fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnOutcome::Bust => f.write_str("bust"),
            TurnOutcome::Banked(points) => write!(f, "banked {} points", points),
            TurnOutcome::InstantWin => f.write_str("instant win"),
            TurnOutcome::InstantLoss => f.write_str("instant loss"),
        }
    }
}

/// Runs one turn at a time.
///
/// Owns the `TurnState` exclusively; `play_turn` resets it on entry, so one
/// controller can be reused across turns and players.
#[derive(Clone, Debug)]
pub struct TurnController {
    state: TurnState,
    phase: TurnPhase,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// Create a controller waiting to start a turn.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TurnState::new(),
            phase: TurnPhase::Start,
        }
    }

    /// Current turn state.
    #[must_use]
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Go back to `Start` with a fresh state.
    pub fn reset(&mut self) {
        self.state.reset();
        self.phase = TurnPhase::Start;
    }

    /// Outcome of the finished turn, `None` while the turn is running.
    #[must_use]
    pub fn outcome(&self) -> Option<TurnOutcome> {
        match self.phase {
            TurnPhase::Bust => Some(TurnOutcome::Bust),
            TurnPhase::Banked => Some(TurnOutcome::Banked(self.state.score)),
            TurnPhase::InstantWin => Some(TurnOutcome::InstantWin),
            TurnPhase::InstantLoss => Some(TurnOutcome::InstantLoss),
            TurnPhase::Start
            | TurnPhase::Rolling
            | TurnPhase::Scoring
            | TurnPhase::AwaitContinue => None,
        }
    }

    /// Play a whole turn, from a fresh state to a terminal phase.
    pub fn play_turn(
        &mut self,
        dice: &mut dyn RandomSource,
        choices: &mut dyn ChoiceProvider,
        display: &mut dyn DisplaySink,
    ) -> Result<TurnOutcome, ChoiceError> {
        self.reset();
        loop {
            self.step(dice, choices, display)?;
            if let Some(outcome) = self.outcome() {
                info!(%outcome, score = self.state.score, "turn finished");
                display.on_turn_end(&outcome);
                return Ok(outcome);
            }
        }
    }

    /// Perform one transition and return the new phase.
    ///
    /// Terminal phases are sticky; stepping them does nothing.
    pub fn step(
        &mut self,
        dice: &mut dyn RandomSource,
        choices: &mut dyn ChoiceProvider,
        display: &mut dyn DisplaySink,
    ) -> Result<TurnPhase, ChoiceError> {
        self.phase = match self.phase {
            TurnPhase::Start => {
                self.state.reset();
                TurnPhase::Rolling
            }
            TurnPhase::Rolling => {
                self.roll(dice);
                display.on_roll(&self.state);
                self.state.begin_pass();
                self.resolve_roll(choices, display)?
            }
            TurnPhase::Scoring => self.resolve_roll(choices, display)?,
            TurnPhase::AwaitContinue => {
                let prompt = Prompt::KeepRolling {
                    score: self.state.score,
                    dice_left: self.state.dice_left(),
                };
                if ask(choices, &prompt)? == Prompt::CONTINUE {
                    TurnPhase::Rolling
                } else {
                    TurnPhase::Banked
                }
            }
            terminal => terminal,
        };
        Ok(self.phase)
    }

    /// Score the current roll and pick the next phase.
    fn resolve_roll(
        &mut self,
        choices: &mut dyn ChoiceProvider,
        display: &mut dyn DisplaySink,
    ) -> Result<TurnPhase, ChoiceError> {
        let rolled = self.state.clone();
        let fired = match evaluate(&mut self.state, choices) {
            Ok(fired) => fired,
            Err(Interrupt::Instant(outcome)) => {
                info!(%outcome, "five of a kind ended the turn");
                return Ok(TurnOutcome::from(outcome).phase());
            }
            Err(Interrupt::Choice(err)) => {
                debug!(%err, "choice failed mid-roll, keeping the roll unscored");
                self.state = rolled;
                self.phase = TurnPhase::Scoring;
                return Err(err);
            }
        };
        display.on_scored(&self.state, &fired);

        let state = &mut self.state;
        let next = if state.all_consumed() {
            state.replenish();
            debug!(clearing = ?state.clearing_face, "all dice scored, rolling a fresh pool");
            TurnPhase::Rolling
        } else if let Some(face) = state.clearing_face {
            debug!(face = %face, "face must be cleared, rolling again");
            TurnPhase::Rolling
        } else if !state.scoring_dice {
            debug!(lost = state.score, "no scoring dice, turn busts");
            state.score = 0;
            TurnPhase::Bust
        } else {
            TurnPhase::AwaitContinue
        };
        Ok(next)
    }

    /// Roll every eligible die, skipping the clearing face.
    fn roll(&mut self, dice: &mut dyn RandomSource) {
        let excluded = self.state.clearing_face;

        let white_faces = Die::White.rollable_faces(excluded);
        let white: FaceTally = dice
            .roll(&white_faces, usize::from(self.state.remaining_white))
            .into_iter()
            .collect();

        let black = if self.state.remaining_black {
            let black_faces = Die::Black.rollable_faces(excluded);
            dice.roll(&black_faces, 1).first().copied()
        } else {
            None
        };

        self.state.record_roll(white, black);
    }
}
