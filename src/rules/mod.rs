//! Scoring rules.
//!
//! Every roll is resolved by running five rules, always in the same order,
//! over one shared `TurnState`:
//!
//! 1. Five of a kind (needs the black die)
//! 2. Three of a kind, from white dice or a white pair plus the black die
//! 3. A white pair completed by a wild sun
//! 4. Single fives and tens
//! 5. The sun die as five or ten points
//!
//! A rule may consume dice, add points and set the clearing face. Rules are
//! not exclusive; one roll can satisfy several. The only short-circuit is an
//! `Interrupt`: five sixes or five tens end the turn on the spot, and a
//! failed choice aborts resolution.

pub mod points;
mod scoring;

pub use scoring::{evaluate, RuleReport, ScoringRule};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::turn::ChoiceError;

/// Game-ending roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstantOutcome {
    /// Five sixes: the player wins the match.
    Won,
    /// Five tens: the player is out of the match.
    Lost,
}

impl std::fmt::Display for InstantOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstantOutcome::Won => f.write_str("instant win"),
            InstantOutcome::Lost => f.write_str("instant loss"),
        }
    }
}

/// Stops the rule pipeline early.
#[derive(Debug, Error)]
pub enum Interrupt {
    #[error("{0}")]
    Instant(InstantOutcome),
    #[error(transparent)]
    Choice(#[from] ChoiceError),
}

impl From<InstantOutcome> for Interrupt {
    fn from(outcome: InstantOutcome) -> Self {
        Interrupt::Instant(outcome)
    }
}
