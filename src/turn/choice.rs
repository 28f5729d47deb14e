//! Player decisions.
//!
//! A turn pauses at four points to ask the player something. Each question
//! is a `Prompt` with a closed range of valid answers; a `ChoiceProvider`
//! supplies an answer inside that range.
//!
//! | Prompt | Range | Meaning |
//! |---|---|---|
//! | `SunTrioFace` | 1..=N | which pair the sun completes |
//! | `SunDieUse` | 1..=2 | 1 score the sun now, 2 keep the die |
//! | `SunDiePoints` | 1..=2 | 1 five points, 2 ten points |
//! | `KeepRolling` | 1..=2 | 1 keep rolling, 2 bank |

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::Face;
use crate::rules::points;

/// Pairs a wild sun could complete. Four white dice hold at most two pairs.
pub type TrioCandidates = SmallVec<[Face; 2]>;

/// A question put to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    /// Choose which pair the sun turns into a three-of-a-kind.
    SunTrioFace { candidates: TrioCandidates },
    /// Score the sun die now, or keep it for the next roll.
    SunDieUse,
    /// Count the sun die as five or ten points.
    SunDiePoints,
    /// Keep rolling the remaining dice, or bank the turn.
    KeepRolling { score: u32, dice_left: u8 },
}

impl Prompt {
    /// `SunDieUse`: score the sun die now.
    pub const SUN_USE: usize = 1;
    /// `SunDieUse`: keep the sun die for later.
    pub const SUN_KEEP: usize = 2;
    /// `SunDiePoints`: five points.
    pub const SUN_FIVE: usize = 1;
    /// `SunDiePoints`: ten points.
    pub const SUN_TEN: usize = 2;
    /// `KeepRolling`: roll again.
    pub const CONTINUE: usize = 1;
    /// `KeepRolling`: bank the turn score.
    pub const BANK: usize = 2;

    /// Valid answers, inclusive.
    #[must_use]
    pub fn range(&self) -> RangeInclusive<usize> {
        match self {
            Prompt::SunTrioFace { candidates } => 1..=candidates.len(),
            Prompt::SunDieUse | Prompt::SunDiePoints | Prompt::KeepRolling { .. } => 1..=2,
        }
    }

    /// The question, as shown to a human.
    #[must_use]
    pub fn question(&self) -> String {
        match self {
            Prompt::SunTrioFace { .. } => {
                "Please choose which face to make a trio with using the sun die:".to_string()
            }
            Prompt::SunDieUse => {
                "You rolled a sun face. Do you want to use it for points or reuse the die?".to_string()
            }
            Prompt::SunDiePoints => {
                "Do you want to use the sun face for \"5\" or \"10\" points?".to_string()
            }
            Prompt::KeepRolling { score, dice_left } => format!(
                "You currently scored {} points this turn and have {} dice left. Keep going?",
                score, dice_left
            ),
        }
    }

    /// Labels for each answer; answer `n` is `options()[n - 1]`.
    #[must_use]
    pub fn options(&self) -> Vec<String> {
        match self {
            Prompt::SunTrioFace { candidates } => candidates
                .iter()
                .map(|face| format!("Face \"{}\"", face))
                .collect(),
            Prompt::SunDieUse => vec!["Use it for points".into(), "Keep the die for later".into()],
            Prompt::SunDiePoints => {
                vec!["Use it for five points".into(), "Use it for ten points".into()]
            }
            Prompt::KeepRolling { .. } => vec!["Keep playing".into(), "End turn".into()],
        }
    }
}

/// Failures to obtain an answer.
#[derive(Debug, Error)]
pub enum ChoiceError {
    #[error("choice {choice} is outside {min}..={max}")]
    OutOfRange { choice: usize, min: usize, max: usize },
    #[error("no more choices available")]
    Exhausted,
    #[error("failed to read choice: {0}")]
    Io(#[from] std::io::Error),
}

/// Supplies answers to prompts.
///
/// Implementations retry internally until they have an answer within
/// `prompt.range()`. Returning an out-of-range value is a contract violation
/// and surfaces as `ChoiceError::OutOfRange`.
pub trait ChoiceProvider {
    /// Answer `prompt`.
    fn request_choice(&mut self, prompt: &Prompt) -> Result<usize, ChoiceError>;
}

impl<T: ChoiceProvider + ?Sized> ChoiceProvider for &mut T {
    fn request_choice(&mut self, prompt: &Prompt) -> Result<usize, ChoiceError> {
        (**self).request_choice(prompt)
    }
}

impl<T: ChoiceProvider + ?Sized> ChoiceProvider for Box<T> {
    fn request_choice(&mut self, prompt: &Prompt) -> Result<usize, ChoiceError> {
        (**self).request_choice(prompt)
    }
}

/// Ask `provider` and check the answer is in range.
pub(crate) fn ask(provider: &mut dyn ChoiceProvider, prompt: &Prompt) -> Result<usize, ChoiceError> {
    let choice = provider.request_choice(prompt)?;
    let range = prompt.range();
    if range.contains(&choice) {
        Ok(choice)
    } else {
        Err(ChoiceError::OutOfRange {
            choice,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Replays a fixed sequence of answers.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoices {
    answers: VecDeque<usize>,
}

impl ScriptedChoices {
    /// Create a provider that answers with `answers`, in order.
    pub fn new(answers: impl IntoIterator<Item = usize>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl ChoiceProvider for ScriptedChoices {
    fn request_choice(&mut self, _prompt: &Prompt) -> Result<usize, ChoiceError> {
        self.answers.pop_front().ok_or(ChoiceError::Exhausted)
    }
}

/// Automatic player that banks once the turn score reaches a threshold.
///
/// Completes the most valuable trio, always scores the sun die for ten
/// points, and keeps rolling while below `bank_at`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdStrategy {
    /// Turn score at which to bank.
    pub bank_at: u32,
}

impl Default for ThresholdStrategy {
    fn default() -> Self {
        Self { bank_at: 100 }
    }
}

impl ThresholdStrategy {
    /// Create a strategy banking at `bank_at` points.
    #[must_use]
    pub fn new(bank_at: u32) -> Self {
        Self { bank_at }
    }
}

impl ChoiceProvider for ThresholdStrategy {
    fn request_choice(&mut self, prompt: &Prompt) -> Result<usize, ChoiceError> {
        let choice = match prompt {
            Prompt::SunTrioFace { candidates } => candidates
                .iter()
                .enumerate()
                .max_by_key(|&(_, &face)| points::three_of_a_kind(face))
                .map_or(1, |(i, _)| i + 1),
            Prompt::SunDieUse => Prompt::SUN_USE,
            Prompt::SunDiePoints => Prompt::SUN_TEN,
            Prompt::KeepRolling { score, .. } => {
                if *score < self.bank_at {
                    Prompt::CONTINUE
                } else {
                    Prompt::BANK
                }
            }
        };
        Ok(choice)
    }
}
