//! Turn state: the roll/score snapshot shared by the controller and the rules.
//!
//! ## FaceTally
//!
//! Face → count map for the most recent white-dice roll. Backed by a fixed
//! array so iteration always follows face order, which the scoring rules
//! depend on.
//!
//! ## TurnState
//!
//! Everything one turn needs:
//! - Accumulated score
//! - Which dice are still eligible to roll
//! - The latest white and black results
//! - The clearing face, if a three-of-a-kind left one
//! - Whether the last resolution pass scored anything

use serde::{Deserialize, Serialize};

use super::face::Face;

/// White dice in a full pool.
pub const WHITE_DICE: u8 = 4;

/// Dice rolled when the whole pool is eligible (white plus black).
pub const DICE_PER_ROLL: u8 = WHITE_DICE + 1;

/// Face → count tally for one roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceTally {
    counts: [u8; Face::COUNT],
}

impl FaceTally {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of dice showing `face`.
    #[must_use]
    pub fn get(&self, face: Face) -> u8 {
        self.counts[face.index()]
    }

    /// Record one more die showing `face`.
    pub fn add(&mut self, face: Face) {
        self.counts[face.index()] += 1;
    }

    /// Remove up to `count` dice showing `face`, returning how many were removed.
    pub fn take(&mut self, face: Face, count: u8) -> u8 {
        let slot = &mut self.counts[face.index()];
        let taken = count.min(*slot);
        *slot -= taken;
        taken
    }

    /// Total dice in the tally.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Check if no dice are tallied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate `(face, count)` for faces with a positive count, in face order.
    pub fn iter(&self) -> impl Iterator<Item = (Face, u8)> + '_ {
        Face::ALL
            .iter()
            .map(|&face| (face, self.get(face)))
            .filter(|&(_, count)| count > 0)
    }

    /// Expand the tally back into individual faces, in face order.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.iter()
            .flat_map(|(face, count)| std::iter::repeat(face).take(count as usize))
    }
}

impl FromIterator<Face> for FaceTally {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        let mut tally = FaceTally::new();
        for face in iter {
            tally.add(face);
        }
        tally
    }
}

/// Mutable state of one turn in progress.
///
/// Owned by the turn controller for a turn's lifetime and mutated in place by
/// the scoring rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Points accumulated this turn.
    pub score: u32,

    /// White dice eligible for the next roll (0..=4).
    pub remaining_white: u8,

    /// Whether the black die is eligible for the next roll.
    pub remaining_black: bool,

    /// Result of the latest white roll.
    pub white_die_rolls: FaceTally,

    /// Result of the latest black roll, `None` if it was not rolled or has
    /// been consumed.
    pub black_die_roll: Option<Face>,

    /// Face excluded from rolls until cleared.
    pub clearing_face: Option<Face>,

    /// Whether the latest resolution pass scored at least once.
    pub scoring_dice: bool,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    /// Fresh state for the start of a turn.
    #[must_use]
    pub fn new() -> Self {
        Self {
            score: 0,
            remaining_white: WHITE_DICE,
            remaining_black: true,
            white_die_rolls: FaceTally::new(),
            black_die_roll: None,
            clearing_face: None,
            scoring_dice: false,
        }
    }

    /// Build a state as if the given dice had just been rolled.
    ///
    /// Eligible dice match what was rolled, so consuming them keeps the
    /// counts consistent. Useful for evaluating a known roll.
    #[must_use]
    pub fn with_roll(white: &[Face], black: Option<Face>) -> Self {
        let white_die_rolls: FaceTally = white.iter().copied().collect();
        Self {
            remaining_white: white_die_rolls.total(),
            remaining_black: black.is_some(),
            white_die_rolls,
            black_die_roll: black,
            ..Self::new()
        }
    }

    /// Restore start-of-turn values.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Dice that will be rolled next.
    #[must_use]
    pub fn dice_left(&self) -> u8 {
        self.remaining_white + u8::from(self.remaining_black)
    }

    /// Check if every die has been consumed.
    #[must_use]
    pub fn all_consumed(&self) -> bool {
        self.remaining_white == 0 && !self.remaining_black
    }

    /// Make the full pool eligible again, keeping score and clearing face.
    pub fn replenish(&mut self) {
        self.remaining_white = WHITE_DICE;
        self.remaining_black = true;
    }

    /// Clear per-pass flags before a new resolution pass.
    pub fn begin_pass(&mut self) {
        self.scoring_dice = false;
        self.clearing_face = None;
    }

    /// Add points and mark the pass as scoring.
    pub fn award(&mut self, points: u32) {
        self.score += points;
        self.scoring_dice = true;
    }

    /// Consume `count` white dice showing `face`.
    ///
    /// Returns how many were actually consumed.
    pub fn consume_white(&mut self, face: Face, count: u8) -> u8 {
        let taken = self.white_die_rolls.take(face, count);
        self.remaining_white -= taken;
        taken
    }

    /// Consume the black die.
    pub fn consume_black(&mut self) {
        self.black_die_roll = None;
        self.remaining_black = false;
    }

    /// Record a fresh roll.
    pub fn record_roll(&mut self, white: FaceTally, black: Option<Face>) {
        self.white_die_rolls = white;
        self.black_die_roll = black;
    }
}
