//! Point tables.

use crate::core::Face;

use super::InstantOutcome;

/// Points for each single white or black five.
pub const SINGLE_FIVE: u32 = 5;

/// Points for each single white or black ten.
pub const SINGLE_TEN: u32 = 10;

/// Sun die values, indexed by `SunDiePoints` answer - 1.
pub const SUN_VALUES: [u32; 2] = [5, 10];

/// Points for three dice showing `face`.
#[must_use]
pub const fn three_of_a_kind(face: Face) -> u32 {
    match face {
        Face::Two => 20,
        Face::Three => 30,
        Face::Four => 40,
        Face::Five => 50,
        Face::Six => 60,
        Face::Ten => 100,
        Face::Sun => 0,
    }
}

/// Points for all five dice showing `face`.
///
/// Five sixes win the game outright and five tens lose it; those come back
/// as `Err` so the caller can stop scoring immediately.
pub const fn five_of_a_kind(face: Face) -> Result<u32, InstantOutcome> {
    match face {
        Face::Six => Err(InstantOutcome::Won),
        Face::Ten => Err(InstantOutcome::Lost),
        Face::Two => Ok(200),
        Face::Four => Ok(400),
        Face::Five => Ok(500),
        Face::Three | Face::Sun => Ok(0),
    }
}

/// Points for a single scoring face, if it scores on its own.
#[must_use]
pub const fn single(face: Face) -> Option<u32> {
    match face {
        Face::Five => Some(SINGLE_FIVE),
        Face::Ten => Some(SINGLE_TEN),
        _ => None,
    }
}
