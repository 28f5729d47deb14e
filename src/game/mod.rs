//! Multi-player matches.
//!
//! Sits on top of the turn controller and only looks at each turn's
//! `TurnOutcome`:
//! - Banked points add to the player's score; a bust adds nothing
//! - Five tens disqualify the player
//! - Five sixes end the match with that player as winner
//! - Reaching the goal starts a final round for everyone else
//!
//! Supports any number of seats from 1 to 255.

mod result;
mod session;

pub use result::GameResult;
pub use session::{Game, TurnRecord};
