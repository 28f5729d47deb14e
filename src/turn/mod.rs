//! Turn flow and the collaborators it talks to.
//!
//! - `TurnController`: the roll → score → decide state machine
//! - `ChoiceProvider`: answers the player's decisions
//! - `DisplaySink`: receives snapshots for presentation
//!
//! ## Example
//!
//! ```
//! use cosmic_wimpout::core::GameRng;
//! use cosmic_wimpout::turn::{NullDisplay, ThresholdStrategy, TurnController};
//!
//! let mut controller = TurnController::new();
//! let mut rng = GameRng::new(7);
//! let mut bot = ThresholdStrategy::new(50);
//!
//! let outcome = controller.play_turn(&mut rng, &mut bot, &mut NullDisplay).unwrap();
//! assert!(controller.phase().is_terminal());
//! assert_eq!(outcome.phase(), controller.phase());
//! ```

pub mod choice;
mod controller;
mod display;

pub use choice::{ChoiceError, ChoiceProvider, Prompt, ScriptedChoices, ThresholdStrategy, TrioCandidates};
pub use controller::{TurnController, TurnOutcome, TurnPhase};
pub use display::{DisplaySink, NullDisplay};
