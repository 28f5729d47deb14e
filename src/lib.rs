//! # cosmic-wimpout
//!
//! Turn resolution and scoring for Cosmic Wimpout, a push-your-luck dice
//! game played with four white dice and one black die.
//!
//! ## Design Principles
//!
//! 1. **Fixed Rule Order**: Five scoring rules run over one shared
//!    `TurnState` in the same order on every roll. Rules are not exclusive.
//!
//! 2. **Signals, Not Panics**: Five sixes and five tens abort scoring through
//!    a tagged `Interrupt` and come out of the turn as distinct outcomes.
//!
//! 3. **Collaborators at the Edges**: Randomness, player decisions and
//!    display are traits. The core never reads stdin or prints.
//!
//! ## Modules
//!
//! - `core`: Faces and dice, turn state, RNG, players, configuration
//! - `rules`: Point tables and the scoring pipeline
//! - `turn`: Turn controller and collaborator traits
//! - `game`: Multi-player matches
//! - `console`: Terminal prompter and display

pub mod core;
pub mod rules;
pub mod turn;
pub mod game;
pub mod console;

// Re-export commonly used types
pub use crate::core::{
    Die, Face, FaceTally, TurnState,
    GameRng, RngCheckpoint, RandomSource, Roll,
    Player, PlayerId, PlayerMap,
    ConfigError, GameConfig,
};

pub use crate::rules::{evaluate, InstantOutcome, Interrupt, RuleReport, ScoringRule};

pub use crate::turn::{
    ChoiceError, ChoiceProvider, Prompt, ScriptedChoices, ThresholdStrategy,
    DisplaySink, NullDisplay,
    TurnController, TurnOutcome, TurnPhase,
};

pub use crate::game::{Game, GameResult, TurnRecord};

pub use crate::console::{ConsoleDisplay, ConsolePrompter};
