//! Printing rolls and results.

use std::io::Write;

use tracing::warn;

use crate::core::{Player, PlayerId, PlayerMap, TurnState};
use crate::game::GameResult;
use crate::rules::ScoringRule;
use crate::turn::{DisplaySink, TurnOutcome};

/// Render the latest roll: white dice in face order, black die in parentheses.
///
/// ```
/// use cosmic_wimpout::core::{Face, TurnState};
/// use cosmic_wimpout::console::format_roll;
///
/// let state = TurnState::with_roll(&[Face::Ten, Face::Two, Face::Two], Some(Face::Sun));
/// assert_eq!(format_roll(&state), "Dice: [2] [2] [10] (*)");
/// ```
#[must_use]
pub fn format_roll(state: &TurnState) -> String {
    let mut parts = vec!["Dice:".to_string()];
    parts.extend(state.white_die_rolls.faces().map(|face| format!("[{}]", face)));
    if let Some(black) = state.black_die_roll {
        parts.push(format!("({})", black));
    }
    parts.join(" ")
}

/// Prints play to a writer.
pub struct ConsoleDisplay<W> {
    out: W,
}

impl<W: Write> ConsoleDisplay<W> {
    /// Create a display writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        if let Err(err) = writeln!(self.out, "{}", line) {
            warn!(%err, "failed to write to console");
        }
    }
}

impl<W: Write> DisplaySink for ConsoleDisplay<W> {
    fn on_turn_start(&mut self, _player: PlayerId, name: &str) {
        self.emit(format_args!("\n=== {}'s turn ===", name));
    }

    fn on_roll(&mut self, state: &TurnState) {
        self.emit(format_args!("\n{}", format_roll(state)));
    }

    fn on_scored(&mut self, state: &TurnState, fired: &[ScoringRule]) {
        if fired.is_empty() {
            self.emit(format_args!("No scoring dice."));
        } else {
            self.emit(format_args!(
                "Turn score: {} ({} dice left)",
                state.score,
                state.dice_left()
            ));
        }
    }

    fn on_turn_end(&mut self, outcome: &TurnOutcome) {
        match outcome {
            TurnOutcome::Bust => self.emit(format_args!("Wimpout! The turn scores nothing.")),
            TurnOutcome::Banked(points) => self.emit(format_args!("Total score: {}", points)),
            TurnOutcome::InstantWin => self.emit(format_args!("Five sixes! Instant win.")),
            TurnOutcome::InstantLoss => self.emit(format_args!("Five tens! Out of the game.")),
        }
    }

    fn on_game_end(&mut self, result: &GameResult, players: &PlayerMap<Player>) {
        self.emit(format_args!("\n=== Final scores ==="));
        for (_, player) in players.iter() {
            let status = if player.alive { "" } else { " (disqualified)" };
            self.emit(format_args!("{}: {}{}", player.name, player.score, status));
        }
        match result {
            GameResult::Winner(id) => self.emit(format_args!("{} wins!", players[*id].name)),
            GameResult::Winners(ids) => {
                let names: Vec<&str> = ids.iter().map(|id| players[*id].name.as_str()).collect();
                self.emit(format_args!("Tie between {}", names.join(", ")));
            }
            GameResult::NoWinner => self.emit(format_args!("Nobody wins.")),
        }
    }
}
