//! Terminal front end.
//!
//! - `ConsolePrompter`: reads answers from a line-based input, re-asking
//!   until the answer is a number in range
//! - `ConsoleDisplay`: prints rolls, turn totals and results

mod display;
mod prompt;

pub use display::{format_roll, ConsoleDisplay};
pub use prompt::ConsolePrompter;
