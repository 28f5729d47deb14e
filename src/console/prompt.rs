//! Line-based prompting.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::turn::{ChoiceError, ChoiceProvider, Prompt};

/// Asks prompts on `output` and reads answers from `input`.
///
/// Anything that is not an integer inside the prompt's range prints
/// `Invalid choice!` and asks again. End of input is `ChoiceError::Exhausted`.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    /// Create a prompter over the given streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn show(&mut self, prompt: &Prompt) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", prompt.question())?;
        for (i, option) in prompt.options().iter().enumerate() {
            writeln!(self.output, "\t[{}] {}", i + 1, option)?;
        }
        write!(self.output, ">>> ")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> ChoiceProvider for ConsolePrompter<R, W> {
    fn request_choice(&mut self, prompt: &Prompt) -> Result<usize, ChoiceError> {
        let range = prompt.range();
        let mut line = String::new();
        loop {
            self.show(prompt)?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ChoiceError::Exhausted);
            }

            match line.trim().parse::<usize>() {
                Ok(choice) if range.contains(&choice) => return Ok(choice),
                _ => {
                    debug!(input = line.trim(), "rejected choice");
                    writeln!(self.output, "Invalid choice!")?;
                }
            }
        }
    }
}
