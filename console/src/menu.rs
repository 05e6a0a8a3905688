//! The numbered-menu loop shared by every program.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::prompt::{PromptError, Prompter};

/// Result of dispatching one menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The choice named an operation and it ran (successfully or not).
    Handled,
    /// The choice is not on the menu.
    Unknown,
}

/// Why [`run_menu`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuExit {
    /// The user picked the exit option.
    Chosen,
    /// Standard input ended.
    EndOfInput,
}

/// Loop behavior that is not specific to one program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopOptions {
    /// Wait for Enter after each command.
    pub pause: bool,
}

/// A program plugged into [`run_menu`].
pub trait Menu {
    /// Menu text printed before every choice prompt.
    fn banner(&self) -> &str;

    /// Choice number that ends the program.
    fn exit_choice(&self) -> i64;

    /// Printed when the choice prompt (or a field prompt) gets a non-number.
    fn invalid_input_message(&self) -> &str {
        "Invalid input. Clearing buffer."
    }

    /// Printed when the choice is a number with no matching option.
    fn invalid_choice_message(&self) -> &str {
        "Invalid choice."
    }

    /// Run the operation for `choice`, prompting for its fields.
    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: i64,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Dispatch, PromptError>;
}

/// Run `menu` until the exit choice or end of input.
///
/// Malformed numbers are reported with the menu's invalid-input message and
/// the rest of the line is dropped. A malformed menu choice goes straight
/// back to the menu; a malformed field abandons the operation and pauses
/// like any other command. Only I/O failures are returned as errors.
pub fn run_menu<M, R, W>(
    menu: &mut M,
    prompter: &mut Prompter<R, W>,
    options: LoopOptions,
) -> Result<MenuExit, PromptError>
where
    M: Menu,
    R: BufRead,
    W: Write,
{
    loop {
        prompter.say(menu.banner())?;
        let choice = match prompter.read_int("Enter your choice: ") {
            Ok(choice) => choice,
            Err(PromptError::InvalidNumber(raw)) => {
                debug!(raw = %raw, "malformed menu choice");
                prompter.say(menu.invalid_input_message())?;
                prompter.discard_line();
                continue;
            }
            Err(PromptError::Eof) => return Ok(MenuExit::EndOfInput),
            Err(err) => return Err(err),
        };

        if choice == menu.exit_choice() {
            prompter.say("Exiting program...")?;
            return Ok(MenuExit::Chosen);
        }

        debug!(choice, "dispatching menu choice");
        match menu.dispatch(choice, prompter) {
            Ok(Dispatch::Handled) => {}
            Ok(Dispatch::Unknown) => prompter.say(menu.invalid_choice_message())?,
            Err(PromptError::InvalidNumber(raw)) => {
                debug!(choice, raw = %raw, "malformed field, operation abandoned");
                prompter.say(menu.invalid_input_message())?;
                prompter.discard_line();
            }
            Err(PromptError::Eof) => return Ok(MenuExit::EndOfInput),
            Err(err) => return Err(err),
        }

        if options.pause {
            match prompter.pause() {
                Ok(()) => {}
                Err(PromptError::Eof) => return Ok(MenuExit::EndOfInput),
                Err(err) => return Err(err),
            }
        }
    }
}

/// Run `menu` on the process's stdin and stdout.
pub fn run_stdio<M: Menu>(menu: &mut M, options: LoopOptions) -> Result<MenuExit, PromptError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());
    run_menu(menu, &mut prompter, options)
}
