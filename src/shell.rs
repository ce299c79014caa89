//! The interactive menu that drives a [`Ledger`].
//!
//! [`Shell`] only turns console input into [`Command`] values and prints
//! results. [`dispatch`] applies a command to the ledger and never touches
//! the console, so it can be driven directly.

use crate::engine::{Ledger, Transaction};
use crate::errors::ShellError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, warn};

const MENU: &str = "\nWallet Program Menu:\n\
                    1. Load Database\n\
                    2. Save Database\n\
                    3. Add Entry\n\
                    4. Edit Entry\n\
                    5. Delete Entry\n\
                    6. Display Totals\n\
                    7. Display Statistics\n\
                    8. List Categories\n\
                    9. Exit";

#[derive(Debug, PartialEq)]
pub enum Command {
    Load,
    Save,
    Add(Transaction),
    Edit {
        index: usize,
        transaction: Transaction,
    },
    Delete {
        index: usize,
    },
    Totals,
    Stats {
        start: String,
        end: String,
    },
    ListCategories,
    Exit,

    /// Input that could not be turned into one of the commands above.
    Invalid(InvalidInput),
}

#[derive(Debug, PartialEq)]
pub enum InvalidInput {
    /// The menu choice was not a number between 1 and 9.
    Choice,

    /// An index or amount did not parse as a number.
    Number,
}

/// The result of dispatching a single command.
#[derive(Debug, PartialEq)]
pub struct Outcome {
    pub message: String,
    pub keep_running: bool,
}

impl Outcome {
    fn proceed<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            keep_running: true,
        }
    }

    fn stop<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            keep_running: false,
        }
    }
}

/// Apply `command` to `ledger`, loading from and saving to `ledger_file`.
///
/// Failures are reported through the returned message; none of them stops
/// the menu loop.
pub fn dispatch(ledger: &mut Ledger, command: Command, ledger_file: &Path) -> Outcome {
    debug!(?command, "dispatching");
    match command {
        Command::Load => match ledger.load(ledger_file) {
            Ok(_) => Outcome::proceed("Database loaded successfully."),
            Err(err) => {
                warn!(error = %err, "load failed");
                Outcome::proceed("Failed to load database.")
            }
        },
        Command::Save => match ledger.save(ledger_file) {
            Ok(_) => Outcome::proceed("Database saved successfully."),
            Err(err) => {
                warn!(error = %err, "save failed");
                Outcome::proceed("Failed to save database.")
            }
        },
        Command::Add(transaction) => {
            ledger.add_transaction(transaction);
            Outcome::proceed("Entry added successfully.")
        }
        Command::Edit { index, transaction } => match ledger.edit_transaction(index, transaction) {
            Ok(()) => Outcome::proceed("Entry edited successfully."),
            Err(err) => {
                warn!(error = %err, "edit rejected");
                Outcome::proceed("Invalid entry index.")
            }
        },
        Command::Delete { index } => match ledger.delete_transaction(index) {
            Ok(_) => Outcome::proceed("Entry deleted successfully."),
            Err(err) => {
                warn!(error = %err, "delete rejected");
                Outcome::proceed("Invalid entry index.")
            }
        },
        Command::Totals => Outcome::proceed(ledger.totals().to_string()),
        Command::Stats { start, end } => {
            Outcome::proceed(ledger.stats_in_range(&start, &end).to_string())
        }
        Command::ListCategories => Outcome::proceed(ledger.list_categories().to_string()),
        Command::Exit => Outcome::stop("Exiting program."),
        Command::Invalid(InvalidInput::Choice) => {
            Outcome::proceed("Invalid choice. Please try again.")
        }
        Command::Invalid(InvalidInput::Number) => Outcome::proceed("Invalid input."),
    }
}

/// Console front end reading whitespace separated tokens, so several answers
/// may be typed on one line.
pub struct Shell<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Show the menu and dispatch commands until the user exits or the input
    /// runs out.
    pub fn run(&mut self, ledger: &mut Ledger, ledger_file: &Path) -> Result<(), ShellError> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let command = self.read_command()?;
            let outcome = dispatch(ledger, command, ledger_file);
            writeln!(self.output, "{}", outcome.message)?;

            if !outcome.keep_running {
                return Ok(());
            }
        }
    }

    /// Prompt for a menu choice and whatever fields it needs. End of input
    /// reads as [`Command::Exit`].
    pub fn read_command(&mut self) -> Result<Command, ShellError> {
        let choice = match self.prompt("Enter your choice: ")? {
            Some(choice) => choice,
            None => return Ok(Command::Exit),
        };

        let command = match choice.parse::<u8>() {
            Ok(1) => Command::Load,
            Ok(2) => Command::Save,
            Ok(3) => {
                let fields = self.prompt_all([
                    "Enter date (YYYY/MM/DD): ",
                    "Enter type (income/expense): ",
                    "Enter category: ",
                    "Enter amount: ",
                ])?;
                match fields {
                    None => Command::Exit,
                    Some([date, kind, category, amount]) => match amount.parse::<f64>() {
                        Ok(amount) => {
                            Command::Add(Transaction::new(&date, &kind, &category, amount))
                        }
                        Err(_) => Command::Invalid(InvalidInput::Number),
                    },
                }
            }
            Ok(4) => {
                let fields = self.prompt_all([
                    "Enter index to edit: ",
                    "Enter new date (YYYY/MM/DD): ",
                    "Enter new type (income/expense): ",
                    "Enter new category: ",
                    "Enter new amount: ",
                ])?;
                match fields {
                    None => Command::Exit,
                    Some([index, date, kind, category, amount]) => {
                        match (index.parse::<usize>(), amount.parse::<f64>()) {
                            (Ok(index), Ok(amount)) => Command::Edit {
                                index,
                                transaction: Transaction::new(&date, &kind, &category, amount),
                            },
                            _ => Command::Invalid(InvalidInput::Number),
                        }
                    }
                }
            }
            Ok(5) => match self.prompt("Enter index to delete: ")? {
                None => Command::Exit,
                Some(index) => match index.parse::<usize>() {
                    Ok(index) => Command::Delete { index },
                    Err(_) => Command::Invalid(InvalidInput::Number),
                },
            },
            Ok(6) => Command::Totals,
            Ok(7) => {
                let fields = self.prompt_all([
                    "Enter start date (YYYY/MM/DD): ",
                    "Enter end date (YYYY/MM/DD): ",
                ])?;
                match fields {
                    None => Command::Exit,
                    Some([start, end]) => Command::Stats { start, end },
                }
            }
            Ok(8) => Command::ListCategories,
            Ok(9) => Command::Exit,
            _ => Command::Invalid(InvalidInput::Choice),
        };

        Ok(command)
    }

    /// Ask every prompt in turn. Returns `None` if the input ends first.
    fn prompt_all<const N: usize>(
        &mut self,
        prompts: [&str; N],
    ) -> Result<Option<[String; N]>, ShellError> {
        let mut answers: [String; N] = std::array::from_fn(|_| String::new());
        for (answer, prompt) in answers.iter_mut().zip(prompts) {
            match self.prompt(prompt)? {
                Some(token) => *answer = token,
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.next_token()
    }

    fn next_token(&mut self) -> Result<Option<String>, ShellError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
