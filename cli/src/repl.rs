// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use chrono::{Local, NaiveDate};
use colored::Colorize;
use picu_core::Picu;

use crate::command::{ReplCommand, help_text};

const PROMPT: &str = ">>> ";

/// The read-eval-print loop around a [`Picu`] session.
///
/// The list is saved after every command, including `exit`.
pub struct Repl<'a, R, W> {
    picu: &'a mut Picu,
    input: R,
    output: W,
    today: fn() -> NaiveDate,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(picu: &'a mut Picu, input: R, output: W) -> Self {
        Self {
            picu,
            input,
            output,
            today: || Local::now().date_naive(),
        }
    }

    /// Replace the clock used to date each command.
    pub fn with_today(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Runs until `exit` or the end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Welcome to Picu! Type \"help\" for more information."
        )?;

        loop {
            let Some(line) = self.prompt(PROMPT)? else {
                tracing::debug!("end of input, leaving");
                self.save()?;
                break;
            };

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            self.picu.set_now((self.today)());
            let flow = match ReplCommand::parse(line) {
                Some(cmd) => {
                    tracing::debug!(?cmd, "running command");
                    self.dispatch(cmd)?
                }
                None => {
                    writeln!(
                        self.output,
                        "\"{line}\" is not a valid command. Type \"help\" for a list of valid commands"
                    )?;
                    ControlFlow::Continue(())
                }
            };

            self.save()?;
            if flow.is_break() {
                break;
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, cmd: ReplCommand) -> io::Result<ControlFlow<()>> {
        match cmd {
            ReplCommand::Help => write!(self.output, "{}", help_text())?,
            ReplCommand::New => self.cmd_new()?,
            ReplCommand::Complete => self.cmd_complete()?,
            ReplCommand::Check => self.cmd_check()?,
            ReplCommand::Clear => self.cmd_clear()?,
            ReplCommand::Date => self.cmd_date()?,
            ReplCommand::Exit => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn cmd_new(&mut self) -> io::Result<()> {
        let input = self
            .prompt(&format!("Please type assignment info\n{PROMPT}"))?
            .unwrap_or_default();

        match self.picu.new_assignment(&input) {
            Ok(_) => writeln!(self.output, "Assignment added successfully!"),
            Err(e) => {
                tracing::debug!(input = %input, err = %e, "rejected new assignment");
                writeln!(self.output, "{}", e.to_string().red())
            }
        }
    }

    fn cmd_complete(&mut self) -> io::Result<()> {
        let input = self
            .prompt(&format!("Which assignment is completed?\n{PROMPT}"))?
            .unwrap_or_default();

        match self.picu.complete(&input) {
            Ok(a) => writeln!(
                self.output,
                "Assignment \"{}\" in subject \"{}\" is now complete! Good job!",
                a.name, a.subject
            ),
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    fn cmd_check(&mut self) -> io::Result<()> {
        let count = self.picu.count();
        if count == 0 {
            return writeln!(
                self.output,
                "{}",
                "Congratulations! You have no assignments!".green()
            );
        }

        let s = if count == 1 { "" } else { "s" };
        writeln!(self.output, "You have {count} assignment{s}:")?;
        for line in self.picu.check() {
            if line.urgent {
                writeln!(self.output, "{}", line.text.red())?;
            } else {
                writeln!(self.output, "\t{}", line.text)?;
            }
        }
        Ok(())
    }

    fn cmd_clear(&mut self) -> io::Result<()> {
        // Erase the screen and move the cursor home
        write!(self.output, "\x1B[2J\x1B[1;1H")?;
        self.output.flush()
    }

    fn cmd_date(&mut self) -> io::Result<()> {
        let today = self.picu.now();
        writeln!(self.output, "Today is {}", today.format("%A, %B %-d"))
    }

    /// Writes the prompt and reads one line, `None` at the end of input.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so a stray byte only
    /// spoils its own line.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Saving is best effort once the session is running: a failure is
    /// reported and the in-memory list stays authoritative.
    fn save(&mut self) -> io::Result<()> {
        if let Err(e) = self.picu.save() {
            tracing::warn!(err = %e, "failed to save the list");
            writeln!(
                self.output,
                "{} {}",
                "Warning:".yellow(),
                format!("failed to save the list: {e}").yellow()
            )?;
        }
        Ok(())
    }
}
