// SPDX-FileCopyrightText: 2025 Picu Developers
//
// SPDX-License-Identifier: Apache-2.0

/// Commands understood at the `>>>` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Print the command reference
    Help,

    /// Add a new assignment
    New,

    /// Remove a finished assignment
    Complete,

    /// Print the to-do list
    Check,

    /// Clear the console
    Clear,

    /// Print today's date
    Date,

    /// Leave the application
    Exit,
}

impl ReplCommand {
    /// Every command, in the order they are listed by `help`.
    pub const ALL: [Self; 7] = [
        Self::Help,
        Self::New,
        Self::Complete,
        Self::Check,
        Self::Clear,
        Self::Date,
        Self::Exit,
    ];

    /// The word typed to run the command.
    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::New => "new",
            Self::Complete => "complete",
            Self::Check => "check",
            Self::Clear => "clear",
            Self::Date => "date",
            Self::Exit => "exit",
        }
    }

    /// One entry of the command reference.
    pub fn about(self) -> &'static str {
        match self {
            Self::Help => "prints this message.",
            Self::New => {
                "adds a new assignment. Format assignment as {subject}, {name}, {due date}.\n\
                 \t\tIf using NextThurs time, put a '#' before the date."
            }
            Self::Complete => "removes an assignment. Format as {name}, {subject}.",
            Self::Check => "prints out the todo list.",
            Self::Clear => "clears the console.",
            Self::Date => "prints out today's date.",
            Self::Exit => "exit the application.",
        }
    }

    /// Matches a whole input line against the command words, ignoring case.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(input))
    }
}

/// The full `help` text.
pub fn help_text() -> String {
    let mut text = String::from("Commands:\n");
    for cmd in ReplCommand::ALL {
        text.push_str(&format!("\t{} - {}\n", cmd.name(), cmd.about()));
    }
    text.push('\n');
    text.push_str(NEXT_THURS_NOTE);
    text
}

const NEXT_THURS_NOTE: &str = "\
What's NextThurs? It's a way of writing a date relative to the current week, a formal
way of saying things like \"next Thursday\" or \"the Monday two weeks from now\".
Weeks start on Monday. Here's how it works:
\t\"1 Thurs\" means \"the Thursday of the week after the current week\"
\t\"0 Mon\" means \"the Monday of the current week\"
\t\"5 Tues\" means \"the Tuesday of the week 5 weeks after the current week\"
\t\"-3 Fri\" means \"the Friday of the week 3 weeks before the current week\"
Days may be written in full or abbreviated: m/mon, t/tu/tue/tues, w/wed/wedn,
r/th/thu/thur/thurs, f/fri, sa/sat, su/sun.
";
