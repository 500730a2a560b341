//! Menu command parsing
//!
//! Commands are single characters, matched case-insensitively against the
//! first character of the entered line. Anything unrecognized (including a
//! blank line) is carried through as `Invalid` so the session can report it
//! and redisplay the menu.

/// One selection from the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `I` - print the full inventory
    Inventory,
    /// `A` - prompt for one CSV line and add that record
    Add,
    /// `R` - prompt for a boat name and remove it
    Remove,
    /// `P` - prompt for a boat name and amount, apply the payment
    Payment,
    /// `M` - apply monthly charges to every record
    Month,
    /// `X` - leave the menu loop
    Exit,
    /// Anything else, carrying the offending character
    Invalid(char),
}

impl Command {
    /// Parse a command from one line of input
    ///
    /// Only the first character matters, uppercased. A blank line parses as
    /// `Invalid(' ')`.
    pub fn from_line(line: &str) -> Command {
        match line.chars().next() {
            Some(c) => match c.to_ascii_uppercase() {
                'I' => Command::Inventory,
                'A' => Command::Add,
                'R' => Command::Remove,
                'P' => Command::Payment,
                'M' => Command::Month,
                'X' => Command::Exit,
                other => Command::Invalid(other),
            },
            None => Command::Invalid(' '),
        }
    }
}
