//! Interactive menu session
//!
//! The `Session` owns the inventory for the duration of one run and drives
//! the menu loop: print the menu, read one command, dispatch, repeat until
//! exit. It reads from any `BufRead` and writes to any `Write`, so tests
//! can drive a whole session with in-memory buffers.
//!
//! # Error Handling
//!
//! Every recoverable failure (bad record, capacity, unknown name,
//! overpayment) is reported to the output and control returns to the menu;
//! nothing panics out of the loop. Only I/O failures on the command stream
//! itself end the session early.
//!
//! End-of-input on the command stream behaves like the exit command, so a
//! scripted (non-interactive) stdin always terminates.

use crate::core::{accept_payment, apply_monthly_charges, Inventory};
use crate::io::csv_format::{decode_line, lenient_decimal};
use crate::shell::command::Command;
use crate::types::{Boat, Location, MarinaError};
use std::io::{BufRead, Write};

const MENU: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : ";
const PROMPT_BOAT_DATA: &str = "Please enter the boat data in CSV format                 : ";
const PROMPT_BOAT_NAME: &str = "Please enter the boat name                               : ";
const PROMPT_AMOUNT: &str = "Please enter the amount to be paid                       : ";

/// One interactive run over the inventory
///
/// Construct it with the loaded inventory, call [`Session::run`] with the
/// command input and display output, then take the inventory back with
/// [`Session::into_inventory`] for the final save.
pub struct Session {
    inventory: Inventory,
}

impl Session {
    /// Create a session over a loaded inventory
    pub fn new(inventory: Inventory) -> Self {
        Session { inventory }
    }

    /// The inventory in its current state
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Consume the session, yielding the final inventory
    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }

    /// Run the menu loop until exit or end of input
    ///
    /// # Arguments
    ///
    /// * `input` - Command stream (stdin in production, a buffer in tests)
    /// * `output` - Display stream for the menu, prompts, and reports
    ///
    /// # Returns
    ///
    /// * `Ok(())` when the user exits (or input ends)
    /// * `Err(MarinaError)` only for I/O failures on the streams themselves
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), MarinaError> {
        writeln!(output, "\nWelcome to the Boat Management System")?;
        writeln!(output, "-------------------------------------\n")?;

        loop {
            write!(output, "{}", MENU)?;
            output.flush()?;

            let line = match read_line(input)? {
                Some(line) => line,
                None => break,
            };

            match Command::from_line(&line) {
                Command::Inventory => self.print_inventory(output)?,
                Command::Add => self.add_boat(input, output)?,
                Command::Remove => self.remove_boat(input, output)?,
                Command::Payment => self.accept_payment(input, output)?,
                Command::Month => apply_monthly_charges(&mut self.inventory),
                Command::Exit => break,
                Command::Invalid(c) => writeln!(output, "Invalid option {}\n", c)?,
            }
        }

        Ok(())
    }

    /// Print the full inventory, one formatted line per boat
    fn print_inventory<W: Write>(&self, output: &mut W) -> Result<(), MarinaError> {
        for boat in self.inventory.boats() {
            writeln!(output, "{}", format_boat_line(boat))?;
        }
        writeln!(output)?;
        Ok(())
    }

    /// Prompt for one CSV line and add the record
    ///
    /// Decode failures and a full inventory are reported; the inventory is
    /// unchanged in either case.
    fn add_boat<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), MarinaError> {
        write!(output, "{}", PROMPT_BOAT_DATA)?;
        output.flush()?;

        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(()),
        };

        match decode_line(&line).and_then(|boat| self.inventory.add(boat)) {
            Ok(()) => Ok(()),
            Err(e) => Ok(writeln!(output, "Error: {}\n", e)?),
        }
    }

    /// Prompt for a boat name and remove the first match
    fn remove_boat<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), MarinaError> {
        write!(output, "{}", PROMPT_BOAT_NAME)?;
        output.flush()?;

        let name = match read_line(input)? {
            Some(name) => name,
            None => return Ok(()),
        };

        if self.inventory.remove(&name).is_err() {
            writeln!(output, "No boat with that name\n")?;
        }
        Ok(())
    }

    /// Prompt for a boat name and payment amount, then apply the payment
    ///
    /// The name is checked before the amount is asked for, so an unknown
    /// boat never prompts for money. The amount uses the same lenient
    /// parsing as the data file (non-numeric input pays zero).
    fn accept_payment<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<(), MarinaError> {
        write!(output, "{}", PROMPT_BOAT_NAME)?;
        output.flush()?;

        let name = match read_line(input)? {
            Some(name) => name,
            None => return Ok(()),
        };

        if self.inventory.find(&name).is_none() {
            writeln!(output, "No boat with that name\n")?;
            return Ok(());
        }

        write!(output, "{}", PROMPT_AMOUNT)?;
        output.flush()?;

        let amount_line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(()),
        };
        let amount = lenient_decimal(&amount_line);

        if let Err(MarinaError::PaymentExceedsBalance { owed }) =
            accept_payment(&mut self.inventory, &name, amount)
        {
            writeln!(
                output,
                "That is more than the amount owed, ${:.2}\n",
                owed
            )?;
        }
        Ok(())
    }
}

/// Format one boat as an inventory listing line
///
/// Layout: left-aligned name (20), length in whole feet (3) with a foot
/// mark, right-aligned location keyword (8) with its kind-specific value,
/// then the balance with two decimals in a 7-wide field.
pub fn format_boat_line(boat: &Boat) -> String {
    let location = match &boat.location {
        Location::Slip { number } => format!("{:>8}   # {:>2}", "slip", number),
        Location::Land { bay } => format!("{:>8}      {}", "land", bay),
        Location::Trailor { tag } => format!("{:>8} {:>6}", "trailor", tag),
        Location::Storage { space } => format!("{:>8}   # {:>2}", "storage", space),
    };

    format!(
        "{:<20} {:>3}' {}   Owes ${:>7}",
        boat.name,
        boat.length.round_dp(0),
        location,
        format!("{:.2}", boat.amount_owed),
    )
}

/// Read one line from the command stream, stripping the line ending
///
/// Returns `Ok(None)` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, MarinaError> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}
