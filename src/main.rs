//! Marina Boat Manager CLI
//!
//! Interactive command-line tool for managing the marina's boat inventory.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- boats.csv
//! ```
//!
//! The program loads boat records from the data file (a missing file starts
//! an empty inventory), runs the interactive menu over stdin/stdout, and
//! overwrites the data file with the final inventory on exit.
//!
//! # Exit Codes
//!
//! - 0: Success, including sessions that hit recoverable errors
//! - 1: Usage error (wrong argument count)

use marina_manager::cli;
use marina_manager::core::Inventory;
use marina_manager::io::{load_boats, save_boats};
use marina_manager::shell::Session;
use std::io::{self, Write};

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Load the inventory; a missing or unreadable file warns and starts empty
    let inventory = Inventory::from_boats(load_boats(&args.data_file));

    // Run the interactive session over stdin/stdout
    let mut session = Session::new(inventory);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    if let Err(e) = session.run(&mut input, &mut output) {
        eprintln!("Error: {}", e);
    }

    // One final save; a write failure is reported but the process still
    // exits normally
    if let Err(e) = save_boats(&args.data_file, session.inventory().boats()) {
        eprintln!("Error: {}", e);
    }

    let _ = writeln!(output, "\nExiting the Boat Management System");
}
