//! Data file loading and saving
//!
//! The backing file is touched exactly twice per run: once to load the
//! inventory at startup and once to overwrite it at exit. There is no
//! incremental persistence in between.
//!
//! # Error Handling
//!
//! - A data file that cannot be opened for reading is a warning, not an
//!   error: the session starts with an empty inventory.
//! - Malformed lines are skipped silently during load; the rest of the file
//!   still loads.
//! - A destination that cannot be opened for writing is reported as an
//!   error; the in-memory inventory is unaffected.

use crate::io::csv_format::{decode_record, write_boats_csv};
use crate::types::{Boat, MarinaError, MAX_BOATS};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Load boat records from the data file
///
/// Reads every line, decoding each with the record codec and keeping only
/// the records that decode successfully, up to the fixed capacity of
/// [`MAX_BOATS`]. Malformed lines are dropped without surfacing an error.
///
/// # Arguments
///
/// * `path` - Path to the data file
///
/// # Returns
///
/// The decoded records in file order. A file that cannot be opened yields
/// an empty vector after a warning on stderr; per-line problems never fail
/// the load.
pub fn load_boats(path: &Path) -> Vec<Boat> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: could not open file {} for reading: {}",
                path.display(),
                e
            );
            return Vec::new();
        }
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut boats = Vec::new();
    for result in reader.records() {
        if boats.len() >= MAX_BOATS {
            break;
        }
        // Unreadable or malformed lines are skipped silently; the file is
        // user-edited and a bad line must not poison the rest
        let record = match result {
            Ok(record) => record,
            Err(_) => continue,
        };
        if let Ok(boat) = decode_record(&record) {
            boats.push(boat);
        }
    }

    boats
}

/// Overwrite the data file with every record in current order
///
/// # Arguments
///
/// * `path` - Destination path
/// * `boats` - Records to write, in the order they should appear
///
/// # Returns
///
/// * `Ok(())` if the file was written and flushed
/// * `Err(MarinaError::IoError)` if the destination could not be opened or
///   written; the in-memory inventory is unaffected either way
pub fn save_boats(path: &Path, boats: &[Boat]) -> Result<(), MarinaError> {
    let mut file = File::create(path).map_err(|e| MarinaError::IoError {
        message: format!(
            "could not open file {} for writing: {}",
            path.display(),
            e
        ),
    })?;

    write_boats_csv(boats, &mut file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary data file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_load_reads_all_valid_lines() {
        let file = create_temp_csv(
            "Jennifer,23,slip,24,1000.00\n\
             Horizon,14,trailor,TX1234,0.00\n",
        );

        let boats = load_boats(file.path());

        assert_eq!(boats.len(), 2);
        assert_eq!(boats[0].name, "Jennifer");
        assert_eq!(boats[1].name, "Horizon");
    }

    #[test]
    fn test_load_skips_malformed_lines() {
        let file = create_temp_csv(
            "Jennifer,23,slip,24,1000.00\n\
             Broken,14,trailor\n",
        );

        let boats = load_boats(file.path());

        assert_eq!(boats.len(), 1);
        assert_eq!(boats[0].name, "Jennifer");
    }

    #[test]
    fn test_load_skips_unknown_location_keyword() {
        let file = create_temp_csv(
            "Floating,25,dock,3,10.00\n\
             Skimmer,16,storage,33,60.00\n",
        );

        let boats = load_boats(file.path());

        assert_eq!(boats.len(), 1);
        assert_eq!(boats[0].name, "Skimmer");
    }

    #[test]
    fn test_load_missing_file_yields_empty() {
        let boats = load_boats(Path::new("definitely/not/a/real/file.csv"));
        assert!(boats.is_empty());
    }

    #[test]
    fn test_load_stops_at_capacity() {
        let mut content = String::new();
        for i in 0..MAX_BOATS + 5 {
            content.push_str(&format!("Boat{:03},20,slip,1,0.00\n", i));
        }
        let file = create_temp_csv(&content);

        let boats = load_boats(file.path());

        assert_eq!(boats.len(), MAX_BOATS);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let boats = vec![
            Boat {
                name: "Alice".to_string(),
                length: Decimal::from_str("20").unwrap(),
                location: Location::Slip { number: 5 },
                amount_owed: Decimal::from_str("100.00").unwrap(),
            },
            Boat {
                name: "Bob".to_string(),
                length: Decimal::from_str("15").unwrap(),
                location: Location::Land { bay: 'B' },
                amount_owed: Decimal::from_str("50.00").unwrap(),
            },
        ];

        let file = NamedTempFile::new().expect("Failed to create temp file");
        save_boats(file.path(), &boats).unwrap();

        let reloaded = load_boats(file.path());
        assert_eq!(reloaded, boats);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let file = create_temp_csv("Old,99,slip,1,9999.00\n");

        save_boats(file.path(), &[]).unwrap();

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_save_to_unwritable_path_reports_error() {
        let result = save_boats(Path::new("no/such/dir/boats.csv"), &[]);
        assert!(matches!(result, Err(MarinaError::IoError { .. })));
    }
}
