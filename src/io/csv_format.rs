//! CSV format handling for boat records
//!
//! This module centralizes all data-file format concerns, providing:
//! - RawRecord structure for deserialization
//! - Conversion from raw records to the Boat domain type
//! - Encoding of boats back to the 5-field line format
//! - Lenient numeric parsing shared with the interactive shell
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # Line grammar
//!
//! One record per line, no header:
//!
//! ```text
//! name,length,locationKeyword,locationValue,amountOwed
//! ```
//!
//! A line with any other field count, or with an empty field, is rejected as
//! a whole. An unrecognized location keyword is a distinct error so the shell
//! can report it separately.
//!
//! # Lenient numerics
//!
//! Numeric fields deliberately parse the way C's `atof`/`atoi` do: the
//! longest leading numeric prefix is used, and text with no numeric prefix
//! yields zero instead of an error. This leniency is a documented design
//! point of the file format, not an accident.

use crate::types::{Boat, Location, MarinaError, MAX_NAME_LEN, MAX_TAG_LEN};
use csv::{ReaderBuilder, Writer};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Write;
use std::str::FromStr;

/// Raw record structure for deserialization
///
/// Matches the 5-field line format positionally (the data file has no
/// header). All fields are kept as strings so conversion can apply the
/// format's lenient numeric rules itself.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RawRecord {
    pub name: String,
    pub length: String,
    pub location_type: String,
    pub location_value: String,
    pub amount_owed: String,
}

/// Convert a RawRecord to a Boat
///
/// This function:
/// - Rejects records with any empty field
/// - Matches the location keyword case-insensitively
/// - Applies lenient numeric parsing to length, amount, and numeric payloads
/// - Truncates the name to 127 bytes and a trailor tag to 9 characters
///
/// # Arguments
///
/// * `raw` - The deserialized raw record
///
/// # Returns
///
/// * `Ok(Boat)` - Successfully converted record
/// * `Err(MarinaError::InvalidBoatData)` - An empty field was present
/// * `Err(MarinaError::InvalidLocationType)` - Unrecognized location keyword
pub fn convert_raw_record(raw: RawRecord) -> Result<Boat, MarinaError> {
    if raw.name.is_empty()
        || raw.length.is_empty()
        || raw.location_type.is_empty()
        || raw.location_value.is_empty()
        || raw.amount_owed.is_empty()
    {
        return Err(MarinaError::InvalidBoatData);
    }

    let location = match raw.location_type.to_lowercase().as_str() {
        "slip" => Location::Slip {
            number: lenient_int(&raw.location_value),
        },
        "land" => Location::Land {
            // Only the first character of the field is significant
            bay: match raw.location_value.chars().next() {
                Some(c) => c,
                None => return Err(MarinaError::InvalidBoatData),
            },
        },
        "trailor" => Location::Trailor {
            tag: raw.location_value.chars().take(MAX_TAG_LEN).collect(),
        },
        "storage" => Location::Storage {
            space: lenient_int(&raw.location_value),
        },
        other => return Err(MarinaError::invalid_location_type(other)),
    };

    Ok(Boat {
        name: truncate_bytes(&raw.name, MAX_NAME_LEN),
        length: lenient_decimal(&raw.length),
        location,
        amount_owed: lenient_decimal(&raw.amount_owed),
    })
}

/// Decode a single line of text into a Boat
///
/// Used by the interactive add path, where the user types one CSV line.
/// The line must contain exactly 5 fields; any deviation (including an
/// empty line) is reported as invalid boat data rather than silently
/// coerced.
///
/// # Arguments
///
/// * `line` - One line of text in the 5-field format (no trailing newline
///   required)
///
/// # Returns
///
/// * `Ok(Boat)` - Successfully decoded record
/// * `Err(MarinaError)` - Format or location-type error
pub fn decode_line(line: &str) -> Result<Boat, MarinaError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    let mut record = csv::StringRecord::new();
    let got_record = reader
        .read_record(&mut record)
        .map_err(|_| MarinaError::InvalidBoatData)?;
    if !got_record {
        return Err(MarinaError::InvalidBoatData);
    }

    decode_record(&record)
}

/// Decode one already-read CSV record into a Boat
///
/// Shared by the interactive add path and the file loader. Requires exactly
/// 5 fields; see [`convert_raw_record`] for the field rules.
pub fn decode_record(record: &csv::StringRecord) -> Result<Boat, MarinaError> {
    if record.len() != 5 {
        return Err(MarinaError::InvalidBoatData);
    }

    let raw: RawRecord = record
        .deserialize(None)
        .map_err(|_| MarinaError::InvalidBoatData)?;

    convert_raw_record(raw)
}

/// Encode a boat as the five fields of its data-file record
///
/// The length is written with no decimals (rounded), and the amount owed
/// with exactly two. Rounding the length here is the format's intentional
/// lossy step: decode(encode(boat)) reproduces the boat except for
/// fractional length precision.
pub fn encode_fields(boat: &Boat) -> [String; 5] {
    [
        boat.name.clone(),
        boat.length.round_dp(0).to_string(),
        boat.location.keyword().to_string(),
        boat.location.value_string(),
        format!("{:.2}", boat.amount_owed),
    ]
}

/// Encode a boat as one newline-terminated line of the data file
pub fn encode_line(boat: &Boat) -> String {
    let mut line = encode_fields(boat).join(",");
    line.push('\n');
    line
}

/// Write the whole inventory in data-file format
///
/// Writes one record per line, no header, in the boats' current order.
///
/// # Arguments
///
/// * `boats` - Slice of boat records to write
/// * `output` - Mutable reference to a writer
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(MarinaError)` if a write error occurred
pub fn write_boats_csv(boats: &[Boat], output: &mut dyn Write) -> Result<(), MarinaError> {
    let mut writer = Writer::from_writer(output);

    for boat in boats {
        writer.write_record(&encode_fields(boat))?;
    }

    writer.flush()?;
    Ok(())
}

/// Parse a dollar amount or length the way `atof` does
///
/// Takes the longest leading `[ws][sign]digits[.digits]` prefix; anything
/// without a numeric prefix parses as zero. `"12abc"` is 12, `"abc"` is 0.
pub fn lenient_decimal(input: &str) -> Decimal {
    let prefix = numeric_prefix(input, true);
    Decimal::from_str(&prefix).unwrap_or(Decimal::ZERO)
}

/// Parse a slip or storage number the way `atoi` does
pub fn lenient_int(input: &str) -> i32 {
    let prefix = numeric_prefix(input, false);
    prefix.parse::<i32>().unwrap_or(0)
}

/// Extract the leading numeric prefix of a string
///
/// Skips leading whitespace, then accepts an optional sign, digits, and (if
/// `allow_fraction`) one decimal point. Returns an empty string when no
/// digit is found. The result is normalized so the standard parsers accept
/// it (`.5` becomes `0.5`, a trailing `.` is dropped).
fn numeric_prefix(input: &str, allow_fraction: bool) -> String {
    let mut out = String::new();
    let mut chars = input.trim_start().chars().peekable();

    if let Some(&c) = chars.peek() {
        if c == '+' || c == '-' {
            out.push(c);
            chars.next();
        }
    }

    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            out.push(c);
            seen_digit = true;
        } else if c == '.' && allow_fraction && !seen_dot {
            out.push(c);
            seen_dot = true;
        } else {
            break;
        }
        chars.next();
    }

    if !seen_digit {
        return String::new();
    }
    if out.ends_with('.') {
        out.pop();
    }
    if out.starts_with('.') {
        out.insert(0, '0');
    } else if out.starts_with("+.") || out.starts_with("-.") {
        out.insert(1, '0');
    }
    out
}

/// Truncate a string to at most `max` bytes without splitting a character
fn truncate_bytes(input: &str, max: usize) -> String {
    if input.len() <= max {
        return input.to_string();
    }
    let mut end = max;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    input[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[rstest]
    #[case::slip("Jennifer,23,slip,24,1000.00",
        Boat {
            name: "Jennifer".to_string(),
            length: dec("23"),
            location: Location::Slip { number: 24 },
            amount_owed: dec("1000.00"),
        })]
    #[case::land("Knot,40,land,E,100.00",
        Boat {
            name: "Knot".to_string(),
            length: dec("40"),
            location: Location::Land { bay: 'E' },
            amount_owed: dec("100.00"),
        })]
    #[case::trailor("Horizon,14,trailor,TX1234,0.00",
        Boat {
            name: "Horizon".to_string(),
            length: dec("14"),
            location: Location::Trailor { tag: "TX1234".to_string() },
            amount_owed: dec("0.00"),
        })]
    #[case::storage("Skimmer,16,storage,33,60.00",
        Boat {
            name: "Skimmer".to_string(),
            length: dec("16"),
            location: Location::Storage { space: 33 },
            amount_owed: dec("60.00"),
        })]
    #[case::keyword_case_insensitive("Gypsy,28,SLIP,12,0.00",
        Boat {
            name: "Gypsy".to_string(),
            length: dec("28"),
            location: Location::Slip { number: 12 },
            amount_owed: dec("0.00"),
        })]
    #[case::fractional_length_kept_in_memory("Drifter,23.7,slip,5,10.00",
        Boat {
            name: "Drifter".to_string(),
            length: dec("23.7"),
            location: Location::Slip { number: 5 },
            amount_owed: dec("10.00"),
        })]
    fn test_decode_valid_lines(#[case] line: &str, #[case] expected: Boat) {
        assert_eq!(decode_line(line).unwrap(), expected);
    }

    #[rstest]
    #[case::missing_field("Jennifer,23,slip,24")]
    #[case::extra_field("Jennifer,23,slip,24,1000.00,extra")]
    #[case::empty_field("Jennifer,,slip,24,1000.00")]
    #[case::empty_value_field("Jennifer,23,slip,,1000.00")]
    #[case::empty_line("")]
    fn test_decode_rejects_malformed(#[case] line: &str) {
        assert_eq!(decode_line(line), Err(MarinaError::InvalidBoatData));
    }

    #[test]
    fn test_decode_rejects_unknown_keyword() {
        assert_eq!(
            decode_line("Jennifer,23,dock,24,1000.00"),
            Err(MarinaError::invalid_location_type("dock"))
        );
    }

    #[test]
    fn test_decode_truncates_trailor_tag() {
        let boat = decode_line("Big,30,trailor,ABCDEFGHIJKL,0.00").unwrap();
        assert_eq!(
            boat.location,
            Location::Trailor {
                tag: "ABCDEFGHI".to_string()
            }
        );
    }

    #[test]
    fn test_decode_truncates_long_name() {
        let long_name = "N".repeat(200);
        let line = format!("{},20,slip,1,0.00", long_name);
        let boat = decode_line(&line).unwrap();
        assert_eq!(boat.name.len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_decode_land_takes_first_char_only() {
        let boat = decode_line("Dock Holiday,26,land,Bay,0.00").unwrap();
        assert_eq!(boat.location, Location::Land { bay: 'B' });
    }

    // Lenient numeric parsing (atof/atoi semantics)
    #[rstest]
    #[case::plain("23", "23")]
    #[case::fractional("23.7", "23.7")]
    #[case::leading_ws("  23.7", "23.7")]
    #[case::negative("-5.25", "-5.25")]
    #[case::explicit_positive("+5", "5")]
    #[case::trailing_garbage("12abc", "12")]
    #[case::second_dot_stops("1.2.3", "1.2")]
    #[case::bare_dot_prefix(".5", "0.5")]
    #[case::trailing_dot("12.", "12")]
    #[case::non_numeric("abc", "0")]
    #[case::empty("", "0")]
    #[case::sign_only("-", "0")]
    fn test_lenient_decimal(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(lenient_decimal(input), dec(expected));
    }

    #[rstest]
    #[case::plain("24", 24)]
    #[case::stops_at_dot("24.9", 24)]
    #[case::trailing_garbage("7B", 7)]
    #[case::negative("-3", -3)]
    #[case::non_numeric("B", 0)]
    fn test_lenient_int(#[case] input: &str, #[case] expected: i32) {
        assert_eq!(lenient_int(input), expected);
    }

    #[rstest]
    #[case::slip(
        Boat {
            name: "Jennifer".to_string(),
            length: dec("23"),
            location: Location::Slip { number: 24 },
            amount_owed: dec("1000"),
        },
        "Jennifer,23,slip,24,1000.00\n"
    )]
    #[case::length_rounded(
        Boat {
            name: "Drifter".to_string(),
            length: dec("23.7"),
            location: Location::Land { bay: 'A' },
            amount_owed: dec("0"),
        },
        "Drifter,24,land,A,0.00\n"
    )]
    #[case::trailor(
        Boat {
            name: "Horizon".to_string(),
            length: dec("14"),
            location: Location::Trailor { tag: "TX1234".to_string() },
            amount_owed: dec("0"),
        },
        "Horizon,14,trailor,TX1234,0.00\n"
    )]
    #[case::negative_balance(
        Boat {
            name: "Skimmer".to_string(),
            length: dec("16"),
            location: Location::Storage { space: 33 },
            amount_owed: dec("-0.01"),
        },
        "Skimmer,16,storage,33,-0.01\n"
    )]
    fn test_encode_line(#[case] boat: Boat, #[case] expected: &str) {
        assert_eq!(encode_line(&boat), expected);
    }

    /// decode -> encode -> decode must be idempotent once the initial
    /// length rounding has happened
    #[rstest]
    #[case("Jennifer,23,slip,24,1000.00")]
    #[case("Drifter,23.7,land,A,15.50")]
    #[case("Horizon,14,trailor,TX1234,0.00")]
    #[case("Skimmer,16,storage,33,60.00")]
    fn test_round_trip_idempotent(#[case] line: &str) {
        let first = decode_line(line).unwrap();
        let second = decode_line(encode_line(&first).trim_end()).unwrap();
        let third = decode_line(encode_line(&second).trim_end()).unwrap();

        // Length rounding happens on the first encode; after that the
        // textual form is a fixed point
        assert_eq!(second, third);
        assert_eq!(encode_line(&second), encode_line(&third));
        assert_eq!(first.name, second.name);
        assert_eq!(first.location, second.location);
        assert_eq!(first.amount_owed, second.amount_owed);
    }

    #[test]
    fn test_write_boats_csv() {
        let boats = vec![
            Boat {
                name: "Alice".to_string(),
                length: dec("20"),
                location: Location::Slip { number: 5 },
                amount_owed: dec("100"),
            },
            Boat {
                name: "Bob".to_string(),
                length: dec("15"),
                location: Location::Land { bay: 'B' },
                amount_owed: dec("50"),
            },
        ];

        let mut output = Vec::new();
        write_boats_csv(&boats, &mut output).unwrap();

        let written = String::from_utf8(output).unwrap();
        assert_eq!(written, "Alice,20,slip,5,100.00\nBob,15,land,B,50.00\n");
    }

    #[test]
    fn test_write_boats_csv_empty_inventory() {
        let mut output = Vec::new();
        write_boats_csv(&[], &mut output).unwrap();
        assert!(output.is_empty());
    }
}
