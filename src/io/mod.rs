//! I/O module
//!
//! Handles the data-file format and file access.
//!
//! # Components
//!
//! - `csv_format` - record codec (decode, encode, lenient numeric parsing)
//! - `file_store` - loading and overwriting the backing data file

pub mod csv_format;
pub mod file_store;

pub use csv_format::{decode_line, encode_line, lenient_decimal, write_boats_csv};
pub use file_store::{load_boats, save_boats};
