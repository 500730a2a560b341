//! Error types for the Marina Boat Manager
//!
//! This module defines all error types that can occur while loading, editing,
//! and saving the inventory. Errors are designed to be descriptive and
//! user-friendly for interactive output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: data file missing, not writable, etc.
//! - **Record Errors**: malformed CSV line, unrecognized location keyword
//! - **Inventory Errors**: capacity reached, boat not found
//! - **Billing Errors**: payment exceeding the current balance

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the boat manager
///
/// Each variant includes the context needed to report the failure to the
/// user. Every variant except `IoError` is recoverable: the operation is
/// rejected, the inventory is unchanged, and control returns to the menu.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MarinaError {
    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A line in the data file could not be read as a CSV record
    ///
    /// Recoverable during load: the line is skipped and loading continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A record did not match the 5-field boat grammar
    ///
    /// Wrong field count or an empty field. Reported on interactive add,
    /// silently skipped on load.
    #[error("Invalid boat data format")]
    InvalidBoatData,

    /// The location keyword was not one of slip, land, trailor, storage
    #[error("Invalid location type '{keyword}'")]
    InvalidLocationType {
        /// The unrecognized keyword
        keyword: String,
    },

    /// The inventory is full
    #[error("Maximum number of boats ({capacity}) reached")]
    CapacityReached {
        /// The fixed inventory capacity
        capacity: usize,
    },

    /// No boat matched the requested name
    #[error("No boat with the name '{name}'")]
    BoatNotFound {
        /// The name that was searched for
        name: String,
    },

    /// A payment was larger than the boat's current balance
    ///
    /// The payment is rejected and the balance is unchanged.
    #[error("Payment exceeds amount owed: ${owed:.2}")]
    PaymentExceedsBalance {
        /// The boat's current balance
        owed: Decimal,
    },
}

// Conversion from io::Error to MarinaError
impl From<std::io::Error> for MarinaError {
    fn from(error: std::io::Error) -> Self {
        MarinaError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to MarinaError
impl From<csv::Error> for MarinaError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        MarinaError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl MarinaError {
    /// Create an InvalidLocationType error
    pub fn invalid_location_type(keyword: &str) -> Self {
        MarinaError::InvalidLocationType {
            keyword: keyword.to_string(),
        }
    }

    /// Create a CapacityReached error
    pub fn capacity_reached(capacity: usize) -> Self {
        MarinaError::CapacityReached { capacity }
    }

    /// Create a BoatNotFound error
    pub fn boat_not_found(name: &str) -> Self {
        MarinaError::BoatNotFound {
            name: name.to_string(),
        }
    }

    /// Create a PaymentExceedsBalance error
    pub fn payment_exceeds_balance(owed: Decimal) -> Self {
        MarinaError::PaymentExceedsBalance { owed }
    }
}
