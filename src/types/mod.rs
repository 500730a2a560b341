//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `boat`: Boat records and location payloads
//! - `error`: Error types for the boat manager

pub mod boat;
pub mod error;

pub use boat::{Boat, Location, MAX_BOATS, MAX_NAME_LEN, MAX_TAG_LEN};
pub use error::MarinaError;
