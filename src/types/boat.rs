//! Boat record types for the Marina Boat Manager
//!
//! This module defines the `Boat` record and the `Location` tagged union used
//! throughout the system. Each boat carries exactly one location payload
//! matching its location kind; there is no implicit conversion between kinds.

use rust_decimal::Decimal;

/// Maximum number of boats the inventory will hold
pub const MAX_BOATS: usize = 120;

/// Maximum stored length of a boat name, in bytes
///
/// Longer names are truncated on decode rather than rejected.
pub const MAX_NAME_LEN: usize = 127;

/// Maximum stored length of a trailor license tag, in characters
pub const MAX_TAG_LEN: usize = 9;

/// Where a boat is kept at the marina
///
/// Each variant carries only its own payload, so reading the wrong payload
/// kind is impossible. Slip numbers (expected 1-85), storage spaces
/// (expected 1-50), and bay letters (expected A-Z) are documented ranges but
/// deliberately unvalidated; see the codec for the matching leniency in
/// numeric parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A numbered slip in the water
    Slip {
        /// Slip number (expected 1-85, unvalidated)
        number: i32,
    },

    /// On land for work, in a lettered bay
    Land {
        /// Bay letter (expected A-Z, unvalidated)
        bay: char,
    },

    /// On a trailor, identified by its license tag
    Trailor {
        /// License tag, truncated to [`MAX_TAG_LEN`] characters
        tag: String,
    },

    /// A numbered indoor storage space
    Storage {
        /// Storage space number (expected 1-50, unvalidated)
        space: i32,
    },
}

impl Location {
    /// The keyword used for this location kind in the data file
    ///
    /// These are the exact strings the codec matches (case-insensitively)
    /// on decode and writes on encode. "trailor" is the file format's
    /// spelling.
    pub fn keyword(&self) -> &'static str {
        match self {
            Location::Slip { .. } => "slip",
            Location::Land { .. } => "land",
            Location::Trailor { .. } => "trailor",
            Location::Storage { .. } => "storage",
        }
    }

    /// Monthly rate for this location kind, in dollars per foot
    ///
    /// # Returns
    ///
    /// * Slip: 12.50
    /// * Land: 14.00
    /// * Trailor: 25.00
    /// * Storage: 11.20
    pub fn monthly_rate(&self) -> Decimal {
        match self {
            Location::Slip { .. } => Decimal::new(1250, 2),
            Location::Land { .. } => Decimal::new(1400, 2),
            Location::Trailor { .. } => Decimal::new(2500, 2),
            Location::Storage { .. } => Decimal::new(1120, 2),
        }
    }

    /// The location-specific value as written in the data file
    pub fn value_string(&self) -> String {
        match self {
            Location::Slip { number } => number.to_string(),
            Location::Land { bay } => bay.to_string(),
            Location::Trailor { tag } => tag.clone(),
            Location::Storage { space } => space.to_string(),
        }
    }
}

/// One boat record as stored in the inventory and in the persisted file
///
/// Lengths and dollar amounts use `Decimal` so billing arithmetic is exact.
/// The in-memory `length` keeps full precision; it is rounded to a whole
/// number of feet only when the record is encoded for the data file.
#[derive(Debug, Clone, PartialEq)]
pub struct Boat {
    /// Boat name; lookups are case-insensitive first-match, and uniqueness
    /// is not enforced
    pub name: String,

    /// Length in feet (positive, full precision until encoded)
    pub length: Decimal,

    /// Where the boat is kept, with its kind-specific payload
    pub location: Location,

    /// Running balance of unpaid charges, in dollars
    ///
    /// Increased by monthly billing, decreased by payments. May be negative
    /// (rounding residue from payments is kept as-is).
    pub amount_owed: Decimal,
}

impl Boat {
    /// Compare two boat names the way the inventory orders them
    ///
    /// ASCII-case-insensitive, with ties broken by underlying byte order so
    /// the sort is total and deterministic.
    pub fn name_cmp(a: &str, b: &str) -> std::cmp::Ordering {
        a.to_ascii_lowercase()
            .cmp(&b.to_ascii_lowercase())
            .then_with(|| a.cmp(b))
    }
}
