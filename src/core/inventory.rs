//! Inventory management module
//!
//! This module provides the `Inventory` struct which owns every boat record
//! for the session and keeps them in name order.
//!
//! The Inventory is responsible for:
//! - Owning the boat records (constructed at startup, mutated during the
//!   session, written out at exit)
//! - Keeping the collection sorted by name after every insertion
//! - Enforcing the fixed capacity
//! - Case-insensitive first-match lookup and removal
//!
//! Name uniqueness is deliberately NOT enforced: duplicates are possible,
//! and lookups return the first case-insensitive match in sort order.

use crate::types::{Boat, MarinaError, MAX_BOATS};

/// Owned, ordered collection of boat records
///
/// The collection is kept sorted by name (ASCII-case-insensitive, ties
/// broken by byte order) after every load and every add. Removal compacts
/// the collection, preserving the relative order of the remaining records.
#[derive(Debug, Default)]
pub struct Inventory {
    /// Boat records in sort order
    boats: Vec<Boat>,
}

impl Inventory {
    /// Fixed maximum number of boats the inventory will hold
    pub const CAPACITY: usize = MAX_BOATS;

    /// Create an empty inventory
    pub fn new() -> Self {
        Inventory { boats: Vec::new() }
    }

    /// Build an inventory from already-decoded records
    ///
    /// Records beyond the fixed capacity are dropped; the rest are sorted
    /// by name. Used by the file loader after it has filtered out
    /// malformed lines.
    ///
    /// # Arguments
    ///
    /// * `boats` - Decoded records in file order
    pub fn from_boats(mut boats: Vec<Boat>) -> Self {
        boats.truncate(Self::CAPACITY);
        let mut inventory = Inventory { boats };
        inventory.sort();
        inventory
    }

    /// All boats in current (sorted) order
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    /// Mutable access to the boats, for billing updates
    ///
    /// A slice cannot change the collection's length, so capacity and
    /// compaction invariants are preserved.
    pub fn boats_mut(&mut self) -> &mut [Boat] {
        &mut self.boats
    }

    /// Number of boats currently held
    pub fn len(&self) -> usize {
        self.boats.len()
    }

    /// Whether the inventory is empty
    pub fn is_empty(&self) -> bool {
        self.boats.is_empty()
    }

    /// Add a boat and re-sort the collection
    ///
    /// No uniqueness check is performed; adding a boat whose name already
    /// exists creates a duplicate.
    ///
    /// # Arguments
    ///
    /// * `boat` - The decoded record to insert
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The boat was inserted
    /// * `Err(MarinaError::CapacityReached)` - The inventory is full; the
    ///   collection is unchanged
    pub fn add(&mut self, boat: Boat) -> Result<(), MarinaError> {
        if self.boats.len() >= Self::CAPACITY {
            return Err(MarinaError::capacity_reached(Self::CAPACITY));
        }

        self.boats.push(boat);
        self.sort();
        Ok(())
    }

    /// Find the first boat matching a name, case-insensitively
    ///
    /// Linear scan in sort order.
    ///
    /// # Arguments
    ///
    /// * `name` - The name to search for
    ///
    /// # Returns
    ///
    /// The index of the first match, or `None` if no boat matches
    pub fn find(&self, name: &str) -> Option<usize> {
        self.boats
            .iter()
            .position(|boat| boat.name.eq_ignore_ascii_case(name))
    }

    /// Mutable access to one boat by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Boat> {
        self.boats.get_mut(index)
    }

    /// Remove the first boat matching a name, case-insensitively
    ///
    /// Compacts the collection, preserving the relative order of the
    /// remaining boats.
    ///
    /// # Arguments
    ///
    /// * `name` - The name to search for
    ///
    /// # Returns
    ///
    /// * `Ok(Boat)` - The removed record
    /// * `Err(MarinaError::BoatNotFound)` - No match; the collection is
    ///   unchanged
    pub fn remove(&mut self, name: &str) -> Result<Boat, MarinaError> {
        match self.find(name) {
            Some(index) => Ok(self.boats.remove(index)),
            None => Err(MarinaError::boat_not_found(name)),
        }
    }

    /// Restore the name-sort invariant
    ///
    /// Stable sort; the case-insensitive comparison breaks ties by byte
    /// order, so the result is deterministic either way.
    fn sort(&mut self) {
        self.boats.sort_by(|a, b| Boat::name_cmp(&a.name, &b.name));
    }
}
