//! Billing module
//!
//! This module computes monthly charges and applies payments against boat
//! balances.
//!
//! Monthly rates, in dollars per foot:
//!
//! | Location | Rate  |
//! |----------|-------|
//! | Slip     | 12.50 |
//! | Land     | 14.00 |
//! | Trailor  | 25.00 |
//! | Storage  | 11.20 |
//!
//! Charges accumulate additively with no capping or proration. Payments are
//! validated before any balance changes: a payment larger than the current
//! balance is rejected outright.

use crate::core::inventory::Inventory;
use crate::types::MarinaError;
use rust_decimal::Decimal;

/// Apply one month of charges to every boat
///
/// For each boat, adds `length * monthly_rate(location)` to the amount
/// owed. Decimal arithmetic keeps the figures exact (a 30-foot slip boat
/// accrues exactly 375.00).
///
/// # Arguments
///
/// * `inventory` - The inventory to bill
pub fn apply_monthly_charges(inventory: &mut Inventory) {
    for boat in inventory.boats_mut() {
        let charge = boat.length * boat.location.monthly_rate();
        boat.amount_owed += charge;
    }
}

/// Accept a payment against one boat's balance
///
/// Locates the boat by case-insensitive name, validates the amount, and
/// subtracts it from the balance. The balance may reach exactly zero; it is
/// never forced to zero, so a negative residue from an earlier rounding is
/// kept as-is.
///
/// # Arguments
///
/// * `inventory` - The inventory holding the boat
/// * `name` - Boat name, matched case-insensitively
/// * `amount` - Payment amount in dollars
///
/// # Returns
///
/// * `Ok(Decimal)` - The new balance after the payment
/// * `Err(MarinaError::BoatNotFound)` - No boat matched the name
/// * `Err(MarinaError::PaymentExceedsBalance)` - The amount was larger than
///   the current balance; the balance is unchanged
pub fn accept_payment(
    inventory: &mut Inventory,
    name: &str,
    amount: Decimal,
) -> Result<Decimal, MarinaError> {
    let index = inventory
        .find(name)
        .ok_or_else(|| MarinaError::boat_not_found(name))?;
    let boat = inventory
        .get_mut(index)
        .ok_or_else(|| MarinaError::boat_not_found(name))?;

    if amount > boat.amount_owed {
        return Err(MarinaError::payment_exceeds_balance(boat.amount_owed));
    }

    boat.amount_owed -= amount;
    Ok(boat.amount_owed)
}
