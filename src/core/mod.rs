//! Core business logic module
//!
//! This module contains the core inventory and billing components:
//! - `inventory` - Owned, ordered boat collection with add/remove/find
//! - `billing` - Monthly charge accrual and payment acceptance

pub mod billing;
pub mod inventory;

pub use billing::{accept_payment, apply_monthly_charges};
pub use inventory::Inventory;
