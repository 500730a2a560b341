//! Marina Boat Manager Library
//! # Overview
//!
//! This library maintains an in-memory inventory of boats at a marina,
//! persisted to a delimited text file between runs, and drives an
//! interactive menu for managing it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Boat, Location, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::inventory`] - Owned, name-sorted boat collection
//!   - [`core::billing`] - Monthly charge accrual and payment acceptance
//! - [`io`] - Data file format and file access
//! - [`shell`] - Interactive menu session
//!
//! # Data flow
//!
//! ```text
//! file -> io (decode) -> core::Inventory <-> shell::Session -> io (encode) -> file
//! ```
//!
//! # Location kinds
//!
//! Every boat is kept in exactly one of four kinds of location, each with
//! its own identifier format and monthly per-foot rate:
//!
//! - **Slip**: numbered slip in the water, $12.50/foot
//! - **Land**: lettered work bay, $14.00/foot
//! - **Trailor**: license-tagged trailor, $25.00/foot
//! - **Storage**: numbered storage space, $11.20/foot

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod shell;
pub mod types;

pub use crate::core::{accept_payment, apply_monthly_charges, Inventory};
pub use crate::io::{load_boats, save_boats};
pub use crate::shell::Session;
pub use crate::types::{Boat, Location, MarinaError};
