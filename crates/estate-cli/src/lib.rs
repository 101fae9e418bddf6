//! Estate CLI - command line tools for estate drone planning.
//!
//! Binaries:
//! - drone_plan: plan a flight locally from a JSON estate file
//! - seed_estate: create and plant an estate on a running server

pub mod layout;
pub mod seed;

pub use layout::EstateLayout;
