//! Shared library surface for estate server modules and tests.

pub mod api;
pub mod config;
pub mod persistence;
pub mod service;
pub mod state;
