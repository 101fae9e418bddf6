//! Estate SDK - HTTP client for the estate server.

pub mod client;

pub use client::EstateClient;
