//! Shared wire types for the aidswap client.
//!
//! Everything here mirrors what the remote aid-exchange API sends and
//! accepts. The crate has no platform dependencies so it can be tested
//! natively.

pub mod error;
pub mod models;
pub mod protocol;

pub use error::*;
pub use models::*;
