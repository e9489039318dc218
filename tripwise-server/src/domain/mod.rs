//! Domain types for the fare comparison engine.
//!
//! Stations are immutable reference data; quotes are transient values
//! produced fresh for every estimation request.

mod quote;
mod station;

pub use quote::FareQuote;
pub use station::Station;
