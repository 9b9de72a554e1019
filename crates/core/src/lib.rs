//! Core types for inquiry-desk
//!
//! This crate contains the domain types shared across all other crates:
//! the inquiry record and its classification enums, the filter criteria
//! model, pagination metadata, and the stats snapshot.

mod constants;
mod error;
mod filter;
mod inquiry;
mod page;
mod stats;

pub use constants::*;
pub use error::*;
pub use filter::*;
pub use inquiry::*;
pub use page::*;
pub use stats::*;
