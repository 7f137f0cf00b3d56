//! Data model types for Amino.
//!
//! - Disambiguation and prefix bytes derived from registered names
//! - Time values

pub mod disfix;
pub mod time;

pub use disfix::{format_disfix, name_to_disfix, DisambBytes, PrefixBytes};
pub use time::Timestamp;
