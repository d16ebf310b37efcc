//! Session ownership of the deck.
//!
//! - `Table`: lock-guarded deck plus the command table and prefix

pub mod table;

pub use table::Table;
