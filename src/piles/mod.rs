//! Piles and the dotted-path namespace that addresses them.
//!
//! ## Key Types
//!
//! - `Pile`: ordered card ids with a display name
//! - `PilePath`: a parsed `a.b.c` address
//! - `Namespace`/`Node`: the tree of namespaces and pile leaves

pub mod pile;
pub mod path;
pub mod namespace;

pub use pile::Pile;
pub use path::PilePath;
pub use namespace::{Namespace, Node};
