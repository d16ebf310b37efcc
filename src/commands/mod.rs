//! Chat commands over a deck.
//!
//! ## Key Types
//!
//! - `CommandLine`: splits `.name args` into its parts
//! - `Invocation`: nick, context and raw arguments of one command
//! - `Reply`: a message to say publicly or send as a notice
//! - `CommandTable`: the registered commands, with visibility and priority
//!
//! Handlers only see `&mut Deck`; serializing access to the deck is up to
//! the caller (see `session::Table`).

pub mod args;
pub mod handlers;
pub mod invocation;
pub mod registry;

pub use invocation::{CommandLine, Context, Invocation, Reply};
pub use registry::{CommandSpec, CommandTable, Handler, Priority, Visibility, PUBLIC_ONLY_NOTICE};
