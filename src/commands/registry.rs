//! Command table: name → handler, visibility and priority.
//!
//! The table is built once at startup and looked up by the dispatcher.
//!
//! ## Example
//!
//! ```
//! use dvorak_table::commands::{CommandTable, Invocation, Reply};
//! use dvorak_table::deck::Deck;
//!
//! let table = CommandTable::standard();
//! let mut deck = Deck::with_seed(42);
//!
//! let reply = table.execute(&mut deck, "newcard", &Invocation::public("alice", Some("Ace")));
//! assert_eq!(reply, Some(Reply::Say("Card 1: Ace".into())));
//!
//! let reply = table.execute(&mut deck, "where", &Invocation::private("alice", Some("1")));
//! assert_eq!(reply, Some(Reply::notice("alice", "This command can only be used in public.")));
//! ```

use log::warn;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::DeckError;
use crate::deck::Deck;

use super::handlers;
use super::invocation::{Context, Invocation, Reply};

/// Notice sent when a public-only command arrives privately.
pub const PUBLIC_ONLY_NOTICE: &str = "This command can only be used in public.";

/// Signature shared by every handler.
pub type Handler = fn(&mut Deck, &Invocation<'_>) -> Result<String, DeckError>;

/// Where a command may be invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    /// Public channels and private messages.
    Anywhere,
    /// Public channels only.
    PublicOnly,
}

impl Visibility {
    #[must_use]
    pub fn allows(self, context: Context) -> bool {
        match self {
            Visibility::Anywhere => true,
            Visibility::PublicOnly => context == Context::Public,
        }
    }
}

/// Ordering hint for a dispatcher that runs several bots' commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// One registered command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub handler: Handler,
    pub visibility: Visibility,
    pub priority: Priority,
}

impl CommandSpec {
    /// A public-only command with medium priority.
    #[must_use]
    pub fn new(name: &'static str, handler: Handler) -> Self {
        Self {
            name,
            handler,
            visibility: Visibility::PublicOnly,
            priority: Priority::default(),
        }
    }

    /// Allow private invocation too.
    #[must_use]
    pub fn anywhere(mut self) -> Self {
        self.visibility = Visibility::Anywhere;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Registry of commands by name.
#[derive(Clone, Debug, Default)]
pub struct CommandTable {
    commands: FxHashMap<&'static str, CommandSpec>,
}

impl CommandTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The full card-table command set.
    #[must_use]
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register(CommandSpec::new("newcard", handlers::new_card));
        table.register(CommandSpec::new("cardtitle", handlers::card_title).anywhere());
        table.register(CommandSpec::new("where", handlers::where_card));
        table.register(CommandSpec::new("move", handlers::move_card));
        table.register(CommandSpec::new("list", handlers::list_pile));
        table.register(CommandSpec::new("listhand", handlers::list_hand).anywhere());
        table.register(CommandSpec::new("shuffle", handlers::shuffle_pile));
        table.register(CommandSpec::new("draw", handlers::draw_card));
        table.register(CommandSpec::new("moveallto", handlers::move_all_to));
        table.register(CommandSpec::new("delete", handlers::delete_card));
        table.register(CommandSpec::new("placeon", handlers::place_on));
        table.register(CommandSpec::new("printallpiles", handlers::print_all_piles));
        table.register(CommandSpec::new("reset", handlers::reset_deck));
        table
    }

    /// Register a command.
    ///
    /// Panics if a command with the same name already exists.
    pub fn register(&mut self, spec: CommandSpec) {
        if self.commands.contains_key(spec.name) {
            panic!("Command {:?} already registered", spec.name);
        }
        self.commands.insert(spec.name, spec);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Command names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Run a command against `deck`.
    ///
    /// Returns `None` for unknown commands. Handler errors become error
    /// replies; the deck is left as the handler left it.
    pub fn execute(&self, deck: &mut Deck, name: &str, invocation: &Invocation<'_>) -> Option<Reply> {
        let spec = self.get(name)?;

        if !spec.visibility.allows(invocation.context) {
            warn!("{} tried public-only command {name:?} in private", invocation.player);
            return Some(Reply::notice(invocation.player, PUBLIC_ONLY_NOTICE));
        }

        let text = match (spec.handler)(deck, invocation) {
            Ok(text) => text,
            Err(err) => {
                warn!("command {name:?} from {} failed: {err}", invocation.player);
                err.reply_text().to_string()
            }
        };
        Some(Reply::back(invocation, text))
    }
}
