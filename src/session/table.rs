//! A shareable table: one deck, one lock, one command set.
//!
//! Every command holds the deck lock for its whole run, so multi-step
//! commands (`placeon`, `moveallto`, `draw`) are atomic with respect to
//! each other. `reset` replaces the deck under the same lock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::commands::{CommandLine, CommandTable, Context, Invocation, Reply};
use crate::core::config::TableConfig;
use crate::core::rng::DeckRng;
use crate::deck::Deck;

/// Owner of the current deck.
///
/// `Table` is `Sync`; share it behind an `Arc` between transport threads.
///
/// ```
/// use dvorak_table::commands::{Context, Reply};
/// use dvorak_table::core::TableConfig;
/// use dvorak_table::session::Table;
///
/// let table = Table::new(&TableConfig::new().with_seed(42));
///
/// let reply = table.handle_line("alice", Context::Public, ".newcard Ace");
/// assert_eq!(reply, Some(Reply::Say("Card 1: Ace".into())));
///
/// assert_eq!(table.handle_line("alice", Context::Public, "hello"), None);
/// ```
#[derive(Debug)]
pub struct Table {
    deck: Mutex<Deck>,
    commands: CommandTable,
    prefix: String,
}

impl Table {
    /// Create a table with an empty deck and the standard commands.
    #[must_use]
    pub fn new(config: &TableConfig) -> Self {
        Self::with_commands(config, CommandTable::standard())
    }

    /// Create a table with a custom command set.
    #[must_use]
    pub fn with_commands(config: &TableConfig, commands: CommandTable) -> Self {
        let rng = DeckRng::from_seed_option(config.seed);
        debug!("table created, shuffle seed {}", rng.seed());
        Self {
            deck: Mutex::new(Deck::new(rng)),
            commands,
            prefix: config.command_prefix.clone(),
        }
    }

    /// Recovers the deck if a previous holder panicked; deck methods
    /// validate before mutating.
    fn lock(&self) -> MutexGuard<'_, Deck> {
        self.deck.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the deck.
    pub fn with_deck<R>(&self, f: impl FnOnce(&mut Deck) -> R) -> R {
        let mut deck = self.lock();
        f(&mut *deck)
    }

    /// Run a named command. `None` for unknown commands.
    pub fn dispatch(&self, name: &str, invocation: &Invocation<'_>) -> Option<Reply> {
        let mut deck = self.lock();
        self.commands.execute(&mut deck, name, invocation)
    }

    /// Parse a chat line and run it if it is a command.
    pub fn handle_line(&self, player: &str, context: Context, line: &str) -> Option<Reply> {
        let command = CommandLine::parse(line, &self.prefix)?;
        let invocation = Invocation::new(player, context, command.args);
        self.dispatch(command.name, &invocation)
    }

    /// Swap in a fresh deck.
    pub fn reset(&self) {
        self.lock().reset();
    }

    #[must_use]
    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new(&TableConfig::new().with_seed(7))
    }

    fn say(table: &Table, player: &str, line: &str) -> String {
        table
            .handle_line(player, Context::Public, line)
            .map(|r| r.text().to_string())
            .unwrap_or_default()
    }

    #[test]
    fn test_handle_line() {
        let table = table();
        assert_eq!(say(&table, "alice", ".newcard Ace"), "Card 1: Ace");
        assert_eq!(say(&table, "alice", ".move 1 draw"), "Card moved to pile: Draw pile.");
        assert_eq!(say(&table, "alice", ".draw"), "Card drawn.");
        assert_eq!(say(&table, "alice", ".listhand"), "Card 1: Ace");
    }

    #[test]
    fn test_custom_prefix() {
        let table = Table::new(&TableConfig::new().with_prefix("!"));
        assert_eq!(table.prefix(), "!");
        assert_eq!(say(&table, "alice", "!newcard Ace"), "Card 1: Ace");
        assert_eq!(table.handle_line("alice", Context::Public, ".newcard Ace"), None);
    }

    #[test]
    fn test_reset() {
        let table = table();
        say(&table, "alice", ".newcard Ace");
        table.reset();
        assert_eq!(table.with_deck(|deck| deck.card_count()), 0);
        assert_eq!(say(&table, "alice", ".newcard King"), "Card 1: King");
    }

    #[test]
    fn test_with_deck() {
        let table = table();
        let id = table.with_deck(|deck| deck.create_card("Ace"));
        assert_eq!(say(&table, "bob", &format!(".cardtitle {id}")), "Card 1: Ace");
    }

    #[test]
    fn test_table_is_sync() {
        fn assert_sync<T: Send + Sync>() {}
        assert_sync::<Table>();
    }
}
