//! What a command receives and what it sends back.

use serde::{Deserialize, Serialize};

/// Where a command was typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Context {
    /// In a channel everyone at the table reads.
    Public,
    /// In a private message to the bot.
    Private,
}

/// One command invocation, as handed over by the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// Nick of the invoking player.
    pub player: &'a str,

    /// Public channel or private message.
    pub context: Context,

    /// Everything after the command name, if anything.
    pub args: Option<&'a str>,
}

impl<'a> Invocation<'a> {
    #[must_use]
    pub fn new(player: &'a str, context: Context, args: Option<&'a str>) -> Self {
        Self { player, context, args }
    }

    /// A public invocation.
    #[must_use]
    pub fn public(player: &'a str, args: Option<&'a str>) -> Self {
        Self::new(player, Context::Public, args)
    }

    /// A private invocation.
    #[must_use]
    pub fn private(player: &'a str, args: Option<&'a str>) -> Self {
        Self::new(player, Context::Private, args)
    }
}

/// A message for the transport to deliver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reply {
    /// Say in the channel the command came from.
    Say(String),
    /// Send a notice to one nick.
    Notice { to: String, text: String },
}

impl Reply {
    /// Answer through the channel the command arrived on: publicly in
    /// public, as a notice to the invoker in private.
    #[must_use]
    pub fn back(invocation: &Invocation<'_>, text: impl Into<String>) -> Self {
        match invocation.context {
            Context::Public => Reply::Say(text.into()),
            Context::Private => Reply::notice(invocation.player, text),
        }
    }

    #[must_use]
    pub fn notice(to: impl Into<String>, text: impl Into<String>) -> Self {
        Reply::Notice {
            to: to.into(),
            text: text.into(),
        }
    }

    /// The message text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Reply::Say(text) | Reply::Notice { text, .. } => text,
        }
    }
}

/// A chat line split into command name and arguments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub name: &'a str,
    pub args: Option<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Parse `<prefix><name>[ +<args>]`.
    ///
    /// Spaces between the name and the arguments are dropped; the
    /// arguments themselves are kept verbatim. Lines without the prefix or
    /// without a name are not commands.
    ///
    /// ```
    /// use dvorak_table::commands::CommandLine;
    ///
    /// let line = CommandLine::parse(".move  3 draw", ".").unwrap();
    /// assert_eq!(line.name, "move");
    /// assert_eq!(line.args, Some("3 draw"));
    ///
    /// assert_eq!(CommandLine::parse(".draw", ".").unwrap().args, None);
    /// assert!(CommandLine::parse("hello", ".").is_none());
    /// ```
    #[must_use]
    pub fn parse(line: &'a str, prefix: &str) -> Option<Self> {
        let rest = line.strip_prefix(prefix)?;
        let (name, args) = match rest.split_once(' ') {
            Some((name, args)) => (name, args.trim_start_matches(' ')),
            None => (rest, ""),
        };
        if name.is_empty() {
            return None;
        }
        let args = (!args.is_empty()).then_some(args);
        Some(Self { name, args })
    }
}
