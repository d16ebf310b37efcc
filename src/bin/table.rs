//! Line-driven card table.
//!
//! Reads `<nick> <public|private> <chat line>` from stdin, one per line,
//! runs commands in order and prints the replies:
//!
//! ```text
//! $ dvorak-table --seed 42
//! alice public .newcard Ace
//! say: Card 1: Ace
//! alice private .listhand
//! notice alice: empty
//! ```
//!
//! Set `RUST_LOG=debug` to trace card movement.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};
use clap::Parser;

use dvorak_table::commands::{Context, Reply};
use dvorak_table::core::TableConfig;
use dvorak_table::session::Table;

#[derive(Parser, Debug)]
#[command(name = "dvorak-table", about = "Run a card table from stdin")]
struct Args {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shuffle seed (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Command prefix (overrides the config file)
    #[arg(long)]
    prefix: Option<String>,
}

impl Args {
    fn table_config(&self) -> Result<TableConfig> {
        let mut config = match &self.config {
            Some(path) => TableConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => TableConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(prefix) = &self.prefix {
            config = config.with_prefix(prefix.clone());
        }
        Ok(config.validate()?)
    }
}

fn parse_input(line: &str) -> Result<(&str, Context, &str)> {
    let mut parts = line.splitn(3, ' ');
    let (Some(nick), Some(context), Some(text)) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected `<nick> <public|private> <line>`");
    };
    let context = match context {
        "public" => Context::Public,
        "private" => Context::Private,
        other => bail!("unknown context {other:?}"),
    };
    Ok((nick, context, text))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let table = Table::new(&args.table_config()?);
    log::info!(
        "table ready, prefix {:?}, commands: {}",
        table.prefix(),
        table.commands().names().join(", ")
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (nick, context, text) = match parse_input(&line) {
            Ok(parsed) => parsed,
            Err(err) => {
                log::warn!("skipping {line:?}: {err}");
                continue;
            }
        };
        match table.handle_line(nick, context, text) {
            Some(Reply::Say(text)) => writeln!(stdout, "say: {text}")?,
            Some(Reply::Notice { to, text }) => writeln!(stdout, "notice {to}: {text}")?,
            None => {}
        }
    }
    Ok(())
}
