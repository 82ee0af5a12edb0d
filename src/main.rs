use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use shortcut_palette::app::{self, AppState};
use shortcut_palette::catalog::Catalog;
use shortcut_palette::clipboard::SystemClipboard;
use shortcut_palette::config;
use shortcut_palette::filter::{filter, DisplayRow};
use shortcut_palette::keys::CrosstermKeys;
use shortcut_palette::logging;
use shortcut_palette::terminal::TerminalGuard;

#[derive(Parser)]
#[command(name = "shortcut-palette", version, about = "Searchable palette of terminal shortcuts")]
struct Cli {
    /// Config file (default: ~/.config/shortcut-palette/config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Render the first frame and exit
    #[arg(long, default_value_t = false)]
    exit: bool,

    /// Print the shortcut list to stdout instead of opening the palette
    #[arg(long, default_value_t = false)]
    print: bool,

    /// Filter applied to --print
    #[arg(long, default_value = "")]
    query: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(cli.config.as_deref());
    logging::init(&config.log_file);
    debug!(?config, "starting");

    let catalog = Catalog::builtin();

    if cli.print {
        return print_shortcuts(&mut io::stdout().lock(), &catalog, &cli.query);
    }

    let clipboard = SystemClipboard::new(config.clipboard_backends.clone(), config.clipboard_timeout)?;
    let mut state = AppState::new(&catalog);

    // Terminal setup; dropping the guard restores it on every path
    let mut guard = TerminalGuard::acquire()?;
    let terminal = guard.terminal_mut();

    if cli.exit {
        return app::draw(terminal, &mut state);
    }

    app::run(terminal, &mut state, &mut CrosstermKeys, &clipboard, &config)
}

fn print_shortcuts(out: &mut impl Write, catalog: &Catalog, query: &str) -> Result<()> {
    for row in filter(catalog, query).rows {
        match row {
            DisplayRow::Category(name) => writeln!(out, "{name}")?,
            DisplayRow::Item { combo, description } => writeln!(out, "{:<24} {}", combo, description)?,
            DisplayRow::Empty(message) => writeln!(out, "{message}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn printed(query: &str) -> String {
        let mut out = Vec::new();
        print_shortcuts(&mut out, &Catalog::builtin(), query).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn print_lists_headers_and_padded_items() {
        let text = printed("tmux");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Utilities");
        assert!(lines.contains(&"Ctrl+Alt+X               Launch shared tmux session"));
    }

    #[test]
    fn print_reports_no_matches() {
        assert_eq!(printed("zzz_no_match"), "No shortcuts found\n");
    }
}
