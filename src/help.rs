use anyhow::Result;
use ratatui::prelude::*;
use tracing::debug;

use crate::catalog::Catalog;
use crate::keys::{InputEvent, KeySource};
use crate::ui;

/// Full-screen help for one combo. Returns on the first key press of any kind.
pub fn show<B, K>(terminal: &mut Terminal<B>, keys: &mut K, catalog: &Catalog, combo: &str) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    K: KeySource,
{
    let text = catalog.help_for(combo);
    debug!(combo, has_help = catalog.has_help(combo), "help overlay opened");

    loop {
        terminal.draw(|frame| ui::help_overlay::render(frame, combo, text))?;
        match keys.next_input()? {
            InputEvent::Key(_) | InputEvent::Unrecognized => break,
            InputEvent::Refresh => continue,
        }
    }

    debug!(combo, "help overlay dismissed");
    Ok(())
}
