use anyhow::Result;
use ratatui::prelude::*;
use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::clipboard::ClipboardSink;
use crate::config::AppConfig;
use crate::filter::{filter, Filtered};
use crate::help;
use crate::keys::{ControlKey, InputEvent, Key, KeySource};
use crate::selection::Selection;
use crate::ui;

pub const COPIED_MESSAGE: &str = "✓ Copied to clipboard!";

pub struct AppState<'a> {
    pub catalog: &'a Catalog,
    pub query: String,
    pub filtered: Filtered,
    pub selection: Selection,
    pub flash: Option<&'static str>,
    pub should_quit: bool,
}

pub enum Action {
    Copy(&'static str),
    ShowHelp(&'static str),
}

impl<'a> AppState<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        AppState {
            catalog,
            query: String::new(),
            filtered: filter(catalog, ""),
            selection: Selection::default(),
            flash: None,
            should_quit: false,
        }
    }

    pub fn selected_row(&self) -> Option<usize> {
        self.selection.selected_row(&self.filtered.selectable)
    }

    pub fn selected_combo(&self) -> Option<&'static str> {
        let row = self.selected_row()?;
        self.filtered.item_at(row).map(|entry| entry.combo)
    }

    /// Re-run the filter for the current query. The old selection never survives.
    fn refilter(&mut self) {
        self.filtered = filter(self.catalog, &self.query);
        self.selection.reset();
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_query(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refilter();
    }

    pub fn sync_viewport(&mut self, viewport_height: usize) {
        let count = self.filtered.selectable.len();
        self.selection.clamp(count);
        let selected = self.selected_row();
        self.selection
            .reveal(selected, viewport_height, self.filtered.rows.len());
    }
}

pub fn run<B, K, C>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    keys: &mut K,
    clipboard: &C,
    config: &AppConfig,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    K: KeySource,
    C: ClipboardSink,
{
    loop {
        draw(terminal, state)?;

        let key = match keys.next_input()? {
            InputEvent::Key(key) => key,
            InputEvent::Unrecognized | InputEvent::Refresh => continue,
        };
        if let Some(action) = handle_key_event(state, key) {
            process_action(terminal, state, action, keys, clipboard, config)?;
        }

        if state.should_quit {
            break;
        }
    }

    debug!(query = %state.query, "palette closed");
    Ok(())
}

pub fn draw<B>(terminal: &mut Terminal<B>, state: &mut AppState) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let size = terminal.size()?;
    let area = Rect::new(0, 0, size.width, size.height);
    state.sync_viewport(ui::palette::viewport_height(area, state.filtered.rows.len()));
    terminal.draw(|frame| ui::render(frame, state))?;
    Ok(())
}

fn process_action<B, K, C>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    action: Action,
    keys: &mut K,
    clipboard: &C,
    config: &AppConfig,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    K: KeySource,
    C: ClipboardSink,
{
    match action {
        Action::Copy(combo) => {
            if !clipboard.copy(combo) {
                debug!(combo, "copy failed, nothing shown");
                return Ok(());
            }
            state.flash = Some(COPIED_MESSAGE);
            let shown = draw(terminal, state);
            state.flash = None;
            shown?;
            std::thread::sleep(config.copied_flash);
        }
        Action::ShowHelp(combo) => {
            help::show(terminal, keys, state.catalog, combo)?;
        }
    }
    Ok(())
}

pub fn handle_key_event(state: &mut AppState, key: Key) -> Option<Action> {
    trace!(?key, "key");
    match key {
        Key::Control(ControlKey::Confirm) | Key::Control(ControlKey::Interrupt) => {
            state.should_quit = true;
            None
        }
        Key::Control(ControlKey::Cancel) => {
            if state.query.is_empty() {
                state.should_quit = true;
            } else {
                state.clear_query();
            }
            None
        }
        Key::Char('c' | 'C') if state.selected_combo().is_some() => {
            state.selected_combo().map(Action::Copy)
        }
        Key::Char('?') if state.selected_combo().is_some() => {
            state.selected_combo().map(Action::ShowHelp)
        }
        Key::Char(c) => {
            if !c.is_control() {
                state.push_query(c);
            }
            None
        }
        Key::Control(ControlKey::Backspace) => {
            state.pop_query();
            None
        }
        Key::Control(ControlKey::Up) => {
            state.selection.move_up(state.filtered.selectable.len());
            None
        }
        Key::Control(ControlKey::Down) => {
            state.selection.move_down(state.filtered.selectable.len());
            None
        }
        Key::Control(ControlKey::PageUp) => {
            state.selection.page_up(state.filtered.selectable.len());
            None
        }
        Key::Control(ControlKey::PageDown) => {
            state.selection.page_down(state.filtered.selectable.len());
            None
        }
    }
}
