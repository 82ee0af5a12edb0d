use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{anyhow, Result};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use shortcut_palette::clipboard::ClipboardSink;
use shortcut_palette::config::AppConfig;
use shortcut_palette::keys::{ControlKey, InputEvent, Key, KeySource};

/// Feeds a fixed list of events, then fails so a stuck loop cannot hang a test.
pub struct ScriptedKeys {
    events: VecDeque<InputEvent>,
}

impl ScriptedKeys {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_input(&mut self) -> Result<InputEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow!("key script exhausted"))
    }
}

pub fn typed(text: &str) -> Vec<InputEvent> {
    text.chars().map(|c| InputEvent::Key(Key::Char(c))).collect()
}

pub fn control(key: ControlKey) -> InputEvent {
    InputEvent::Key(Key::Control(key))
}

pub struct RecordingClipboard {
    succeed: bool,
    pub copied: RefCell<Vec<String>>,
}

impl RecordingClipboard {
    pub fn working() -> Self {
        Self {
            succeed: true,
            copied: RefCell::new(Vec::new()),
        }
    }

    pub fn broken() -> Self {
        Self {
            succeed: false,
            copied: RefCell::new(Vec::new()),
        }
    }
}

impl ClipboardSink for RecordingClipboard {
    fn copy(&self, text: &str) -> bool {
        self.copied.borrow_mut().push(text.to_string());
        self.succeed
    }
}

pub fn quick_config() -> AppConfig {
    AppConfig {
        copied_flash: Duration::ZERO,
        ..AppConfig::default()
    }
}

pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

/// Screen contents, one string per row.
pub fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
