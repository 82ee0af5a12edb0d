use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Confirm,
    Cancel,
    Backspace,
    Up,
    Down,
    PageUp,
    PageDown,
    Interrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Control(ControlKey),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// A key press the palette gives no meaning to.
    Unrecognized,
    /// Anything that is not a key press: resize, focus, mouse, key release.
    Refresh,
}

pub trait KeySource {
    /// Blocks until the terminal produces the next event.
    fn next_input(&mut self) -> Result<InputEvent>;
}

pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn next_input(&mut self) -> Result<InputEvent> {
        Ok(map_event(event::read()?))
    }
}

pub fn map_event(event: Event) -> InputEvent {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        _ => InputEvent::Refresh,
    }
}

fn map_key(key: KeyEvent) -> InputEvent {
    let control = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => ControlKey::Interrupt,
        KeyCode::Char(_)
            if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            return InputEvent::Unrecognized;
        }
        KeyCode::Char(c) => return InputEvent::Key(Key::Char(c)),
        KeyCode::Enter => ControlKey::Confirm,
        KeyCode::Esc => ControlKey::Cancel,
        KeyCode::Backspace | KeyCode::Delete => ControlKey::Backspace,
        KeyCode::Up => ControlKey::Up,
        KeyCode::Down => ControlKey::Down,
        KeyCode::PageUp => ControlKey::PageUp,
        KeyCode::PageDown => ControlKey::PageDown,
        _ => return InputEvent::Unrecognized,
    };
    InputEvent::Key(Key::Control(control))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn printable_characters_pass_through() {
        assert_eq!(
            map_event(press(KeyCode::Char('x'), KeyModifiers::NONE)),
            InputEvent::Key(Key::Char('x'))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            InputEvent::Key(Key::Char('C'))
        );
    }

    #[test]
    fn named_keys_map_to_controls() {
        let cases = [
            (KeyCode::Enter, ControlKey::Confirm),
            (KeyCode::Esc, ControlKey::Cancel),
            (KeyCode::Backspace, ControlKey::Backspace),
            (KeyCode::Delete, ControlKey::Backspace),
            (KeyCode::Up, ControlKey::Up),
            (KeyCode::Down, ControlKey::Down),
            (KeyCode::PageUp, ControlKey::PageUp),
            (KeyCode::PageDown, ControlKey::PageDown),
        ];
        for (code, control) in cases {
            assert_eq!(
                map_event(press(code, KeyModifiers::NONE)),
                InputEvent::Key(Key::Control(control))
            );
        }
    }

    #[test]
    fn ctrl_c_interrupts_and_other_chords_are_ignored() {
        assert_eq!(
            map_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputEvent::Key(Key::Control(ControlKey::Interrupt))
        );
        assert_eq!(
            map_event(press(KeyCode::Char('x'), KeyModifiers::ALT)),
            InputEvent::Unrecognized
        );
        assert_eq!(map_event(press(KeyCode::Tab, KeyModifiers::NONE)), InputEvent::Unrecognized);
        assert_eq!(map_event(press(KeyCode::F(1), KeyModifiers::NONE)), InputEvent::Unrecognized);
    }

    #[test]
    fn non_key_events_refresh() {
        assert_eq!(map_event(Event::Resize(80, 24)), InputEvent::Refresh);
        assert_eq!(map_event(Event::FocusGained), InputEvent::Refresh);

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_event(Event::Key(release)), InputEvent::Refresh);
    }
}
