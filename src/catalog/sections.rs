use super::{Category, ShortcutEntry};

const fn entry(combo: &'static str, description: &'static str) -> ShortcutEntry {
    ShortcutEntry { combo, description }
}

pub const SECTIONS: &[Category] = &[
    Category {
        name: "Reload",
        shortcuts: &[entry("Ctrl+Shift+F5", "Reload Kitty configuration")],
    },
    Category {
        name: "Windows & Splits",
        shortcuts: &[
            entry("Ctrl+Shift+Enter", "New window in current directory"),
            entry("Ctrl+Shift+W", "Close current window"),
            entry("Ctrl+Shift+-", "Horizontal split"),
            entry("Ctrl+Alt+H", "Horizontal split (AZERTY helper)"),
            entry("Ctrl+Shift+=", "Vertical split"),
            entry("Ctrl+Alt+V", "Vertical split (AZERTY helper)"),
            entry("Ctrl+Shift+Arrow Keys", "Focus neighbouring window"),
        ],
    },
    Category {
        name: "Tabs",
        shortcuts: &[
            entry("Ctrl+Shift+T", "Open new tab"),
            entry("Ctrl+Shift+Q", "Close current tab"),
            entry("Ctrl+Shift+[ / ]", "Previous / Next tab"),
            entry("Ctrl+1 … Ctrl+5", "Jump directly to tab 1-5"),
            entry("Ctrl+F1 … Ctrl+F5", "AZERTY tab selection"),
        ],
    },
    Category {
        name: "Scrollback & Search",
        shortcuts: &[
            entry("Ctrl+Shift+K / J", "Scroll one line up / down"),
            entry("Ctrl+Shift+PageUp / PageDown", "Scroll a full page"),
            entry("Ctrl+Shift+Home / End", "Jump to start / end"),
            entry("Ctrl+Shift+F", "Search scrollback"),
            entry("Ctrl+Shift+H", "Open scrollback in pager"),
        ],
    },
    Category {
        name: "Display & Appearance",
        shortcuts: &[
            entry("Ctrl+Shift++", "Increase font size"),
            entry("Ctrl+Shift+Backspace", "Reset font size"),
            entry("Ctrl+Alt+, / .", "Adjust opacity"),
            entry("Ctrl+Alt+0", "Reset opacity to 98%"),
            entry("Ctrl+Shift+F11", "Toggle fullscreen"),
            entry("Ctrl+Alt+O", "Toggle transparency preset"),
            entry("Ctrl+Alt+S", "Toggle scratchpad overlay"),
        ],
    },
    Category {
        name: "System Monitoring",
        shortcuts: &[
            entry("Ctrl+Alt+M", "Start title-bar system monitor"),
            entry("Ctrl+Alt+Shift+M", "Stop title-bar system monitor"),
            entry("Ctrl+Shift+G", "GPU monitor (nvidia-smi loop)"),
            entry("Ctrl+Shift+S", "Sensors monitor (lm-sensors loop)"),
        ],
    },
    Category {
        name: "Clipboard",
        shortcuts: &[
            entry("Ctrl+Shift+C", "Copy to clipboard"),
            entry("Ctrl+Shift+V", "Paste from clipboard"),
            entry("Shift+Insert", "Paste from selection"),
            entry("Middle Click", "Paste selection (mouse)"),
            entry("Ctrl+Alt+V", "Paste selection (keyboard)"),
            entry("Ctrl+Shift+Alt+V", "Force clipboard paste"),
            entry("Ctrl+Shift+Alt+C", "Copy and clear / send interrupt"),
            entry("Ctrl+Shift+P", "Paste without newlines"),
            entry("Ctrl+Shift+Alt+P", "Clipboard manager overlay"),
        ],
    },
    Category {
        name: "Utilities",
        shortcuts: &[
            entry("Ctrl+Shift+I", "Image viewer overlay"),
            entry("Ctrl+Shift+Space", "Command palette (hints kitten)"),
            entry("Ctrl+Shift+/", "Show shortcut palette"),
            entry("Ctrl+Shift+Escape", "Kitty shell window"),
            entry("Ctrl+Shift+U", "Unicode input"),
            entry("Ctrl+Alt+A", "Toggle agent overlay"),
            entry("Ctrl+Alt+Shift+A", "Focus agent overlay"),
            entry("Ctrl+Alt+Shift+H", "Toggle agent split (horizontal)"),
            entry("Ctrl+Alt+Shift+V", "Toggle agent split (vertical)"),
            entry("Ctrl+Alt+X", "Launch shared tmux session"),
            entry("Ctrl+Alt+M", "AI Agents Management TUI"),
            entry("Ctrl+Alt+F", "fzf Session Browser ⭐"),
            entry("Ctrl+Alt+K", "fzf Knowledge Base Search ⭐"),
            entry("Ctrl+Alt+P", "fzf Tmux Pane Switcher ⭐"),
            entry("Ctrl+Alt+L", "fzf Mode Quick Launcher ⭐"),
            entry("Ctrl+Alt+Shift+X", "Launch dual AI agents tmux"),
        ],
    },
    Category {
        name: "Metadata",
        shortcuts: &[
            entry("Theme", "True Neon (Electric Cyan / Hot Pink)"),
            entry("Security", "A+ hardened paste / remote control"),
        ],
    },
];
