pub const HELP_TEXTS: &[(&str, &str)] = &[
    (
        "Ctrl+Alt+X",
        r#"Shared Tmux Session Launcher

Creates or attaches to a shared tmux session with two vertical panes.
Multiple Kitty windows can join the same session for collaborative work.

Session name: kitty-shared (configurable via KITTY_TMUX_SESSION)
Layout: even-vertical (configurable via KITTY_TMUX_LAYOUT)

To detach: Ctrl+B, then D
To create new window in tmux: Ctrl+B, then C"#,
    ),
    (
        "Ctrl+Alt+A",
        r#"Agent Terminal Overlay

Opens a dedicated overlay window for running agent commands without
interrupting your main terminal workflow.

Commands can be sent to the agent via:
- agent-terminal.sh run "command"
- agent-terminal.sh pipe < script.sh

Toggle modes with environment variables:
- KITTY_AGENT_LAUNCH_MODE=overlay (default)
- KITTY_AGENT_LAUNCH_MODE=hsplit
- KITTY_AGENT_LAUNCH_MODE=vsplit"#,
    ),
    (
        "Ctrl+Shift+/",
        r#"Shortcuts Palette

This interactive menu! Features:
- Live search by typing
- Copy shortcut with 'c' key
- View extended help with '?' key
- Navigate with arrow keys or Page Up/Down"#,
    ),
    (
        "Ctrl+Alt+M",
        r#"AI Agents Management TUI

Interactive terminal user interface for managing all AI agent features.

MAIN MENU:
1. 🚀 Start Collaboration Mode
   - Pair Programming (driver/navigator)
   - Debate (structured discussion)
   - Teaching (expert/learner)
   - Consensus (agreement required)
   - Competition (best solution wins)

2. 💾 Session Management
   - View current mode status
   - Save current session
   - Browse saved sessions
   - View session history

3. 📚 Knowledge Base
   - Add docs/snippets/decisions/patterns
   - Search knowledge base
   - Record lessons learned

4. ⚡ Quick Actions
   - Launch tmux session
   - View system status
   - Help & documentation

NAVIGATION:
• Arrow keys - Navigate menus
• Enter - Select option
• Esc/Cancel - Go back
• Tab - Switch fields in forms

FEATURES:
• Guided mode setup with prompts
• Visual status indicators
• Integration with all helper commands
• Session snapshot management
• Knowledge base browser

This TUI simplifies managing all AI agent collaboration features
through an intuitive menu-driven interface."#,
    ),
    (
        "Ctrl+Alt+F",
        r#"fzf Session Browser (⭐ NEW!)

Interactive fuzzy finder for browsing and restoring saved AI agent sessions.

FEATURES:
• Fuzzy matching - typo-tolerant search
• Live preview - see metadata + pane contents
• Tmux popup - non-intrusive overlay (tmux 3.2+)
• Syntax highlighting - with bat/batcat
• Keyboard navigation - Ctrl-D/U/F/B

SESSION PREVIEW:
Shows session metadata (name, date, mode, description) and
first 15 lines of each agent pane.

NAVIGATION:
• Type to search (fuzzy matching)
• Arrow keys to navigate
• Enter to restore session
• Ctrl-D/U - scroll preview half-page
• Ctrl-F/B - scroll preview full-page
• Esc to cancel

EXAMPLE USAGE:
1. Press Ctrl+Alt+F
2. Type "pair prog" to find pair programming sessions
3. Arrow keys to preview different sessions
4. Enter to restore selected session

10x faster than manual ls + cat workflow!"#,
    ),
    (
        "Ctrl+Alt+K",
        r#"fzf Knowledge Base Search (⭐ NEW!)

Interactive fuzzy finder for searching and browsing the AI agents
knowledge base with syntax highlighting.

FEATURES:
• Fuzzy matching - find entries despite typos
• Live preview - syntax highlighted with bat
• Multi-select - Tab to select multiple entries
• Metadata extraction - title, type, tags from frontmatter
• Icon coding - 📄 doc, 💻 snippet, ⚖️ decision, 🔷 pattern
• Custom actions - Ctrl-O to edit, Ctrl-Y to copy

ENTRY TYPES:
📄 doc - Documentation and guides
💻 snippet - Code snippets and examples
⚖️ decision - Architecture Decision Records
🔷 pattern - Design patterns and best practices

NAVIGATION:
• Type to search (fuzzy matching)
• Arrow keys to navigate
• Tab to multi-select
• Enter to view selected entries
• Ctrl-O - open in editor
• Ctrl-Y - copy to clipboard
• Ctrl-D/U/F/B - scroll preview

EXAMPLE USAGE:
1. Press Ctrl+Alt+K
2. Type "tmux" to find tmux-related entries
3. Tab to select multiple entries
4. Enter to view all selected

Perfect for quickly finding patterns, decisions, and snippets!"#,
    ),
    (
        "Ctrl+Alt+P",
        r#"fzf Tmux Pane Switcher (⭐ NEW!)

Interactive fuzzy finder for switching between tmux panes with
live content preview.

FEATURES:
• Shows all panes across all windows
• Live preview of pane content (last 50 lines)
• Active pane indicator
• Pane metadata (window name, command, size)
• Quick switching with Enter
• Keyboard navigation

PANE INFORMATION:
• Pane ID (e.g., %0, %1, %2)
• Window name
• Current command running in pane
• Pane dimensions (width x height)
• Active status indicator (▶)

NAVIGATION:
• Type to search panes by window/command
• Arrow keys to navigate
• Enter to switch to selected pane
• Ctrl-D/U/F/B - scroll preview
• Ctrl-R - refresh pane list
• Esc to cancel

EXAMPLE USAGE:
1. Press Ctrl+Alt+P (in tmux session)
2. Type "vim" to find panes running vim
3. Arrow keys to preview pane contents
4. Enter to switch to that pane

REQUIREMENTS:
• Must be run inside a tmux session
• Works with any tmux layout
• Supports multiple windows and sessions

Perfect for quickly navigating complex tmux layouts!"#,
    ),
    (
        "Ctrl+Alt+L",
        r#"fzf Mode Quick Launcher (⭐ NEW!)

Interactive fuzzy finder for selecting and launching AI collaboration
modes with comprehensive descriptions and examples.

AVAILABLE MODES:
🎯 pair-programming - Driver/Navigator collaboration
💬 debate - Structured thesis-antithesis-synthesis
🎓 teaching - Expert teaches learner
🤝 consensus - Agreement-based collaboration
⚔️  competition - Independent solutions compared

MODE PREVIEWS:
Each mode shows:
• Concept explanation
• Role descriptions
• Best use cases
• Detailed workflow
• Example scenarios
• Launch commands

NAVIGATION:
• Type to search modes
• Arrow keys to browse
• Enter to launch selected mode
• Ctrl-D/U/F/B - scroll preview
• Esc to cancel

EXAMPLE USAGE:
1. Press Ctrl+Alt+L
2. Type "pair" to find pair programming
3. Read the preview with workflow details
4. Enter to launch the mode

MODE DESCRIPTIONS:
• Pair Programming: Real-time code review
• Debate: Explore multiple perspectives
• Teaching: Knowledge transfer session
• Consensus: Build agreement on decisions
• Competition: Compare independent solutions

Launches ai-mode-start.sh with selected mode automatically!"#,
    ),
    (
        "Ctrl+Alt+Shift+X",
        r#"Dual AI Agents Tmux Session

Creates a specialized tmux layout for running two AI agents with
shared communication capabilities.

Layout (3 panes):
  ┌─────────────────────────────────┐
  │  Agent 1 Input Terminal (30%)  │
  ├─────────────────────────────────┤
  │  Agent 2 Input Terminal (30%)  │
  ├─────────────────────────────────┤
  │  Shared Output/Comm (40%)       │
  └─────────────────────────────────┘

Communication Methods:
1. Shared File: /tmp/ai-agents-shared.txt
   - Agent 1: echo "message" > /tmp/ai-agents-shared.txt
   - Agent 2: cat /tmp/ai-agents-shared.txt
   - Shared pane shows: tail -f /tmp/ai-agents-shared.txt

2. Helper Scripts:
   - ai-agent-send.sh <agent-id> <message>
   - ai-agent-broadcast.sh <message>

Tmux Navigation:
- Ctrl+B, Arrow Keys - Switch between panes
- Ctrl+B, D - Detach from session
- Ctrl+B, [ - Enter scroll mode (q to exit)
- Ctrl+B, : - Enter tmux command mode"#,
    ),
];
