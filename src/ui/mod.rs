use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::AppState;

pub mod help_overlay;
pub mod palette;

pub const ACCENT: Color = Color::Cyan;

pub fn render(frame: &mut Frame, state: &AppState) {
    palette::render(frame, state);

    // Transient message on the last screen row, on top of the palette
    if let Some(message) = state.flash {
        let area = frame.area();
        if area.height > 0 {
            let row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
            let line = Line::from(message).style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
            frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
        }
    }
}

pub(crate) fn rule(width: u16) -> Line<'static> {
    Line::from("─".repeat(width as usize))
}

pub(crate) fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
