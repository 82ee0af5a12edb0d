use ratatui::prelude::*;
use ratatui::widgets::Clear;

use super::{rule, truncate};

const FOOTER: &str = "Press any key to return";
const TEXT_TOP: u16 = 3;

pub fn render(frame: &mut Frame, combo: &str, text: &str) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    if area.height == 0 {
        return;
    }

    let title = Line::from(format!(" Help: {combo} ")).bold();
    if title.width() < area.width as usize {
        render_centered(frame, title, area.y, area);
    }

    if area.height > 2 {
        frame.render_widget(rule(area.width), Rect::new(area.x, area.y + 1, area.width, 1));
    }

    // Lines that do not fit are dropped; there is no scrolling.
    let text_width = (area.width as usize).saturating_sub(2);
    let text_bottom = area.height.saturating_sub(3);
    for (i, line) in text.trim().lines().enumerate() {
        let Some(y) = u16::try_from(i).ok().and_then(|i| TEXT_TOP.checked_add(i)) else {
            break;
        };
        if y >= text_bottom {
            break;
        }
        let row = Rect::new(area.x + 1, area.y + y, area.width.saturating_sub(1), 1);
        frame.render_widget(Line::from(truncate(line, text_width)), row);
    }

    if area.height > 2 {
        let footer_y = area.y + area.height - 2;
        frame.render_widget(rule(area.width), Rect::new(area.x, footer_y, area.width, 1));
        let footer = Line::from(FOOTER).dim();
        if footer.width() < area.width as usize {
            render_centered(frame, footer, area.y + area.height - 1, area);
        }
    }
}

fn render_centered(frame: &mut Frame, line: Line, y: u16, area: Rect) {
    let width = line.width() as u16;
    let x = area.x + (area.width - width) / 2;
    frame.render_widget(line, Rect::new(x, y, width, 1));
}
